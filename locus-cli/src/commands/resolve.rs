//! Command to resolve a path against a YAML object tree.

use crate::error::CliError;
use crate::utils::{load_configuration, load_tree, output_format, GlobalOptions};
use clap::Args;
use locus::config::OutputFormat;
use locus::{lineage, FixupMode, Location, NodeRef, Resolution, StopReason, Traverser};
use serde::Serialize;
use std::path::PathBuf;

/// Resolve a path against an object tree.
#[derive(Args)]
pub struct ResolveCommand {
    /// Request path to resolve
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,

    /// Tree document (defaults to `tree` from configuration)
    #[arg(long, value_name = "FILE")]
    pub tree: Option<PathBuf>,

    /// Which nodes receive ancestry fixup
    #[arg(long, value_enum)]
    pub fixup: Option<FixupMode>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// What `resolve` reports.
#[derive(Debug, Serialize)]
struct ResolveReport {
    context: String,
    traversable: bool,
    lineage: Vec<Option<String>>,
    view_name: String,
    subpath: Vec<String>,
    traversed: Vec<String>,
    stop: StopReason,
}

impl ResolveReport {
    fn new(resolution: Resolution) -> Self {
        let lineage: Vec<Option<String>> = lineage(&resolution.context)
            .map(|node| name_of(&node))
            .collect();

        Self {
            context: context_path(&lineage),
            traversable: resolution.context.container().is_some(),
            lineage,
            view_name: resolution.view_name,
            subpath: resolution.subpath,
            traversed: resolution.traversed,
            stop: resolution.stop,
        }
    }

    fn print_text(&self) {
        println!("context:   {}", self.context);
        println!("view:      {}", self.view_name);
        println!("subpath:   {}", self.subpath.join("/"));
        println!("traversed: {}", self.traversed.join("/"));
        println!("stop:      {}", self.stop);
    }
}

fn name_of(node: &NodeRef) -> Option<String> {
    node.location().and_then(Location::name)
}

/// Build `/a/b/c` from a context-first lineage.
fn context_path(lineage: &[Option<String>]) -> String {
    let names: Vec<&str> = lineage.iter().rev().filter_map(Option::as_deref).collect();
    format!("/{}", names.join("/"))
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        let tree = self.tree.or_else(|| config.tree.clone()).ok_or_else(|| {
            CliError::InvalidArguments(
                "No tree document given (use --tree or set `tree` in locus.yaml)".to_string(),
            )
        })?;
        log::debug!("loading tree from {}", tree.display());
        let root = load_tree(&tree)?;

        let fixup = self.fixup.unwrap_or_else(|| config.fixup_mode());
        let traverser = Traverser::new(root).with_fixup(fixup);
        let report = ResolveReport::new(traverser.traverse(&self.path)?);

        match output_format(self.format, &config) {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            OutputFormat::Text => report.print_text(),
        }

        Ok(())
    }
}
