//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `split`: Split a path into decoded segments
//! - `resolve`: Resolve a path against an object tree
//! - `validate`: Validate a tree document
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod resolve;
pub mod split;
pub mod validate;

pub use completions::CompletionsCommand;
pub use resolve::ResolveCommand;
pub use split::SplitCommand;
pub use validate::ValidateCommand;
