//! Integration tests for YAML tree documents driving traversal and dispatch.

use std::io::Write;

use locus::{
    lineage, publish, FixupMode, Resolution, Result, StopReason, Traverser, TreeDocument,
};

const SITE: &str = r#"
children:
  docs:
    children:
      guide:
        value: "Read me"
      api:
        located: true
        children:
          v1: {}
  about:
    value: "About us"
"#;

fn site() -> Traverser {
    Traverser::new(TreeDocument::from_yaml(SITE).unwrap().build().unwrap())
}

fn names(resolution: &Resolution) -> Vec<Option<String>> {
    lineage(&resolution.context)
        .map(|n| n.location().and_then(locus::Location::name))
        .collect()
}

#[test]
fn test_resolve_leaf_item() {
    let site = site();
    let resolution = site.traverse("/docs/guide").unwrap();

    assert_eq!(resolution.traversed, vec!["docs", "guide"]);
    assert_eq!(resolution.stop, StopReason::Exhausted);
    assert_eq!(
        names(&resolution),
        vec![Some("guide".to_string()), Some("docs".to_string()), None]
    );
}

#[test]
fn test_leaf_stops_walk() {
    let resolution = site().traverse("/about/print/a4").unwrap();

    assert_eq!(resolution.traversed, vec!["about"]);
    assert_eq!(resolution.view_name, "print");
    assert_eq!(resolution.subpath, vec!["a4"]);
    assert_eq!(resolution.stop, StopReason::NotTraversable);
}

#[test]
fn test_located_subtree_keeps_document_ancestry() {
    let site = site();
    let resolution = site.traverse("/docs/api/v1").unwrap();

    assert_eq!(
        names(&resolution),
        vec![
            Some("v1".to_string()),
            Some("api".to_string()),
            Some("docs".to_string()),
            None
        ]
    );
}

#[test]
fn test_lineage_ends_when_tree_is_dropped() {
    let site = site();
    let resolution = site.traverse("/docs/guide").unwrap();
    assert_eq!(names(&resolution).len(), 3);

    // The resolution holds the context only; ancestors die with the tree.
    drop(site);
    assert_eq!(names(&resolution), vec![Some("guide".to_string())]);
}

#[test]
fn test_fixup_off_leaves_lineage_short() {
    let traverser = site().with_fixup(FixupMode::Off);
    let resolution = traverser.traverse("/docs/guide").unwrap();

    // guide was never attached, so its lineage is just itself.
    assert_eq!(names(&resolution), vec![None]);
}

#[test]
fn test_publish_over_loaded_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SITE.as_bytes()).unwrap();

    let doc = TreeDocument::load(file.path()).unwrap();
    let traverser = Traverser::new(doc.build().unwrap());

    let rendered = publish(
        &traverser,
        "/docs/%40%40history/7",
        "GET",
        &|r: Resolution, method: &str| -> Result<String> {
            Ok(format!("{method} {}:{}", r.view_name, r.subpath.join("/")))
        },
    )
    .unwrap();

    // A percent-encoded marker is decoded before the marker check.
    assert_eq!(rendered, "GET history:7");
}
