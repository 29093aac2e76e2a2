//! Property-based tests for path splitting.
//!
//! Note: The split module already has inline property tests for totality.
//! This module focuses on the algebra of dot segments and re-splitting.

use super::split::split_path;
use proptest::prelude::*;

// Plain names never change under decoding
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn plain_path_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(name_strategy(), 0..8)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Plain names come back exactly as joined
    #[test]
    fn split_plain_names_verbatim(parts in plain_path_strategy()) {
        let path = format!("/{}", parts.join("/"));
        prop_assert_eq!(split_path(&path), parts);
    }

    // Splitting is idempotent over re-joined plain segments
    #[test]
    fn split_idempotent(parts in plain_path_strategy(), trailing in any::<bool>()) {
        let mut path = parts.join("//./");
        if trailing {
            path.push('/');
        }
        let once = split_path(&path);
        let twice = split_path(&once.join("/"));
        prop_assert_eq!(once, twice);
    }

    // "name/.." cancels out wherever it appears
    #[test]
    fn parent_cancels_preceding_name(
        prefix in plain_path_strategy(),
        name in name_strategy(),
        suffix in plain_path_strategy(),
    ) {
        let with_detour = format!("{}/{name}/../{}", prefix.join("/"), suffix.join("/"));
        let direct = format!("{}/{}", prefix.join("/"), suffix.join("/"));
        prop_assert_eq!(split_path(&with_detour), split_path(&direct));
    }

    // Excess ".." never goes above the root
    #[test]
    fn excess_parents_clamp_at_root(parts in plain_path_strategy(), extra in 1usize..5) {
        let ups = vec![".."; parts.len() + extra].join("/");
        let path = format!("{}/{ups}", parts.join("/"));
        prop_assert!(split_path(&path).is_empty());
    }

    // Output never has more segments than the input has pieces
    #[test]
    fn segment_count_bounded(s in "[a-z./%2F]{0,40}") {
        let pieces = s.split('/').filter(|p| !p.is_empty()).count();
        prop_assert!(split_path(&s).len() <= pieces);
    }
}
