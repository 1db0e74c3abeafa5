//! Structural (value) equality between subtrees
//!
//! Two nodes are equal when they have the same kind, the same tag or
//! component identity, equal props and pairwise-equal children in order.
//! Where they live is irrelevant: the two nodes may sit in different arenas.

use crate::arena::Tree;
use crate::types::{NodeId, Traversal};

/// Compare `a` in tree `ta` with `b` in tree `tb`
///
/// Iterative: a stack of pending pairs instead of recursion.
pub fn structural_eq(ta: &Tree, a: NodeId, tb: &Tree, b: NodeId) -> bool {
    let mut pending = vec![(a, b)];

    while let Some((a, b)) = pending.pop() {
        let (Ok(na), Ok(nb)) = (ta.get(a), tb.get(b)) else {
            return false;
        };

        if !na.kind.same_kind(&nb.kind)
            || na.props != nb.props
            || na.children_ids.len() != nb.children_ids.len()
        {
            return false;
        }

        pending.extend(
            na.children_ids
                .iter()
                .copied()
                .zip(nb.children_ids.iter().copied()),
        );
    }

    true
}

/// First node of `haystack` (pre-order, no barriers) equal to `needle_id`
pub fn find_equal(haystack: &Tree, needle: &Tree, needle_id: NodeId) -> Option<NodeId> {
    let root = haystack.root_id()?;
    haystack
        .subtree(root, Traversal::Deep)
        .find(|&id| structural_eq(haystack, id, needle, needle_id))
}

/// Whether some sibling list in `haystack` holds `needle_ids` as a
/// contiguous run, in order
///
/// A one-node run may also match the haystack root. An empty run never
/// matches.
pub fn contains_run(haystack: &Tree, needle: &Tree, needle_ids: &[NodeId]) -> bool {
    match needle_ids {
        [] => false,
        [single] => find_equal(haystack, needle, *single).is_some(),
        run => {
            let Some(root) = haystack.root_id() else {
                return false;
            };
            haystack.subtree(root, Traversal::Deep).any(|id| {
                let Ok(siblings) = haystack.children_ids(id) else {
                    return false;
                };
                siblings.windows(run.len()).any(|window| {
                    window
                        .iter()
                        .zip(run)
                        .all(|(&h, &n)| structural_eq(haystack, h, needle, n))
                })
            })
        }
    }
}
