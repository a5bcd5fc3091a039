//! The two tree engines
//!
//! [`Bst`] is the plain binary search tree; [`Avl`] keeps the same contract
//! and adds height maintenance plus rotations. Both share the exact search
//! semantics (strict ordering, no duplicates), so the descent helpers live
//! here and each tree wires in its own metrics recorder.

mod avl;
mod bst;

pub use avl::Avl;
pub use bst::Bst;

use crate::metrics::OpMetrics;
use crate::node::Node;

/// Uninstrumented membership test: a plain binary search by value.
pub(crate) fn contains_in(mut node: Option<&Node>, value: i64) -> bool {
    while let Some(current) = node {
        if value == current.value {
            return true;
        }
        node = if value < current.value {
            current.left()
        } else {
            current.right()
        };
    }
    false
}

/// Walk from `root` toward `value`, collecting every visited node and
/// counting one comparison per visit. The returned path ends at the matching
/// node; a miss returns `None` once a null child is reached.
pub(crate) fn path_to<'a>(
    root: Option<&'a Node>,
    value: i64,
    metrics: &mut OpMetrics,
) -> Option<Vec<&'a Node>> {
    let mut path = Vec::new();
    let mut node = root;
    while let Some(current) = node {
        path.push(current);
        metrics.increment_comparisons();
        if value == current.value {
            return Some(path);
        }
        node = if value < current.value {
            current.left()
        } else {
            current.right()
        };
    }
    None
}

/// Value of the in-order successor: the leftmost node under `node`. Each
/// left step counts one comparison.
pub(crate) fn smallest_value(node: &Node, metrics: &mut OpMetrics) -> i64 {
    let mut current = node;
    while let Some(next) = current.left() {
        metrics.increment_comparisons();
        current = next;
    }
    current.value
}
