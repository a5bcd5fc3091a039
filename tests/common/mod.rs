//! Shared invariant checks for the tree test suites

#![allow(dead_code)]

use arborview::Node;

/// In-order values of a subtree.
pub fn in_order_values(root: Option<&Node>) -> Vec<i64> {
    fn walk(node: Option<&Node>, out: &mut Vec<i64>) {
        if let Some(node) = node {
            walk(node.left(), out);
            out.push(node.value());
            walk(node.right(), out);
        }
    }

    let mut out = Vec::new();
    walk(root, &mut out);
    out
}

/// Assert the strict search-order invariant: an in-order walk is strictly
/// increasing (which also rules out duplicates).
pub fn assert_search_order(root: Option<&Node>) {
    let values = in_order_values(root);
    for pair in values.windows(2) {
        assert!(
            pair[0] < pair[1],
            "ordering violated: {} appears before {}",
            pair[0],
            pair[1]
        );
    }
}

/// Verify the AVL invariants for every node: children differ in height by
/// at most one, and each stored height is `1 + max(children)`. Returns the
/// subtree height.
pub fn assert_avl_shape(node: Option<&Node>) -> u32 {
    let Some(node) = node else {
        return 0;
    };

    let left = assert_avl_shape(node.left());
    let right = assert_avl_shape(node.right());

    let diff = i64::from(left) - i64::from(right);
    assert!(
        diff.abs() <= 1,
        "balance violated at {}: child heights {left} and {right}",
        node.value()
    );
    assert_eq!(
        node.height(),
        1 + left.max(right),
        "stale height at {}",
        node.value()
    );

    node.height()
}

/// Assert `path` is an ancestor chain starting at the root: its first node
/// carries the root value and every later node is a direct child of its
/// predecessor.
pub fn assert_root_chain(path: &[&Node], root_value: i64) {
    let first = path.first().expect("a found path is never empty");
    assert_eq!(first.value(), root_value, "path does not start at the root");

    for pair in path.windows(2) {
        let parent = pair[0];
        let is_child = parent
            .left()
            .is_some_and(|child| std::ptr::eq(child, pair[1]))
            || parent
                .right()
                .is_some_and(|child| std::ptr::eq(child, pair[1]));
        assert!(
            is_child,
            "{} is not a child of {} on the path",
            pair[1].value(),
            parent.value()
        );
    }
}
