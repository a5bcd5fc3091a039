//! # Instrumented BST / AVL comparison engine
//!
//! This crate is the tree engine behind a side-by-side visualizer of an
//! unbalanced binary search tree and a self-balancing AVL tree. It owns the
//! node graphs, the operation algorithms, and the instrumentation
//! (comparisons, rotations, per-operation timings), while rendering, layout,
//! and event wiring stay with an external collaborator that only *reads*
//! the trees and their metrics.
//!
//! ## Surfaces
//!
//! - [`Bst`] / [`Avl`]: `insert`, `delete`, `find_path`, `contains`, plus a
//!   read-only `root()` and `metrics()` query surface per tree.
//! - [`OpMetrics`]: per-kind operation counts and timing samples, with
//!   comparison/rotation counters and an outlier-robust average.
//! - [`Workbench`]: the mirrored pair, applying each operation to both
//!   trees the way the visualizer does.
//!
//! ## Usage
//!
//! ```
//! use arborview::{OpKind, Workbench};
//!
//! let mut bench = Workbench::new();
//! for value in [50, 30, 70, 20, 40] {
//!     let outcome = bench.insert(value);
//!     assert!(outcome.bst && outcome.avl);
//! }
//!
//! let paths = bench.find_path(40);
//! assert_eq!(paths.bst.map(|path| path.len()), Some(3));
//! assert!(paths.avl.is_some());
//! assert_eq!(bench.bst().metrics().operation_count(OpKind::Insert), 5);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod metrics;
pub mod node;
pub mod report;
pub mod tree;
pub mod workload;

// Re-exports for convenience
pub use metrics::{OpKind, OpMetrics};
pub use node::Node;
pub use report::{ComparisonReport, MetricsSummary};
pub use tree::{Avl, Bst};
pub use workload::{StressOptions, StressOutcome, WorkloadError};

/// Outcome of one operation applied to both trees.
///
/// The driving UI warns when the two trees disagree; they never should for
/// mirrored inputs, since both reject duplicates and misses identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mirrored<T> {
    /// Outcome on the unbalanced tree.
    pub bst: T,
    /// Outcome on the AVL tree.
    pub avl: T,
}

impl<T: PartialEq> Mirrored<T> {
    /// Whether both trees produced the same outcome.
    pub fn agree(&self) -> bool {
        self.bst == self.avl
    }
}

/// The mirrored BST/AVL pair the visualizer drives.
///
/// Every operation is applied to both trees so their shapes and metrics stay
/// comparable. Each tree keeps its own [`OpMetrics`] recorder.
#[derive(Debug, Default)]
pub struct Workbench {
    bst: Bst,
    avl: Avl,
}

impl Workbench {
    /// Two empty trees with fresh recorders.
    pub fn new() -> Self {
        Self::default()
    }

    /// The unbalanced tree.
    pub fn bst(&self) -> &Bst {
        &self.bst
    }

    /// The AVL tree.
    pub fn avl(&self) -> &Avl {
        &self.avl
    }

    /// Insert `value` into both trees.
    pub fn insert(&mut self, value: i64) -> Mirrored<bool> {
        Mirrored {
            bst: self.bst.insert(value),
            avl: self.avl.insert(value),
        }
    }

    /// Delete `value` from both trees.
    pub fn delete(&mut self, value: i64) -> Mirrored<bool> {
        Mirrored {
            bst: self.bst.delete(value),
            avl: self.avl.delete(value),
        }
    }

    /// Membership test on both trees. No metrics activity.
    pub fn contains(&self, value: i64) -> Mirrored<bool> {
        Mirrored {
            bst: self.bst.contains(value),
            avl: self.avl.contains(value),
        }
    }

    /// Search both trees for `value`, returning each root-to-target path.
    pub fn find_path(&mut self, value: i64) -> Mirrored<Option<Vec<&Node>>> {
        Mirrored {
            bst: self.bst.find_path(value),
            avl: self.avl.find_path(value),
        }
    }

    /// Drop both node graphs and zero both recorders.
    pub fn reset(&mut self) {
        self.bst.reset();
        self.avl.reset();
    }

    /// Zero both recorders, keeping the trees. Used before a stress run so
    /// its numbers start from a clean slate.
    pub fn reset_metrics(&mut self) {
        self.bst.metrics_mut().reset();
        self.avl.metrics_mut().reset();
    }
}
