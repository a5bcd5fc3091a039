//! Renderable metrics summaries
//!
//! Aggregates a recorder into the numbers the performance panel shows:
//! comparison/rotation counters, total operations, and per-operation average
//! times rescaled to microseconds. The engine reports seconds; the
//! microsecond rescale here matches what the panel displays.

use std::fmt;

use crate::metrics::{OpKind, OpMetrics};
use crate::Workbench;

/// One recorder's aggregates, ready for display.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct MetricsSummary {
    /// Total key comparisons.
    pub comparisons: u64,
    /// Total rotations (always 0 for the unbalanced tree).
    pub rotations: u64,
    /// Total recorded operations across all kinds.
    pub operations: u64,
    /// Average insert time in microseconds.
    pub insert_us: f64,
    /// Average delete time in microseconds.
    pub delete_us: f64,
    /// Average find time in microseconds.
    pub find_us: f64,
}

impl MetricsSummary {
    /// Aggregate one recorder.
    pub fn from_metrics(metrics: &OpMetrics) -> Self {
        Self {
            comparisons: metrics.comparisons(),
            rotations: metrics.rotations(),
            operations: metrics.total_operations(),
            insert_us: metrics.average_time(OpKind::Insert) * 1_000_000.0,
            delete_us: metrics.average_time(OpKind::Delete) * 1_000_000.0,
            find_us: metrics.average_time(OpKind::Find) * 1_000_000.0,
        }
    }
}

/// BST and AVL aggregates side by side.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct ComparisonReport {
    /// The unbalanced tree's numbers.
    pub bst: MetricsSummary,
    /// The AVL tree's numbers.
    pub avl: MetricsSummary,
}

impl ComparisonReport {
    /// Snapshot both recorders of a workbench.
    pub fn from_workbench(bench: &Workbench) -> Self {
        Self {
            bst: MetricsSummary::from_metrics(bench.bst().metrics()),
            avl: MetricsSummary::from_metrics(bench.avl().metrics()),
        }
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<12} {:>12} {:>12}", "metric", "BST", "AVL")?;
        writeln!(
            f,
            "{:<12} {:>12} {:>12}",
            "comparisons", self.bst.comparisons, self.avl.comparisons
        )?;
        writeln!(
            f,
            "{:<12} {:>12} {:>12}",
            "rotations", self.bst.rotations, self.avl.rotations
        )?;
        writeln!(
            f,
            "{:<12} {:>12} {:>12}",
            "operations", self.bst.operations, self.avl.operations
        )?;
        for (label, bst_us, avl_us) in [
            ("insert", self.bst.insert_us, self.avl.insert_us),
            ("delete", self.bst.delete_us, self.avl.delete_us),
            ("find", self.bst.find_us, self.avl.find_us),
        ] {
            writeln!(
                f,
                "{:<12} {:>12} {:>12}",
                label,
                format!("{bst_us:.1}µs"),
                format!("{avl_us:.1}µs"),
            )?;
        }
        Ok(())
    }
}
