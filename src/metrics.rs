//! Per-tree operation metrics
//!
//! Each tree owns one recorder. Operations bracket themselves with
//! [`OpMetrics::start_operation`] / [`OpMetrics::end_operation`] and bump the
//! comparison/rotation counters as they walk the node graph. Recording keeps
//! the raw duration samples; the outlier policy is applied at read time in
//! [`OpMetrics::average_time`] so the history stays intact.

use std::fmt;
use std::time::{Duration, Instant};

/// Samples at or above this are ignored by [`OpMetrics::average_time`].
/// Guards displayed averages against one-off scheduler hiccups.
const OUTLIER_CUTOFF_SECS: f64 = 1.0;

/// The three instrumented tree operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub enum OpKind {
    /// Insertion of a new value.
    Insert,
    /// Removal of an existing value.
    Delete,
    /// Path search for a value.
    Find,
}

impl OpKind {
    /// All kinds, in display order.
    pub const ALL: [OpKind; 3] = [OpKind::Insert, OpKind::Delete, OpKind::Find];

    /// Lower-case name used in reports and scripts.
    pub fn as_str(self) -> &'static str {
        match self {
            OpKind::Insert => "insert",
            OpKind::Delete => "delete",
            OpKind::Find => "find",
        }
    }

    #[inline]
    fn index(self) -> usize {
        match self {
            OpKind::Insert => 0,
            OpKind::Delete => 1,
            OpKind::Find => 2,
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counters and timing samples for one tree instance.
#[derive(Debug, Clone, Default)]
pub struct OpMetrics {
    counts: [u64; OpKind::ALL.len()],
    samples: [Vec<Duration>; OpKind::ALL.len()],
    comparisons: u64,
    rotations: u64,
}

impl OpMetrics {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero every counter and drop every duration sample. Idempotent.
    pub fn reset(&mut self) {
        self.counts = [0; OpKind::ALL.len()];
        for samples in &mut self.samples {
            samples.clear();
        }
        self.comparisons = 0;
        self.rotations = 0;
    }

    /// Capture a monotonic timestamp for an operation about to run.
    pub fn start_operation(&self) -> Instant {
        Instant::now()
    }

    /// Record a finished operation: bump its invocation count and append the
    /// elapsed duration. Must be called exactly once per
    /// [`start_operation`](Self::start_operation).
    pub fn end_operation(&mut self, kind: OpKind, started: Instant) {
        let elapsed = started.elapsed();
        self.counts[kind.index()] += 1;
        self.samples[kind.index()].push(elapsed);
    }

    /// One more key comparison performed during a descent.
    #[inline]
    pub fn increment_comparisons(&mut self) {
        self.comparisons += 1;
    }

    /// One more rotation applied during rebalancing.
    #[inline]
    pub fn increment_rotations(&mut self) {
        self.rotations += 1;
    }

    /// Total key comparisons across all operations since the last reset.
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// Total rotations since the last reset. Stays 0 for the unbalanced
    /// tree.
    pub fn rotations(&self) -> u64 {
        self.rotations
    }

    /// Number of recorded invocations of `kind`.
    pub fn operation_count(&self, kind: OpKind) -> u64 {
        self.counts[kind.index()]
    }

    /// Recorded invocations summed over every kind.
    pub fn total_operations(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Raw duration samples for `kind`, in recording order.
    pub fn samples(&self, kind: OpKind) -> &[Duration] {
        &self.samples[kind.index()]
    }

    /// Mean duration of `kind` in seconds, ignoring samples at or above the
    /// 1-second outlier cutoff. Returns 0.0 with no samples, or when every
    /// sample was filtered out.
    pub fn average_time(&self, kind: OpKind) -> f64 {
        let mut sum = 0.0;
        let mut kept = 0u64;
        for sample in &self.samples[kind.index()] {
            let secs = sample.as_secs_f64();
            if secs < OUTLIER_CUTOFF_SECS {
                sum += secs;
                kept += 1;
            }
        }
        if kept == 0 {
            0.0
        } else {
            sum / kept as f64
        }
    }
}
