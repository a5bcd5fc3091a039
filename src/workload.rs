//! Random fill and stress workloads
//!
//! Drives a [`Workbench`] with random distinct values the way the
//! visualizer's "Random" and "Stress" actions do: bounded retry on
//! collisions, metrics reset before a stress run, progress surfaced through
//! `tracing` events.

use std::collections::HashSet;

use rand::Rng;
use thiserror::Error;

use crate::Workbench;

/// Draw attempts per value before giving up on the range.
const MAX_DRAW_ATTEMPTS: usize = 100;

/// Progress event cadence during a stress run.
const PROGRESS_EVERY: usize = 5;

/// Failure modes of the random workloads.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkloadError {
    /// The requested number of distinct values cannot fit in the draw range.
    #[error("range 1..={max_value} cannot supply {requested} distinct values")]
    RangeTooSmall {
        /// Distinct values requested.
        requested: usize,
        /// Upper bound of the draw range.
        max_value: i64,
    },

    /// Repeated draws kept hitting values already present in the trees.
    #[error("no unused value found in 1..={max_value} after {attempts} attempts")]
    ValueSpaceExhausted {
        /// Upper bound of the draw range.
        max_value: i64,
        /// Draws attempted before giving up.
        attempts: usize,
    },
}

/// Parameters for [`run_stress`]. Defaults match the visualizer's stress
/// action: 20 insertions drawn from `1..=100`.
#[derive(Debug, Clone)]
pub struct StressOptions {
    /// Distinct values to insert.
    pub insertions: usize,
    /// Values are drawn uniformly from `1..=max_value`.
    pub max_value: i64,
}

impl Default for StressOptions {
    fn default() -> Self {
        Self {
            insertions: 20,
            max_value: 100,
        }
    }
}

/// What a stress run inserted, in insertion order.
#[derive(Debug, Clone)]
pub struct StressOutcome {
    /// The values inserted into both trees.
    pub inserted: Vec<i64>,
}

/// Insert one random value from `1..=max_value` into both trees, retrying
/// draws that are already present. Bounded by [`MAX_DRAW_ATTEMPTS`].
pub fn insert_random<R: Rng>(
    bench: &mut Workbench,
    max_value: i64,
    rng: &mut R,
) -> Result<i64, WorkloadError> {
    if max_value < 1 {
        return Err(WorkloadError::RangeTooSmall {
            requested: 1,
            max_value,
        });
    }

    for _ in 0..MAX_DRAW_ATTEMPTS {
        let value = rng.gen_range(1..=max_value);
        let outcome = bench.insert(value);
        if outcome.bst && outcome.avl {
            tracing::debug!(value, "random insert");
            return Ok(value);
        }
    }

    Err(WorkloadError::ValueSpaceExhausted {
        max_value,
        attempts: MAX_DRAW_ATTEMPTS,
    })
}

/// Run a stress workload: reset both recorders, then insert
/// `options.insertions` distinct random values into both trees.
///
/// Values that were already present before the run are retried like
/// in-run collisions, so a successful run always performs exactly
/// `options.insertions` insertions on each tree.
pub fn run_stress<R: Rng>(
    bench: &mut Workbench,
    options: &StressOptions,
    rng: &mut R,
) -> Result<StressOutcome, WorkloadError> {
    if options.max_value < 1 || (options.insertions as i64) > options.max_value {
        return Err(WorkloadError::RangeTooSmall {
            requested: options.insertions,
            max_value: options.max_value,
        });
    }

    bench.reset_metrics();

    let mut used = HashSet::new();
    let mut inserted = Vec::with_capacity(options.insertions);

    while inserted.len() < options.insertions {
        let value = draw_unused(bench, options.max_value, &mut used, rng)?;
        used.insert(value);
        inserted.push(value);

        if inserted.len() % PROGRESS_EVERY == 0 {
            tracing::debug!(
                done = inserted.len(),
                total = options.insertions,
                "stress progress"
            );
        }
    }

    tracing::info!(
        insertions = inserted.len(),
        max_value = options.max_value,
        "stress run complete"
    );

    Ok(StressOutcome { inserted })
}

fn draw_unused<R: Rng>(
    bench: &mut Workbench,
    max_value: i64,
    used: &mut HashSet<i64>,
    rng: &mut R,
) -> Result<i64, WorkloadError> {
    for _ in 0..MAX_DRAW_ATTEMPTS {
        let value = rng.gen_range(1..=max_value);
        if used.contains(&value) {
            continue;
        }

        let outcome = bench.insert(value);
        if outcome.bst && outcome.avl {
            return Ok(value);
        }
        // Present before the run started; remember it so the draw loop
        // stops landing on it.
        used.insert(value);
    }

    Err(WorkloadError::ValueSpaceExhausted {
        max_value,
        attempts: MAX_DRAW_ATTEMPTS,
    })
}
