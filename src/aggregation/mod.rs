//! Incremental monthly aggregation of attendance records.
//!
//! [`AggregationEngine`] groups a month of raw records by employee, compares
//! each group's fingerprint with the one stored on its `MonthlyStats`
//! document, and recomputes only the groups that changed.

mod accumulator;
mod engine;

use serde::{Deserialize, Serialize};

pub use accumulator::MonthlyAccumulator;
pub use engine::AggregationEngine;

/// Per-run options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOptions {
    /// Recompute every group even when its fingerprint is unchanged.
    ///
    /// Needed after rule or holiday configuration changes, which the
    /// fingerprint does not cover.
    #[serde(default)]
    pub force: bool,
}

/// Counters describing one aggregation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationSummary {
    /// Employees whose statistics were created.
    pub inserted: usize,
    /// Employees whose statistics were replaced.
    pub updated: usize,
    /// Employees skipped because their records were unchanged.
    pub unchanged: usize,
    /// Malformed records plus employees whose processing failed.
    pub errors: usize,
}

impl AggregationSummary {
    /// Number of documents written during the run.
    pub fn written(&self) -> usize {
        self.inserted + self.updated
    }
}
