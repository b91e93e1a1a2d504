//! Persistence surface for monthly statistics.
//!
//! The engine needs only two operations from its document store: fetch one
//! aggregate by key, and atomically insert-or-replace one aggregate. Any
//! key-value or document database can implement [`StatsStore`]; the store
//! handle is opened once by the host and injected into the engine.

mod memory;

use async_trait::async_trait;

use crate::error::EngineResult;
use crate::models::{MonthlyStats, StatsKey};

pub use memory::InMemoryStatsStore;

/// Whether an upsert created or replaced a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// No document existed for the key.
    Inserted,
    /// An existing document was replaced.
    Updated,
}

/// Keyed storage of [`MonthlyStats`] documents.
///
/// `upsert` must be atomic per key: two concurrent upserts of the same key
/// each replace the whole document and each report whether a document
/// existed at the instant of their own write.
#[async_trait]
pub trait StatsStore: Send + Sync {
    /// Fetches the document stored under `key`, if any.
    async fn find_one(&self, key: &StatsKey) -> EngineResult<Option<MonthlyStats>>;

    /// Inserts or replaces the document stored under `key`.
    async fn upsert(&self, key: &StatsKey, stats: MonthlyStats) -> EngineResult<UpsertOutcome>;
}
