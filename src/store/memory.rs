//! In-memory statistics store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{EngineError, EngineResult};
use crate::models::{MonthlyStats, StatsKey};

use super::{StatsStore, UpsertOutcome};

/// A [`StatsStore`] backed by a `HashMap` behind an async `RwLock`.
///
/// Suitable for tests, development and single-process deployments.
#[derive(Debug, Default)]
pub struct InMemoryStatsStore {
    documents: RwLock<HashMap<StatsKey, MonthlyStats>>,
}

impl InMemoryStatsStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    /// Returns true when no documents are stored.
    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }

    /// Returns every stored document, ordered by key.
    pub async fn all(&self) -> Vec<MonthlyStats> {
        let documents = self.documents.read().await;
        let mut all: Vec<MonthlyStats> = documents.values().cloned().collect();
        all.sort_by_key(|s| s.key());
        all
    }
}

#[async_trait]
impl StatsStore for InMemoryStatsStore {
    async fn find_one(&self, key: &StatsKey) -> EngineResult<Option<MonthlyStats>> {
        Ok(self.documents.read().await.get(key).cloned())
    }

    async fn upsert(&self, key: &StatsKey, stats: MonthlyStats) -> EngineResult<UpsertOutcome> {
        if stats.key() != *key {
            return Err(EngineError::StoreError {
                message: format!("document for {} written under key {}", stats.key(), key),
            });
        }

        let previous = self.documents.write().await.insert(key.clone(), stats);
        Ok(match previous {
            Some(_) => UpsertOutcome::Updated,
            None => UpsertOutcome::Inserted,
        })
    }
}
