//! Application state for the attendance statistics API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::aggregation::AggregationEngine;
use crate::config::EngineConfig;
use crate::store::StatsStore;

/// Shared application state.
///
/// Holds the aggregation engine and, through it, the injected store handle.
#[derive(Clone)]
pub struct AppState {
    engine: Arc<AggregationEngine>,
}

impl AppState {
    /// Creates application state around an existing engine.
    pub fn new(engine: AggregationEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Builds an engine over `store` with `config` and wraps it.
    pub fn with_store(store: Arc<dyn StatsStore>, config: &EngineConfig) -> Self {
        Self::new(AggregationEngine::new(store, config))
    }

    /// Returns the aggregation engine.
    pub fn engine(&self) -> &AggregationEngine {
        &self.engine
    }
}
