// ============================
// games-backend-lib/src/lib.rs
// ============================
//! Core functionality for the games registry server.

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod router;
pub mod storage;

use std::sync::Arc;

use crate::config::Settings;
use crate::storage::InMemoryGameStore;

/// Application state shared across all handlers
pub struct AppState<S> {
    /// Game store
    pub games: S,
    /// Settings the server was started with
    pub settings: Arc<Settings>,
}

impl<S> AppState<S> {
    /// Create a new application state
    pub fn new(games: S, settings: Settings) -> Self {
        Self {
            games,
            settings: Arc::new(settings),
        }
    }
}

impl AppState<InMemoryGameStore> {
    /// Create a state with an empty in-memory store and default settings
    pub fn new_default() -> Self {
        Self::new(InMemoryGameStore::new(), Settings::default())
    }
}
