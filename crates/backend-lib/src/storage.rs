// ============================
// games-backend-lib/src/storage.rs
// ============================
//! Game store abstraction with a concurrent in-memory implementation.
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use chrono::Local;
use dashmap::DashMap;
use games_common::{Game, GameId};
use metrics::{counter, gauge};
use tracing::{debug, info, warn};

use crate::error::AppError;
use crate::metrics::{GAMES_CREATED, GAMES_DELETED, GAMES_LIVE, GAMES_UPDATED};

/// Trait for game storage backends
pub trait GameStore: Send + Sync {
    /// Insert or overwrite the game keyed by its name
    fn create(&self, game: Game) -> Game;

    /// Look up a game by name
    fn get_by_name(&self, name: &str) -> Option<Game>;

    /// Every stored game, in no particular order
    fn get_all(&self) -> Vec<Game>;

    /// Replace the game stored under `name`
    fn update(&self, name: &str, game: Game) -> Result<Game, AppError>;

    /// Remove the game stored under `name`, if any
    fn delete(&self, name: &str);

    /// Number of live games
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory implementation of the `GameStore` trait.
///
/// Clones share the same map, so one store can be handed to every
/// request handler.
#[derive(Clone, Default)]
pub struct InMemoryGameStore {
    games: Arc<DashMap<String, Game>>,
    next_id: Arc<AtomicU64>,
}

impl InMemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> GameId {
        // ids start at 1
        self.next_id.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn record_live(&self) {
        gauge!(GAMES_LIVE).set(self.games.len() as f64);
    }
}

impl GameStore for InMemoryGameStore {
    fn create(&self, mut game: Game) -> Game {
        game.id = Some(self.next_id());
        if game.creation_date.is_none() {
            game.creation_date = Some(Local::now().date_naive());
        }

        if self.games.insert(game.name.clone(), game.clone()).is_some() {
            info!(name = %game.name, id = ?game.id, "overwrote existing game");
        } else {
            info!(name = %game.name, id = ?game.id, "created game");
        }

        counter!(GAMES_CREATED).increment(1);
        self.record_live();
        game
    }

    fn get_by_name(&self, name: &str) -> Option<Game> {
        let game = self.games.get(name).map(|entry| entry.value().clone());
        debug!(name, found = game.is_some(), "looked up game");
        game
    }

    fn get_all(&self) -> Vec<Game> {
        self.games.iter().map(|entry| entry.value().clone()).collect()
    }

    fn update(&self, name: &str, game: Game) -> Result<Game, AppError> {
        // The shard guard is dropped before anything else touches the map.
        let updated = {
            let Some(mut entry) = self.games.get_mut(name) else {
                warn!(name, "update for unknown game");
                return Err(AppError::GameNotFound(name.to_string()));
            };

            if !game.name.is_empty() && game.name != name {
                warn!(path = name, body = %game.name, "rejected update with mismatched name");
                return Err(AppError::NameMismatch {
                    path: name.to_string(),
                    body: game.name,
                });
            }

            let stored = entry.value_mut();
            stored.active = game.active;
            stored.clone()
        };

        info!(name, active = updated.active, "updated game");
        counter!(GAMES_UPDATED).increment(1);
        Ok(updated)
    }

    fn delete(&self, name: &str) {
        if self.games.remove(name).is_some() {
            info!(name, "deleted game");
            counter!(GAMES_DELETED).increment(1);
            self.record_live();
        }
    }

    fn len(&self) -> usize {
        self.games.len()
    }
}
