// ================
// common/src/lib.rs
// ================
//! Common types shared between the games server and its clients.
//! This module defines the `Game` resource exchanged over HTTP.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier assigned by the server on creation
pub type GameId = u64;

/// A game record
///
/// Every field is optional on input so that partial or empty payloads
/// deserialize to a well-defined default.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Game {
    /// Server-assigned id (`null` until stored)
    pub id: Option<GameId>,
    /// Unique name, also the lookup key
    pub name: String,
    /// Date the game was first created
    pub creation_date: Option<NaiveDate>,
    /// Whether the game is currently active
    pub active: bool,
}

impl Game {
    /// Build an unsaved game with the given name and flag
    pub fn new(name: impl Into<String>, active: bool) -> Self {
        Self {
            id: None,
            name: name.into(),
            creation_date: None,
            active,
        }
    }

    /// Set the creation date
    #[must_use]
    pub fn with_creation_date(mut self, date: NaiveDate) -> Self {
        self.creation_date = Some(date);
        self
    }
}
