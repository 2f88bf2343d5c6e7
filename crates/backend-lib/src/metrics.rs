// ==============
// crates/backend-lib/src/metrics.rs

//! Central place for metric keys
pub const GAMES_CREATED: &str = "games.created";
pub const GAMES_UPDATED: &str = "games.updated";
pub const GAMES_DELETED: &str = "games.deleted";
pub const GAMES_LIVE: &str = "games.live";
pub const HTTP_NOT_FOUND: &str = "http.not_found";
