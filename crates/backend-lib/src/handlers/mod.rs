// crates/backend-lib/src/handlers/mod.rs

//! HTTP handlers for the games API.

pub mod games;
