//! # quotevibe-store
//!
//! Durable client-side preference store (SQLite-backed). Plays the role the
//! browser's localStorage plays for the web frontend: a handful of plain
//! string values (auth token, chosen language and country) that survive
//! restarts and are read once at session start.

pub mod store;

pub use store::Store;
