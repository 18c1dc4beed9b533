//! # quotevibe-core
//!
//! Core types, traits, configuration, and error handling for the QuoteVibe
//! client.

pub mod config;
pub mod error;
pub mod locale;
pub mod model;
pub mod traits;
