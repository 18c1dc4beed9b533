//! # quotevibe-api
//!
//! HTTP clients consumed by the QuoteVibe client core: the backend REST API
//! (auth, quotes, translations, social toggles) and the external IP
//! geolocation service. The backend contract is honored as-is, never
//! redesigned here.

mod auth;
mod client;
mod geo;
mod quotes;
mod social;
mod translations;

#[cfg(test)]
mod tests;

pub use client::ApiClient;
pub use geo::GeoClient;
pub use quotes::QuoteQuery;
