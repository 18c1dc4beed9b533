//! # quotevibe
//!
//! Headless client core for the QuoteVibe quote-sharing service. Holds the
//! stateful logic any frontend sits on top of: locale resolution with a
//! strict precedence order, on-demand translation loading with graceful
//! fallback, and server-confirmed like/save/follow state.

pub mod i18n;
pub mod locale;
pub mod session;
pub mod social;

pub use quotevibe_core::config::{self, Config};
pub use quotevibe_core::error::QuoteVibeError;
pub use quotevibe_core::locale::LocaleState;
pub use quotevibe_core::model;
pub use session::Session;
