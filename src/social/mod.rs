//! Social interaction state -- per-entity liked/saved/following flags and
//! their counters, for the current viewer.
//!
//! Toggles are server-confirmed, not optimistic: the request goes out
//! first, and only a successful response flips the flag and moves the
//! counter in the direction the server decided. A failed request leaves
//! the entry exactly as it was. When responses to overlapping toggles
//! arrive out of order, the last-settled response wins.


use quotevibe_core::{
    error::QuoteVibeError,
    model::{FollowStatus, InteractionStatus, Quote, User},
    traits::SocialApi,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Tracked state for one quote.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuoteInteraction {
    /// Viewer flags; default (all false) until fetched.
    pub status: InteractionStatus,
    pub likes_count: u64,
    pub saves_count: u64,
}

/// Tracked state for one profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct FollowInteraction {
    pub following: bool,
    pub followers_count: u64,
}

/// Per-viewer interaction tracker. One instance per session; entries are
/// created when a view starts tracking an entity and dropped when it stops.
pub struct Interactions {
    api: Arc<dyn SocialApi>,
    authenticated: bool,
    quotes: HashMap<String, QuoteInteraction>,
    follows: HashMap<String, FollowInteraction>,
}

impl Interactions {
    pub fn new(api: Arc<dyn SocialApi>) -> Self {
        Self {
            api,
            authenticated: false,
            quotes: HashMap::new(),
            follows: HashMap::new(),
        }
    }

    /// Flip whether toggles and status fetches are allowed. Flipping to
    /// unauthenticated also drops all viewer-bound state.
    pub fn set_authenticated(&mut self, authenticated: bool) {
        if !authenticated {
            self.quotes.clear();
            self.follows.clear();
        }
        self.authenticated = authenticated;
    }

    /// Seed counters from a quote record (flags stay unknown until fetched).
    pub fn track_quote(&mut self, quote: &Quote) {
        let entry = self.quotes.entry(quote.id.clone()).or_default();
        entry.likes_count = quote.likes_count;
        entry.saves_count = quote.saves_count;
    }

    /// Seed the followers counter from a profile record.
    pub fn track_user(&mut self, user: &User) {
        let entry = self.follows.entry(user.id.clone()).or_default();
        entry.followers_count = user.followers_count;
    }

    /// Tracked state for a quote, if any.
    pub fn quote(&self, quote_id: &str) -> Option<&QuoteInteraction> {
        self.quotes.get(quote_id)
    }

    /// Tracked state for a profile, if any.
    pub fn follow(&self, user_id: &str) -> Option<&FollowInteraction> {
        self.follows.get(user_id)
    }

    /// Stop tracking a quote (its view unmounted).
    pub fn forget_quote(&mut self, quote_id: &str) {
        self.quotes.remove(quote_id);
    }

    /// Stop tracking a profile.
    pub fn forget_user(&mut self, user_id: &str) {
        self.follows.remove(user_id);
    }

    /// Fetch the viewer's liked/saved flags for a quote.
    pub async fn fetch_quote_status(
        &mut self,
        quote_id: &str,
    ) -> Result<InteractionStatus, QuoteVibeError> {
        if !self.authenticated {
            return Err(QuoteVibeError::Unauthenticated);
        }
        let status = self.api.quote_status(quote_id).await?;
        self.quotes.entry(quote_id.to_string()).or_default().status = status;
        Ok(status)
    }

    /// Fetch the viewer's follow flag for a profile.
    pub async fn fetch_follow_status(
        &mut self,
        user_id: &str,
    ) -> Result<FollowStatus, QuoteVibeError> {
        if !self.authenticated {
            return Err(QuoteVibeError::Unauthenticated);
        }
        let status = self.api.follow_status(user_id).await?;
        self.follows
            .entry(user_id.to_string())
            .or_default()
            .following = status.following;
        Ok(status)
    }

    /// Toggle the like flag on a quote. Returns the server-confirmed new
    /// state.
    pub async fn toggle_like(&mut self, quote_id: &str) -> Result<bool, QuoteVibeError> {
        if !self.authenticated {
            return Err(QuoteVibeError::Unauthenticated);
        }
        let liked = self.api.toggle_like(quote_id).await?;
        debug!("quote {quote_id}: liked={liked}");
        let entry = self.quotes.entry(quote_id.to_string()).or_default();
        entry.status.liked = liked;
        entry.likes_count = adjust(entry.likes_count, liked);
        Ok(liked)
    }

    /// Toggle the save flag on a quote.
    pub async fn toggle_save(&mut self, quote_id: &str) -> Result<bool, QuoteVibeError> {
        if !self.authenticated {
            return Err(QuoteVibeError::Unauthenticated);
        }
        let saved = self.api.toggle_save(quote_id).await?;
        debug!("quote {quote_id}: saved={saved}");
        let entry = self.quotes.entry(quote_id.to_string()).or_default();
        entry.status.saved = saved;
        entry.saves_count = adjust(entry.saves_count, saved);
        Ok(saved)
    }

    /// Toggle the follow flag on a profile.
    pub async fn toggle_follow(&mut self, user_id: &str) -> Result<bool, QuoteVibeError> {
        if !self.authenticated {
            return Err(QuoteVibeError::Unauthenticated);
        }
        let following = self.api.toggle_follow(user_id).await?;
        debug!("user {user_id}: following={following}");
        let entry = self.follows.entry(user_id.to_string()).or_default();
        entry.following = following;
        entry.followers_count = adjust(entry.followers_count, following);
        Ok(following)
    }
}

/// Move a counter by one in the direction of the confirmed flag, never
/// below zero.
fn adjust(count: u64, now_set: bool) -> u64 {
    if now_set {
        count + 1
    } else {
        count.saturating_sub(1)
    }
}
