//! USD price quotes and staleness policy
//!
//! Prices come from an external HTTP service polled every 60 seconds,
//! but a quote is only trusted for new computations while younger than
//! 30 seconds. A missing or expired quote degrades to "unavailable";
//! nothing in this crate ever substitutes zero or a stale figure for a
//! real price.

use std::collections::HashMap;

use tracing::debug;

use crate::constants::{PRICE_REFRESH_SECS, PRICE_STALE_SECS};
use crate::interfaces::queries::PriceSource;

/// One observation from the price service
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceQuote {
    pub usd: f64,
    /// Unix timestamp of the fetch
    pub fetched_at: i64,
}

impl PriceQuote {
    pub fn is_fresh(&self, now: i64) -> bool {
        now - self.fetched_at <= PRICE_STALE_SECS
    }
}

/// Latest quote per price feed identifier
#[derive(Debug, Default)]
pub struct PriceBoard {
    quotes: HashMap<String, PriceQuote>,
}

impl PriceBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, feed_id: &str, usd: f64, now: i64) {
        self.quotes
            .insert(feed_id.to_string(), PriceQuote { usd, fetched_at: now });
    }

    /// Trustworthy USD price, or `None` when absent or stale
    pub fn usd(&self, feed_id: &str, now: i64) -> Option<f64> {
        let quote = self.quotes.get(feed_id)?;
        if quote.is_fresh(now) {
            Some(quote.usd)
        } else {
            debug!(feed_id, age = now - quote.fetched_at, "discarding stale price quote");
            None
        }
    }

    /// Whether the polling interval has elapsed for this feed
    pub fn needs_refresh(&self, feed_id: &str, now: i64) -> bool {
        match self.quotes.get(feed_id) {
            Some(quote) => now - quote.fetched_at >= PRICE_REFRESH_SECS,
            None => true,
        }
    }

    /// Poll the external service if the feed is due; fetch failures and
    /// feeds the service does not know leave the board unchanged
    pub fn refresh(&mut self, source: &impl PriceSource, feed_id: &str, now: i64) {
        if !self.needs_refresh(feed_id, now) {
            return;
        }
        match source.usd_price(feed_id) {
            Ok(Some(usd)) => self.record(feed_id, usd, now),
            Ok(None) => debug!(feed_id, "price service has no quote for feed"),
            Err(err) => debug!(feed_id, %err, "price fetch failed"),
        }
    }
}
