//! Pure Wikimedia REST API client
//!
//! A thin, read-only async client for the public Wikimedia REST API. Covers
//! page search, page metadata, and the featured-content feed, mapping JSON
//! responses onto plain typed values. Anonymous access only; no editing, no
//! caching, no retry logic beyond what reqwest provides.
//!
//! # Example
//!
//! ```rust,ignore
//! use wikimedia_client::WikiClient;
//!
//! let wiki = WikiClient::new();
//!
//! let hits = wiki.core.search_content("Python", 1).await?;
//! println!("{}", hits[0].title);
//!
//! let feed = wiki.feed.featured_content(None).await?;
//! if let Some(tfa) = feed.tfa {
//!     println!("Today's featured article: {}", tfa.title);
//! }
//! ```

pub mod core;
pub mod error;
pub mod feed;
pub mod types;

mod http;

pub use crate::core::CoreClient;
pub use crate::error::{Result, WikiError};
pub use crate::feed::FeedClient;
pub use crate::types::*;

use crate::http::Transport;

/// Top-level client grouping the API sections.
///
/// Stateless: every call is independent, and cancelling an awaited call
/// cancels the in-flight request.
pub struct WikiClient {
    /// Core REST endpoints: search and page retrieval.
    pub core: CoreClient,
    /// Feed endpoints: featured content, on this day.
    pub feed: FeedClient,
}

impl WikiClient {
    /// Anonymous client against the public API, English Wikipedia.
    pub fn new() -> Self {
        Self::with_language(Language::En)
    }

    /// Anonymous client for a specific language edition.
    ///
    /// Honors the `WIKIMEDIA_BASE_URL` environment variable as an endpoint
    /// override; proxy settings are whatever reqwest reads from the
    /// environment.
    pub fn with_language(language: Language) -> Self {
        let base_url =
            std::env::var("WIKIMEDIA_BASE_URL").unwrap_or_else(|_| http::BASE_URL.to_string());
        Self::with_config(base_url, language)
    }

    /// Client against a custom endpoint (proxies, test servers).
    pub fn with_config(base_url: impl Into<String>, language: Language) -> Self {
        let transport = Transport::new(base_url);
        Self {
            core: CoreClient::new(transport.clone(), language),
            feed: FeedClient::new(transport, language),
        }
    }
}

impl Default for WikiClient {
    fn default() -> Self {
        Self::new()
    }
}
