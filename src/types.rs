//! Wikimedia API response types.
//!
//! Plain value objects: every field is copied straight from the corresponding
//! JSON field, no derived state. Fields the API may omit or null are `Option`.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Wikipedia language edition, used to build API paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    De,
    Es,
    Fr,
    It,
    Ja,
    Nl,
    Pl,
    Pt,
    Ru,
    Zh,
}

impl Language {
    /// Language code as it appears in API paths (e.g. "en").
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::It => "it",
            Language::Ja => "ja",
            Language::Nl => "nl",
            Language::Pl => "pl",
            Language::Pt => "pt",
            Language::Ru => "ru",
            Language::Zh => "zh",
        }
    }
}

/// Event category for the on-this-day feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    All,
    Selected,
    Births,
    Deaths,
    Events,
    Holidays,
}

impl EventType {
    /// Path segment for the on-this-day endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::All => "all",
            EventType::Selected => "selected",
            EventType::Births => "births",
            EventType::Deaths => "deaths",
            EventType::Events => "events",
            EventType::Holidays => "holidays",
        }
    }
}

// =============================================================================
// Core: search and page retrieval
// =============================================================================

/// A single hit from the search endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    /// Page identifier
    pub id: u64,
    /// Page key, usable in page URLs and page endpoints
    pub key: String,
    pub title: String,
    /// Snippet of page content matching the query, as HTML
    pub excerpt: String,
    /// Redirect or alternate title the query matched, if any
    pub matched_title: Option<String>,
    /// Short description of the page topic
    pub description: Option<String>,
    pub thumbnail: Option<Thumbnail>,
}

/// Reduced-size page image attached to a search hit.
#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnail {
    pub mimetype: String,
    pub size: Option<u64>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub duration: Option<f64>,
    pub url: String,
}

/// Page metadata from the `page/{title}/bare` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    pub id: u64,
    pub key: String,
    pub title: String,
    pub latest: Revision,
    pub content_model: String,
    pub license: License,
    pub html_url: Option<String>,
}

/// Latest revision of a page.
#[derive(Debug, Clone, Deserialize)]
pub struct Revision {
    pub id: u64,
    pub timestamp: DateTime<Utc>,
}

/// License applying to page content.
#[derive(Debug, Clone, Deserialize)]
pub struct License {
    pub url: String,
    pub title: String,
}

// =============================================================================
// Feed: featured content
// =============================================================================

/// The featured-content feed for one day.
#[derive(Debug, Clone, Deserialize)]
pub struct FeaturedContent {
    /// Today's featured article
    pub tfa: Option<ArticleSummary>,
    /// Most-read articles of the previous day
    pub mostread: Option<MostRead>,
    /// Picture of the day
    pub image: Option<ImageOfTheDay>,
    /// Articles in the news
    #[serde(default)]
    pub news: Vec<NewsItem>,
    /// Events from this day in history
    #[serde(default)]
    pub onthisday: Vec<OnThisDayEvent>,
}

/// Condensed article representation used throughout the feed.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleSummary {
    pub title: String,
    pub displaytitle: Option<String>,
    pub description: Option<String>,
    /// Plain-text opening of the article
    pub extract: Option<String>,
    pub thumbnail: Option<Image>,
}

/// Image reference in feed responses.
#[derive(Debug, Clone, Deserialize)]
pub struct Image {
    pub source: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Most-read article list with view counts.
#[derive(Debug, Clone, Deserialize)]
pub struct MostRead {
    pub date: Option<String>,
    #[serde(default)]
    pub articles: Vec<MostReadArticle>,
}

/// One entry of the most-read list.
#[derive(Debug, Clone, Deserialize)]
pub struct MostReadArticle {
    pub title: String,
    pub description: Option<String>,
    pub extract: Option<String>,
    pub thumbnail: Option<Image>,
    pub views: Option<u64>,
    pub rank: Option<u32>,
}

/// Picture of the day.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageOfTheDay {
    /// File page title (e.g. "File:...")
    pub title: String,
    pub thumbnail: Option<Image>,
    /// Full-resolution image
    pub image: Option<Image>,
    pub description: Option<ImageDescription>,
}

/// Localized caption of the picture of the day.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageDescription {
    pub text: String,
    pub lang: Option<String>,
}

/// One in-the-news story with the articles it links.
#[derive(Debug, Clone, Deserialize)]
pub struct NewsItem {
    /// Story text, as HTML
    pub story: String,
    #[serde(default)]
    pub links: Vec<ArticleSummary>,
}

/// One historical event from the on-this-day feed.
#[derive(Debug, Clone, Deserialize)]
pub struct OnThisDayEvent {
    pub text: String,
    /// Absent for holidays
    pub year: Option<i32>,
    #[serde(default)]
    pub pages: Vec<ArticleSummary>,
}
