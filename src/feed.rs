//! Feed section: featured content and on-this-day events.

use chrono::{Datelike, NaiveDate, Utc};
use serde::Deserialize;

use crate::error::Result;
use crate::http::Transport;
use crate::types::{EventType, FeaturedContent, Language, OnThisDayEvent};

/// The on-this-day response is keyed by event type; `all` carries every key.
#[derive(Deserialize)]
struct OnThisDayResponse {
    #[serde(default)]
    selected: Vec<OnThisDayEvent>,
    #[serde(default)]
    births: Vec<OnThisDayEvent>,
    #[serde(default)]
    deaths: Vec<OnThisDayEvent>,
    #[serde(default)]
    events: Vec<OnThisDayEvent>,
    #[serde(default)]
    holidays: Vec<OnThisDayEvent>,
}

impl OnThisDayResponse {
    fn into_events(self) -> Vec<OnThisDayEvent> {
        let mut all = self.selected;
        all.extend(self.births);
        all.extend(self.deaths);
        all.extend(self.events);
        all.extend(self.holidays);
        all
    }
}

/// Client for the feed REST endpoints (featured content, on this day).
#[derive(Clone)]
pub struct FeedClient {
    transport: Transport,
    path: String,
}

impl FeedClient {
    pub(crate) fn new(transport: Transport, language: Language) -> Self {
        Self {
            transport,
            path: format!("/feed/v1/wikipedia/{}", language.code()),
        }
    }

    /// Featured content for a day: featured article, picture of the day,
    /// in-the-news stories, and most-read articles. `None` means today (UTC).
    pub async fn featured_content(&self, date: Option<NaiveDate>) -> Result<FeaturedContent> {
        let date = date.unwrap_or_else(today);
        self.transport.get_json(&self.featured_path(date), &[]).await
    }

    /// Historical events for a calendar day. `None` means today (UTC).
    pub async fn on_this_day(
        &self,
        kind: EventType,
        date: Option<NaiveDate>,
    ) -> Result<Vec<OnThisDayEvent>> {
        let date = date.unwrap_or_else(today);
        let response: OnThisDayResponse = self
            .transport
            .get_json(&self.on_this_day_path(kind, date), &[])
            .await?;
        Ok(response.into_events())
    }

    fn featured_path(&self, date: NaiveDate) -> String {
        format!(
            "{}/featured/{:04}/{:02}/{:02}",
            self.path,
            date.year(),
            date.month(),
            date.day()
        )
    }

    fn on_this_day_path(&self, kind: EventType, date: NaiveDate) -> String {
        format!(
            "{}/onthisday/{}/{:02}/{:02}",
            self.path,
            kind.as_str(),
            date.month(),
            date.day()
        )
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed() -> FeedClient {
        FeedClient::new(Transport::new("http://localhost"), Language::En)
    }

    #[test]
    fn test_featured_path_zero_pads_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(
            feed().featured_path(date),
            "/feed/v1/wikipedia/en/featured/2024/03/07"
        );
    }

    #[test]
    fn test_on_this_day_path_has_no_year() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        assert_eq!(
            feed().on_this_day_path(EventType::Holidays, date),
            "/feed/v1/wikipedia/en/onthisday/holidays/12/25"
        );
    }

    #[test]
    fn test_on_this_day_response_merges_all_sections() {
        let json = r#"{
            "births": [{"text": "Isaac Newton born", "year": 1643, "pages": []}],
            "holidays": [{"text": "Christmas Day", "pages": []}]
        }"#;
        let response: OnThisDayResponse = serde_json::from_str(json).unwrap();
        let events = response.into_events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].year, Some(1643));
        assert_eq!(events[1].year, None);
    }
}
