mod extractor;
mod fallback;
pub mod models;

pub use extractor::{summarize_next_data, summarize_state, MEMBER_LIMIT};
pub use fallback::extract_div_content;
pub use models::{ExtractedEvent, GroupSummary, Venue};

use crate::error::{BotResult, Error};
use scraper::{Html, Selector};
use serde_json::Value;
use tracing::{error, info};

/// Script tag Next.js serializes page state into
const NEXT_DATA_SELECTOR: &str = "script#__NEXT_DATA__";

/// Turn a Meetup events page into a plain-text summary
///
/// Prefers the embedded `__NEXT_DATA__` payload. When it is missing or not valid JSON
/// the nested `<div>` text of the page is returned instead.
pub fn extract_meetup_data(html: &str) -> BotResult<String> {
    let document = Html::parse_document(html);

    match parse_next_data(&document) {
        Ok(Some(next_data)) => {
            info!("Successfully parsed Meetup JSON data");
            return summarize_next_data(&next_data);
        }
        Ok(None) => {}
        Err(e) => error!("Error parsing Meetup JSON: {}", e),
    }

    info!("No Meetup JSON data found, using fallback");
    Ok(extract_div_content(&document))
}

/// Parse the `__NEXT_DATA__` script, if the page has one
fn parse_next_data(document: &Html) -> BotResult<Option<Value>> {
    let selector = Selector::parse(NEXT_DATA_SELECTOR)
        .map_err(|e| Error::Parse(format!("Invalid selector {}: {}", NEXT_DATA_SELECTOR, e)))?;

    let Some(script) = document.select(&selector).next() else {
        return Ok(None);
    };

    info!("Found __NEXT_DATA__ script tag");
    let raw: String = script.text().collect();
    let next_data = serde_json::from_str(&raw)?;

    Ok(Some(next_data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_embedded_state() {
        let html = r#"<html><body><div>Navigation chrome</div>
            <script id="__NEXT_DATA__" type="application/json">
            {"props":{"pageProps":{"__APOLLO_STATE__":{
                "Group:1":{"name":"Columbus Code & Coffee","stats":{"memberCounts":{"all":2100}}},
                "Event:9":{"title":"Saturday Coffee","dateTime":"2025-05-03T08:00:00-04:00"}
            }}}}
            </script></body></html>"#;

        let summary = extract_meetup_data(html).unwrap();
        assert!(summary.contains("Name: Columbus Code & Coffee"));
        assert!(summary.contains("Members: 2100"));
        assert!(summary.contains("EVENT: Saturday Coffee"));
        assert!(!summary.contains("Level"));
    }

    #[test]
    fn invalid_json_falls_back_to_divs() {
        let html = r#"<html><body><div>Upcoming events list</div>
            <script id="__NEXT_DATA__">{not json</script></body></html>"#;

        assert_eq!(
            extract_meetup_data(html).unwrap(),
            "  Level 1: Upcoming events list"
        );
    }

    #[test]
    fn missing_script_falls_back_to_divs() {
        let html = "<html><body><div>Saturday Coffee at the library</div></body></html>";
        assert_eq!(
            extract_meetup_data(html).unwrap(),
            "  Level 1: Saturday Coffee at the library"
        );
    }
}
