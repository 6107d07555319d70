use super::models::{ExtractedEvent, GroupSummary};
use crate::error::{extraction_error, BotResult};
use serde_json::{Map, Value};
use tracing::info;

/// Member names shown in the summary
pub const MEMBER_LIMIT: usize = 10;

/// Path of the Apollo cache inside the Next.js payload
const APOLLO_STATE_PATH: [&str; 3] = ["props", "pageProps", "__APOLLO_STATE__"];

/// Summarize the Next.js payload of a Meetup page
///
/// A missing key anywhere along `props.pageProps.__APOLLO_STATE__` summarizes as empty;
/// a node on that path that is not an object is an extraction error.
pub fn summarize_next_data(next_data: &Value) -> BotResult<String> {
    let empty = Map::new();
    let mut node = next_data;

    for key in APOLLO_STATE_PATH {
        let object = node
            .as_object()
            .ok_or_else(|| extraction_error(&format!("expected an object holding '{}'", key)))?;
        match object.get(key) {
            Some(child) => node = child,
            None => return summarize_state(&empty),
        }
    }

    let state = node
        .as_object()
        .ok_or_else(|| extraction_error("__APOLLO_STATE__ is not an object"))?;

    summarize_state(state)
}

/// Render group info, sorted events and members from a flat Apollo state map
pub fn summarize_state(state: &Map<String, Value>) -> BotResult<String> {
    let mut sections = Vec::new();

    // Only the first group entry counts
    let group_info = match state.iter().find(|(key, _)| key.starts_with("Group:")) {
        Some((key, value)) => {
            let group = entry_object(key, value)?;
            GroupSummary::from_state(group).to_string()
        }
        None => String::new(),
    };
    sections.push(group_info);

    let mut events = Vec::new();
    for (key, value) in state.iter().filter(|(key, _)| key.starts_with("Event:")) {
        let event = entry_object(key, value)?;
        events.push(ExtractedEvent::from_state(event, |reference| state.get(reference)));
    }

    // Lexicographic on the vendor string, stable for equal keys
    events.sort_by(|a, b| a.date_key().cmp(b.date_key()));
    info!("Extracted {} Meetup events", events.len());

    if events.is_empty() {
        sections.push("No events found in Meetup data".to_string());
    } else {
        sections.push("MEETUP EVENTS:".to_string());
        sections.extend(events.iter().map(ExtractedEvent::to_string));
    }

    let mut members = Vec::new();
    for (key, value) in state.iter().filter(|(key, _)| key.starts_with("Member:")) {
        let member = entry_object(key, value)?;
        let name = match member.get("name") {
            Some(Value::String(name)) => name.clone(),
            Some(Value::Null) | None => "Unknown".to_string(),
            Some(other) => other.to_string(),
        };
        members.push(format!("Member: {}", name));
    }

    if !members.is_empty() {
        sections.push(format!("\nRECENT MEMBERS ({} found):", members.len()));
        sections.extend(members.into_iter().take(MEMBER_LIMIT));
    }

    Ok(sections.join("\n"))
}

fn entry_object<'a>(key: &str, value: &'a Value) -> BotResult<&'a Value> {
    if value.is_object() {
        Ok(value)
    } else {
        Err(extraction_error(&format!("entry '{}' is not an object", key)))
    }
}
