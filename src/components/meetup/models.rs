use serde_json::Value;
use std::fmt;

/// Sort key for events without a usable date string
pub const MISSING_DATE_KEY: &str = "9999";

/// Group metadata taken from the first `Group:` entry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupSummary {
    pub name: String,
    pub member_count: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub timezone: String,
    pub join_mode: String,
    pub status: String,
    pub welcome: String,
    pub average_rating: String,
    pub total_ratings: String,
}

impl GroupSummary {
    pub fn from_state(group: &Value) -> Self {
        Self {
            name: text_or(group.get("name"), "Unknown Group"),
            member_count: text_or(group.pointer("/stats/memberCounts/all"), "0"),
            city: text_or(group.get("city"), ""),
            state: text_or(group.get("state"), ""),
            country: text_or(group.get("country"), "Unknown"),
            timezone: text_or(group.get("timezone"), "Unknown"),
            join_mode: text_or(group.get("joinMode"), "Unknown"),
            status: text_or(group.get("status"), "Unknown"),
            welcome: text_or(group.get("welcomeBlurb"), "No welcome message"),
            average_rating: text_or(group.pointer("/stats/eventRatings/average"), "N/A"),
            total_ratings: text_or(group.pointer("/stats/eventRatings/total"), "N/A"),
        }
    }
}

impl fmt::Display for GroupSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "MEETUP GROUP INFORMATION:")?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Members: {}", self.member_count)?;
        writeln!(f, "Location: {}, {}", self.city, self.state)?;
        writeln!(f, "Country: {}", self.country)?;
        writeln!(f, "Timezone: {}", self.timezone)?;
        writeln!(f, "Join Mode: {}", self.join_mode)?;
        writeln!(f, "Status: {}", self.status)?;
        writeln!(f, "Welcome Message: {}", self.welcome)?;
        writeln!(f, "Average Event Rating: {}", self.average_rating)?;
        writeln!(f, "Total Event Ratings: {}", self.total_ratings)
    }
}

/// Venue resolved through an event's `venue.__ref`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Venue {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
}

impl Venue {
    pub fn from_state(venue: &Value) -> Self {
        Self {
            name: text_or(venue.get("name"), "Unknown venue"),
            address: text_or(venue.get("address"), "No address"),
            city: text_or(venue.get("city"), ""),
            state: text_or(venue.get("state"), ""),
            country: text_or(venue.get("country"), ""),
        }
    }
}

/// One `Event:` entry, flattened for the context blob
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedEvent {
    pub title: String,
    /// Raw `dateTime` string, `None` when absent
    pub date_time: Option<String>,
    pub end_time: String,
    pub description: String,
    pub event_url: String,
    pub status: String,
    pub going_count: String,
    pub rsvp_state: String,
    pub event_type: String,
    pub is_online: String,
    pub created_time: String,
    pub venue: Option<Venue>,
    pub creator: Option<String>,
}

impl ExtractedEvent {
    /// Build an event, resolving venue and creator references with `resolve`
    pub fn from_state<'a, F>(event: &'a Value, resolve: F) -> Self
    where
        F: Fn(&str) -> Option<&'a Value>,
    {
        let reference = |field: &str| {
            event
                .get(field)
                .and_then(|r| r.get("__ref"))
                .and_then(Value::as_str)
                .filter(|key| !key.is_empty())
                .and_then(|key| resolve(key))
        };

        Self {
            title: text_or(event.get("title"), "Unknown Event"),
            date_time: text(event.get("dateTime")),
            end_time: text_or(event.get("endTime"), "No end time"),
            description: text_or(event.get("description"), "No description"),
            event_url: text_or(event.get("eventUrl"), "No URL"),
            status: text_or(event.get("status"), "Unknown status"),
            going_count: text_or(event.pointer("/going/totalCount"), "0"),
            rsvp_state: text_or(event.get("rsvpState"), "Unknown"),
            event_type: text_or(event.get("eventType"), "Unknown"),
            is_online: text_or(event.get("isOnline"), "false"),
            created_time: text_or(event.get("createdTime"), "Unknown"),
            venue: reference("venue").map(Venue::from_state),
            creator: reference("creatorMember").map(|c| text_or(c.get("name"), "Unknown")),
        }
    }

    /// Key events are ordered by: the literal date string, compared lexicographically
    pub fn date_key(&self) -> &str {
        match self.date_time.as_deref() {
            Some(date) if !date.trim().is_empty() => date,
            _ => MISSING_DATE_KEY,
        }
    }
}

impl fmt::Display for ExtractedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "EVENT: {}", self.title)?;
        writeln!(f, "Date: {}", self.date_time.as_deref().unwrap_or("No date"))?;
        writeln!(f, "End Time: {}", self.end_time)?;
        writeln!(f, "Status: {}", self.status)?;
        writeln!(f, "Event Type: {}", self.event_type)?;
        writeln!(f, "Is Online: {}", self.is_online)?;
        writeln!(f, "RSVP State: {}", self.rsvp_state)?;
        writeln!(f, "Going: {} people", self.going_count)?;
        writeln!(f, "Created: {}", self.created_time)?;
        writeln!(f, "Creator: {}", self.creator.as_deref().unwrap_or("Unknown"))?;
        writeln!(f, "URL: {}", self.event_url)?;

        if let Some(venue) = &self.venue {
            writeln!(f, "Venue: {}", venue.name)?;
            writeln!(
                f,
                "Address: {}, {}, {}, {}",
                venue.address, venue.city, venue.state, venue.country
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Description: {}", self.description)
    }
}

/// Render a scalar JSON value as text; `null` counts as missing
fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

fn text_or(value: Option<&Value>, default: &str) -> String {
    text(value).unwrap_or_else(|| default.to_string())
}
