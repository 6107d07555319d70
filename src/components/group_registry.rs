use crate::error::{config_error, BotResult};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Identifier of the group the bot answers for unless configured otherwise
pub const DEFAULT_GROUP: &str = "columbus_code_coffee";

/// A community whose events the bot can answer questions about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupConfig {
    pub id: String,
    pub name: String,
    pub meetup_url: String,
    pub website_url: String,
    pub description: String,
}

/// Group entry as written in `config/groups.toml`, keyed by group id
#[derive(Debug, Deserialize)]
struct GroupFileEntry {
    name: String,
    meetup_url: String,
    website_url: String,
    #[serde(default)]
    description: String,
}

/// Read-only table of configured groups
#[derive(Debug, Clone)]
pub struct GroupRegistry {
    groups: BTreeMap<String, GroupConfig>,
}

impl GroupRegistry {
    /// Registry containing only the built-in groups
    pub fn builtin() -> Self {
        let mut groups = BTreeMap::new();
        groups.insert(
            DEFAULT_GROUP.to_string(),
            GroupConfig {
                id: DEFAULT_GROUP.to_string(),
                name: "Columbus Code & Coffee".to_string(),
                meetup_url: "https://www.meetup.com/columbus-code-and-coffee/events/".to_string(),
                website_url: "https://cbuscodeandcoffee.com/".to_string(),
                description: "Software engineering community for developers by developers"
                    .to_string(),
            },
        );
        Self { groups }
    }

    /// Merge groups from TOML content over the current entries
    pub fn merge_toml(&mut self, content: &str) -> BotResult<()> {
        let entries: BTreeMap<String, GroupFileEntry> = toml::from_str(content)?;

        for (id, entry) in entries {
            if entry.meetup_url.trim().is_empty() || entry.website_url.trim().is_empty() {
                return Err(config_error(&format!(
                    "Group '{}' must define both meetup_url and website_url",
                    id
                )));
            }

            self.groups.insert(
                id.clone(),
                GroupConfig {
                    id,
                    name: entry.name,
                    meetup_url: entry.meetup_url,
                    website_url: entry.website_url,
                    description: entry.description,
                },
            );
        }

        Ok(())
    }

    /// Look up a group by id
    pub fn get(&self, id: &str) -> Option<&GroupConfig> {
        self.groups.get(id)
    }

    /// All group ids in sorted order
    pub fn keys(&self) -> Vec<&str> {
        self.groups.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
