use crate::components::group_registry::{GroupConfig, GroupRegistry, DEFAULT_GROUP};
use crate::error::{config_error, env_error, BotResult};
use dotenvy::dotenv;
use std::env;
use std::fs;

/// Default activity text for the bot
pub const DEFAULT_ACTIVITY: &str = "Answering !ask questions";

/// OpenAI-compatible Groq endpoint
pub const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Chat model used for answers
pub const DEFAULT_GROQ_MODEL: &str = "llama3-8b-8192";

/// Brave web search endpoint
pub const DEFAULT_BRAVE_SEARCH_URL: &str = "https://api.search.brave.com/res/v1/web/search";

/// Timeout for page fetches, in seconds
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 15;

/// Extra groups merged over the built-in registry
pub const GROUPS_FILE: &str = "config/groups.toml";

/// Main configuration structure for the bot
#[derive(Debug, Clone)]
pub struct Config {
    /// Discord bot token
    pub discord_token: String,
    /// Brave Search API key
    pub brave_api_key: String,
    /// Groq API key
    pub groq_api_key: String,
    /// Base URL of the chat-completion API
    pub groq_base_url: String,
    /// Model name sent with each completion request
    pub groq_model: String,
    /// Brave web search endpoint
    pub brave_search_url: String,
    /// Group answered for by the ask commands
    pub default_group: String,
    /// Configured groups
    pub groups: GroupRegistry,
    /// Bot activity status text
    pub activity: String,
    /// Locale for user-facing messages
    pub bot_locale: String,
    /// Timeout for page fetches, in seconds
    pub fetch_timeout_secs: u64,
    /// Add web search results when the Meetup page could not be read
    pub search_fallback: bool,
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> BotResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let groups_file = fs::read_to_string(GROUPS_FILE).ok();

        Self::from_lookup(|key| env::var(key).ok(), groups_file.as_deref())
    }

    /// Build configuration from a variable lookup and optional groups file content
    pub fn from_lookup<F>(lookup: F, groups_file: Option<&str>) -> BotResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| env_error(key))
        };

        // Required credentials
        let discord_token = required("DISCORD_TOKEN")?;
        let brave_api_key = required("BRAVE_API_KEY")?;
        let groq_api_key = required("GROQ_API_KEY")?;

        let groq_base_url = lookup("GROQ_BASE_URL")
            .unwrap_or_else(|| DEFAULT_GROQ_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let groq_model = lookup("GROQ_MODEL").unwrap_or_else(|| DEFAULT_GROQ_MODEL.to_string());
        let brave_search_url =
            lookup("BRAVE_SEARCH_URL").unwrap_or_else(|| DEFAULT_BRAVE_SEARCH_URL.to_string());
        let activity = lookup("BOT_ACTIVITY").unwrap_or_else(|| DEFAULT_ACTIVITY.to_string());
        let bot_locale = lookup("BOT_LOCALE").unwrap_or_else(|| "en".to_string());

        let fetch_timeout_secs = match lookup("FETCH_TIMEOUT_SECS") {
            Some(value) => value
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| config_error("Invalid FETCH_TIMEOUT_SECS format"))?,
            None => DEFAULT_FETCH_TIMEOUT_SECS,
        };

        let search_fallback = lookup("SEARCH_FALLBACK")
            .map(|value| matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let mut groups = GroupRegistry::builtin();
        if let Some(content) = groups_file {
            groups.merge_toml(content)?;
        }

        let default_group = lookup("DEFAULT_GROUP").unwrap_or_else(|| DEFAULT_GROUP.to_string());
        if groups.get(&default_group).is_none() {
            return Err(config_error(&format!(
                "Unknown DEFAULT_GROUP '{}'. Available groups: {:?}",
                default_group,
                groups.keys()
            )));
        }

        Ok(Config {
            discord_token,
            brave_api_key,
            groq_api_key,
            groq_base_url,
            groq_model,
            brave_search_url,
            default_group,
            groups,
            activity,
            bot_locale,
            fetch_timeout_secs,
            search_fallback,
        })
    }

    /// The group answered for by the ask commands
    pub fn default_group_config(&self) -> BotResult<&GroupConfig> {
        self.groups
            .get(&self.default_group)
            .ok_or_else(|| config_error(&format!("Unknown group '{}'", self.default_group)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn credentials() -> HashMap<String, String> {
        vars(&[
            ("DISCORD_TOKEN", "discord"),
            ("BRAVE_API_KEY", "brave"),
            ("GROQ_API_KEY", "groq"),
        ])
    }

    #[test]
    fn loads_defaults_with_credentials() {
        let env = credentials();
        let config = Config::from_lookup(|k| env.get(k).cloned(), None).unwrap();

        assert_eq!(config.groq_base_url, DEFAULT_GROQ_BASE_URL);
        assert_eq!(config.groq_model, DEFAULT_GROQ_MODEL);
        assert_eq!(config.fetch_timeout_secs, 15);
        assert_eq!(config.default_group, DEFAULT_GROUP);
        assert!(!config.search_fallback);
        assert_eq!(
            config.default_group_config().unwrap().name,
            "Columbus Code & Coffee"
        );
    }

    #[test]
    fn each_missing_credential_is_fatal() {
        for missing in ["DISCORD_TOKEN", "BRAVE_API_KEY", "GROQ_API_KEY"] {
            let mut env = credentials();
            env.remove(missing);
            let err = Config::from_lookup(|k| env.get(k).cloned(), None).unwrap_err();
            assert!(err.to_string().contains(missing), "{err}");
        }
    }

    #[test]
    fn blank_credential_counts_as_missing() {
        let mut env = credentials();
        env.insert("GROQ_API_KEY".to_string(), "  ".to_string());
        assert!(Config::from_lookup(|k| env.get(k).cloned(), None).is_err());
    }

    #[test]
    fn rejects_unknown_default_group_and_bad_timeout() {
        let mut env = credentials();
        env.insert("DEFAULT_GROUP".to_string(), "nope".to_string());
        assert!(Config::from_lookup(|k| env.get(k).cloned(), None).is_err());

        let mut env = credentials();
        env.insert("FETCH_TIMEOUT_SECS".to_string(), "soon".to_string());
        assert!(Config::from_lookup(|k| env.get(k).cloned(), None).is_err());
    }

    #[test]
    fn groups_file_can_provide_default_group() {
        let mut env = credentials();
        env.insert("DEFAULT_GROUP".to_string(), "rustaceans".to_string());
        env.insert("SEARCH_FALLBACK".to_string(), "true".to_string());
        env.insert("GROQ_BASE_URL".to_string(), "http://localhost:9000/v1/".to_string());
        let file = r#"
[rustaceans]
name = "Rustaceans"
meetup_url = "https://www.meetup.com/rustaceans/events/"
website_url = "https://rustaceans.example/"
"#;
        let config = Config::from_lookup(|k| env.get(k).cloned(), Some(file)).unwrap();

        assert_eq!(config.default_group_config().unwrap().name, "Rustaceans");
        assert_eq!(config.groq_base_url, "http://localhost:9000/v1");
        assert!(config.search_fallback);
    }
}
