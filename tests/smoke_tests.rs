use async_trait::async_trait;
use eventbot::commands::{get_all_application_commands, BotData, Dispatcher};
use eventbot::components::group_registry::DEFAULT_GROUP;
use eventbot::components::{Answerer, GroupRegistry};
use eventbot::config::{Config, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_GROQ_MODEL};
use eventbot::error::BotResult;
use std::collections::HashMap;
use std::sync::Arc;

fn test_config() -> Config {
    Config {
        discord_token: "test_token".to_string(),
        brave_api_key: "test_brave_key".to_string(),
        groq_api_key: "test_groq_key".to_string(),
        groq_base_url: "http://127.0.0.1:9/v1".to_string(),
        groq_model: DEFAULT_GROQ_MODEL.to_string(),
        brave_search_url: "http://127.0.0.1:9/search".to_string(),
        default_group: DEFAULT_GROUP.to_string(),
        groups: GroupRegistry::builtin(),
        activity: "Testing".to_string(),
        bot_locale: "en".to_string(),
        fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
        search_fallback: false,
    }
}

struct EchoAnswerer;

#[async_trait]
impl Answerer for EchoAnswerer {
    async fn answer(&self, question: &str) -> BotResult<String> {
        Ok(format!("echo: {}", question))
    }
}

/// Smoke test to verify that the config can be constructed
#[tokio::test]
async fn test_config_loads() {
    let config = test_config();

    assert_eq!(config.default_group, "columbus_code_coffee");
    let group = config.default_group_config().unwrap();
    assert_eq!(group.name, "Columbus Code & Coffee");
    assert!(group.meetup_url.starts_with("https://www.meetup.com/"));
}

/// Config with environment variables and a groups file
#[tokio::test]
async fn test_config_from_env() {
    let env: HashMap<&str, &str> = HashMap::from([
        ("DISCORD_TOKEN", "discord"),
        ("BRAVE_API_KEY", "brave"),
        ("GROQ_API_KEY", "groq"),
        ("DEFAULT_GROUP", "rust_meetup"),
        ("SEARCH_FALLBACK", "true"),
    ]);
    let groups = r#"
[rust_meetup]
name = "Rust Meetup"
meetup_url = "https://www.meetup.com/rust-meetup/events/"
website_url = "https://rust.example.org/"
"#;

    let config =
        Config::from_lookup(|k| env.get(k).map(|v| v.to_string()), Some(groups)).unwrap();

    assert_eq!(config.groups.len(), 2);
    assert_eq!(config.default_group_config().unwrap().name, "Rust Meetup");
    assert!(config.search_fallback);
    assert_eq!(config.fetch_timeout_secs, DEFAULT_FETCH_TIMEOUT_SECS);
}

/// Missing credentials stop startup
#[tokio::test]
async fn test_config_requires_credentials() {
    let env: HashMap<&str, &str> =
        HashMap::from([("DISCORD_TOKEN", "discord"), ("BRAVE_API_KEY", "brave")]);

    let err = Config::from_lookup(|k| env.get(k).map(|v| v.to_string()), None).unwrap_err();
    assert!(err.to_string().contains("GROQ_API_KEY"));
}

/// Both application commands are registered
#[tokio::test]
async fn test_application_commands() {
    let names: Vec<String> = get_all_application_commands()
        .into_iter()
        .map(|command| command.name)
        .collect();

    assert_eq!(names, vec!["ping".to_string(), "ask".to_string()]);
}

/// Shared bot data wires the dispatcher to an answerer
#[tokio::test]
async fn test_bot_data_dispatch() {
    let data = BotData::new(
        Arc::new(test_config()),
        Dispatcher::new(Arc::new(EchoAnswerer)),
    );

    assert_eq!(
        data.dispatcher.dispatch(false, "user", "!ask hi there").await,
        Some("echo: hi there".to_string())
    );
    assert_eq!(data.dispatcher.dispatch(true, "bot", "!ask hi").await, None);
    assert_eq!(data.dispatcher.dispatch(false, "user", "hello").await, None);

    let usage = data.dispatcher.dispatch(false, "user", "/ask").await.unwrap();
    assert!(usage.contains("!ask <your question>"));
}

/// Bot data prints for framework error logs without exposing credentials
#[tokio::test]
async fn test_bot_data_debug() {
    let data = BotData::new(
        Arc::new(test_config()),
        Dispatcher::new(Arc::new(EchoAnswerer)),
    );

    let printed = format!("{:?}", data);
    assert!(printed.starts_with("BotData"));
    assert!(printed.contains("columbus_code_coffee"));
    assert!(!printed.contains("test_token"));
}
