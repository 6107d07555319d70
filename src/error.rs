use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Discord API error: {0}")]
    #[diagnostic(code(eventbot::discord_api))]
    DiscordApi(#[from] serenity::Error),

    #[error("Poise framework error: {0}")]
    #[diagnostic(code(eventbot::poise))]
    Poise(#[from] Box<dyn std::error::Error + Send + Sync>),

    #[error("Environment error: {0}")]
    #[diagnostic(code(eventbot::environment), help("Set the variable in the environment or in .env"))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(eventbot::config))]
    Config(String),

    #[error("Failed to fetch {url}: {reason}")]
    #[diagnostic(code(eventbot::fetch))]
    Fetch { url: String, reason: String },

    #[error("Failed to parse embedded page data: {0}")]
    #[diagnostic(code(eventbot::parse))]
    Parse(String),

    #[error("unexpected Meetup state shape: {0}")]
    #[diagnostic(code(eventbot::extraction))]
    Extraction(String),

    #[error("Answer generation failed: {0}")]
    #[diagnostic(code(eventbot::answer_generation))]
    AnswerGeneration(String),

    #[error("Web search failed: {0}")]
    #[diagnostic(code(eventbot::search))]
    Search(String),

    #[error(transparent)]
    #[diagnostic(code(eventbot::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(eventbot::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(eventbot::other))]
    Other(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type BotResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create fetch errors
pub fn fetch_error(url: &str, reason: impl std::fmt::Display) -> Error {
    Error::Fetch {
        url: url.to_string(),
        reason: reason.to_string(),
    }
}

/// Helper to create extraction errors
pub fn extraction_error(message: &str) -> Error {
    Error::Extraction(message.to_string())
}

/// Helper to create answer generation errors
pub fn answer_error(message: &str) -> Error {
    Error::AnswerGeneration(message.to_string())
}

/// Helper to create web search errors
pub fn search_error(message: &str) -> Error {
    Error::Search(message.to_string())
}
