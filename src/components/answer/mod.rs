mod groq;
pub mod models;
mod prompt;

pub use groq::GroqClient;
pub use prompt::build_prompt;

use crate::components::group_registry::GroupConfig;
use crate::error::BotResult;
use async_trait::async_trait;

/// Produces an answer to a question from gathered context
#[async_trait]
pub trait AnswerGenerator: Send + Sync {
    /// Answer `question` for `group` using only `context`
    async fn generate(&self, group: &GroupConfig, question: &str, context: &str) -> BotResult<String>;
}
