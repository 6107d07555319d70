use crate::components::answer::{AnswerGenerator, GroqClient};
use crate::components::context::ContextBuilder;
use crate::components::fetcher::PageFetcher;
use crate::components::search::BraveSearchClient;
use crate::config::Config;
use crate::error::BotResult;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Turns a question into a chat-ready answer
#[async_trait]
pub trait Answerer: Send + Sync {
    async fn answer(&self, question: &str) -> BotResult<String>;
}

/// Builds fresh context for the default group and asks the language model
pub struct AskService {
    config: Arc<Config>,
    context: ContextBuilder,
    generator: Arc<dyn AnswerGenerator>,
}

impl AskService {
    pub fn new(
        config: Arc<Config>,
        context: ContextBuilder,
        generator: Arc<dyn AnswerGenerator>,
    ) -> Self {
        Self {
            config,
            context,
            generator,
        }
    }

    /// Wire the HTTP-backed stages from configuration
    pub fn from_config(config: Arc<Config>) -> Self {
        let fetcher = PageFetcher::new(Duration::from_secs(config.fetch_timeout_secs));
        let mut context = ContextBuilder::new(fetcher);
        if config.search_fallback {
            info!("Web search fallback enabled");
            context = context.with_search_fallback(BraveSearchClient::from_config(&config));
        }

        let generator = Arc::new(GroqClient::from_config(&config));

        Self::new(config, context, generator)
    }
}

#[async_trait]
impl Answerer for AskService {
    async fn answer(&self, question: &str) -> BotResult<String> {
        let group = self.config.default_group_config()?;
        let context = self.context.build_for_group(group, question).await;
        self.generator.generate(group, question, &context).await
    }
}
