use super::models::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use super::prompt::build_prompt;
use super::AnswerGenerator;
use crate::components::group_registry::GroupConfig;
use crate::config::Config;
use crate::error::{answer_error, BotResult};
use async_trait::async_trait;
use reqwest::{header, Client};
use tracing::{info, instrument};

/// Answers questions through Groq's OpenAI-compatible chat-completion API
#[derive(Debug, Clone)]
pub struct GroqClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GroqClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.groq_api_key.clone(),
            config.groq_base_url.clone(),
            config.groq_model.clone(),
        )
    }

    /// Send one user message and return the first completion's text
    pub async fn complete(&self, prompt: String) -> BotResult<String> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
        };

        let res = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(header::ACCEPT, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| answer_error(&format!("Failed to send request to Groq: {}", e)))?;

        if !res.status().is_success() {
            let status = res.status();
            let error_body = res.text().await.unwrap_or_default();
            return Err(answer_error(&format!(
                "Groq API returned error: Status {}, Body: {}",
                status, error_body
            )));
        }

        let response: ChatCompletionResponse = res
            .json()
            .await
            .map_err(|e| answer_error(&format!("Failed to parse Groq response: {}", e)))?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| answer_error("Groq response contained no completion"))
    }
}

#[async_trait]
impl AnswerGenerator for GroqClient {
    #[instrument(skip(self, context), fields(model = %self.model, context_len = context.len()))]
    async fn generate(&self, group: &GroupConfig, question: &str, context: &str) -> BotResult<String> {
        let prompt = build_prompt(&group.name, question, context);
        let answer = self.complete(prompt).await?;
        info!("Received answer of {} characters", answer.len());
        Ok(answer)
    }
}
