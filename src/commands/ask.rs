use crate::commands::{CommandResult, Context};
use crate::components::Answerer;
use crate::utils::message::{split_message, DISCORD_MESSAGE_LIMIT};
use crate::utils::text::sanitize;
use rust_i18n::t;
use std::sync::Arc;
use tracing::{error, info};

/// Text command prefixes, matched case-sensitively
pub const ASK_PREFIXES: [&str; 2] = ["!ask", "/ask"];

/// What an incoming message asks the bot to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AskCommand<'a> {
    /// A question to answer
    Ask(&'a str),
    /// A bare command without a question
    Usage,
    /// Not addressed to the bot
    Ignore,
}

/// Classify a message by prefix and argument
///
/// The question is the raw remainder after `"<prefix> "`. A prefix followed by nothing
/// is not a command.
pub fn parse_command(content: &str) -> AskCommand<'_> {
    for prefix in ASK_PREFIXES {
        if content == prefix {
            return AskCommand::Usage;
        }

        if let Some(question) = content
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix(' '))
            .filter(|rest| !rest.is_empty())
        {
            return AskCommand::Ask(question);
        }
    }

    AskCommand::Ignore
}

/// Usage hint for a bare command
pub fn usage_message() -> String {
    t!("ask_usage").to_string()
}

/// Routes chat messages to the answer pipeline
#[derive(Clone)]
pub struct Dispatcher {
    answerer: Arc<dyn Answerer>,
}

impl Dispatcher {
    pub fn new(answerer: Arc<dyn Answerer>) -> Self {
        Self { answerer }
    }

    /// Reply for a message, or `None` when the bot stays silent
    pub async fn dispatch(&self, from_self: bool, author: &str, content: &str) -> Option<String> {
        if from_self {
            return None;
        }

        let safe_content = sanitize(content);
        info!("Received message: '{}' from {}", safe_content, author);

        match parse_command(content) {
            AskCommand::Ask(question) => {
                info!("Processing ask command: {}", sanitize(question));
                Some(self.answer_or_apologize(question).await)
            }
            AskCommand::Usage => Some(usage_message()),
            AskCommand::Ignore => {
                info!("Message doesn't match any command pattern: {}", safe_content);
                None
            }
        }
    }

    /// Answer a question; failures become a user-visible apology
    pub async fn answer_or_apologize(&self, question: &str) -> String {
        match self.answerer.answer(question).await {
            Ok(answer) => answer,
            Err(e) => {
                error!("Error processing ask command: {}", e);
                t!("ask_error", error = e.to_string()).to_string()
            }
        }
    }
}

/// Ask a question about the group's upcoming events
#[poise::command(slash_command)]
pub async fn ask(
    ctx: Context<'_>,
    #[description = "Your question, e.g. 'when is the next event?'"] question: String,
) -> CommandResult {
    ctx.defer().await?;

    let reply = ctx.data().dispatcher.answer_or_apologize(&question).await;
    for chunk in split_message(&reply, DISCORD_MESSAGE_LIMIT) {
        ctx.say(chunk).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{answer_error, BotResult};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingAnswerer {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingAnswerer {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail,
            })
        }
    }

    #[async_trait]
    impl Answerer for CountingAnswerer {
        async fn answer(&self, question: &str) -> BotResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(answer_error("model unavailable"))
            } else {
                Ok(format!("answer to {}", question))
            }
        }
    }

    #[test]
    fn decision_table() {
        assert_eq!(parse_command("!ask when?"), AskCommand::Ask("when?"));
        assert_eq!(parse_command("/ask where is it"), AskCommand::Ask("where is it"));
        assert_eq!(parse_command("!ask"), AskCommand::Usage);
        assert_eq!(parse_command("/ask"), AskCommand::Usage);
        assert_eq!(parse_command("!ask "), AskCommand::Ignore);
        assert_eq!(parse_command("/ask "), AskCommand::Ignore);
        assert_eq!(parse_command("!ask   "), AskCommand::Ask("  "));
        assert_eq!(parse_command("!ask  when?"), AskCommand::Ask(" when?"));
        assert_eq!(parse_command("!ask when? "), AskCommand::Ask("when? "));
        assert_eq!(parse_command("!Ask when?"), AskCommand::Ignore);
        assert_eq!(parse_command("!asking"), AskCommand::Ignore);
        assert_eq!(parse_command("hello !ask when?"), AskCommand::Ignore);
    }

    #[tokio::test]
    async fn bare_command_gets_usage_without_calls() {
        let answerer = CountingAnswerer::new(false);
        let dispatcher = Dispatcher::new(answerer.clone());

        let reply = dispatcher.dispatch(false, "user", "!ask").await;
        assert_eq!(
            reply.as_deref(),
            Some("Please provide a question! Usage: `!ask <your question>` or `/ask <your question>`")
        );
        assert_eq!(answerer.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn own_messages_are_ignored() {
        let answerer = CountingAnswerer::new(false);
        let dispatcher = Dispatcher::new(answerer.clone());

        assert_eq!(dispatcher.dispatch(true, "bot", "!ask when?").await, None);
        assert_eq!(answerer.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unrelated_messages_are_dropped() {
        let answerer = CountingAnswerer::new(false);
        let dispatcher = Dispatcher::new(answerer.clone());

        assert_eq!(dispatcher.dispatch(false, "user", "good morning").await, None);
        assert_eq!(answerer.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn prefix_with_empty_remainder_is_dropped() {
        let answerer = CountingAnswerer::new(false);
        let dispatcher = Dispatcher::new(answerer.clone());

        assert_eq!(dispatcher.dispatch(false, "user", "!ask ").await, None);
        assert_eq!(answerer.calls.load(Ordering::SeqCst), 0);

        let reply = dispatcher.dispatch(false, "user", "!ask  spaced out").await;
        assert_eq!(reply.as_deref(), Some("answer to  spaced out"));
        assert_eq!(answerer.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn questions_are_answered() {
        let answerer = CountingAnswerer::new(false);
        let dispatcher = Dispatcher::new(answerer.clone());

        let reply = dispatcher.dispatch(false, "user", "/ask next event?").await;
        assert_eq!(reply.as_deref(), Some("answer to next event?"));
        assert_eq!(answerer.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failures_become_error_replies() {
        let dispatcher = Dispatcher::new(CountingAnswerer::new(true));

        let reply = dispatcher.dispatch(false, "user", "!ask next event?").await;
        assert_eq!(
            reply.as_deref(),
            Some("Sorry, I encountered an error: Answer generation failed: model unavailable")
        );
    }
}
