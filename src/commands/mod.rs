use crate::config::Config;
use crate::error::BotResult;
use poise::serenity_prelude as serenity;
use std::fmt;
use std::sync::Arc;

// Export submodules
pub mod ask;
pub mod util;

pub use ask::Dispatcher;

/// Embed colour for successful replies
const SUCCESS_COLOUR: u32 = 0x2ecc71;
/// Embed colour for error replies
const ERROR_COLOUR: u32 = 0xe74c3c;

/// Shared data for all commands and event handlers
pub struct BotData {
    pub config: Arc<Config>,
    pub dispatcher: Dispatcher,
}

impl BotData {
    pub fn new(config: Arc<Config>, dispatcher: Dispatcher) -> Self {
        Self { config, dispatcher }
    }
}

// Framework errors carry the data and are logged with `{:?}`
impl fmt::Debug for BotData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotData")
            .field("default_group", &self.config.default_group)
            .finish_non_exhaustive()
    }
}

/// Type alias for command result
pub type CommandResult = BotResult<()>;

/// Type alias for poise context
pub type Context<'a> = poise::Context<'a, BotData, crate::error::Error>;

/// All application commands
pub fn get_all_application_commands() -> Vec<poise::Command<BotData, crate::error::Error>> {
    vec![util::ping(), ask::ask()]
}

/// Embed for a successful reply
pub fn create_success_embed(title: &str, description: &str) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title(title)
        .description(description)
        .colour(SUCCESS_COLOUR)
}

/// Embed for an error reply
pub fn create_error_embed(title: &str, description: &str) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title(title)
        .description(description)
        .colour(ERROR_COLOUR)
}
