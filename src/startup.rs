use crate::commands::{create_error_embed, get_all_application_commands, BotData, Dispatcher};
use crate::components::AskService;
use crate::config::Config;
use crate::error::Error;
use crate::handlers;
use crate::shutdown;
use poise::serenity_prelude as serenity;
use rust_i18n::t;
use serenity::model::user::OnlineStatus;
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,serenity=warn,poise=warn")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load the application config
pub fn load_config() -> miette::Result<Arc<Config>> {
    match Config::load() {
        Ok(config) => Ok(Arc::new(config)),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Initialize and start the Discord bot
pub async fn start_bot(config: Arc<Config>) -> miette::Result<()> {
    let token = config.discord_token.clone();
    let activity = config.activity.clone();

    // Set locale from config
    crate::utils::i18n::set_locale(&config.bot_locale);
    info!("Setting locale to {}", config.bot_locale);

    // Set up framework options
    let options = poise::FrameworkOptions {
        commands: get_all_application_commands(),
        on_error: |error| Box::pin(on_error(error)),
        event_handler: |ctx, event, framework, data| {
            Box::pin(handlers::event_handler(ctx, event, framework, data))
        },
        ..Default::default()
    };

    // Text commands need message content
    let intents =
        serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::MESSAGE_CONTENT;

    // The answer pipeline shared by text and slash commands
    let dispatcher = Dispatcher::new(Arc::new(AskService::from_config(Arc::clone(&config))));
    let command_data = BotData::new(Arc::clone(&config), dispatcher);

    let setup_config = Arc::clone(&config);

    let client_result = serenity::ClientBuilder::new(token, intents)
        .framework(poise::Framework::new(options, move |ctx, ready, framework| {
            Box::pin(async move {
                info!("{} is connected!", ready.user.name);

                // Set the bot's status
                ctx.set_presence(
                    Some(serenity::ActivityData::playing(&activity)),
                    OnlineStatus::Online,
                );
                info!("Setting activity to {}", activity);

                info!("Commands available: !ask <question>, /ask <question>");
                if let Ok(group) = setup_config.default_group_config() {
                    info!("Tracking events for: {}", group.name);
                }
                info!("Available groups: {:?}", setup_config.groups.keys());

                // Register slash commands
                if let Err(e) =
                    poise::builtins::register_globally(ctx, &framework.options().commands).await
                {
                    error!("Failed to register slash commands: {:?}", e);
                } else {
                    info!("Slash commands registered successfully");
                }

                Ok(command_data)
            })
        }))
        .await;

    // Start the bot
    info!("Starting bot...");
    let mut client = client_result.map_err(Error::from)?;

    // Create shutdown channel
    let (shutdown_send, shutdown_recv) = oneshot::channel();

    // Spawn signal handler task
    let shard_manager = Arc::clone(&client.shard_manager);
    tokio::spawn(async move {
        shutdown::handle_signals(shutdown_send, shard_manager).await;
    });

    // Create a separate task to handle the client
    let client_handle = tokio::spawn(async move {
        if let Err(e) = client.start().await {
            Err(Error::from(e))
        } else {
            Ok(())
        }
    });

    // Wait for either the client to end or a shutdown signal
    tokio::select! {
        result = client_handle => {
            info!("Bot process ended");
            match result {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => Err(e.into()),
                Err(e) => {
                    error!("Client task error: {:?}", e);
                    Err(Error::Other(format!("Client task error: {}", e)).into())
                }
            }
        }
        _ = shutdown_recv => {
            info!("Received shutdown signal, shutting down bot...");
            Ok(())
        }
    }
}

/// Handle errors from commands
async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Error during setup: {:?}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command '{}': {:?}", ctx.command().name, error);
            if let Err(e) = ctx
                .send(
                    poise::CreateReply::default()
                        .embed(create_error_embed(
                            &t!("error_title", context = "command"),
                            &format!("{}", error),
                        ))
                        .ephemeral(true),
                )
                .await
            {
                error!("Error while sending error message: {:?}", e);
            }
        }
        poise::FrameworkError::EventHandler { error, .. } => {
            error!("Error in event handler: {:?}", error);
        }
        error => {
            error!("Other error: {:?}", error);
        }
    }
}
