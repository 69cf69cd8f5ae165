use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::update_listeners::Polling;

use damehot::cli::{Cli, Commands};
use damehot::core::{config, init_logger};
use damehot::telegram::{create_bot, schema, setup_all_language_commands, HandlerDeps, WebAppLinks};

/// Main entry point for the Telegram bot
///
/// Parses CLI arguments and dispatches to the bot runner.
///
/// # Errors
/// Returns an error if initialization fails (logging, web app URL, bot creation).
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Initialize logger (console + file)
    init_logger(&config::LOG_FILE_PATH)?;

    // Load environment variables from .env if present
    let _ = dotenv();

    match cli.command {
        Some(Commands::Run) | None => run_bot().await,
    }
}

/// Run the Telegram bot in long polling mode
async fn run_bot() -> Result<()> {
    let Some(token) = config::bot_token() else {
        log::error!("❌ TELEGRAM_BOT_TOKEN is not set. Export it or add it to .env");
        return Ok(());
    };

    let links = Arc::new(WebAppLinks::from_env()?);
    log::info!("Web app base URL: {}", links.play());

    let bot = create_bot(&token)?;

    // Register command descriptions for all supported languages
    setup_all_language_commands(&bot).await?;

    let handler = schema(HandlerDeps::new(links));

    log::info!("🤖 Bot started!");

    // Create polling listener that drops pending updates on start
    let listener = Polling::builder(bot.clone()).drop_pending_updates().build();

    Dispatcher::builder(bot, handler)
        .dependencies(DependencyMap::new())
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    log::info!("Dispatcher shutdown gracefully");

    Ok(())
}
