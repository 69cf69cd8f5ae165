//! Bot initialization and command registration
//!
//! This module contains:
//! - Command enum definition
//! - Bot instance creation
//! - Command description registration (per supported language)

use reqwest::ClientBuilder;
use teloxide::prelude::*;
use teloxide::types::BotCommand;
use teloxide::utils::command::BotCommands;
use unic_langid::LanguageIdentifier;

use crate::core::config;
use crate::i18n;

/// Bot commands enum with descriptions
#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "Commandes disponibles:")]
pub enum Command {
    #[command(description = "démarrer le jeu")]
    Start,
    #[command(description = "afficher l'aide")]
    Help,
    #[command(description = "voir vos statistiques")]
    Stats,
}

/// Creates a Bot instance with custom or default API URL
///
/// # Returns
/// * `Ok(Bot)` - Successfully created bot instance
/// * `Err(anyhow::Error)` - Failed to create bot (invalid URL, client build failure)
pub fn create_bot(token: &str) -> anyhow::Result<Bot> {
    let client = ClientBuilder::new().timeout(config::network::timeout()).build()?;

    // Check if local Bot API server is configured
    let bot = if let Some(bot_api_url) = config::bot_api::get_url() {
        log::info!("Using custom Bot API URL: {}", bot_api_url);
        let url = url::Url::parse(&bot_api_url).map_err(|e| anyhow::anyhow!("Invalid BOT_API_URL: {}", e))?;
        Bot::with_client(token, client).set_api_url(url)
    } else {
        Bot::with_client(token, client)
    };

    Ok(bot)
}

fn localized_commands(lang: &LanguageIdentifier) -> Vec<BotCommand> {
    vec![
        BotCommand::new("start", i18n::t(lang, "commands.start")),
        BotCommand::new("help", i18n::t(lang, "commands.help")),
        BotCommand::new("stats", i18n::t(lang, "commands.stats")),
    ]
}

/// Sets up bot commands in the Telegram UI for all supported languages
///
/// The unscoped set is registered first and acts as the fallback for clients
/// whose locale has no dedicated entry.
///
/// # Arguments
/// * `bot` - Bot instance to configure
///
/// # Returns
/// * `Ok(())` - Commands set successfully
/// * `Err(RequestError)` - Failed to set commands
pub async fn setup_all_language_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    use teloxide::payloads::SetMyCommandsSetters;

    let fallback = i18n::lang_from_code("fr");
    bot.set_my_commands(localized_commands(&fallback)).await?;

    for (code, _) in i18n::SUPPORTED_LANGS {
        let lang = i18n::lang_from_code(code);
        bot.set_my_commands(localized_commands(&lang))
            .language_code(code.to_string())
            .await?;
    }

    Ok(())
}
