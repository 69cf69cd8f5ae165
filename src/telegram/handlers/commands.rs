//! Command handler implementations (/start, /help, /stats)
//!
//! Each handler is a pure function of the incoming message: it resolves the
//! sender's locale, builds one reply, and sends it.

use teloxide::prelude::*;
use teloxide::types::Message;

use super::types::{HandlerDeps, HandlerError};
use crate::i18n;
use crate::telegram::menu::{build_start_reply, help_text, stats_text};

/// Handle /start command
pub(super) async fn handle_start_command(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> Result<(), HandlerError> {
    let lang = i18n::lang_from_message(msg);
    let (text, keyboard) = build_start_reply(&deps.links, &lang)?;

    bot.send_message(msg.chat.id, text).reply_markup(keyboard).await?;

    Ok(())
}

/// Handle /help command
pub(super) async fn handle_help_command(bot: &Bot, msg: &Message) -> Result<(), HandlerError> {
    let lang = i18n::lang_from_message(msg);

    bot.send_message(msg.chat.id, help_text(&lang)).await?;

    Ok(())
}

/// Handle /stats command
///
/// Placeholder values for every user; identity is not consulted.
// TODO: fetch per-user stats from the game backend once its API exposes them
// (user_id = msg.from.id).
pub(super) async fn handle_stats_command(bot: &Bot, msg: &Message) -> Result<(), HandlerError> {
    let lang = i18n::lang_from_message(msg);

    bot.send_message(msg.chat.id, stats_text(&lang)).await?;

    Ok(())
}
