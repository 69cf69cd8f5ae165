//! Damehot - Telegram bot front-end for the Dame Hot Game checkers mini app
//!
//! This library provides the command dispatcher for the bot: three chat
//! commands (`/start`, `/help`, `/stats`) that reply with localized text and
//! inline buttons linking to the game web application.
//!
//! # Module Structure
//!
//! - `core`: Configuration, errors, and logging
//! - `i18n`: Fluent-based localization (French fallback, English)
//! - `telegram`: Bot creation, dispatcher schema, and command handlers

pub mod cli;
pub mod core;
pub mod i18n;
pub mod telegram;

// Re-export commonly used types for convenience
pub use self::core::{config, AppError, AppResult};
pub use self::telegram::{create_bot, schema, Command, HandlerDeps, WebAppLinks};
