use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

/// Placeholder domain embedded in the web-view buttons when WEB_APP_URL is unset.
pub const DEFAULT_WEB_APP_URL: &str = "https://votre-domaine.com";

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: bot.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "bot.log".to_string()));

/// Bot token, read at call time so startup can react to a missing value.
///
/// Reads TELEGRAM_BOT_TOKEN, with BOT_TOKEN accepted as a fallback alias.
/// Returns None when neither is set or the value is blank.
pub fn bot_token() -> Option<String> {
    env::var("TELEGRAM_BOT_TOKEN")
        .or_else(|_| env::var("BOT_TOKEN"))
        .ok()
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

/// Base URL of the game web application.
///
/// Read from WEB_APP_URL environment variable; blank values fall back to the
/// placeholder domain.
pub fn web_app_url() -> String {
    env::var("WEB_APP_URL")
        .ok()
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_WEB_APP_URL.to_string())
}

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for Telegram API calls (in seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}

/// Bot API server configuration utilities
pub mod bot_api {
    /// Returns the BOT_API_URL environment variable if set.
    ///
    /// When set, the bot talks to a local Bot API server instead of
    /// api.telegram.org.
    pub fn get_url() -> Option<String> {
        std::env::var("BOT_API_URL").ok()
    }
}
