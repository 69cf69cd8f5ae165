//! Web app link derivation
//!
//! The three navigation targets offered by /start are all derived from the
//! WEB_APP_URL base: the game itself, the leaderboard view, and a t.me share
//! link carrying a localized invite text.

use url::Url;

use crate::core::config;
use crate::core::error::AppResult;

/// Telegram share endpoint for the invite button.
const SHARE_URL_BASE: &str = "https://t.me/share/url";

/// Links to the game web application, derived once at startup.
#[derive(Clone, Debug)]
pub struct WebAppLinks {
    base: Url,
}

impl WebAppLinks {
    /// Builds links from the WEB_APP_URL environment variable (or its default).
    pub fn from_env() -> AppResult<Self> {
        Self::from_base(&config::web_app_url())
    }

    /// Builds links from an explicit base URL.
    pub fn from_base(base: &str) -> AppResult<Self> {
        let base = Url::parse(base)?;
        Ok(Self { base })
    }

    /// URL opened by the play web-view button.
    pub fn play(&self) -> Url {
        self.base.clone()
    }

    /// URL opened by the leaderboard web-view button.
    pub fn leaderboard(&self) -> Url {
        let mut url = self.base.clone();
        let path = format!("{}/leaderboard", self.base.path().trim_end_matches('/'));
        url.set_path(&path);
        url
    }

    /// t.me share link for the invite button, with the base URL and invite
    /// text percent-encoded into the query string.
    pub fn invite(&self, invite_text: &str) -> AppResult<Url> {
        let share = format!(
            "{}?url={}&text={}",
            SHARE_URL_BASE,
            urlencoding::encode(self.base.as_str()),
            urlencoding::encode(invite_text),
        );
        Ok(Url::parse(&share)?)
    }
}
