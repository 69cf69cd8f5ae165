//! Reply text and inline keyboard builders for command responses

use fluent_templates::fluent_bundle::FluentArgs;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, WebAppInfo};
use unic_langid::LanguageIdentifier;

use crate::core::error::AppResult;
use crate::i18n;
use crate::telegram::webapp::WebAppLinks;

/// Placeholder statistics until the game backend exposes a per-user stats API.
pub(crate) const PLACEHOLDER_RATING: i64 = 1200;
pub(crate) const PLACEHOLDER_WINS: i64 = 0;
pub(crate) const PLACEHOLDER_LOSSES: i64 = 0;
pub(crate) const PLACEHOLDER_DRAWS: i64 = 0;
pub(crate) const PLACEHOLDER_WINNINGS_TON: i64 = 0;

/// Builds the /start reply: welcome text plus the navigation keyboard.
///
/// The keyboard carries exactly three buttons, one per row, in fixed order:
/// play web-view, leaderboard web-view, invite share link.
pub fn build_start_reply(links: &WebAppLinks, lang: &LanguageIdentifier) -> AppResult<(String, InlineKeyboardMarkup)> {
    let invite = links.invite(&i18n::t(lang, "start.invite_text"))?;

    let keyboard = InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::web_app(
            i18n::t(lang, "start.button_play"),
            WebAppInfo { url: links.play() },
        )],
        vec![InlineKeyboardButton::web_app(
            i18n::t(lang, "start.button_leaderboard"),
            WebAppInfo {
                url: links.leaderboard(),
            },
        )],
        vec![InlineKeyboardButton::url(i18n::t(lang, "start.button_invite"), invite)],
    ]);

    Ok((i18n::t(lang, "start.welcome"), keyboard))
}

/// Builds the /help reply text listing the available commands.
pub fn help_text(lang: &LanguageIdentifier) -> String {
    i18n::t(lang, "help.text")
}

/// Builds the /stats reply text from the placeholder values.
pub fn stats_text(lang: &LanguageIdentifier) -> String {
    let mut args = FluentArgs::new();
    args.set("rating", PLACEHOLDER_RATING);
    args.set("wins", PLACEHOLDER_WINS);
    args.set("losses", PLACEHOLDER_LOSSES);
    args.set("draws", PLACEHOLDER_DRAWS);
    args.set("winnings", PLACEHOLDER_WINNINGS_TON);

    i18n::t_args(lang, "stats.text", &args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::InlineKeyboardButtonKind;

    fn fr() -> LanguageIdentifier {
        i18n::lang_from_code("fr")
    }

    #[test]
    fn start_keyboard_has_three_rows_in_fixed_order() {
        let links = WebAppLinks::from_base("https://example.com").unwrap();
        let (text, keyboard) = build_start_reply(&links, &fr()).unwrap();

        assert!(text.contains("Bienvenue"));

        let rows = &keyboard.inline_keyboard;
        assert_eq!(rows.len(), 3, "one button per row, three rows");
        assert!(rows.iter().all(|row| row.len() == 1));

        match &rows[0][0].kind {
            InlineKeyboardButtonKind::WebApp(info) => {
                assert_eq!(info.url.as_str(), "https://example.com/");
            }
            other => panic!("first button should be a web app button, got {:?}", other),
        }

        match &rows[1][0].kind {
            InlineKeyboardButtonKind::WebApp(info) => {
                assert_eq!(info.url.as_str(), "https://example.com/leaderboard");
            }
            other => panic!("second button should be a web app button, got {:?}", other),
        }

        match &rows[2][0].kind {
            InlineKeyboardButtonKind::Url(url) => {
                assert!(url.as_str().starts_with("https://t.me/share/url?"));
            }
            other => panic!("third button should be a url button, got {:?}", other),
        }
    }

    #[test]
    fn start_buttons_are_localized() {
        let links = WebAppLinks::from_base("https://example.com").unwrap();
        let (_, keyboard) = build_start_reply(&links, &fr()).unwrap();
        assert_eq!(keyboard.inline_keyboard[0][0].text, "🎮 Jouer maintenant");

        let en = i18n::lang_from_code("en");
        let (_, keyboard) = build_start_reply(&links, &en).unwrap();
        assert_eq!(keyboard.inline_keyboard[0][0].text, "🎮 Play now");
    }

    #[test]
    fn help_lists_all_commands() {
        let text = help_text(&fr());
        assert!(text.contains("/start"));
        assert!(text.contains("/help"));
        assert!(text.contains("/stats"));
        // Only registered commands are advertised
        assert!(!text.contains("/leaderboard"));
    }

    #[test]
    fn stats_carries_placeholder_values() {
        let text = stats_text(&fr());
        assert!(text.contains("1200"));
        assert!(text.contains("0 TON"));
        assert!(text.contains("Victoires: 0"));
    }

    #[test]
    fn stats_is_invariant_for_a_given_locale() {
        // The builder takes no user identity at all; two calls are identical.
        assert_eq!(stats_text(&fr()), stats_text(&fr()));
    }
}
