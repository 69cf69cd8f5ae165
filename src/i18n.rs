use std::collections::HashMap;

use fluent_templates::{
    fluent_bundle::{FluentArgs, FluentValue},
    static_loader, Loader,
};
use once_cell::sync::Lazy;
use teloxide::types::Message;
use unic_langid::LanguageIdentifier;

static_loader! {
    static LOCALES = {
        locales: "./locales",
        fallback_language: "fr",
        // Keep interpolated values free of Unicode isolation marks; replies
        // are plain Telegram text, not bidi-sensitive HTML.
        customise: |bundle| bundle.set_use_isolating(false),
    };
}

/// Supported languages (code, human-readable name).
pub static SUPPORTED_LANGS: &[(&str, &str)] = &[("fr", "Français"), ("en", "English")];

/// Default language identifier used as a fallback.
static DEFAULT_LANG: Lazy<LanguageIdentifier> = Lazy::new(|| "fr".parse().unwrap());

/// Normalizes a language code into a LanguageIdentifier (falls back to default).
pub fn lang_from_code(code: &str) -> LanguageIdentifier {
    let normalized = match code.to_lowercase().as_str() {
        "fr" | "fr-fr" => "fr",
        "en" | "en-us" | "en-gb" => "en",
        other => return other.parse().unwrap_or_else(|_| DEFAULT_LANG.clone()),
    };

    normalized.parse().unwrap_or_else(|_| DEFAULT_LANG.clone())
}

/// Resolves the language for a message from the sender's Telegram locale.
///
/// Unsupported or missing language codes fall back to the default language.
pub fn lang_from_message(msg: &Message) -> LanguageIdentifier {
    msg.from
        .as_ref()
        .and_then(|user| user.language_code.as_deref())
        .and_then(is_language_supported)
        .map(lang_from_code)
        .unwrap_or_else(|| DEFAULT_LANG.clone())
}

/// Returns a localized string for the given key.
/// Converts literal `\n` sequences to actual newlines for proper Telegram formatting.
pub fn t(lang: &LanguageIdentifier, key: &str) -> String {
    let text = LOCALES
        .lookup(lang, key)
        .unwrap_or_else(|| LOCALES.lookup(&DEFAULT_LANG, key).unwrap_or_else(|| key.to_string()));
    text.replace("\\n", "\n")
}

/// Returns a localized string with arguments for interpolation.
/// Converts literal `\n` sequences to actual newlines for proper Telegram formatting.
pub fn t_args(lang: &LanguageIdentifier, key: &str, args: &FluentArgs) -> String {
    let args_map: HashMap<String, FluentValue> = args.iter().map(|(k, v)| (k.to_string(), v.clone())).collect();

    let text = LOCALES.lookup_with_args(lang, key, &args_map).unwrap_or_else(|| {
        LOCALES
            .lookup_with_args(&DEFAULT_LANG, key, &args_map)
            .unwrap_or_else(|| key.to_string())
    });
    text.replace("\\n", "\n")
}

/// Checks if a language code is supported by the bot.
/// Returns the normalized language code if supported, None otherwise.
pub fn is_language_supported(code: &str) -> Option<&'static str> {
    // Normalize the code (e.g., "fr-FR" -> "fr", "en-US" -> "en")
    let normalized = code.split('-').next().unwrap_or(code).to_lowercase();

    SUPPORTED_LANGS
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(&normalized))
        .map(|(c, _)| *c)
}
