//! Automatic locale detection.

use super::Locale;
use std::env;

/// Environment variables consulted, highest priority first.
pub const LOCALE_VARS: [&str; 4] = ["PAGENAV_LOCALE", "LC_ALL", "LC_MESSAGES", "LANG"];

/// Detect the locale with optional user override.
pub fn detect_locale_with_override(user_locale: Option<&str>) -> Locale {
    // User preference has highest priority
    if let Some(locale) = user_locale.and_then(Locale::parse) {
        return locale;
    }

    detect_locale()
}

/// Detect the locale from the process environment.
pub fn detect_locale() -> Locale {
    detect_from(|var| env::var(var).ok())
}

/// Detect the locale using `lookup` to read variables.
///
/// Unset or unparseable variables fall through to the next one.
pub fn detect_from<F>(lookup: F) -> Locale
where
    F: Fn(&str) -> Option<String>,
{
    LOCALE_VARS
        .iter()
        .find_map(|var| lookup(var).and_then(|value| Locale::parse(&value)))
        .unwrap_or_default()
}
