//! Localized pager texts for Pagenav.

pub mod detect;
pub mod loader;

use std::collections::HashMap;

/// Message keys used by the pager.
pub mod keys {
    pub const FIRST: &str = "pager.first";
    pub const PREVIOUS: &str = "pager.previous";
    pub const NEXT: &str = "pager.next";
    pub const LAST: &str = "pager.last";
    pub const FIRST_TITLE: &str = "pager.first.title";
    pub const PREVIOUS_TITLE: &str = "pager.previous.title";
    pub const NEXT_TITLE: &str = "pager.next.title";
    pub const LAST_TITLE: &str = "pager.last.title";
    /// Takes `{page}`.
    pub const PAGE_TITLE: &str = "pager.page.title";
    /// Takes `{page}`, `{pages}` and `{records}`.
    pub const TOTAL_SUMMARY: &str = "pager.total_summary";

    /// Every key a complete pager catalog defines.
    pub const ALL: [&str; 10] = [
        FIRST,
        PREVIOUS,
        NEXT,
        LAST,
        FIRST_TITLE,
        PREVIOUS_TITLE,
        NEXT_TITLE,
        LAST_TITLE,
        PAGE_TITLE,
        TOTAL_SUMMARY,
    ];
}

/// Supported locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,    // English (default)
    Es,    // Spanish
    Fr,    // French
    De,    // German
}

impl Locale {
    /// Parse from a locale string (e.g., "en-US", "de_DE").
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.to_lowercase().replace('-', "_");
        let lang = s.split(['_', '.']).next()?;

        match lang {
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            "fr" => Some(Self::Fr),
            "de" => Some(Self::De),
            _ => None,
        }
    }

    /// Get the language code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::De => "de",
        }
    }

    /// Get the display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Español",
            Self::Fr => "Français",
            Self::De => "Deutsch",
        }
    }
}

/// Message catalog for a locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a translated message.
    pub fn get(&self, msgid: &str) -> Option<&str> {
        self.messages.get(msgid).map(|s| s.as_str())
    }

    /// Get a message with `{name}` placeholders filled from `args`.
    pub fn format(&self, msgid: &str, args: &[(&str, &dyn std::fmt::Display)]) -> Option<String> {
        self.get(msgid).map(|template| interpolate(template, args))
    }

    /// Add a message.
    pub fn insert(&mut self, msgid: impl Into<String>, msgstr: impl Into<String>) {
        self.messages.insert(msgid.into(), msgstr.into());
    }

    /// Overlay `other` onto this catalog; its entries win.
    pub fn merge(&mut self, other: Catalog) {
        self.messages.extend(other.messages);
    }

    /// Keys from `required` that this catalog lacks.
    pub fn missing<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .copied()
            .filter(|key| !self.messages.contains_key(*key))
            .collect()
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the catalog has no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Replace `{name}` placeholders in `template`.
pub fn interpolate(template: &str, args: &[(&str, &dyn std::fmt::Display)]) -> String {
    let mut msg = template.to_string();
    for (name, value) in args {
        msg = msg.replace(&format!("{{{}}}", name), &value.to_string());
    }
    msg
}

/// i18n errors.
#[derive(Debug, thiserror::Error)]
pub enum I18nError {
    #[error("failed to load catalog: {0}")]
    LoadError(String),
}


pub use detect::{detect_locale, detect_locale_with_override};
pub use loader::{builtin_catalog, load_catalog, load_po_file, LoaderConfig};
