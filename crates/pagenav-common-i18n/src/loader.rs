//! Message catalog loading.

use super::{keys, Catalog, I18nError, Locale};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Catalog loader configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Directory containing locale files.
    pub locale_dir: PathBuf,
    /// Domain name (e.g., "pagenav").
    pub domain: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            locale_dir: PathBuf::from("locales"),
            domain: "pagenav".to_string(),
        }
    }
}

impl LoaderConfig {
    /// Path of the `.po` file for a locale.
    pub fn po_path(&self, locale: Locale) -> PathBuf {
        self.locale_dir
            .join(locale.code())
            .join(format!("{}.po", self.domain))
    }
}

/// Load the catalog for a locale: built-in texts overlaid with the `.po` file, if any.
pub fn load_catalog(config: &LoaderConfig, locale: Locale) -> Result<Catalog, I18nError> {
    let mut catalog = builtin_catalog(locale);
    let path = config.po_path(locale);

    if path.exists() {
        let overrides = load_po_file(&path)?;
        debug!(locale = locale.code(), path = %path.display(), entries = overrides.len(), "loaded catalog overrides");
        catalog.merge(overrides);
    }

    Ok(catalog)
}

/// Load a .po file.
pub fn load_po_file(path: &Path) -> Result<Catalog, I18nError> {
    let content = fs::read_to_string(path)
        .map_err(|e| I18nError::LoadError(format!("{}: {}", path.display(), e)))?;
    Ok(parse_po(&content))
}

/// Parse .po content.
fn parse_po(content: &str) -> Catalog {
    let mut catalog = Catalog::new();
    let mut current_msgid: Option<String> = None;
    let mut current_msgstr: Option<String> = None;

    for line in content.lines() {
        let line = line.trim();

        if let Some(rest) = line.strip_prefix("msgid ") {
            // Save previous entry
            if let (Some(id), Some(msg)) = (current_msgid.take(), current_msgstr.take()) {
                if !id.is_empty() && !msg.is_empty() {
                    catalog.insert(id, msg);
                }
            }
            current_msgid = Some(parse_po_string(rest));
        } else if let Some(rest) = line.strip_prefix("msgstr ") {
            current_msgstr = Some(parse_po_string(rest));
        } else if line.starts_with('"') {
            // Continuation line
            let continued = parse_po_string(line);
            if let Some(ref mut msgstr) = current_msgstr {
                msgstr.push_str(&continued);
            } else if let Some(ref mut msgid) = current_msgid {
                msgid.push_str(&continued);
            }
        }
    }

    // Save last entry
    if let (Some(id), Some(msg)) = (current_msgid, current_msgstr) {
        if !id.is_empty() && !msg.is_empty() {
            catalog.insert(id, msg);
        }
    }

    catalog
}

/// Parse a .po string literal.
fn parse_po_string(s: &str) -> String {
    let s = s.trim();
    match s.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
        Some(inner) => inner
            .replace("\\n", "\n")
            .replace("\\t", "\t")
            .replace("\\\"", "\"")
            .replace("\\\\", "\\"),
        None => s.to_string(),
    }
}

/// Embedded pager texts.
pub fn builtin_catalog(locale: Locale) -> Catalog {
    let texts: [&str; 10] = match locale {
        Locale::De => [
            "Erste",
            "Zurück",
            "Weiter",
            "Letzte",
            "Erste Seite",
            "Vorherige Seite",
            "Nächste Seite",
            "Letzte Seite",
            "Seite {page}",
            "Seite {page} von {pages} ({records} insgesamt)",
        ],
        Locale::Fr => [
            "Première",
            "Précédente",
            "Suivante",
            "Dernière",
            "Première page",
            "Page précédente",
            "Page suivante",
            "Dernière page",
            "Page {page}",
            "Page {page} sur {pages} ({records} au total)",
        ],
        Locale::Es => [
            "Primera",
            "Anterior",
            "Siguiente",
            "Última",
            "Primera página",
            "Página anterior",
            "Página siguiente",
            "Última página",
            "Página {page}",
            "Página {page} de {pages} ({records} en total)",
        ],
        Locale::En => [
            "First",
            "Previous",
            "Next",
            "Last",
            "First page",
            "Previous page",
            "Next page",
            "Last page",
            "Page {page}",
            "Page {page} of {pages} ({records} total)",
        ],
    };

    let mut catalog = Catalog::new();
    for (key, text) in keys::ALL.iter().zip(texts) {
        catalog.insert(*key, text);
    }
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagenav_test_utils::temp_file_named;

    const GERMAN_PO: &str = r#"
# German overrides
msgid ""
msgstr ""
"Content-Type: text/plain; charset=UTF-8\n"

msgid "pager.next"
msgstr "Nächste"

msgid "pager.total_summary"
msgstr "Seite {page}/{pages} "
"({records})"
"#;

    #[test]
    fn test_parse_po_string() {
        assert_eq!(parse_po_string("\"hello\""), "hello");
        assert_eq!(parse_po_string("\"hello\\nworld\""), "hello\nworld");
        assert_eq!(parse_po_string("\"say \\\"hi\\\"\""), "say \"hi\"");
        assert_eq!(parse_po_string("hello"), "hello");
        assert_eq!(parse_po_string(" \"hello\" "), "hello");
    }

    #[test]
    fn test_parse_po_with_continuation() {
        let catalog = parse_po(GERMAN_PO);
        assert_eq!(catalog.get("pager.next"), Some("Nächste"));
        assert_eq!(catalog.get("pager.total_summary"), Some("Seite {page}/{pages} ({records})"));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_builtin_catalogs_are_complete() {
        for locale in [Locale::En, Locale::De, Locale::Fr, Locale::Es] {
            let catalog = builtin_catalog(locale);
            assert!(catalog.missing(&keys::ALL).is_empty(), "{:?} incomplete", locale);
        }
        assert_eq!(builtin_catalog(Locale::De).get(keys::NEXT), Some("Weiter"));
    }

    #[test]
    fn test_loader_config_default() {
        let config = LoaderConfig::default();
        assert_eq!(config.locale_dir, PathBuf::from("locales"));
        assert_eq!(config.domain, "pagenav");
        assert_eq!(config.po_path(Locale::De), PathBuf::from("locales/de/pagenav.po"));
    }

    #[test]
    fn test_load_catalog_without_file_uses_builtin() {
        let config = LoaderConfig {
            locale_dir: PathBuf::from("/nonexistent"),
            domain: "test".to_string(),
        };
        let catalog = load_catalog(&config, Locale::Fr).unwrap();
        assert_eq!(catalog, builtin_catalog(Locale::Fr));
    }

    #[test]
    fn test_load_catalog_overlays_file() {
        let (dir, _path) = temp_file_named("de/pagenav.po", GERMAN_PO);
        let config = LoaderConfig {
            locale_dir: dir.path().to_path_buf(),
            domain: "pagenav".to_string(),
        };

        let catalog = load_catalog(&config, Locale::De).unwrap();
        assert_eq!(catalog.get(keys::NEXT), Some("Nächste"));
        assert_eq!(catalog.get(keys::PREVIOUS), Some("Zurück"));
    }
}
