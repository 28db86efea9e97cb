//! Configuration types.

use pagenav_core::DisplayOptions;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagenavConfig {
    /// Display toggles, window width and link style.
    pub display: DisplayOptions,
    /// Link construction settings.
    pub links: LinksConfig,
    /// Text localization settings.
    pub i18n: I18nConfig,
}

/// Link construction settings for both link styles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    /// Route template for route-style links, e.g. `/blog/page/{page}`.
    pub route_template: Option<String>,
    /// Extra values substituted into the route template.
    pub route_values: BTreeMap<String, String>,
    /// Base URL for action-style links.
    pub base_url: Option<String>,
    /// Query parameter carrying the page number.
    pub query_param: String,
    /// Keep query parameters whose value is empty.
    pub render_empty_parameters: bool,
    /// Checkbox parameters whose `true,false` value collapses to `true`.
    pub boolean_parameter_names: Vec<String>,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            route_template: None,
            route_values: BTreeMap::new(),
            base_url: None,
            query_param: "page".to_string(),
            render_empty_parameters: false,
            boolean_parameter_names: Vec::new(),
        }
    }
}

/// Text localization settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Locale code; detected from the environment when unset.
    pub locale: Option<String>,
    /// Directory holding `<locale>/<domain>.po` overrides.
    pub locale_dir: PathBuf,
    /// Catalog domain name.
    pub domain: String,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            locale: None,
            locale_dir: PathBuf::from("locales"),
            domain: "pagenav".to_string(),
        }
    }
}
