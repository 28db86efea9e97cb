//! Configuration types for Pagenav.
//!
//! This crate provides the configuration used by Pagenav for
//! `.pagenav/config.yaml` files, plus `PAGENAV_*` environment overrides.

pub mod env;
pub mod loader;
pub mod types;

pub use env::*;
pub use loader::*;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use pagenav_core::LinkStyle;

    #[test]
    fn test_default_config_has_sensible_values() {
        let config = PagenavConfig::default();

        assert_eq!(config.display.individual_pages_displayed_count, 5);
        assert!(config.display.show_pager_items);
        assert!(!config.display.show_total_summary);
        assert_eq!(config.display.link_style, LinkStyle::Action);

        assert!(config.links.route_template.is_none());
        assert!(config.links.base_url.is_none());
        assert_eq!(config.links.query_param, "page");
        assert!(!config.links.render_empty_parameters);

        assert!(config.i18n.locale.is_none());
        assert_eq!(config.i18n.domain, "pagenav");
    }

    #[test]
    fn test_config_serializes_to_yaml() {
        let config = PagenavConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();

        assert!(yaml.contains("display:"));
        assert!(yaml.contains("links:"));
        assert!(yaml.contains("i18n:"));
        assert!(yaml.contains("individual_pages_displayed_count: 5"));
        assert!(yaml.contains("link_style: action"));
    }

    #[test]
    fn test_default_config_validates() {
        assert!(validate(&PagenavConfig::default()).is_ok());
    }
}
