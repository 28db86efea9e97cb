//! Environment variable handling.

use crate::types::PagenavConfig;
use pagenav_core::LinkStyle;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Environment variable errors.
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("required environment variable not set: {var}")]
    NotSet { var: String },

    #[error("invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("failed to load .env file: {0}")]
    DotenvError(#[from] dotenvy::Error),
}

/// Environment variable names.
pub mod vars {
    // Configuration
    pub const PAGENAV_CONFIG: &str = "PAGENAV_CONFIG";
    pub const PAGENAV_PAGE_WINDOW: &str = "PAGENAV_PAGE_WINDOW";
    pub const PAGENAV_LINK_STYLE: &str = "PAGENAV_LINK_STYLE";
    pub const PAGENAV_LOCALE: &str = "PAGENAV_LOCALE";

    // Logging
    pub const PAGENAV_LOG_LEVEL: &str = "PAGENAV_LOG_LEVEL";
    pub const RUST_LOG: &str = "RUST_LOG";
}

/// Environment configuration.
#[derive(Debug)]
pub struct Environment {
    _guard: (), // Prevent construction outside module
}

impl Environment {
    /// Initialize environment from .env files.
    pub fn init() -> Result<Self, EnvError> {
        // Load .env files in order; variables already set are never overwritten
        optional(dotenvy::from_filename(".env.local"))?;
        optional(dotenvy::from_filename(".env"))?;

        Ok(Self { _guard: () })
    }

    /// Initialize from the .env files in `dir` only.
    pub fn init_in(dir: &Path) -> Result<Self, EnvError> {
        for name in [".env.local", ".env"] {
            let path = dir.join(name);
            optional(dotenvy::from_path(&path).map(|()| path))?;
        }

        Ok(Self { _guard: () })
    }

    /// Get a required string variable.
    pub fn require(var: &str) -> Result<String, EnvError> {
        env::var(var).map_err(|_| EnvError::NotSet { var: var.to_string() })
    }

    /// Get an optional string variable.
    pub fn get(var: &str) -> Option<String> {
        env::var(var).ok()
    }

    /// Get a boolean variable.
    pub fn get_bool(var: &str) -> Option<bool> {
        env::var(var).ok().map(|v| parse_bool(&v))
    }

    /// Get an integer variable.
    pub fn get_int<T: std::str::FromStr>(var: &str) -> Result<Option<T>, EnvError> {
        parse_int(var, env::var(var).ok())
    }
}

/// A missing file is fine; a malformed one is not.
fn optional(result: Result<PathBuf, dotenvy::Error>) -> Result<(), EnvError> {
    match result {
        Ok(path) => {
            debug!(path = %path.display(), "loaded env file");
            Ok(())
        }
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.into()),
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "yes")
}

fn parse_int<T: std::str::FromStr>(var: &str, value: Option<String>) -> Result<Option<T>, EnvError> {
    match value {
        Some(v) => v.trim().parse().map(Some).map_err(|_| EnvError::InvalidValue {
            var: var.to_string(),
            message: "expected integer".to_string(),
        }),
        None => Ok(None),
    }
}

/// Apply `PAGENAV_*` overrides from the process environment.
pub fn apply_env_overrides(config: &mut PagenavConfig) -> Result<(), EnvError> {
    apply_overrides_from(config, |var| env::var(var).ok())
}

/// Apply overrides using `lookup` to read variables.
pub fn apply_overrides_from<F>(config: &mut PagenavConfig, lookup: F) -> Result<(), EnvError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(width) = parse_int::<usize>(vars::PAGENAV_PAGE_WINDOW, lookup(vars::PAGENAV_PAGE_WINDOW))? {
        if width == 0 {
            return Err(EnvError::InvalidValue {
                var: vars::PAGENAV_PAGE_WINDOW.to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        config.display.individual_pages_displayed_count = width;
    }

    if let Some(style) = lookup(vars::PAGENAV_LINK_STYLE) {
        config.display.link_style =
            LinkStyle::parse(&style).ok_or_else(|| EnvError::InvalidValue {
                var: vars::PAGENAV_LINK_STYLE.to_string(),
                message: format!("expected 'route' or 'action', got '{}'", style),
            })?;
    }

    Ok(())
}
