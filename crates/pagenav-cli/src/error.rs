//! CLI error handling.

use std::io;
use std::process::ExitCode;

use thiserror::Error;

/// CLI error type with context
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        hint: Option<String>,
    },

    #[error("{message}")]
    Io {
        message: String,
        #[source]
        source: io::Error,
    },

    #[error("{message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    #[error("{message}")]
    Render {
        message: String,
        #[source]
        source: pagenav_render::PagerError,
    },

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Get the error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "E001",
            Self::Io { .. } => "E002",
            Self::Validation { .. } => "E004",
            Self::Render { .. } => "E011",
            Self::Other(_) => "E999",
        }
    }

    /// Process exit status for this error
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::Config { .. } => 2,
            Self::Io { .. } => 3,
            Self::Render { .. } => 4,
            Self::Validation { .. } => 5,
            Self::Other(_) => 1,
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    /// Get hint for this error if available
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Config { hint, .. } => hint.as_deref(),
            _ => None,
        }
    }

    /// Create a config error with hint
    pub fn config_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
            hint: Some(hint.into()),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Create a validation error for a specific argument
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Other(anyhow::Error::new(err).context("failed to serialize output"))
    }
}

impl From<pagenav_core::Error> for CliError {
    fn from(err: pagenav_core::Error) -> Self {
        Self::Validation {
            message: format!("Invalid pagination state: {err}"),
            field: None,
        }
    }
}

impl From<pagenav_common_config::ConfigError> for CliError {
    fn from(err: pagenav_common_config::ConfigError) -> Self {
        Self::Config {
            message: format!("Configuration error: {err}"),
            source: Some(Box::new(err)),
            hint: Some("Check .pagenav/config.yaml or the file passed with --config".to_string()),
        }
    }
}

impl From<pagenav_common_config::EnvError> for CliError {
    fn from(err: pagenav_common_config::EnvError) -> Self {
        Self::Config {
            message: format!("Environment error: {err}"),
            source: Some(Box::new(err)),
            hint: Some("Check PAGENAV_* environment variables".to_string()),
        }
    }
}

impl From<pagenav_common_i18n::I18nError> for CliError {
    fn from(err: pagenav_common_i18n::I18nError) -> Self {
        Self::Config {
            message: format!("Catalog error: {err}"),
            source: Some(Box::new(err)),
            hint: Some("Check the .po files under i18n.locale_dir".to_string()),
        }
    }
}

impl From<pagenav_render::RenderError> for CliError {
    fn from(err: pagenav_render::RenderError) -> Self {
        Self::Config {
            message: format!("Invalid link settings: {err}"),
            source: Some(Box::new(err)),
            hint: Some("Check the links section of the configuration".to_string()),
        }
    }
}

impl From<pagenav_render::PagerError> for CliError {
    fn from(err: pagenav_render::PagerError) -> Self {
        match err {
            pagenav_render::PagerError::Configuration(e) => e.into(),
            err => Self::Render {
                message: format!("Rendering failed: {err}"),
                source: err,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagenav_render::{PagerError, RenderError};

    #[test]
    fn test_exit_status() {
        assert_eq!(CliError::config_with_hint("bad", "fix it").exit_status(), 2);
        assert_eq!(
            CliError::from(io::Error::new(io::ErrorKind::NotFound, "gone")).exit_status(),
            3
        );
        assert_eq!(CliError::validation("bad page").exit_status(), 5);
        assert_eq!(CliError::Other(anyhow::anyhow!("boom")).exit_status(), 1);
    }

    #[test]
    fn test_core_error_is_validation() {
        let err = CliError::from(pagenav_core::Error::ZeroWindowWidth);
        assert_eq!(err.code(), "E004");
        assert_eq!(err.exit_status(), 5);
    }

    #[test]
    fn test_pager_error_mapping() {
        let err = CliError::from(PagerError::Configuration(pagenav_core::Error::ZeroPageSize));
        assert!(matches!(err, CliError::Validation { .. }));

        let err = CliError::from(PagerError::Render {
            position: 0,
            kind: pagenav_core::ItemKind::First,
            source: RenderError::StrategyUnavailable(pagenav_core::LinkStyle::Route),
        });
        assert_eq!(err.exit_status(), 4);
        assert!(err.to_string().contains("route links"));
    }

    #[test]
    fn test_hint() {
        let err = CliError::config_with_hint("missing", "create it");
        assert_eq!(err.hint(), Some("create it"));
        assert_eq!(CliError::validation("x").hint(), None);
    }
}
