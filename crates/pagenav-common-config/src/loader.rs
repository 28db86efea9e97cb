//! Configuration file loading and parsing.

use crate::types::PagenavConfig;
use regex::Regex;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Location of the config file relative to the project directory.
pub const CONFIG_FILE: &str = ".pagenav/config.yaml";

/// Config loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read config: {source}")]
    ReadError {
        #[from]
        source: std::io::Error,
    },

    #[error("invalid YAML at line {}: {message}", line.map(|l| l.to_string()).unwrap_or_else(|| "unknown".to_string()))]
    ParseError { line: Option<usize>, message: String },

    #[error("validation error: {message}")]
    ValidationError { message: String },

    #[error("environment variable not found: {var}")]
    EnvVarNotFound { var: String },
}

/// Configuration loader.
pub struct ConfigLoader {
    base_path: PathBuf,
}

impl ConfigLoader {
    /// Create a loader for the given project directory.
    pub fn new(project_dir: impl AsRef<Path>) -> Self {
        Self {
            base_path: project_dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the project config file.
    pub fn config_path(&self) -> PathBuf {
        self.base_path.join(CONFIG_FILE)
    }

    /// Load configuration from `.pagenav/config.yaml`, or defaults if absent.
    pub fn load(&self) -> Result<PagenavConfig, ConfigError> {
        let config_path = self.config_path();

        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(PagenavConfig::default());
        }

        load_file(&config_path)
    }

    /// Save configuration to file.
    pub fn save(&self, config: &PagenavConfig) -> Result<(), ConfigError> {
        let config_path = self.config_path();
        if let Some(dir) = config_path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(config).map_err(|e| ConfigError::ParseError {
            line: None,
            message: e.to_string(),
        })?;

        std::fs::write(config_path, yaml)?;
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(std::env::current_dir().unwrap_or_default())
    }
}

/// Load and validate an explicit config file.
pub fn load_file(path: &Path) -> Result<PagenavConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(path)?;
    let config = parse_str(&contents)?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Parse and validate YAML config text, expanding environment variables first.
pub fn parse_str(contents: &str) -> Result<PagenavConfig, ConfigError> {
    let expanded = expand_env_vars(contents, |var| std::env::var(var).ok())?;

    let config: PagenavConfig =
        serde_yaml::from_str(&expanded).map_err(|e| ConfigError::ParseError {
            line: e.location().map(|l| l.line()),
            message: e.to_string(),
        })?;

    validate(&config)?;
    Ok(config)
}

/// Expand variables in the form `${VAR}` or `${VAR:-default}`.
pub fn expand_env_vars<F>(content: &str, lookup: F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let re = Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}").map_err(|e| ConfigError::ParseError {
        line: None,
        message: e.to_string(),
    })?;

    let mut result = content.to_string();
    for cap in re.captures_iter(content) {
        let var_name = &cap[1];
        let value = match (lookup(var_name), cap.get(2)) {
            (Some(v), _) => v,
            (None, Some(default)) => default.as_str().to_string(),
            (None, None) => {
                return Err(ConfigError::EnvVarNotFound {
                    var: var_name.to_string(),
                })
            }
        };

        result = result.replace(&cap[0], &value);
    }

    Ok(result)
}

/// Validate configuration values.
pub fn validate(config: &PagenavConfig) -> Result<(), ConfigError> {
    config
        .display
        .validate()
        .map_err(|e| ConfigError::ValidationError {
            message: e.to_string(),
        })?;

    if let Some(template) = &config.links.route_template {
        if !template.contains("{page}") {
            return Err(ConfigError::ValidationError {
                message: format!("links.route_template must contain {{page}}: {}", template),
            });
        }
    }

    if config.links.query_param.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            message: "links.query_param must not be empty".to_string(),
        });
    }

    Ok(())
}
