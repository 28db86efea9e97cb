//! CLI argument definitions using clap derive macros.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{ArgAction, Parser, Subcommand, ValueHint};
use pagenav_common_config::{apply_env_overrides, load_file, ConfigLoader, PagenavConfig};
use pagenav_common_i18n::{detect_locale_with_override, load_catalog, Catalog, LoaderConfig};
use tracing::debug;

use crate::commands::{ItemsCommand, RenderCommand};
use crate::error::CliError;

/// Pagenav - pagination navigation for paged listings
///
/// Compute and render the pager for a page of results.
#[derive(Debug, Parser)]
#[command(
    name = "pagenav",
    author,
    version,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(
        short,
        long,
        global = true,
        env = "PAGENAV_CONFIG",
        value_hint = ValueHint::FilePath
    )]
    pub config: Option<PathBuf>,

    /// Locale for pager texts (e.g. de, fr_FR)
    #[arg(long, global = true)]
    pub locale: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the pager as HTML, JSON or text
    Render(RenderCommand),

    /// Print the navigation item sequence as JSON
    Items(ItemsCommand),
}

impl Cli {
    /// Load configuration from `--config` or the project directory, then apply
    /// environment overrides.
    pub fn load_config(&self) -> Result<PagenavConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => load_file(path)?,
            None => ConfigLoader::default().load()?,
        };

        apply_env_overrides(&mut config)?;
        debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Execute the selected command
    pub async fn execute(self, config: PagenavConfig) -> Result<(), CliError> {
        let ctx = CommandContext {
            locale: self.locale.or_else(|| config.i18n.locale.clone()),
            config,
        };

        let output = match self.command {
            Command::Render(cmd) => cmd.execute(&ctx).await?,
            Command::Items(cmd) => cmd.execute(&ctx)?,
        };

        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{output}")?;
        Ok(())
    }
}

/// Context passed to all commands
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    pub config: PagenavConfig,
    /// Explicit locale from `--locale` or the config file.
    pub locale: Option<String>,
}

impl CommandContext {
    /// Load the message catalog for the selected or detected locale.
    pub fn catalog(&self) -> Result<Arc<Catalog>, CliError> {
        let locale = detect_locale_with_override(self.locale.as_deref());
        let loader = LoaderConfig {
            locale_dir: self.config.i18n.locale_dir.clone(),
            domain: self.config.i18n.domain.clone(),
        };

        debug!(locale = locale.code(), "loading catalog");
        Ok(Arc::new(load_catalog(&loader, locale)?))
    }
}
