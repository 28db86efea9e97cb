//! Items command implementation.

use clap::Parser;
use pagenav_core::build_sequence;
use tracing::debug;

use super::PageArgs;
use crate::cli::CommandContext;
use crate::error::CliError;

/// Print the navigation item sequence as JSON
#[derive(Debug, Parser)]
pub struct ItemsCommand {
    #[command(flatten)]
    pub page: PageArgs,
}

impl ItemsCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<String, CliError> {
        let state = self.page.state(&ctx.config.display)?;
        let items = build_sequence(&state);
        debug!(count = items.len(), "built item sequence");
        Ok(serde_json::to_string_pretty(&items)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(args: &[&str]) -> ItemsCommand {
        let mut argv = vec!["items"];
        argv.extend_from_slice(args);
        ItemsCommand::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_items_json() {
        let output = command(&["--page", "6", "--total-pages", "10", "--records", "100"])
            .execute(&CommandContext::default())
            .unwrap();
        let items: serde_json::Value = serde_json::from_str(&output).unwrap();
        let items = items.as_array().unwrap();

        assert_eq!(items.first().unwrap()["kind"], "first");
        assert_eq!(items.last().unwrap()["kind"], "last");
        assert_eq!(items.last().unwrap()["target_page"], 9);
        assert_eq!(items.len(), 9);
    }

    #[test]
    fn test_empty_listing() {
        let output = command(&["--total-pages", "0", "--records", "0", "--summary"])
            .execute(&CommandContext::default())
            .unwrap();
        assert_eq!(output, "[]");
    }

    #[test]
    fn test_inconsistent_totals() {
        let err = command(&["--total-pages", "0", "--records", "5"])
            .execute(&CommandContext::default())
            .unwrap_err();
        assert_eq!(err.exit_status(), 5);
    }
}
