//! Arguments shared by commands that take a pagination state.

use clap::Args;
use pagenav_core::{DisplayOptions, LinkStyle, PaginationState};

use crate::error::CliError;

/// Current page, totals and display overrides.
#[derive(Debug, Clone, Args)]
pub struct PageArgs {
    /// Current page, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Total number of pages
    #[arg(long, required_unless_present = "page_size", conflicts_with = "page_size")]
    pub total_pages: Option<usize>,

    /// Records per page; derives the page count from --records
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Total number of records
    #[arg(long, default_value_t = 0)]
    pub records: u64,

    /// Number of individual page links
    #[arg(long)]
    pub window: Option<usize>,

    /// Link style (route or action)
    #[arg(long, value_parser = parse_link_style)]
    pub link_style: Option<LinkStyle>,

    /// Show the "page X of Y" summary
    #[arg(long, conflicts_with = "no_summary")]
    pub summary: bool,

    /// Hide the "page X of Y" summary
    #[arg(long)]
    pub no_summary: bool,

    /// Hide all navigation links
    #[arg(long)]
    pub no_pager: bool,

    /// Hide the link to the first page
    #[arg(long)]
    pub no_first: bool,

    /// Hide the link to the previous page
    #[arg(long)]
    pub no_previous: bool,

    /// Hide the individual page links
    #[arg(long)]
    pub no_pages: bool,

    /// Hide the link to the next page
    #[arg(long)]
    pub no_next: bool,

    /// Hide the link to the last page
    #[arg(long)]
    pub no_last: bool,
}

fn parse_link_style(s: &str) -> Result<LinkStyle, String> {
    LinkStyle::parse(s).ok_or_else(|| format!("expected 'route' or 'action', got '{s}'"))
}

impl PageArgs {
    /// Apply the command-line overrides to `base`.
    pub fn options(&self, base: &DisplayOptions) -> DisplayOptions {
        let mut options = base.clone();

        if let Some(width) = self.window {
            options.individual_pages_displayed_count = width;
        }
        if let Some(style) = self.link_style {
            options.link_style = style;
        }
        if self.summary {
            options.show_total_summary = true;
        }
        if self.no_summary {
            options.show_total_summary = false;
        }

        options.show_pager_items &= !self.no_pager;
        options.show_first &= !self.no_first;
        options.show_previous &= !self.no_previous;
        options.show_individual_pages &= !self.no_pages;
        options.show_next &= !self.no_next;
        options.show_last &= !self.no_last;
        options
    }

    /// Build the validated pagination state.
    pub fn state(&self, base: &DisplayOptions) -> Result<PaginationState, CliError> {
        let page_index = self
            .page
            .checked_sub(1)
            .ok_or_else(|| CliError::invalid_field("page", "--page starts at 1"))?;
        let options = self.options(base);

        let state = match (self.total_pages, self.page_size) {
            (Some(total_pages), _) => {
                PaginationState::new(page_index, total_pages, self.records, options)?
            }
            (None, Some(page_size)) => {
                PaginationState::from_page_size(page_index, page_size, self.records, options)?
            }
            (None, None) => {
                return Err(CliError::invalid_field(
                    "total-pages",
                    "either --total-pages or --page-size is required",
                ))
            }
        };

        Ok(state)
    }
}
