//! Pagination state and display options.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default number of individual page links shown around the current page.
pub const DEFAULT_WINDOW_WIDTH: usize = 5;

/// Link construction strategy used by the renderer.
///
/// The core never interprets this value; it is handed to the
/// `LinkRenderer` together with each item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkStyle {
    /// Links are built from a named route template.
    Route,
    /// Links are built by rewriting the current request's query string.
    #[default]
    Action,
}

impl LinkStyle {
    /// Parse from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "route" | "route_style" => Some(Self::Route),
            "action" | "action_style" => Some(Self::Action),
            _ => None,
        }
    }

    /// Get the canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Route => "route",
            Self::Action => "action",
        }
    }
}

/// Display toggles and window width for a pager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Desired number of individual page links.
    pub individual_pages_displayed_count: usize,
    /// Show the "page X of Y" summary.
    pub show_total_summary: bool,
    /// Show the navigation links at all.
    pub show_pager_items: bool,
    /// Show the link to the first page.
    pub show_first: bool,
    /// Show the link to the previous page.
    pub show_previous: bool,
    /// Show the individual page links.
    pub show_individual_pages: bool,
    /// Show the link to the next page.
    pub show_next: bool,
    /// Show the link to the last page.
    pub show_last: bool,
    /// Link construction strategy.
    pub link_style: LinkStyle,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            individual_pages_displayed_count: DEFAULT_WINDOW_WIDTH,
            show_total_summary: false,
            show_pager_items: true,
            show_first: true,
            show_previous: true,
            show_individual_pages: true,
            show_next: true,
            show_last: true,
            link_style: LinkStyle::default(),
        }
    }
}

impl DisplayOptions {
    /// Options with every toggle switched on.
    pub fn all() -> Self {
        Self {
            show_total_summary: true,
            ..Self::default()
        }
    }

    /// Set the window width.
    pub fn with_window(mut self, width: usize) -> Self {
        self.individual_pages_displayed_count = width;
        self
    }

    /// Set the link style.
    pub fn with_link_style(mut self, style: LinkStyle) -> Self {
        self.link_style = style;
        self
    }

    /// Toggle the total summary.
    pub fn with_total_summary(mut self, show: bool) -> Self {
        self.show_total_summary = show;
        self
    }

    /// Toggle the whole pager block.
    pub fn with_pager_items(mut self, show: bool) -> Self {
        self.show_pager_items = show;
        self
    }

    /// Toggle the first page link.
    pub fn with_first(mut self, show: bool) -> Self {
        self.show_first = show;
        self
    }

    /// Toggle the previous page link.
    pub fn with_previous(mut self, show: bool) -> Self {
        self.show_previous = show;
        self
    }

    /// Toggle the individual page links.
    pub fn with_individual_pages(mut self, show: bool) -> Self {
        self.show_individual_pages = show;
        self
    }

    /// Toggle the next page link.
    pub fn with_next(mut self, show: bool) -> Self {
        self.show_next = show;
        self
    }

    /// Toggle the last page link.
    pub fn with_last(mut self, show: bool) -> Self {
        self.show_last = show;
        self
    }

    /// Check the options on their own.
    pub fn validate(&self) -> Result<()> {
        if self.individual_pages_displayed_count == 0 {
            return Err(Error::ZeroWindowWidth);
        }
        Ok(())
    }
}

/// Immutable snapshot of a paged result set and how to display it.
///
/// Construction validates every invariant, so a `PaginationState` in hand is
/// always consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    page_index: usize,
    total_pages: usize,
    total_records: u64,
    options: DisplayOptions,
}

impl PaginationState {
    /// Create a validated state.
    pub fn new(
        page_index: usize,
        total_pages: usize,
        total_records: u64,
        options: DisplayOptions,
    ) -> Result<Self> {
        options.validate()?;

        if (total_pages == 0) != (total_records == 0) {
            return Err(Error::InconsistentTotals {
                total_pages,
                total_records,
            });
        }

        if total_pages > 0 && page_index >= total_pages {
            return Err(Error::PageIndexOutOfRange {
                page_index,
                total_pages,
            });
        }

        Ok(Self {
            page_index,
            total_pages,
            total_records,
            options,
        })
    }

    /// Create a state from a page size, deriving the page count.
    pub fn from_page_size(
        page_index: usize,
        page_size: usize,
        total_records: u64,
        options: DisplayOptions,
    ) -> Result<Self> {
        let total_pages = total_pages_for(total_records, page_size)?;
        Self::new(page_index, total_pages, total_records, options)
    }

    /// Zero-based current page.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Total number of pages.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Total number of records.
    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    /// Display options.
    pub fn options(&self) -> &DisplayOptions {
        &self.options
    }

    /// Desired window width.
    pub fn window_width(&self) -> usize {
        self.options.individual_pages_displayed_count
    }

    /// Link style handed to the renderer.
    pub fn link_style(&self) -> LinkStyle {
        self.options.link_style
    }

    /// Whether the result set is empty.
    pub fn is_empty(&self) -> bool {
        self.total_records == 0
    }
}

/// Number of pages needed for `total_records` at `page_size` per page.
pub fn total_pages_for(total_records: u64, page_size: usize) -> Result<usize> {
    if page_size == 0 {
        return Err(Error::ZeroPageSize);
    }
    let pages = total_records.div_ceil(page_size as u64);
    Ok(usize::try_from(pages).unwrap_or(usize::MAX))
}
