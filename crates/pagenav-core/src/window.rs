//! The window of individually listed page numbers.

use std::ops::RangeInclusive;

/// Inclusive, zero-based range of pages rendered as individual links.
///
/// A window always satisfies
/// `first <= page_index <= last <= total_pages - 1` and holds
/// `min(width, total_pages)` pages. The current page is centered; near the
/// edges the window shifts inward so it keeps its full width. For even
/// widths the extra page sits before the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    first: usize,
    last: usize,
}

impl Window {
    /// Compute the window, or `None` when there are no pages or the width is zero.
    pub fn compute(page_index: usize, total_pages: usize, width: usize) -> Option<Self> {
        if total_pages == 0 || width == 0 {
            return None;
        }

        let page_index = page_index.min(total_pages - 1);
        let span = width.min(total_pages);
        let first = page_index
            .saturating_sub(width / 2)
            .min(total_pages - span);

        Some(Self {
            first,
            last: first + span - 1,
        })
    }

    /// First page in the window.
    pub fn first(&self) -> usize {
        self.first
    }

    /// Last page in the window.
    pub fn last(&self) -> usize {
        self.last
    }

    /// Number of pages in the window.
    pub fn len(&self) -> usize {
        self.last - self.first + 1
    }

    /// A window is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `page` lies inside the window.
    pub fn contains(&self, page: usize) -> bool {
        self.pages().contains(&page)
    }

    /// Pages in ascending order.
    pub fn pages(&self) -> RangeInclusive<usize> {
        self.first..=self.last
    }
}
