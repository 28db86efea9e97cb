//! Inclusion predicates, one per navigation item kind.
//!
//! Each predicate reads the state directly. None of them looks at another
//! predicate's answer, so every toggle and threshold maps to exactly one
//! condition.

use crate::state::PaginationState;
use crate::window::Window;

/// Inclusion rules for a single [`PaginationState`].
#[derive(Debug, Clone, Copy)]
pub struct ItemPolicy<'a> {
    state: &'a PaginationState,
}

impl<'a> ItemPolicy<'a> {
    /// Policy for the given state.
    pub fn new(state: &'a PaginationState) -> Self {
        Self { state }
    }

    /// Shared gate for First, Previous, IndividualPage, Next and Last.
    fn pager_block(&self) -> bool {
        self.state.options().show_pager_items && self.state.total_pages() > 1
    }

    /// `show_total_summary ∧ total_pages > 0`
    pub fn total_summary(&self) -> bool {
        self.state.options().show_total_summary && self.state.total_pages() > 0
    }

    /// `pager ∧ show_first ∧ page_index ≥ 3 ∧ total_pages > width`
    pub fn first(&self) -> bool {
        self.pager_block()
            && self.state.options().show_first
            && self.state.page_index() >= 3
            && self.state.total_pages() > self.state.window_width()
    }

    /// `pager ∧ show_previous ∧ page_index > 0`
    pub fn previous(&self) -> bool {
        self.pager_block() && self.state.options().show_previous && self.state.page_index() > 0
    }

    /// The window to list, or `None` when individual pages are hidden.
    pub fn individual_pages(&self) -> Option<Window> {
        if !(self.pager_block() && self.state.options().show_individual_pages) {
            return None;
        }
        Window::compute(
            self.state.page_index(),
            self.state.total_pages(),
            self.state.window_width(),
        )
    }

    /// `pager ∧ show_next ∧ page_index + 1 < total_pages`
    pub fn next(&self) -> bool {
        self.pager_block()
            && self.state.options().show_next
            && self.state.page_index() + 1 < self.state.total_pages()
    }

    /// `pager ∧ show_last ∧ page_index + 3 < total_pages ∧ total_pages > width`
    pub fn last(&self) -> bool {
        self.pager_block()
            && self.state.options().show_last
            && self.state.page_index() + 3 < self.state.total_pages()
            && self.state.total_pages() > self.state.window_width()
    }
}
