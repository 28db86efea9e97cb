//! Ordered navigation sequence assembly.

use tracing::trace;

use crate::item::PaginationItem;
use crate::policy::ItemPolicy;
use crate::state::PaginationState;

/// Build the navigation sequence for `state`.
///
/// Items come out in the fixed order
/// `TotalSummary, First, Previous, IndividualPage*, Next, Last`, each present
/// only when its predicate holds. An empty result set yields no items.
pub fn build(state: &PaginationState) -> Vec<PaginationItem> {
    if state.is_empty() {
        return Vec::new();
    }

    let policy = ItemPolicy::new(state);
    let page_index = state.page_index();
    let mut items = Vec::new();

    if policy.total_summary() {
        items.push(PaginationItem::TotalSummary {
            page_index,
            total_pages: state.total_pages(),
            total_records: state.total_records(),
        });
    }

    if policy.first() {
        items.push(PaginationItem::First { target_page: 0 });
    }

    if policy.previous() {
        items.push(PaginationItem::Previous {
            target_page: page_index - 1,
        });
    }

    if let Some(window) = policy.individual_pages() {
        items.extend(window.pages().map(|page| PaginationItem::IndividualPage {
            target_page: page,
            is_current: page == page_index,
        }));
    }

    if policy.next() {
        items.push(PaginationItem::Next {
            target_page: page_index + 1,
        });
    }

    if policy.last() {
        items.push(PaginationItem::Last {
            target_page: state.total_pages() - 1,
        });
    }

    trace!(
        page_index,
        total_pages = state.total_pages(),
        items = items.len(),
        "built navigation sequence"
    );

    items
}

/// Stateless front end to [`build`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceBuilder;

impl SequenceBuilder {
    /// Create a builder.
    pub fn new() -> Self {
        Self
    }

    /// Build the navigation sequence for `state`.
    pub fn build(&self, state: &PaginationState) -> Vec<PaginationItem> {
        build(state)
    }
}
