//! Navigation items emitted by the sequence builder.

use serde::Serialize;

/// Kind of a navigation item, without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Summary label.
    TotalSummary,
    /// Link to the first page.
    First,
    /// Link to the previous page.
    Previous,
    /// A page of the window, current or not.
    IndividualPage,
    /// Link to the next page.
    Next,
    /// Link to the last page.
    Last,
}

impl ItemKind {
    /// Snake-case name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TotalSummary => "total_summary",
            Self::First => "first",
            Self::Previous => "previous",
            Self::IndividualPage => "individual_page",
            Self::Next => "next",
            Self::Last => "last",
        }
    }
}

/// One element of a navigation sequence.
///
/// Page numbers are zero-based; use [`PaginationItem::page_number`] for the
/// number shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaginationItem {
    /// "Page X of Y (Z records)".
    TotalSummary {
        /// Zero-based current page.
        page_index: usize,
        /// Number of pages.
        total_pages: usize,
        /// Number of records across all pages.
        total_records: u64,
    },
    /// Link to page 0.
    First {
        /// Always 0.
        target_page: usize,
    },
    /// Link to the page before the current one.
    Previous {
        /// Zero-based target page.
        target_page: usize,
    },
    /// One page of the window.
    IndividualPage {
        /// Zero-based page shown by this entry.
        target_page: usize,
        /// Whether this is the current page.
        is_current: bool,
    },
    /// Link to the page after the current one.
    Next {
        /// Zero-based target page.
        target_page: usize,
    },
    /// Link to the final page.
    Last {
        /// Zero-based index of the last page.
        target_page: usize,
    },
}

impl PaginationItem {
    /// The item's kind.
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::TotalSummary { .. } => ItemKind::TotalSummary,
            Self::First { .. } => ItemKind::First,
            Self::Previous { .. } => ItemKind::Previous,
            Self::IndividualPage { .. } => ItemKind::IndividualPage,
            Self::Next { .. } => ItemKind::Next,
            Self::Last { .. } => ItemKind::Last,
        }
    }

    /// Zero-based page the item navigates to, if any.
    pub fn target_page(&self) -> Option<usize> {
        match *self {
            Self::TotalSummary { .. } => None,
            Self::First { target_page }
            | Self::Previous { target_page }
            | Self::IndividualPage { target_page, .. }
            | Self::Next { target_page }
            | Self::Last { target_page } => Some(target_page),
        }
    }

    /// One-based page number for display and URLs.
    pub fn page_number(&self) -> Option<usize> {
        self.target_page().map(|page| page + 1)
    }

    /// Whether this is the current page entry.
    pub fn is_current(&self) -> bool {
        matches!(self, Self::IndividualPage { is_current: true, .. })
    }

    /// Whether the item should be rendered as a navigable link.
    pub fn is_link(&self) -> bool {
        !matches!(self, Self::TotalSummary { .. }) && !self.is_current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_and_number() {
        let item = PaginationItem::Next { target_page: 4 };
        assert_eq!(item.target_page(), Some(4));
        assert_eq!(item.page_number(), Some(5));
        assert_eq!(item.kind(), ItemKind::Next);

        let summary = PaginationItem::TotalSummary {
            page_index: 0,
            total_pages: 3,
            total_records: 25,
        };
        assert_eq!(summary.target_page(), None);
        assert!(!summary.is_link());
    }

    #[test]
    fn test_current_page_is_not_a_link() {
        let current = PaginationItem::IndividualPage {
            target_page: 2,
            is_current: true,
        };
        assert!(current.is_current());
        assert!(!current.is_link());

        let other = PaginationItem::IndividualPage {
            target_page: 3,
            is_current: false,
        };
        assert!(other.is_link());
    }

    #[test]
    fn test_kind_ordering_matches_sequence_order() {
        assert!(ItemKind::TotalSummary < ItemKind::First);
        assert!(ItemKind::First < ItemKind::Previous);
        assert!(ItemKind::Previous < ItemKind::IndividualPage);
        assert!(ItemKind::IndividualPage < ItemKind::Next);
        assert!(ItemKind::Next < ItemKind::Last);
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_value(PaginationItem::IndividualPage {
            target_page: 1,
            is_current: true,
        })
        .unwrap();
        assert_eq!(json["kind"], "individual_page");
        assert_eq!(json["target_page"], 1);
        assert_eq!(json["is_current"], true);
    }
}
