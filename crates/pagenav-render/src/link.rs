//! Rendered links and their HTML form.

use pagenav_core::{ItemKind, PaginationItem};
use serde::Serialize;

pub const TOTAL_SUMMARY_CLASS: &str = "total-summary";
pub const FIRST_PAGE_CLASS: &str = "first-page";
pub const PREVIOUS_PAGE_CLASS: &str = "previous-page";
pub const INDIVIDUAL_PAGE_CLASS: &str = "individual-page";
pub const CURRENT_PAGE_CLASS: &str = "current-page";
pub const NEXT_PAGE_CLASS: &str = "next-page";
pub const LAST_PAGE_CLASS: &str = "last-page";

/// CSS class for an item's list entry.
pub fn css_class(item: &PaginationItem) -> &'static str {
    match item.kind() {
        ItemKind::TotalSummary => TOTAL_SUMMARY_CLASS,
        ItemKind::First => FIRST_PAGE_CLASS,
        ItemKind::Previous => PREVIOUS_PAGE_CLASS,
        ItemKind::IndividualPage if item.is_current() => CURRENT_PAGE_CLASS,
        ItemKind::IndividualPage => INDIVIDUAL_PAGE_CLASS,
        ItemKind::Next => NEXT_PAGE_CLASS,
        ItemKind::Last => LAST_PAGE_CLASS,
    }
}

/// A navigation item turned into display text and an optional target.
///
/// An entry without `href` is a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedLink {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub css_class: String,
}

impl RenderedLink {
    /// A navigable link.
    pub fn link(
        text: impl Into<String>,
        href: impl Into<String>,
        css_class: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            href: Some(href.into()),
            title: None,
            css_class: css_class.into(),
        }
    }

    /// A non-navigable label.
    pub fn label(text: impl Into<String>, css_class: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: None,
            title: None,
            css_class: css_class.into(),
        }
    }

    /// Set the tooltip title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn is_label(&self) -> bool {
        self.href.is_none()
    }

    /// Render as a `<li>` element.
    pub fn to_html(&self) -> String {
        let class = html_escape(&self.css_class);
        let text = html_escape(&self.text);

        match &self.href {
            Some(href) => {
                let title = self
                    .title
                    .as_deref()
                    .map(|t| format!(" title=\"{}\"", html_escape(t)))
                    .unwrap_or_default();
                format!(
                    "<li class=\"{}\"><a href=\"{}\"{}>{}</a></li>",
                    class,
                    html_escape(href),
                    title,
                    text
                )
            }
            None => format!("<li class=\"{}\"><span>{}</span></li>", class, text),
        }
    }
}

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(PaginationItem::TotalSummary { page_index: 0, total_pages: 2, total_records: 20 }, "total-summary")]
    #[test_case(PaginationItem::First { target_page: 0 }, "first-page")]
    #[test_case(PaginationItem::Previous { target_page: 1 }, "previous-page")]
    #[test_case(PaginationItem::IndividualPage { target_page: 3, is_current: false }, "individual-page")]
    #[test_case(PaginationItem::IndividualPage { target_page: 3, is_current: true }, "current-page")]
    #[test_case(PaginationItem::Next { target_page: 4 }, "next-page")]
    #[test_case(PaginationItem::Last { target_page: 9 }, "last-page")]
    fn test_css_class(item: PaginationItem, expected: &str) {
        assert_eq!(css_class(&item), expected);
    }

    #[test]
    fn test_link_html() {
        let link = RenderedLink::link("Next", "/blog?page=3&sort=name", NEXT_PAGE_CLASS)
            .with_title("Next page");
        assert_eq!(
            link.to_html(),
            "<li class=\"next-page\"><a href=\"/blog?page=3&amp;sort=name\" title=\"Next page\">Next</a></li>"
        );
        assert!(!link.is_label());
    }

    #[test]
    fn test_label_html() {
        let label = RenderedLink::label("4", CURRENT_PAGE_CLASS);
        assert_eq!(label.to_html(), "<li class=\"current-page\"><span>4</span></li>");
        assert!(label.is_label());
    }

    #[test]
    fn test_text_is_escaped() {
        let label = RenderedLink::label("<b>\"x\" & y</b>", TOTAL_SUMMARY_CLASS);
        assert_eq!(
            label.to_html(),
            "<li class=\"total-summary\"><span>&lt;b&gt;&quot;x&quot; &amp; y&lt;/b&gt;</span></li>"
        );
    }
}
