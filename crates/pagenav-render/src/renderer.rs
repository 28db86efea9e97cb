//! The link rendering capability and its catalog-backed implementation.

use crate::error::RenderError;
use crate::link::{css_class, RenderedLink};
use crate::strategy::{ActionUrl, RouteTemplate};
use async_trait::async_trait;
use pagenav_common_i18n::{keys, Catalog};
use pagenav_core::{LinkStyle, PaginationItem};
use std::fmt::Display;
use std::sync::Arc;

/// Turns a navigation item into a link or label.
#[async_trait]
pub trait LinkRenderer: Send + Sync {
    /// Render `item` using the `style` link strategy.
    async fn render(
        &self,
        item: &PaginationItem,
        style: LinkStyle,
    ) -> Result<RenderedLink, RenderError>;
}

#[async_trait]
impl<T: LinkRenderer + ?Sized> LinkRenderer for Box<T> {
    async fn render(
        &self,
        item: &PaginationItem,
        style: LinkStyle,
    ) -> Result<RenderedLink, RenderError> {
        (**self).render(item, style).await
    }
}

#[async_trait]
impl<T: LinkRenderer + ?Sized> LinkRenderer for Arc<T> {
    async fn render(
        &self,
        item: &PaginationItem,
        style: LinkStyle,
    ) -> Result<RenderedLink, RenderError> {
        (**self).render(item, style).await
    }
}

/// Renderer that takes texts from a message catalog and builds URLs with
/// the configured route and action strategies.
#[derive(Debug, Clone)]
pub struct HtmlLinkRenderer {
    catalog: Arc<Catalog>,
    route: Option<RouteTemplate>,
    action: Option<ActionUrl>,
}

impl HtmlLinkRenderer {
    /// Create a renderer with no link strategies.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            route: None,
            action: None,
        }
    }

    pub fn with_route(mut self, route: RouteTemplate) -> Self {
        self.route = Some(route);
        self
    }

    pub fn with_action(mut self, action: ActionUrl) -> Self {
        self.action = Some(action);
        self
    }

    /// Whether a strategy for `style` is configured.
    pub fn supports(&self, style: LinkStyle) -> bool {
        match style {
            LinkStyle::Route => self.route.is_some(),
            LinkStyle::Action => self.action.is_some(),
        }
    }

    fn href(&self, style: LinkStyle, page_number: usize) -> Result<String, RenderError> {
        match style {
            LinkStyle::Route => self
                .route
                .as_ref()
                .ok_or(RenderError::StrategyUnavailable(style))?
                .resolve(page_number),
            LinkStyle::Action => self
                .action
                .as_ref()
                .map(|action| action.resolve(page_number))
                .ok_or(RenderError::StrategyUnavailable(style)),
        }
    }

    fn text(&self, key: &str, args: &[(&str, &dyn Display)]) -> Result<String, RenderError> {
        self.catalog
            .format(key, args)
            .ok_or_else(|| RenderError::MissingText {
                key: key.to_string(),
            })
    }

    fn nav_link(
        &self,
        item: &PaginationItem,
        style: LinkStyle,
        target_page: usize,
        text_key: &str,
        title_key: &str,
    ) -> Result<RenderedLink, RenderError> {
        let href = self.href(style, target_page + 1)?;
        Ok(RenderedLink::link(self.text(text_key, &[])?, href, css_class(item))
            .with_title(self.text(title_key, &[])?))
    }
}

#[async_trait]
impl LinkRenderer for HtmlLinkRenderer {
    async fn render(
        &self,
        item: &PaginationItem,
        style: LinkStyle,
    ) -> Result<RenderedLink, RenderError> {
        match *item {
            PaginationItem::TotalSummary {
                page_index,
                total_pages,
                total_records,
            } => {
                let page = page_index + 1;
                let args: [(&str, &dyn Display); 3] = [
                    ("page", &page),
                    ("pages", &total_pages),
                    ("records", &total_records),
                ];
                let text = self.text(keys::TOTAL_SUMMARY, &args)?;
                Ok(RenderedLink::label(text, css_class(item)))
            }
            PaginationItem::First { target_page } => {
                self.nav_link(item, style, target_page, keys::FIRST, keys::FIRST_TITLE)
            }
            PaginationItem::Previous { target_page } => {
                self.nav_link(item, style, target_page, keys::PREVIOUS, keys::PREVIOUS_TITLE)
            }
            PaginationItem::IndividualPage {
                target_page,
                is_current: true,
            } => Ok(RenderedLink::label(
                (target_page + 1).to_string(),
                css_class(item),
            )),
            PaginationItem::IndividualPage { target_page, .. } => {
                let number = target_page + 1;
                let href = self.href(style, number)?;
                let title = self.text(keys::PAGE_TITLE, &[("page", &number)])?;
                Ok(RenderedLink::link(number.to_string(), href, css_class(item)).with_title(title))
            }
            PaginationItem::Next { target_page } => {
                self.nav_link(item, style, target_page, keys::NEXT, keys::NEXT_TITLE)
            }
            PaginationItem::Last { target_page } => {
                self.nav_link(item, style, target_page, keys::LAST, keys::LAST_TITLE)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagenav_common_i18n::{builtin_catalog, Locale};

    fn renderer() -> HtmlLinkRenderer {
        HtmlLinkRenderer::new(Arc::new(builtin_catalog(Locale::En)))
            .with_route(RouteTemplate::parse("/blog/page/{page}").unwrap())
            .with_action(ActionUrl::parse("/catalog?sort=name").unwrap())
    }

    #[tokio::test]
    async fn test_route_style_link() {
        let link = renderer()
            .render(&PaginationItem::Next { target_page: 4 }, LinkStyle::Route)
            .await
            .unwrap();

        assert_eq!(link.text, "Next");
        assert_eq!(link.href.as_deref(), Some("/blog/page/5"));
        assert_eq!(link.title.as_deref(), Some("Next page"));
        assert_eq!(link.css_class, "next-page");
    }

    #[tokio::test]
    async fn test_action_style_individual_page() {
        let item = PaginationItem::IndividualPage {
            target_page: 2,
            is_current: false,
        };
        let link = renderer().render(&item, LinkStyle::Action).await.unwrap();

        assert_eq!(link.text, "3");
        assert_eq!(link.href.as_deref(), Some("/catalog?sort=name&page=3"));
        assert_eq!(link.title.as_deref(), Some("Page 3"));
    }

    #[tokio::test]
    async fn test_total_summary_is_label() {
        let item = PaginationItem::TotalSummary {
            page_index: 1,
            total_pages: 4,
            total_records: 37,
        };
        let link = renderer().render(&item, LinkStyle::Action).await.unwrap();

        assert!(link.is_label());
        assert_eq!(link.text, "Page 2 of 4 (37 total)");
    }

    #[tokio::test]
    async fn test_current_page_is_label() {
        let item = PaginationItem::IndividualPage {
            target_page: 0,
            is_current: true,
        };
        let link = renderer().render(&item, LinkStyle::Route).await.unwrap();

        assert!(link.is_label());
        assert_eq!(link.text, "1");
        assert_eq!(link.css_class, "current-page");
    }

    #[tokio::test]
    async fn test_missing_strategy() {
        let renderer = HtmlLinkRenderer::new(Arc::new(builtin_catalog(Locale::En)));
        assert!(!renderer.supports(LinkStyle::Route));

        let err = renderer
            .render(&PaginationItem::First { target_page: 0 }, LinkStyle::Route)
            .await
            .unwrap_err();
        assert_eq!(err, RenderError::StrategyUnavailable(LinkStyle::Route));
    }

    #[tokio::test]
    async fn test_missing_text() {
        let mut catalog = Catalog::new();
        catalog.insert(keys::LAST, "Last");
        let renderer = HtmlLinkRenderer::new(Arc::new(catalog))
            .with_action(ActionUrl::parse("/list").unwrap());

        let err = renderer
            .render(&PaginationItem::Last { target_page: 9 }, LinkStyle::Action)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            RenderError::MissingText {
                key: keys::LAST_TITLE.to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_localized_texts() {
        let renderer = HtmlLinkRenderer::new(Arc::new(builtin_catalog(Locale::De)))
            .with_action(ActionUrl::parse("/liste").unwrap());

        let link = renderer
            .render(&PaginationItem::Previous { target_page: 0 }, LinkStyle::Action)
            .await
            .unwrap();
        assert_eq!(link.text, "Zurück");
        assert_eq!(link.title.as_deref(), Some("Vorherige Seite"));
        assert_eq!(link.href.as_deref(), Some("/liste?page=1"));
    }
}
