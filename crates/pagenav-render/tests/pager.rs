//! End-to-end pager rendering.

use async_trait::async_trait;
use pagenav_common_i18n::{builtin_catalog, Locale};
use pagenav_core::{DisplayOptions, ItemKind, LinkStyle, PaginationItem, PaginationState};
use pagenav_render::{
    css_class, ActionUrl, FailurePolicy, HtmlLinkRenderer, LinkRenderer, Pager, PagerError,
    RenderError, RenderMode, RenderedLink, RouteTemplate,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn html_renderer() -> HtmlLinkRenderer {
    HtmlLinkRenderer::new(Arc::new(builtin_catalog(Locale::En)))
        .with_route(RouteTemplate::parse("/blog/page/{page}").unwrap())
        .with_action(ActionUrl::parse("/catalog?sort=name&page=1").unwrap())
}

/// Sleeps longer for earlier items so completion order is reversed.
struct SlowFirstRenderer {
    calls: Mutex<Vec<PaginationItem>>,
}

#[async_trait]
impl LinkRenderer for SlowFirstRenderer {
    async fn render(
        &self,
        item: &PaginationItem,
        _style: LinkStyle,
    ) -> Result<RenderedLink, RenderError> {
        let delay = 50u64.saturating_sub(item.target_page().unwrap_or(0) as u64 * 5);
        tokio::time::sleep(Duration::from_millis(delay)).await;
        self.calls.lock().unwrap().push(*item);
        Ok(RenderedLink::link(item.kind().as_str(), "#", css_class(item)))
    }
}

/// Fails every item of one kind.
struct FailingRenderer {
    fail_on: ItemKind,
    calls: AtomicUsize,
}

#[async_trait]
impl LinkRenderer for FailingRenderer {
    async fn render(
        &self,
        item: &PaginationItem,
        _style: LinkStyle,
    ) -> Result<RenderedLink, RenderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if item.kind() == self.fail_on {
            return Err(RenderError::MissingText {
                key: format!("pager.{}", item.kind().as_str()),
            });
        }
        Ok(RenderedLink::link(item.kind().as_str(), "#", css_class(item)))
    }
}

#[tokio::test]
async fn renders_route_style_pager() {
    let options = DisplayOptions::all().with_link_style(LinkStyle::Route);
    let state = PaginationState::new(5, 10, 100, options).unwrap();

    let pager = Pager::new(html_renderer()).render(&state).await.unwrap();
    let html = pager.to_html();

    assert!(html.starts_with("<div class=\"pager\"><ul><li class=\"total-summary\"><span>Page 6 of 10 (100 total)</span></li>"));
    assert!(html.contains("<li class=\"first-page\"><a href=\"/blog/page/1\" title=\"First page\">First</a></li>"));
    assert!(html.contains("<li class=\"current-page\"><span>6</span></li>"));
    assert!(html.contains("<li class=\"last-page\"><a href=\"/blog/page/10\" title=\"Last page\">Last</a></li>"));
    assert!(html.ends_with("</ul></div>"));
    assert_eq!(
        pager.to_text(),
        "Page 6 of 10 (100 total) First Previous 4 5 [6] 7 8 Next Last"
    );
}

#[tokio::test]
async fn renders_action_style_pager() {
    let state = PaginationState::new(0, 3, 25, DisplayOptions::default()).unwrap();

    let pager = Pager::new(html_renderer()).render(&state).await.unwrap();
    let hrefs: Vec<_> = pager.links().filter_map(|l| l.href.as_deref()).collect();

    assert_eq!(
        hrefs,
        vec![
            "/catalog?sort=name&page=2",
            "/catalog?sort=name&page=3",
            "/catalog?sort=name&page=2",
        ]
    );
}

#[tokio::test]
async fn empty_state_has_no_markup() {
    let state = PaginationState::new(0, 0, 0, DisplayOptions::all()).unwrap();
    let pager = Pager::new(html_renderer()).render(&state).await.unwrap();
    assert_eq!(pager.to_html(), "");
}

#[tokio::test]
async fn single_page_summary_only() {
    let state = PaginationState::new(0, 1, 4, DisplayOptions::all()).unwrap();
    let pager = Pager::new(html_renderer()).render(&state).await.unwrap();

    assert_eq!(pager.len(), 1);
    assert_eq!(
        pager.to_html(),
        "<div class=\"pager\"><ul><li class=\"total-summary\"><span>Page 1 of 1 (4 total)</span></li></ul></div>"
    );
}

#[tokio::test]
async fn concurrent_mode_keeps_sequence_order() {
    let renderer = Arc::new(SlowFirstRenderer {
        calls: Mutex::new(Vec::new()),
    });
    let state = PaginationState::new(5, 10, 100, DisplayOptions::default()).unwrap();

    let sequential = Pager::new(renderer.clone()).render(&state).await.unwrap();
    renderer.calls.lock().unwrap().clear();

    let concurrent = Pager::new(renderer.clone())
        .with_mode(RenderMode::Concurrent)
        .render(&state)
        .await
        .unwrap();

    assert_eq!(concurrent, sequential);
    let kinds: Vec<_> = concurrent.entries().iter().map(|e| e.item.kind()).collect();
    assert_eq!(kinds.first(), Some(&ItemKind::First));
    assert_eq!(kinds.last(), Some(&ItemKind::Last));

    // Later pages sleep less, so they finish first.
    let calls = renderer.calls.lock().unwrap();
    assert_eq!(calls.first(), Some(&PaginationItem::Last { target_page: 9 }));
    assert!(!calls.iter().any(|item| item.is_current()));
}

#[tokio::test]
async fn abort_reports_failing_position() {
    let renderer = FailingRenderer {
        fail_on: ItemKind::Previous,
        calls: AtomicUsize::new(0),
    };
    let state = PaginationState::new(5, 10, 100, DisplayOptions::default()).unwrap();

    let pager = Pager::new(renderer);
    let err = pager.render(&state).await.unwrap_err();

    assert_eq!(
        err,
        PagerError::Render {
            position: 1,
            kind: ItemKind::Previous,
            source: RenderError::MissingText {
                key: "pager.previous".to_string()
            },
        }
    );
    // Sequential rendering stops at the failure.
    assert_eq!(pager.renderer().calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn concurrent_abort_reports_first_failure() {
    let renderer = FailingRenderer {
        fail_on: ItemKind::IndividualPage,
        calls: AtomicUsize::new(0),
    };
    let state = PaginationState::new(5, 10, 100, DisplayOptions::default()).unwrap();

    let err = Pager::new(renderer)
        .with_mode(RenderMode::Concurrent)
        .render(&state)
        .await
        .unwrap_err();

    assert_eq!(err.position(), Some(2));
}

#[tokio::test]
async fn placeholder_policy_records_failures() {
    let renderer = FailingRenderer {
        fail_on: ItemKind::Next,
        calls: AtomicUsize::new(0),
    };
    let state = PaginationState::new(0, 3, 30, DisplayOptions::default()).unwrap();

    let pager = Pager::new(renderer)
        .with_policy(FailurePolicy::Placeholder("…".to_string()))
        .render(&state)
        .await
        .unwrap();

    let failures: Vec<_> = pager.failures().collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, 3);

    let next = &pager.entries()[3];
    assert_eq!(next.link, RenderedLink::label("…", "next-page"));
    assert_eq!(pager.to_text(), "[1] individual_page individual_page …");
}

#[tokio::test]
async fn missing_strategy_fails_render() {
    let renderer = HtmlLinkRenderer::new(Arc::new(builtin_catalog(Locale::En)));
    let options = DisplayOptions::default().with_link_style(LinkStyle::Route);
    let state = PaginationState::new(0, 2, 20, options).unwrap();

    let err = Pager::new(renderer).render(&state).await.unwrap_err();
    assert!(matches!(
        err,
        PagerError::Render {
            source: RenderError::StrategyUnavailable(LinkStyle::Route),
            ..
        }
    ));
}

#[tokio::test]
async fn pager_serializes_to_json() {
    let state = PaginationState::new(0, 2, 20, DisplayOptions::default()).unwrap();
    let pager = Pager::new(html_renderer()).render(&state).await.unwrap();

    let json = serde_json::to_value(&pager).unwrap();
    assert_eq!(json[0]["item"]["kind"], "individual_page");
    assert_eq!(json[0]["link"]["css_class"], "current-page");
    assert_eq!(json[1]["link"]["href"], "/catalog?sort=name&page=2");
}
