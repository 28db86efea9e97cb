//! Pager assembly: sequence building plus per-item rendering.

use crate::error::{PagerError, RenderError};
use crate::link::{css_class, RenderedLink};
use crate::renderer::LinkRenderer;
use futures_util::future::join_all;
use pagenav_core::{build_sequence, LinkStyle, PaginationItem, PaginationState};
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// How renderer calls are scheduled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Await each item in sequence order.
    #[default]
    Sequential,
    /// Issue all calls at once; results keep sequence order.
    Concurrent,
}

/// What to do when an item fails to render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Fail the whole pager with the first failing position.
    #[default]
    Abort,
    /// Render the given text as a label and record the failure.
    Placeholder(String),
}

/// One rendered item of a pager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedEntry {
    pub item: PaginationItem,
    pub link: RenderedLink,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "error_message")]
    pub error: Option<RenderError>,
}

fn error_message<S>(error: &Option<RenderError>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match error {
        Some(e) => serializer.serialize_str(&e.to_string()),
        None => serializer.serialize_none(),
    }
}

/// Rendered entries in sequence order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RenderedPager {
    entries: Vec<RenderedEntry>,
}

impl RenderedPager {
    pub fn entries(&self) -> &[RenderedEntry] {
        &self.entries
    }

    pub fn links(&self) -> impl Iterator<Item = &RenderedLink> {
        self.entries.iter().map(|e| &e.link)
    }

    /// Positions and errors of items replaced by a placeholder.
    pub fn failures(&self) -> impl Iterator<Item = (usize, &RenderError)> {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.error.as_ref().map(|err| (i, err)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Wrap the entries in pager markup; empty when there are no entries.
    pub fn to_html(&self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }

        let items: String = self.links().map(RenderedLink::to_html).collect();
        format!("<div class=\"pager\"><ul>{}</ul></div>", items)
    }

    /// Plain text line with the current page in brackets.
    pub fn to_text(&self) -> String {
        self.entries
            .iter()
            .map(|e| {
                if e.item.is_current() {
                    format!("[{}]", e.link.text)
                } else {
                    e.link.text.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Builds the navigation sequence for a state and renders it.
#[derive(Debug, Clone)]
pub struct Pager<R> {
    renderer: R,
    mode: RenderMode,
    policy: FailurePolicy,
}

impl<R: LinkRenderer> Pager<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            mode: RenderMode::default(),
            policy: FailurePolicy::default(),
        }
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Render the pager for `state`.
    #[instrument(
        skip_all,
        fields(
            page_index = state.page_index(),
            total_pages = state.total_pages(),
            mode = ?self.mode,
        )
    )]
    pub async fn render(&self, state: &PaginationState) -> Result<RenderedPager, PagerError> {
        let items = build_sequence(state);
        let style = state.link_style();

        let results = match self.mode {
            RenderMode::Sequential => {
                let mut results = Vec::with_capacity(items.len());
                for (position, item) in items.iter().enumerate() {
                    let result = self.render_item(item, style).await;
                    if let (Err(e), FailurePolicy::Abort) = (&result, &self.policy) {
                        return Err(render_failure(position, item, e.clone()));
                    }
                    results.push(result);
                }
                results
            }
            RenderMode::Concurrent => {
                join_all(items.iter().map(|item| self.render_item(item, style))).await
            }
        };

        let mut entries = Vec::with_capacity(items.len());
        for (position, (item, result)) in items.into_iter().zip(results).enumerate() {
            let entry = match (result, &self.policy) {
                (Ok(link), _) => RenderedEntry {
                    item,
                    link,
                    error: None,
                },
                (Err(e), FailurePolicy::Abort) => return Err(render_failure(position, &item, e)),
                (Err(e), FailurePolicy::Placeholder(text)) => {
                    warn!(position, kind = item.kind().as_str(), error = %e, "rendering placeholder");
                    RenderedEntry {
                        item,
                        link: RenderedLink::label(text.clone(), css_class(&item)),
                        error: Some(e),
                    }
                }
            };
            entries.push(entry);
        }

        debug!(entries = entries.len(), "pager rendered");
        Ok(RenderedPager { entries })
    }

    async fn render_item(
        &self,
        item: &PaginationItem,
        style: LinkStyle,
    ) -> Result<RenderedLink, RenderError> {
        match item {
            PaginationItem::IndividualPage {
                target_page,
                is_current: true,
            } => Ok(RenderedLink::label(
                (target_page + 1).to_string(),
                css_class(item),
            )),
            _ => self.renderer.render(item, style).await,
        }
    }
}

fn render_failure(position: usize, item: &PaginationItem, source: RenderError) -> PagerError {
    PagerError::Render {
        position,
        kind: item.kind(),
        source,
    }
}
