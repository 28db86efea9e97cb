//! Rendering for Pagenav navigation sequences.
//!
//! A [`LinkRenderer`] turns each [`pagenav_core::PaginationItem`] into a
//! [`RenderedLink`]; a [`Pager`] builds the sequence for a state, renders
//! every item and keeps the results in sequence order.
//!
//! ```
//! use std::sync::Arc;
//! use pagenav_common_i18n::{builtin_catalog, Locale};
//! use pagenav_core::{DisplayOptions, LinkStyle, PaginationState};
//! use pagenav_render::{HtmlLinkRenderer, Pager, RouteTemplate};
//!
//! let renderer = HtmlLinkRenderer::new(Arc::new(builtin_catalog(Locale::En)))
//!     .with_route(RouteTemplate::parse("/blog/page/{page}").unwrap());
//! let options = DisplayOptions::default().with_link_style(LinkStyle::Route);
//! let state = PaginationState::new(0, 2, 15, options).unwrap();
//!
//! let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! let pager = rt.block_on(Pager::new(renderer).render(&state)).unwrap();
//! assert!(pager.to_html().contains("href=\"/blog/page/2\""));
//! ```

pub mod error;
pub mod link;
pub mod pager;
pub mod renderer;
pub mod strategy;

pub use error::{PagerError, RenderError};
pub use link::{css_class, RenderedLink};
pub use pager::{FailurePolicy, Pager, RenderMode, RenderedEntry, RenderedPager};
pub use renderer::{HtmlLinkRenderer, LinkRenderer};
pub use strategy::{ActionUrl, RouteTemplate};
