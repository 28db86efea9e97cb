//! Pagination navigation sequence generation.
//!
//! Given a validated [`PaginationState`], [`build_sequence`] produces the
//! ordered list of [`PaginationItem`]s a pager displays: an optional total
//! summary, first/previous links, a window of individual pages, and
//! next/last links. Turning items into markup is left to a renderer.
//!
//! ```
//! use pagenav_core::{build_sequence, DisplayOptions, PaginationItem, PaginationState};
//!
//! let state = PaginationState::new(6, 10, 100, DisplayOptions::default()).unwrap();
//! let items = build_sequence(&state);
//!
//! assert_eq!(items.first(), Some(&PaginationItem::First { target_page: 0 }));
//! assert_eq!(items.last(), Some(&PaginationItem::Last { target_page: 9 }));
//! ```

pub mod error;
pub mod item;
pub mod policy;
pub mod sequence;
pub mod state;
pub mod window;

pub use error::{Error, Result};
pub use item::{ItemKind, PaginationItem};
pub use policy::ItemPolicy;
pub use sequence::{build as build_sequence, SequenceBuilder};
pub use state::{total_pages_for, DisplayOptions, LinkStyle, PaginationState, DEFAULT_WINDOW_WIDTH};
pub use window::Window;
