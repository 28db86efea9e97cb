//! Command implementations.

mod args;
mod items;
mod render;

pub use args::PageArgs;
pub use items::ItemsCommand;
pub use render::{PagerFormat, RenderCommand};
