//! Render and pager errors.

use pagenav_core::{ItemKind, LinkStyle};
use thiserror::Error;

/// Failure to render a single navigation item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The catalog has no text for a message key.
    #[error("no text for message key '{key}'")]
    MissingText { key: String },

    /// The renderer has no strategy for the requested link style.
    #[error("no link strategy configured for {} links", .0.as_str())]
    StrategyUnavailable(LinkStyle),

    /// A route placeholder has no value.
    #[error("route template '{template}' has no value for '{{{name}}}'")]
    UnresolvedPlaceholder { template: String, name: String },

    /// The route template is malformed.
    #[error("invalid route template '{template}': {message}")]
    InvalidTemplate { template: String, message: String },

    /// The action base URL could not be parsed or is not root-relative.
    #[error("invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Failure to assemble a pager.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PagerError {
    /// The pagination state or options are invalid.
    #[error(transparent)]
    Configuration(#[from] pagenav_core::Error),

    /// An item failed to render under the abort policy.
    #[error("failed to render {} item at position {position}: {source}", .kind.as_str())]
    Render {
        /// Zero-based position in the sequence.
        position: usize,
        /// Kind of the failing item.
        kind: ItemKind,
        #[source]
        source: RenderError,
    },
}

impl PagerError {
    /// Position of the failing item in the sequence, for render failures.
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::Render { position, .. } => Some(*position),
            Self::Configuration(_) => None,
        }
    }
}
