//! Test utilities for Pagenav crates.

use std::path::PathBuf;

use pagenav_core::{DisplayOptions, LinkStyle, PaginationState};
use proptest::prelude::*;
use tempfile::TempDir;

/// Creates a temporary directory that is cleaned up on drop.
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Creates a temporary file with given content.
pub fn temp_file(content: &str) -> (TempDir, PathBuf) {
    temp_file_named("test_file", content)
}

/// Creates a temporary file at `relative` (parents included) with given content.
pub fn temp_file_named(relative: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = temp_dir();
    let path = dir.path().join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
    }
    std::fs::write(&path, content).expect("Failed to write temp file");
    (dir, path)
}

/// Assert that a Result is Ok and return the value.
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a Result is Err.
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(_) => {}
        }
    };
}

/// Strategy for link styles.
pub fn link_style() -> impl Strategy<Value = LinkStyle> {
    prop_oneof![Just(LinkStyle::Route), Just(LinkStyle::Action)]
}

/// Strategy for display options with any toggle combination.
pub fn display_options() -> impl Strategy<Value = DisplayOptions> {
    (1usize..12, prop::collection::vec(any::<bool>(), 7), link_style()).prop_map(
        |(width, toggles, style)| DisplayOptions {
            individual_pages_displayed_count: width,
            show_total_summary: toggles[0],
            show_pager_items: toggles[1],
            show_first: toggles[2],
            show_previous: toggles[3],
            show_individual_pages: toggles[4],
            show_next: toggles[5],
            show_last: toggles[6],
            link_style: style,
        },
    )
}

/// Strategy for valid, non-empty pagination states.
pub fn non_empty_state() -> impl Strategy<Value = PaginationState> {
    (1usize..60, display_options())
        .prop_flat_map(|(total_pages, options)| {
            (0..total_pages, Just(total_pages), Just(options))
        })
        .prop_map(|(page_index, total_pages, options)| {
            let records = total_pages as u64 * 10;
            PaginationState::new(page_index, total_pages, records, options)
                .expect("strategy only yields valid states")
        })
}

/// Strategy for valid pagination states, empty ones included.
pub fn valid_state() -> impl Strategy<Value = PaginationState> {
    prop_oneof![
        1 => display_options().prop_map(|options| {
            PaginationState::new(0, 0, 0, options).expect("empty state is valid")
        }),
        9 => non_empty_state(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_creation() {
        let dir = temp_dir();
        assert!(dir.path().exists());
        assert!(dir.path().is_dir());
    }

    #[test]
    fn test_temp_file_named_creates_parents() {
        let (_dir, path) = temp_file_named(".pagenav/config.yaml", "display: {}");
        assert!(path.exists());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "display: {}");
    }

    proptest! {
        #[test]
        fn test_non_empty_state_is_consistent(state in non_empty_state()) {
            prop_assert!(state.total_pages() >= 1);
            prop_assert!(state.page_index() < state.total_pages());
            prop_assert!(state.window_width() >= 1);
        }
    }
}
