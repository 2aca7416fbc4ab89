//! List views
//!
//! Rendering is a pure function of an explicit list state, so the three
//! alternate presentations (loading skeleton, empty message, populated
//! table) are driven by one tagged value instead of flag combinations.
//! The error banner is independent of that state and shared by both
//! entities and both read/mutation failure paths.

pub mod tenpista;
pub mod transaction;

use console::style;

use crate::api::{error_message, ApiError};

/// What a list has to show
#[derive(Debug, Clone, PartialEq)]
pub enum ListState<T> {
    /// A fetch is in flight and no snapshot exists yet
    Loading,
    Empty,
    Ready(Vec<T>),
}

impl<T> ListState<T> {
    /// Collapse a fetched collection into the state the renderer expects
    pub fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            ListState::Empty
        } else {
            ListState::Ready(items)
        }
    }
}

/// Dismissible error banner shown above whatever the list renders
pub fn error_banner(error: &ApiError) -> String {
    format!(
        "{} {}\n  {}",
        style("!").red().bold(),
        style("Error al realizar la operación").red(),
        error_message(error)
    )
}

/// Fixed-count placeholder rows shown while a cold-cache fetch runs
pub(crate) fn skeleton(rows: usize) -> String {
    let row = style("░".repeat(42)).dim().to_string();
    std::iter::repeat(row)
        .take(rows)
        .collect::<Vec<_>>()
        .join("\n")
}
