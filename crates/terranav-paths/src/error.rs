//! Error type for grid construction and search invocation.

use std::fmt;

use terranav_core::Coord;

/// Errors from building a navigation grid or invoking a search.
///
/// An unreachable goal is not an error; it is reported through
/// [`SearchStatus::Unreached`](crate::SearchStatus::Unreached).
#[derive(Debug, Clone, PartialEq)]
pub enum NavError {
    /// The terrain extent and step produced a grid with no cells.
    EmptyGrid { width: i32, height: i32 },
    /// The grid step must be a positive finite number.
    InvalidStep(f32),
    /// A start or goal coordinate lies outside the grid.
    OutOfBounds(Coord),
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { width, height } => {
                write!(f, "terrain extent yields an empty {width}x{height} grid")
            }
            Self::InvalidStep(step) => write!(f, "invalid grid step {step}"),
            Self::OutOfBounds(c) => write!(f, "coordinate {c} is outside the grid"),
        }
    }
}

impl std::error::Error for NavError {}
