use thiserror::Error;

use crate::Cell;

pub type Result<T> = std::result::Result<T, FieldError>;

/// Failures reported by grid construction, field building and path reconstruction.
///
/// An unreachable source is not an error; see [PathOutcome::Unreachable](crate::PathOutcome::Unreachable).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("cell {cell} lies outside the {width}x{height} grid")]
    OutOfBounds {
        cell: Cell,
        width: usize,
        height: usize,
    },

    #[error("cell {cell} is blocked")]
    Blocked { cell: Cell },

    /// The field has no strictly descending neighbour at `cell`, or was built for another
    /// target. Usually a field reused after the grid changed.
    #[error("distance field is inconsistent with the grid at {cell}")]
    Inconsistent { cell: Cell },

    #[error("grid must be at least 1x1")]
    EmptyGrid,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("obstacle density {0} is not within [0, 1]")]
    InvalidDensity(f64),

    #[error("unexpected character {found:?} at line {line}, column {column}")]
    ParseGrid {
        line: usize,
        column: usize,
        found: char,
    },

    #[error("no {which} point has been set")]
    MissingPoint { which: &'static str },
}
