//! Engine error types.

use thiserror::Error;

/// Errors surfaced by map operations.
///
/// All of these are local and non-fatal: the command facade reports them as
/// `KO` (or `-1` for travel queries) and keeps reading the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("map dimensions must be positive (got {cols} x {rows})")]
    BadDimensions { cols: i32, rows: i32 },

    #[error("cell ({x}, {y}) is outside the map")]
    OutOfBounds { x: i32, y: i32 },

    #[error("radius must be positive (got {0})")]
    BadRadius(i32),

    #[error("cost delta must lie in [-10, 10] (got {0})")]
    BadDelta(i32),

    #[error("air route list of ({x}, {y}) is full")]
    RoutesFull { x: i32, y: i32 },

    #[error("cannot allocate a {cols} x {rows} cell array")]
    Allocation { cols: i32, rows: i32 },
}
