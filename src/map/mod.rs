//! Hex map engine: grid storage, radial cost edits, air routes, and cached
//! shortest-path queries.

pub mod cache;
pub mod grid;
pub mod heap;
pub mod radial;
pub mod search;
pub mod types;

pub use grid::{HexMap, RouteToggle};
pub use types::{COST_MAX, COST_MIN, Hexagon, MAX_AIR_ROUTES};
