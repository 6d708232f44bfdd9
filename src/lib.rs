//! hexroute — interactive travel-cost engine over a hexagonal grid.
//!
//! A map is a dense grid of hex cells, each with an exit cost and up to five
//! directed air routes. The engine answers shortest travel-cost queries over
//! the six-neighborhood plus air routes, with radial cost edits in between.
//!
//! Public API: `run_script()` for whole command scripts, `Session` for
//! streaming input, `HexMap` for direct programmatic use.

pub mod commands;
pub mod error;
pub mod map;

pub use commands::session::{Session, run_script};
pub use error::MapError;
pub use map::HexMap;
