//! Fixed-capacity grid shortest-path search.
//!
//! A [`PathFinder`] owns one flat array of per-cell records, allocated once
//! for a declared capacity, and runs an A\* search over it:
//!
//! - 4-way (orthogonal) moves with unit step cost
//! - [`manhattan`] distance heuristic
//! - an optional [`CostFn`] adding extra cost per cell
//! - an open set scanned linearly, lowest index first on ties, so results
//!   are fully deterministic
//!
//! # Lifecycle
//!
//! | Step | Call |
//! |---|---|
//! | size the store | [`PathFinder::new`], [`PathFinder::from_config`], [`PathFinder::set_dimensions`] |
//! | load the map | [`PathFinder::fill`] |
//! | pick endpoints | [`PathFinder::set_start`], [`PathFinder::set_end`] |
//! | search | [`PathFinder::find`], [`PathFinder::find_with`] |
//! | inspect | [`PathFinder::has_path`], [`PathFinder::is_path`], [`PathFinder::path`], [`PathFinder::render`] |
//! | search again | [`PathFinder::clear_path`] then back to endpoints |

mod config;
mod distance;
mod error;
mod geom;
mod node;
mod render;
mod search;
mod store;
mod traits;

pub use config::{DEFAULT_CAPACITY, GridConfig};
pub use distance::manhattan;
pub use error::GridError;
pub use geom::Point;
pub use render::Render;
pub use search::SearchStats;
pub use store::PathFinder;
pub use traits::CostFn;
