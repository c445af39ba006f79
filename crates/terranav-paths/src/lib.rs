//! Shortest-path search over heightmapped navigation grids.
//!
//! This crate builds a 2D navigation grid over a terrain surface and
//! computes minimum-cost paths between grid cells with three
//! interchangeable strategies:
//!
//! - **Unweighted** FIFO relaxation ([`Strategy::Unweighted`]) — a weak,
//!   approximate mode; see the strategy docs for its caveats
//! - **Dijkstra** uniform-cost search ([`Strategy::Dijkstra`])
//! - **A\*** with a goal-distance heuristic ([`Strategy::AStar`])
//!
//! All three run through [`NavGrid::search`]. Edge costs combine 3D
//! distance with a heavy elevation-change penalty ([`travel_cost`]), so
//! every strategy is biased toward flat routes.
//!
//! The grid is built once from a [`TerrainSource`](terranav_core::TerrainSource)
//! and reused; each search pass re-tags cell walkability through a
//! caller-supplied obstacle predicate, so the crate never depends on a
//! particular collision system.

mod cost;
mod error;
mod frontier;
mod grid;
mod neighbors;
mod search;

pub use cost::{ELEVATION_PENALTY, heuristic, travel_cost};
pub use error::NavError;
pub use grid::{Mark, NavCell, NavGrid};
pub use neighbors::Neighbors;
pub use search::{PathReport, SearchStatus, Strategy};
