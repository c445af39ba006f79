//! **terranav-core** — Terrain navigation primitives.
//!
//! This crate provides the foundational types used across the *terranav*
//! workspace: integer grid geometry, world-space positions, and the terrain
//! sampling seam that navigation grids are built over.

pub mod geom;
pub mod terrain;
pub mod vec3;

pub use geom::{Bounds, Coord};
pub use terrain::{Heightmap, TerrainSource};
pub use vec3::Vec3;
