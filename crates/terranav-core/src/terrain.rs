//! The terrain sampling seam.
//!
//! Navigation grids are built once over a heightmapped surface. The surface
//! itself lives behind [`TerrainSource`] so the grid never depends on a
//! particular terrain engine; [`Heightmap`] is a self-contained
//! implementation for tests and hosts without one.

/// A heightmapped surface that a navigation grid can be built over.
pub trait TerrainSource {
    /// World extent of the surface: (width along x, depth along z).
    fn extent(&self) -> (f32, f32);

    /// Elevation of the surface at ground-plane point (x, z).
    fn sample_height(&self, x: f32, z: f32) -> f32;
}

/// A [`TerrainSource`] backed by a row-major grid of elevation samples.
///
/// Samples are spaced `resolution` apart along both ground axes; queries
/// snap to the nearest sample.
#[derive(Debug, Clone)]
pub struct Heightmap {
    samples: Vec<f32>,
    columns: usize,
    rows: usize,
    resolution: f32,
}

impl Heightmap {
    /// Create a heightmap from row-major samples.
    ///
    /// `samples.len()` must equal `columns * rows`; `resolution` is the
    /// world spacing between adjacent samples.
    ///
    /// # Panics
    /// Panics if the sample count does not match the dimensions.
    pub fn new(samples: Vec<f32>, columns: usize, rows: usize, resolution: f32) -> Self {
        assert_eq!(
            samples.len(),
            columns * rows,
            "heightmap samples do not match {columns}x{rows}"
        );
        Self {
            samples,
            columns,
            rows,
            resolution,
        }
    }

    /// A flat surface of the given world extent at a constant elevation.
    pub fn flat(width: f32, depth: f32, elevation: f32) -> Self {
        // One sample per world unit, clamped so the map is never empty.
        let columns = (width.max(0.0) as usize).max(1);
        let rows = (depth.max(0.0) as usize).max(1);
        Self {
            samples: vec![elevation; columns * rows],
            columns,
            rows,
            resolution: 1.0,
        }
    }

    /// Overwrite the elevation of one sample.
    pub fn set_sample(&mut self, column: usize, row: usize, elevation: f32) {
        self.samples[row * self.columns + column] = elevation;
    }
}

impl TerrainSource for Heightmap {
    fn extent(&self) -> (f32, f32) {
        (
            self.columns as f32 * self.resolution,
            self.rows as f32 * self.resolution,
        )
    }

    fn sample_height(&self, x: f32, z: f32) -> f32 {
        let c = ((x / self.resolution).round().max(0.0) as usize).min(self.columns - 1);
        let r = ((z / self.resolution).round().max(0.0) as usize).min(self.rows - 1);
        self.samples[r * self.columns + c]
    }
}
