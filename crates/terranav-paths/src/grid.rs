//! The navigation grid: terrain-sampled cells with per-pass search state.

use terranav_core::{Bounds, Coord, TerrainSource, Vec3};

use crate::NavError;

/// Display state of a cell, for the hosting visualization sink.
///
/// After every search pass each cell holds exactly one of the three:
/// blocked cells are [`Mark::Blocked`], cells on the reconstructed chain
/// are [`Mark::OnPath`], everything else is [`Mark::Neutral`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    #[default]
    Neutral,
    Blocked,
    OnPath,
}

/// One addressable point of the navigation grid.
///
/// `coord` and `world` are fixed at construction; `walkable`, `distance`,
/// `parent` and `mark` are search scratch state, rewritten on every pass.
#[derive(Debug, Clone)]
pub struct NavCell {
    coord: Coord,
    world: Vec3,
    pub(crate) walkable: bool,
    pub(crate) distance: f32,
    pub(crate) parent: Option<Coord>,
    pub(crate) mark: Mark,
}

impl NavCell {
    fn new(coord: Coord, world: Vec3) -> Self {
        Self {
            coord,
            world,
            walkable: false,
            distance: f32::INFINITY,
            parent: None,
            mark: Mark::Neutral,
        }
    }

    /// Grid coordinates (column, row) — the cell's identity.
    #[inline]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// World-space position sampled from the terrain at construction.
    #[inline]
    pub fn world(&self) -> Vec3 {
        self.world
    }

    /// Whether the cell was traversable in the latest walkability pass.
    #[inline]
    pub fn walkable(&self) -> bool {
        self.walkable
    }

    /// Cumulative cost from the latest search's start cell.
    ///
    /// `f32::INFINITY` outside a pass and for cells the search never
    /// relaxed. Under [`Strategy::AStar`](crate::Strategy::AStar) the value
    /// includes folded heuristic terms; see the strategy docs.
    #[inline]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// The preceding cell on the path from the latest search's start, if
    /// the search relaxed this cell.
    #[inline]
    pub fn parent(&self) -> Option<Coord> {
        self.parent
    }

    /// Display state after the latest pass.
    #[inline]
    pub fn mark(&self) -> Mark {
        self.mark
    }
}

/// A fixed-size grid of [`NavCell`]s built once over a terrain surface.
///
/// Cells are stored row-major; the grid is never resized and no cell is
/// ever destroyed. Searches mutate only the cells' scratch state.
#[derive(Debug)]
pub struct NavGrid {
    pub(crate) cells: Vec<NavCell>,
    pub(crate) bounds: Bounds,
    step: f32,
}

impl NavGrid {
    /// Build a grid over `terrain` with the given cell spacing.
    ///
    /// Dimensions are `floor(extent / step)` per axis. Each cell's world
    /// position is the terrain sample at its grid point, lifted by
    /// `height_offset`. Cells start non-walkable with reset search state.
    pub fn build(
        terrain: &impl TerrainSource,
        step: f32,
        height_offset: f32,
    ) -> Result<Self, NavError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(NavError::InvalidStep(step));
        }
        let (extent_x, extent_z) = terrain.extent();
        let width = (extent_x / step) as i32;
        let height = (extent_z / step) as i32;
        let bounds = Bounds::new(width, height);
        if bounds.is_empty() {
            return Err(NavError::EmptyGrid { width, height });
        }

        let mut cells = Vec::with_capacity(bounds.len());
        for y in 0..height {
            for x in 0..width {
                let wx = x as f32 * step;
                let wz = y as f32 * step;
                let wy = terrain.sample_height(wx, wz) + height_offset;
                cells.push(NavCell::new(Coord::new(x, y), Vec3::new(wx, wy, wz)));
            }
        }
        Ok(Self {
            cells,
            bounds,
            step,
        })
    }

    /// The rectangle of valid coordinates.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// World spacing between adjacent cells on the ground plane.
    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// The cell at `c`, or `None` if out of bounds.
    #[inline]
    pub fn cell(&self, c: Coord) -> Option<&NavCell> {
        self.idx(c).map(|i| &self.cells[i])
    }

    /// Iterate over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &NavCell> {
        self.cells.iter()
    }

    /// Reset every cell's search scratch state: distance to infinity,
    /// parent to none, mark to neutral. Order-independent.
    pub fn reset_search_state(&mut self) {
        for cell in &mut self.cells {
            cell.distance = f32::INFINITY;
            cell.parent = None;
            cell.mark = Mark::Neutral;
        }
    }

    /// Re-tag every cell's walkability through the obstacle predicate.
    ///
    /// `blocked` is invoked exactly once per cell with the cell's world
    /// position; the cell becomes walkable iff it returns `false`. Blocked
    /// cells are marked [`Mark::Blocked`]. The predicate is the collision
    /// boundary: nothing is assumed about it beyond the boolean verdict,
    /// and any panic it raises propagates to the caller.
    pub fn tag_walkability(&mut self, mut blocked: impl FnMut(Vec3) -> bool) {
        for cell in &mut self.cells {
            cell.walkable = !blocked(cell.world);
            cell.mark = if cell.walkable {
                Mark::Neutral
            } else {
                Mark::Blocked
            };
        }
    }

    // -----------------------------------------------------------------------
    // Internal coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a coordinate to a flat index. Returns `None` if out of
    /// bounds.
    #[inline]
    pub(crate) fn idx(&self, c: Coord) -> Option<usize> {
        if !self.bounds.contains(c) {
            return None;
        }
        Some((c.y as usize) * (self.bounds.width as usize) + c.x as usize)
    }
}
