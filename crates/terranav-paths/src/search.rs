//! The search pass: one relaxation loop, three frontier strategies.

use terranav_core::{Coord, Vec3};

use crate::NavError;
use crate::cost::{heuristic, travel_cost};
use crate::frontier::Frontier;
use crate::grid::{Mark, NavGrid};
use crate::neighbors::Neighbors;

/// Frontier-ordering strategy for a search pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// FIFO frontier with real-cost relaxation.
    ///
    /// A weak, approximate mode: expansion order ignores cost, so on
    /// non-uniform terrain the result is merely *a* walkable chain, not
    /// the cheapest one. Its designed-for case is uniform-cost grids,
    /// where it yields a minimal-cell-count path.
    Unweighted,
    /// Min-distance frontier; the correct uniform-cost search.
    Dijkstra,
    /// Dijkstra plus a goal-distance estimate.
    ///
    /// The relaxation threshold uses the penalized goal estimate, but the
    /// plain 3D goal distance is folded permanently into each relaxed
    /// cell's stored distance rather than kept ordering-only, so reported
    /// costs are inflated relative to [`Strategy::Dijkstra`] and later
    /// relaxation comparisons reuse the inflated values. A known deviation
    /// from textbook A*, kept deliberately.
    AStar,
}

/// Terminal state of a search pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    /// The goal cell was popped from the frontier.
    Done,
    /// The frontier emptied without reaching the goal.
    Unreached,
}

/// Result of a search pass.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathReport {
    pub status: SearchStatus,
    /// Cell coordinates ordered start → goal. When the goal was never
    /// reached this degenerates to the goal cell alone; check `status`.
    pub path: Vec<Coord>,
    /// The goal cell's final distance. Infinite when unreached; under
    /// [`Strategy::AStar`] it includes the folded goal-distance terms.
    pub cost: f32,
}

impl PathReport {
    /// Whether the goal was actually reached.
    #[inline]
    pub fn reached(&self) -> bool {
        self.status == SearchStatus::Done
    }
}

impl NavGrid {
    /// Run one search pass from `start` to `goal`.
    ///
    /// The pass is synchronous and atomic from the caller's point of view:
    /// it resets all search state, re-tags every cell's walkability
    /// through `blocked`, expands the frontier to completion, and marks
    /// the reconstructed chain [`Mark::OnPath`].
    ///
    /// Relaxation is shared by all strategies: a walkable neighbor is
    /// re-parented whenever the route through the current cell beats its
    /// recorded distance ([`Strategy::AStar`] adds the penalized goal
    /// estimate to the threshold and folds the plain 3D goal distance into
    /// the stored distance). The frontier keeps no
    /// visited set; cells may be enqueued and expanded repeatedly with
    /// progressively better distances.
    ///
    /// An unreachable goal is not an error — the report comes back
    /// [`SearchStatus::Unreached`] with a degenerate path.
    pub fn search(
        &mut self,
        strategy: Strategy,
        start: Coord,
        goal: Coord,
        blocked: impl FnMut(Vec3) -> bool,
    ) -> Result<PathReport, NavError> {
        let start_idx = self.idx(start).ok_or(NavError::OutOfBounds(start))?;
        let goal_idx = self.idx(goal).ok_or(NavError::OutOfBounds(goal))?;

        self.reset_search_state();
        self.tag_walkability(blocked);

        let goal_world = self.cells[goal_idx].world();
        {
            let s = &mut self.cells[start_idx];
            s.distance = 0.0;
            s.parent = None;
        }

        let mut frontier = match strategy {
            Strategy::Unweighted => Frontier::fifo(),
            Strategy::Dijkstra | Strategy::AStar => Frontier::min_dist(),
        };
        frontier.push(start_idx, 0.0);

        let mut neighbors = Neighbors::new();
        let bounds = self.bounds;
        let mut expanded = 0usize;

        let found = loop {
            let Some(ci) = frontier.pop() else {
                break false;
            };
            if ci == goal_idx {
                break true;
            }
            expanded += 1;

            let current = self.cells[ci].coord();
            let current_dist = self.cells[ci].distance;
            let current_world = self.cells[ci].world();

            for &n in neighbors.moore(current, bounds) {
                let Some(ni) = self.idx(n) else {
                    continue;
                };
                let cell = &mut self.cells[ni];
                if !cell.walkable {
                    continue;
                }
                let base = current_dist + travel_cost(current_world, cell.world());
                // A* tests against the penalized goal estimate but folds
                // only the plain 3D goal distance into the stored value.
                let (threshold, tentative) = if strategy == Strategy::AStar {
                    (
                        base + heuristic(cell.world(), goal_world),
                        base + cell.world().distance(goal_world),
                    )
                } else {
                    (base, base)
                };
                if cell.distance > threshold {
                    cell.parent = Some(current);
                    cell.distance = tentative;
                    log::trace!("relaxed {n} via {current} to {tentative:.3}");
                    frontier.push(ni, tentative);
                }
            }
        };

        let status = if found {
            SearchStatus::Done
        } else {
            SearchStatus::Unreached
        };

        // Walk the parent chain back from the goal. When the goal was
        // never relaxed this collects the goal cell alone.
        let mut path = Vec::new();
        let mut cursor = Some(goal);
        while let Some(c) = cursor {
            let Some(i) = self.idx(c) else {
                break;
            };
            self.cells[i].mark = Mark::OnPath;
            path.push(c);
            cursor = self.cells[i].parent;
        }
        path.reverse();

        let cost = self.cells[goal_idx].distance;
        log::debug!(
            "{strategy:?} {start}->{goal}: {status:?}, expanded {expanded}, path {} cells, cost {cost}",
            path.len()
        );
        Ok(PathReport { status, path, cost })
    }
}
