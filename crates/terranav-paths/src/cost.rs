//! The edge cost model shared by all search strategies.

use terranav_core::Vec3;

/// Multiplier applied to the elevation delta between adjacent cells.
///
/// Large enough that climbing dominates any planar detour, biasing all
/// strategies toward flat routes.
pub const ELEVATION_PENALTY: f32 = 1000.0;

/// Cost of moving between the world positions of two adjacent cells.
///
/// Full 3D Euclidean distance plus [`ELEVATION_PENALTY`] times the
/// elevation delta. The 3D distance already contains the elevation delta,
/// so elevation is counted twice — once linearly inside the distance and
/// again through the penalty. That double-count is a defining property of
/// this cost model and is kept exactly.
#[inline]
pub fn travel_cost(a: Vec3, b: Vec3) -> f32 {
    a.distance(b) + ELEVATION_PENALTY * (a.y - b.y).abs()
}

/// A* relaxation-threshold estimate of the remaining cost from `n` to the
/// goal.
///
/// Uses the same penalized [`travel_cost`] against the goal position, so
/// the threshold carries the elevation penalty. The amount folded into a
/// relaxed cell's stored distance is a different quantity: the plain 3D
/// [`Vec3::distance`] to the goal, without the penalty.
#[inline]
pub fn heuristic(n: Vec3, goal: Vec3) -> f32 {
    travel_cost(n, goal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_cost_is_plain_distance() {
        let a = Vec3::new(0.0, 5.0, 0.0);
        let b = Vec3::new(3.0, 5.0, 4.0);
        assert!((travel_cost(a, b) - 5.0).abs() < 1e-5);
    }

    #[test]
    fn elevation_is_double_counted() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 2.0, 0.0);
        // 2.0 from the 3D distance, 2000.0 from the penalty.
        assert!((travel_cost(a, b) - 2002.0).abs() < 1e-3);
    }

    #[test]
    fn cost_is_symmetric() {
        let a = Vec3::new(1.0, 3.5, -2.0);
        let b = Vec3::new(4.0, 1.0, 6.0);
        assert_eq!(travel_cost(a, b), travel_cost(b, a));
    }

    #[test]
    fn heuristic_matches_cost_to_goal() {
        let n = Vec3::new(2.0, 1.0, 2.0);
        let goal = Vec3::new(8.0, 0.0, 8.0);
        assert_eq!(heuristic(n, goal), travel_cost(n, goal));
    }
}
