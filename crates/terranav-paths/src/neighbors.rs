//! Moore-neighborhood enumeration.

use terranav_core::{Bounds, Coord};

/// Cached neighbor computation helper.
///
/// Reuses one internal buffer across queries so repeated lookups during a
/// search pass allocate nothing after warm-up.
pub struct Neighbors {
    buf: Vec<Coord>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// The up-to-8 Moore neighbors of `c` inside `bounds`.
    ///
    /// Out-of-bounds coordinates and `c` itself are excluded. The scan
    /// order (x outer, y inner, ascending) is fixed, so tie-breaking is
    /// deterministic.
    pub fn moore(&mut self, c: Coord, bounds: Bounds) -> &[Coord] {
        self.buf.clear();
        for dx in -1..=1 {
            for dy in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let n = c.shift(dx, dy);
                if bounds.contains(n) {
                    self.buf.push(n);
                }
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let mut nb = Neighbors::new();
        let got = nb.moore(Coord::new(1, 1), Bounds::new(3, 3));
        assert_eq!(got.len(), 8);
        assert!(!got.contains(&Coord::new(1, 1)));
    }

    #[test]
    fn corner_cell_has_three_neighbors() {
        let mut nb = Neighbors::new();
        let got = nb.moore(Coord::ZERO, Bounds::new(3, 3));
        assert_eq!(
            got,
            &[Coord::new(0, 1), Coord::new(1, 0), Coord::new(1, 1)]
        );
    }

    #[test]
    fn edge_cell_has_five_neighbors() {
        let mut nb = Neighbors::new();
        let got = nb.moore(Coord::new(1, 0), Bounds::new(3, 3));
        assert_eq!(got.len(), 5);
        for n in got {
            assert!(Bounds::new(3, 3).contains(*n));
        }
    }

    #[test]
    fn order_is_deterministic() {
        let mut nb = Neighbors::new();
        let first: Vec<Coord> = nb.moore(Coord::new(1, 1), Bounds::new(3, 3)).to_vec();
        let second: Vec<Coord> = nb.moore(Coord::new(1, 1), Bounds::new(3, 3)).to_vec();
        assert_eq!(first, second);
        // x-outer, y-inner ascending scan.
        assert_eq!(first[0], Coord::new(0, 0));
        assert_eq!(first[7], Coord::new(2, 2));
    }
}
