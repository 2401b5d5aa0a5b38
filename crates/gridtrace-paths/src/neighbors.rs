use gridtrace_core::{CellKey, Point, Range, WallSet};

/// Order in which every search visits neighbours: `+x`, `-x`, `+y`, `-y`.
///
/// This order decides tie-breaks between equally good paths and the order
/// of emitted steps.
pub const DIRS: [Point; 4] = [
    Point::new(1, 0),
    Point::new(-1, 0),
    Point::new(0, 1),
    Point::new(0, -1),
];

/// Read-only view of the grid a search runs on: bounds plus walls.
#[derive(Debug, Clone, Copy)]
pub struct SearchGrid<'a> {
    bounds: Range,
    walls: &'a WallSet,
}

impl<'a> SearchGrid<'a> {
    pub fn new(bounds: Range, walls: &'a WallSet) -> Self {
        Self { bounds, walls }
    }

    /// Whether `p` is in bounds and not a wall.
    #[inline]
    pub fn passable(&self, p: Point) -> bool {
        self.bounds.contains(p) && !self.walls.contains(&CellKey::new(p))
    }

    /// Passable cardinal neighbours of `p`, in [`DIRS`] order.
    pub fn neighbors(&self, p: Point) -> Expansion {
        let mut exp = Expansion {
            from: p,
            cells: [Point::ZERO; 4],
            len: 0,
            next: 0,
        };
        for d in DIRS {
            let n = p + d;
            if self.passable(n) {
                exp.cells[exp.len] = n;
                exp.len += 1;
            }
        }
        exp
    }
}

/// The neighbours of one cell being expanded, consumed one at a time.
///
/// Searches keep this as their cursor so they can stop after any neighbour
/// and pick up with the next one on the following pull.
#[derive(Debug, Clone)]
pub struct Expansion {
    from: Point,
    cells: [Point; 4],
    len: usize,
    next: usize,
}

impl Expansion {
    /// The cell whose neighbours these are.
    #[inline]
    pub fn from(&self) -> Point {
        self.from
    }
}

impl Iterator for Expansion {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.next >= self.len {
            return None;
        }
        let p = self.cells[self.next];
        self.next += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.next;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Expansion {}

#[cfg(test)]
mod tests {
    use super::*;
    use gridtrace_core::walls_from_points;

    #[test]
    fn fixed_order_and_filtering() {
        let walls = WallSet::new();
        let grid = SearchGrid::new(Range::grid(3, 3), &walls);
        let center: Vec<Point> = grid.neighbors(Point::new(1, 1)).collect();
        assert_eq!(
            center,
            vec![
                Point::new(2, 1),
                Point::new(0, 1),
                Point::new(1, 2),
                Point::new(1, 0)
            ]
        );
        let corner: Vec<Point> = grid.neighbors(Point::new(0, 0)).collect();
        assert_eq!(corner, vec![Point::new(1, 0), Point::new(0, 1)]);
    }

    #[test]
    fn walls_are_skipped() {
        let walls = walls_from_points([Point::new(2, 1), Point::new(1, 0)]);
        let grid = SearchGrid::new(Range::grid(3, 3), &walls);
        let exp = grid.neighbors(Point::new(1, 1));
        assert_eq!(exp.from(), Point::new(1, 1));
        assert_eq!(exp.len(), 2);
        assert_eq!(exp.collect::<Vec<_>>(), vec![Point::new(0, 1), Point::new(1, 2)]);
        assert!(!grid.passable(Point::new(2, 1)));
        assert!(!grid.passable(Point::new(3, 1)));
    }
}
