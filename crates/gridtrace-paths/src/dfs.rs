//! Depth-first search.

use std::collections::HashSet;
use std::iter::FusedIterator;

use gridtrace_core::{CellKey, ConfigError, Point, WallSet, validate};

use crate::neighbors::{Expansion, SearchGrid};
use crate::step::{AlgorithmStep, StepStatus};
use crate::trace::Trace;

/// Stepwise depth-first search.
///
/// A cell is marked visited when it is popped, so it may sit on the stack
/// several times before being expanded once. Every passable neighbour is
/// pushed, but a step is only emitted for neighbours not yet visited. The
/// resulting path is generally not a shortest one.
///
/// The final step has the path to the end, or an empty path when the end is
/// unreachable.
#[derive(Debug)]
pub struct Dfs<'a> {
    grid: SearchGrid<'a>,
    end: Point,
    stack: Vec<Point>,
    frontier: HashSet<CellKey>,
    trace: Trace,
    expanding: Option<Expansion>,
    done: bool,
}

impl<'a> Dfs<'a> {
    pub fn new(
        start: Point,
        end: Point,
        width: i32,
        height: i32,
        walls: &'a WallSet,
    ) -> Result<Self, ConfigError> {
        let bounds = validate(start, end, width, height, walls)?;
        log::debug!("dfs: {start} -> {end} on {bounds}");

        Ok(Self {
            grid: SearchGrid::new(bounds, walls),
            end,
            stack: vec![start],
            frontier: HashSet::new(),
            trace: Trace::default(),
            expanding: None,
            done: false,
        })
    }

    /// Push the remaining neighbours of the current expansion until one that
    /// has not been visited yet turns up.
    fn discover(&mut self) -> Option<Point> {
        let exp = self.expanding.as_mut()?;
        let from = exp.from();
        for n in exp.by_ref() {
            let key = CellKey::new(n);
            let fresh = !self.trace.visited.contains(&key);
            // The latest push of an unvisited cell is the one popped first,
            // so its predecessor link always matches the entry that settles it.
            if fresh {
                self.trace.previous.insert(key.clone(), from);
            }
            self.frontier.insert(key);
            self.stack.push(n);
            if fresh {
                return Some(n);
            }
        }
        self.expanding = None;
        None
    }

    fn finish(&mut self, path: Vec<Point>, status: StepStatus) -> AlgorithmStep {
        self.done = true;
        let step = self.trace.step(path, self.frontier.clone(), status);
        log::debug!("dfs: {status:?} after {} steps", self.trace.emitted);
        step
    }
}

impl Iterator for Dfs<'_> {
    type Item = AlgorithmStep;

    fn next(&mut self) -> Option<AlgorithmStep> {
        if self.done {
            return None;
        }
        loop {
            if let Some(n) = self.discover() {
                log::trace!("dfs: discovered {n}");
                let path = self.trace.path_to(n);
                return Some(self.trace.step(path, self.frontier.clone(), StepStatus::Exploring));
            }

            let Some(cell) = self.stack.pop() else {
                return Some(self.finish(Vec::new(), StepStatus::NotFound));
            };
            if cell == self.end {
                let path = self.trace.path_to(cell);
                return Some(self.finish(path, StepStatus::Found));
            }
            let key = CellKey::new(cell);
            self.frontier.remove(&key);
            if !self.trace.visited.insert(key) {
                continue;
            }
            self.expanding = Some(self.grid.neighbors(cell));
        }
    }
}

impl FusedIterator for Dfs<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::final_step;
    use gridtrace_core::walls_from_points;

    fn is_connected_walk(path: &[Point]) -> bool {
        path.windows(2).all(|w| crate::distance::manhattan(w[0], w[1]) == 1)
    }

    #[test]
    fn finds_some_path_on_open_grid() {
        let walls = WallSet::new();
        let last = final_step(Dfs::new(Point::new(0, 0), Point::new(4, 4), 5, 5, &walls).unwrap())
            .unwrap();
        assert!(last.found());
        assert!(last.path.len() >= 9);
        assert_eq!(last.path.first(), Some(&Point::new(0, 0)));
        assert_eq!(last.path.last(), Some(&Point::new(4, 4)));
        assert!(is_connected_walk(&last.path));
        let unique: HashSet<_> = last.path.iter().collect();
        assert_eq!(unique.len(), last.path.len());
    }

    #[test]
    fn goes_deep_along_last_pushed_direction() {
        // From (0,0) the pushes are +x then +y, so +y is popped first and
        // the search runs down the first column.
        let walls = WallSet::new();
        let steps: Vec<_> = Dfs::new(Point::new(0, 0), Point::new(2, 2), 3, 3, &walls)
            .unwrap()
            .collect();
        assert_eq!(steps[0].path, vec![Point::new(0, 0), Point::new(1, 0)]);
        assert_eq!(steps[1].path, vec![Point::new(0, 0), Point::new(0, 1)]);
        assert_eq!(
            steps[2].path,
            vec![Point::new(0, 0), Point::new(0, 1), Point::new(1, 1)]
        );
        let last = steps.last().unwrap();
        assert!(last.found());
        assert!(is_connected_walk(&last.path));
    }

    #[test]
    fn visited_cells_are_not_announced_twice() {
        let walls = WallSet::new();
        let steps: Vec<_> = Dfs::new(Point::new(0, 0), Point::new(3, 3), 4, 4, &walls)
            .unwrap()
            .collect();
        let exploring: Vec<Point> = steps
            .iter()
            .filter(|s| !s.is_final())
            .map(|s| *s.path.last().unwrap())
            .collect();
        for (i, p) in exploring.iter().enumerate() {
            // Settled cells are pushed again but never announced.
            let step = &steps[i];
            assert!(!step.visited.contains(&CellKey::new(*p)));
        }
    }

    #[test]
    fn wall_partition_yields_empty_path() {
        let walls = walls_from_points((0..4).map(|x| Point::new(x, 1)));
        let last = final_step(Dfs::new(Point::new(0, 0), Point::new(3, 3), 4, 4, &walls).unwrap())
            .unwrap();
        assert_eq!(last.status, StepStatus::NotFound);
        assert!(last.path.is_empty());
        assert_eq!(last.visited.len(), 4);
    }
}
