//! Breadth-first search.

use std::collections::HashSet;
use std::iter::FusedIterator;

use gridtrace_core::{CellKey, ConfigError, Point, WallSet, validate};

use crate::neighbors::{Expansion, SearchGrid};
use crate::queue::Queue;
use crate::step::{AlgorithmStep, StepStatus};
use crate::trace::Trace;

/// Stepwise breadth-first search.
///
/// A cell is marked visited when it is enqueued, so it is queued at most
/// once. One step is emitted per newly discovered cell. Every move costs 1,
/// so the first time the end is dequeued its path is a shortest one.
///
/// The final step has the path to the end, or an empty path when the end is
/// unreachable.
#[derive(Debug)]
pub struct Bfs<'a> {
    grid: SearchGrid<'a>,
    end: Point,
    queue: Queue<Point>,
    frontier: HashSet<CellKey>,
    trace: Trace,
    expanding: Option<Expansion>,
    done: bool,
}

impl<'a> Bfs<'a> {
    pub fn new(
        start: Point,
        end: Point,
        width: i32,
        height: i32,
        walls: &'a WallSet,
    ) -> Result<Self, ConfigError> {
        let bounds = validate(start, end, width, height, walls)?;
        log::debug!("bfs: {start} -> {end} on {bounds}");

        let mut trace = Trace::default();
        trace.visited.insert(CellKey::new(start));
        let mut queue = Queue::new();
        queue.enqueue(start);

        Ok(Self {
            grid: SearchGrid::new(bounds, walls),
            end,
            queue,
            frontier: HashSet::new(),
            trace,
            expanding: None,
            done: false,
        })
    }

    /// Advance the current expansion to its next unvisited neighbour and
    /// record it as discovered.
    fn discover(&mut self) -> Option<Point> {
        let exp = self.expanding.as_mut()?;
        let from = exp.from();
        for n in exp.by_ref() {
            let key = CellKey::new(n);
            if self.trace.visited.contains(&key) {
                continue;
            }
            self.trace.visited.insert(key.clone());
            self.trace.previous.insert(key.clone(), from);
            self.frontier.insert(key);
            self.queue.enqueue(n);
            return Some(n);
        }
        self.expanding = None;
        None
    }

    fn finish(&mut self, path: Vec<Point>, status: StepStatus) -> AlgorithmStep {
        self.done = true;
        let step = self.trace.step(path, self.frontier.clone(), status);
        log::debug!("bfs: {status:?} after {} steps", self.trace.emitted);
        step
    }
}

impl Iterator for Bfs<'_> {
    type Item = AlgorithmStep;

    fn next(&mut self) -> Option<AlgorithmStep> {
        if self.done {
            return None;
        }
        loop {
            if let Some(n) = self.discover() {
                log::trace!("bfs: discovered {n}");
                let path = self.trace.path_to(n);
                return Some(self.trace.step(path, self.frontier.clone(), StepStatus::Exploring));
            }

            let Some(cell) = self.queue.dequeue() else {
                return Some(self.finish(Vec::new(), StepStatus::NotFound));
            };
            if cell == self.end {
                let path = self.trace.path_to(cell);
                return Some(self.finish(path, StepStatus::Found));
            }
            self.frontier.remove(&CellKey::new(cell));
            self.expanding = Some(self.grid.neighbors(cell));
        }
    }
}

impl FusedIterator for Bfs<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::final_step;
    use gridtrace_core::walls_from_points;

    #[test]
    fn shortest_path_on_open_grid() {
        let walls = WallSet::new();
        let last = final_step(Bfs::new(Point::new(0, 0), Point::new(4, 4), 5, 5, &walls).unwrap())
            .unwrap();
        assert!(last.found());
        assert_eq!(last.path.len(), 9);
        assert_eq!(last.path.first(), Some(&Point::new(0, 0)));
        assert_eq!(last.path.last(), Some(&Point::new(4, 4)));
    }

    #[test]
    fn first_steps_follow_neighbor_order() {
        let walls = WallSet::new();
        let mut bfs = Bfs::new(Point::new(1, 1), Point::new(2, 2), 3, 3, &walls).unwrap();

        // +x, -x, +y, -y from (1, 1).
        let expected = [
            Point::new(2, 1),
            Point::new(0, 1),
            Point::new(1, 2),
            Point::new(1, 0),
        ];
        for (i, p) in expected.iter().enumerate() {
            let step = bfs.next().unwrap();
            assert_eq!(step.status, StepStatus::Exploring);
            assert_eq!(step.path, vec![Point::new(1, 1), *p]);
            // Visited on discovery: start plus every cell discovered so far.
            assert_eq!(step.visited.len(), i + 2);
            assert!(step.frontier.contains(&CellKey::new(*p)));
        }
    }

    #[test]
    fn steps_are_independent_snapshots() {
        let walls = WallSet::new();
        let mut bfs = Bfs::new(Point::new(0, 0), Point::new(3, 3), 4, 4, &walls).unwrap();
        let first = bfs.next().unwrap();
        let frozen = first.clone();
        let rest: Vec<_> = bfs.collect();
        assert!(!rest.is_empty());
        assert_eq!(first, frozen);
        assert!(rest.last().unwrap().visited.len() > first.visited.len());
    }

    #[test]
    fn wall_partition_yields_empty_path() {
        // Full column of walls at x = 2.
        let walls = walls_from_points((0..5).map(|y| Point::new(2, y)));
        let steps: Vec<_> = Bfs::new(Point::new(0, 0), Point::new(4, 4), 5, 5, &walls)
            .unwrap()
            .collect();
        let last = steps.last().unwrap();
        assert_eq!(last.status, StepStatus::NotFound);
        assert!(last.path.is_empty());
        // Only the 10 cells left of the partition were ever reached.
        assert_eq!(last.visited.len(), 10);
        assert_eq!(steps.iter().filter(|s| s.is_final()).count(), 1);
    }

    #[test]
    fn start_equals_end() {
        let walls = WallSet::new();
        let mut bfs = Bfs::new(Point::new(2, 2), Point::new(2, 2), 5, 5, &walls).unwrap();
        let step = bfs.next().unwrap();
        assert!(step.found());
        assert_eq!(step.path, vec![Point::new(2, 2)]);
        assert!(bfs.next().is_none());
        assert!(bfs.next().is_none());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let walls = walls_from_points([Point::new(0, 0)]);
        assert!(matches!(
            Bfs::new(Point::new(0, 0), Point::new(1, 1), 3, 3, &walls),
            Err(ConfigError::BlockedEndpoint { .. })
        ));
        assert!(Bfs::new(Point::new(0, 0), Point::new(1, 1), 0, 3, &walls).is_err());
    }
}
