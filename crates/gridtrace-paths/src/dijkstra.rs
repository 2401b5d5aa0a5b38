//! Dijkstra's algorithm with unit edge costs.

use std::collections::{HashMap, HashSet};
use std::iter::FusedIterator;

use gridtrace_core::{CellKey, ConfigError, Point, WallSet, validate};

use crate::neighbors::{Expansion, SearchGrid};
use crate::pqueue::MinPriorityQueue;
use crate::step::{AlgorithmStep, StepStatus};
use crate::trace::Trace;

/// Stepwise Dijkstra search.
///
/// Costs start at infinity everywhere except the start (0). Each popped
/// cell is settled once; stale pops of settled cells are skipped. Every
/// improvement of a neighbour's tentative cost updates its predecessor,
/// inserts or decreases its queue entry, and emits a step.
///
/// The search stops when the end is popped. If the queue runs dry first,
/// the final step carries whatever the predecessor links give for the end,
/// which for an unreachable end is just `[end]`.
#[derive(Debug)]
pub struct Dijkstra<'a> {
    grid: SearchGrid<'a>,
    end: Point,
    queue: MinPriorityQueue<Point, u32, CellKey>,
    cost: HashMap<CellKey, u32>,
    trace: Trace,
    expanding: Option<Expansion>,
    done: bool,
}

impl<'a> Dijkstra<'a> {
    pub fn new(
        start: Point,
        end: Point,
        width: i32,
        height: i32,
        walls: &'a WallSet,
    ) -> Result<Self, ConfigError> {
        let bounds = validate(start, end, width, height, walls)?;
        log::debug!("dijkstra: {start} -> {end} on {bounds}");

        let start_key = CellKey::new(start);
        let mut cost = HashMap::with_capacity(bounds.len());
        cost.insert(start_key.clone(), 0);
        let mut queue = MinPriorityQueue::new();
        queue.insert(start, 0, start_key);

        Ok(Self {
            grid: SearchGrid::new(bounds, walls),
            end,
            queue,
            cost,
            trace: Trace::default(),
            expanding: None,
            done: false,
        })
    }

    /// Tentative cost of a cell; unreached cells cost `u32::MAX`.
    #[inline]
    fn cost_of(&self, key: &CellKey) -> u32 {
        self.cost.get(key).copied().unwrap_or(u32::MAX)
    }

    /// Relax the remaining neighbours of the current expansion until one
    /// improves.
    fn relax(&mut self) -> Option<Point> {
        let exp = self.expanding.as_mut()?;
        let from = exp.from();
        let base = self.cost.get(&CellKey::new(from)).copied().unwrap_or(u32::MAX);
        for n in exp.by_ref() {
            let key = CellKey::new(n);
            let tentative = base.saturating_add(1);
            if tentative >= self.cost.get(&key).copied().unwrap_or(u32::MAX) {
                continue;
            }
            self.cost.insert(key.clone(), tentative);
            self.trace.previous.insert(key.clone(), from);
            self.queue.insert(n, tentative, key);
            return Some(n);
        }
        self.expanding = None;
        None
    }

    fn frontier(&self) -> HashSet<CellKey> {
        self.queue.keys().cloned().collect()
    }

    fn finish(&mut self) -> AlgorithmStep {
        self.done = true;
        let status = if self.trace.visited.contains(&CellKey::new(self.end)) {
            StepStatus::Found
        } else {
            StepStatus::NotFound
        };
        let path = self.trace.path_to(self.end);
        let frontier = self.frontier();
        let step = self.trace.step(path, frontier, status);
        log::debug!(
            "dijkstra: {status:?} after {} steps, end cost {}",
            self.trace.emitted,
            self.cost_of(&CellKey::new(self.end))
        );
        step
    }
}

impl Iterator for Dijkstra<'_> {
    type Item = AlgorithmStep;

    fn next(&mut self) -> Option<AlgorithmStep> {
        if self.done {
            return None;
        }
        loop {
            if let Some(n) = self.relax() {
                log::trace!("dijkstra: improved {n}");
                let path = self.trace.path_to(n);
                let frontier = self.frontier();
                return Some(self.trace.step(path, frontier, StepStatus::Exploring));
            }

            let Some(node) = self.queue.extract_min() else {
                return Some(self.finish());
            };
            if !self.trace.visited.insert(node.key) {
                continue;
            }
            if node.value == self.end {
                return Some(self.finish());
            }
            self.expanding = Some(self.grid.neighbors(node.value));
        }
    }
}

impl FusedIterator for Dijkstra<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::Bfs;
    use crate::final_step;
    use gridtrace_core::walls_from_points;

    #[test]
    fn shortest_path_on_open_grid() {
        let walls = WallSet::new();
        let last = final_step(
            Dijkstra::new(Point::new(0, 0), Point::new(4, 4), 5, 5, &walls).unwrap(),
        )
        .unwrap();
        assert!(last.found());
        assert_eq!(last.path.len(), 9);
        assert_eq!(last.path.first(), Some(&Point::new(0, 0)));
        assert_eq!(last.path.last(), Some(&Point::new(4, 4)));
    }

    #[test]
    fn matches_bfs_length_around_obstacles() {
        // A U-shaped obstacle forcing a detour.
        let walls = walls_from_points([
            Point::new(1, 1),
            Point::new(2, 1),
            Point::new(3, 1),
            Point::new(3, 2),
            Point::new(3, 3),
            Point::new(1, 3),
            Point::new(2, 3),
        ]);
        let (start, end) = (Point::new(2, 2), Point::new(5, 2));
        let d = final_step(Dijkstra::new(start, end, 6, 5, &walls).unwrap()).unwrap();
        let b = final_step(Bfs::new(start, end, 6, 5, &walls).unwrap()).unwrap();
        assert!(d.found());
        assert_eq!(d.path.len(), b.path.len());
        for p in &d.path {
            assert!(!walls.contains(&CellKey::new(*p)));
        }
    }

    #[test]
    fn frontier_mirrors_queue() {
        let walls = WallSet::new();
        let mut dj = Dijkstra::new(Point::new(1, 1), Point::new(2, 2), 3, 3, &walls).unwrap();
        let first = dj.next().unwrap();
        assert_eq!(first.path, vec![Point::new(1, 1), Point::new(2, 1)]);
        assert_eq!(first.visited.len(), 1);
        assert_eq!(first.frontier.len(), 1);
        for _ in 0..3 {
            dj.next();
        }
        // All four neighbours of the start are queued.
        assert_eq!(dj.queue.len(), 4);
    }

    #[test]
    fn unreachable_end_is_reported_as_single_cell() {
        let walls = walls_from_points((0..5).map(|y| Point::new(2, y)));
        let end = Point::new(4, 4);
        let last = final_step(Dijkstra::new(Point::new(0, 0), end, 5, 5, &walls).unwrap())
            .unwrap();
        assert_eq!(last.status, StepStatus::NotFound);
        assert_eq!(last.path, vec![end]);
        assert!(last.frontier.is_empty());
        assert_eq!(last.visited.len(), 10);
    }

    #[test]
    fn deterministic_sequence() {
        let walls = walls_from_points([Point::new(2, 2), Point::new(1, 3)]);
        let run = || {
            Dijkstra::new(Point::new(0, 0), Point::new(4, 4), 5, 5, &walls)
                .unwrap()
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }
}
