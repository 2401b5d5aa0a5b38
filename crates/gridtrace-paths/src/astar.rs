//! A* search and uniform-cost search.

use std::collections::{HashMap, HashSet};
use std::iter::FusedIterator;

use gridtrace_core::{CellKey, ConfigError, Point, WallSet, validate};

use crate::neighbors::{Expansion, SearchGrid};
use crate::pqueue::MinPriorityQueue;
use crate::step::{AlgorithmStep, StepStatus};
use crate::trace::Trace;
use crate::traits::{Heuristic, Zero};

/// Stepwise A* search.
///
/// Dijkstra's expansion ordered by `f = g + h(cell, end)` instead of `g`.
/// Each improvement of a neighbour's `g` updates its predecessor, inserts or
/// decreases its open-set entry, and emits a step. Paths are shortest only
/// when `H` is admissible.
///
/// When the open set runs dry without reaching the end, the final step's
/// path is just `[start]`.
#[derive(Debug)]
pub struct AStar<'a, H> {
    heuristic: H,
    grid: SearchGrid<'a>,
    start: Point,
    end: Point,
    open: MinPriorityQueue<Point, f64, CellKey>,
    g: HashMap<CellKey, u32>,
    trace: Trace,
    expanding: Option<Expansion>,
    done: bool,
}

impl<'a, H: Heuristic> AStar<'a, H> {
    pub fn new(
        heuristic: H,
        start: Point,
        end: Point,
        width: i32,
        height: i32,
        walls: &'a WallSet,
    ) -> Result<Self, ConfigError> {
        let bounds = validate(start, end, width, height, walls)?;
        log::debug!("astar: {start} -> {end} on {bounds}");

        let start_key = CellKey::new(start);
        let mut g = HashMap::with_capacity(bounds.len());
        g.insert(start_key.clone(), 0);
        let mut open = MinPriorityQueue::new();
        open.insert(start, heuristic.estimate(start, end), start_key);

        Ok(Self {
            heuristic,
            grid: SearchGrid::new(bounds, walls),
            start,
            end,
            open,
            g,
            trace: Trace::default(),
            expanding: None,
            done: false,
        })
    }

    fn relax(&mut self) -> Option<Point> {
        let exp = self.expanding.as_mut()?;
        let from = exp.from();
        let base = self.g.get(&CellKey::new(from)).copied().unwrap_or(u32::MAX);
        for n in exp.by_ref() {
            let key = CellKey::new(n);
            let tentative = base.saturating_add(1);
            if tentative >= self.g.get(&key).copied().unwrap_or(u32::MAX) {
                continue;
            }
            let f = f64::from(tentative) + self.heuristic.estimate(n, self.end);
            self.g.insert(key.clone(), tentative);
            self.trace.previous.insert(key.clone(), from);
            self.open.insert(n, f, key);
            return Some(n);
        }
        self.expanding = None;
        None
    }

    fn frontier(&self) -> HashSet<CellKey> {
        self.open.keys().cloned().collect()
    }

    fn finish(&mut self, path: Vec<Point>, status: StepStatus) -> AlgorithmStep {
        self.done = true;
        let frontier = self.frontier();
        let step = self.trace.step(path, frontier, status);
        log::debug!("astar: {status:?} after {} steps", self.trace.emitted);
        step
    }
}

impl<H: Heuristic> Iterator for AStar<'_, H> {
    type Item = AlgorithmStep;

    fn next(&mut self) -> Option<AlgorithmStep> {
        if self.done {
            return None;
        }
        loop {
            if let Some(n) = self.relax() {
                log::trace!("astar: improved {n}");
                let path = self.trace.path_to(n);
                let frontier = self.frontier();
                return Some(self.trace.step(path, frontier, StepStatus::Exploring));
            }

            let Some(node) = self.open.extract_min() else {
                return Some(self.finish(vec![self.start], StepStatus::NotFound));
            };
            let current = node.value;
            if current == self.end {
                let path = self.trace.path_to(current);
                return Some(self.finish(path, StepStatus::Found));
            }
            self.trace.visited.insert(node.key);
            self.expanding = Some(self.grid.neighbors(current));
        }
    }
}

impl<H: Heuristic> FusedIterator for AStar<'_, H> {}

/// Uniform-cost search: A* with a zero heuristic.
pub fn ucs<'a>(
    start: Point,
    end: Point,
    width: i32,
    height: i32,
    walls: &'a WallSet,
) -> Result<AStar<'a, Zero>, ConfigError> {
    AStar::new(Zero, start, end, width, height, walls)
}
