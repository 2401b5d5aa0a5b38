//! Randomized spanning-tree maze generation.

use gridtrace_core::{CellKey, Point, Range, WallSet, validate_bounds};
use gridtrace_paths::{Algorithm, final_step};
use rand::{Rng, RngExt};

use crate::error::MazeError;
use crate::ordered_set::OrderedSet;

/// Stride-2 directions used while carving, in the order they are tried.
const STRIDES: [Point; 4] = [
    Point::new(2, 0),
    Point::new(0, 2),
    Point::new(-2, 0),
    Point::new(0, -2),
];

/// Tunable parameters for [`MazeGen`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MazeConfig {
    /// How many mazes to carve before giving up on a solvable one.
    pub max_attempts: usize,
    /// Search used to check that the end can be reached from the start.
    pub solver: Algorithm,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            max_attempts: 64,
            solver: Algorithm::AStarManhattan,
        }
    }
}

/// Maze generator owning its random source.
///
/// Seed `R` for reproducible mazes.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub config: MazeConfig,
    attempts: usize,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator with the default [`MazeConfig`].
    pub fn new(rng: R) -> Self {
        Self::with_config(rng, MazeConfig::default())
    }

    pub fn with_config(rng: R, config: MazeConfig) -> Self {
        Self {
            rng,
            config,
            attempts: 0,
        }
    }

    /// Number of mazes carved by the last call to [`generate`](Self::generate).
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Generate the walls of a `width × height` maze in which `end` is
    /// reachable from `start`.
    ///
    /// The maze is carved on a grid padded to odd dimensions, as a spanning
    /// tree over every cell sharing the parity of `start`. When `end` has a
    /// different parity it roots a second tree on its own lattice, and the
    /// two trees meet wherever a corridor of one touches a cell of the
    /// other. Clipping back to `width × height` can still cut the only
    /// connection near the border. Such mazes are thrown away and carved
    /// again, up to `config.max_attempts` times.
    ///
    /// The returned set never contains `start` or `end`.
    pub fn generate(
        &mut self,
        width: i32,
        height: i32,
        start: Point,
        end: Point,
    ) -> Result<WallSet, MazeError> {
        validate_bounds(start, end, width, height)?;
        self.attempts = 0;

        while self.attempts < self.config.max_attempts {
            self.attempts += 1;
            let walls = self.carve(width, height, start, end);
            let steps = self.config.solver.search(start, end, width, height, &walls)?;
            let solved = final_step(steps).is_some_and(|step| step.found());
            log::debug!(
                "maze: attempt {} on {width}x{height}, {} walls, {}",
                self.attempts,
                walls.len(),
                if solved { "solvable" } else { "disconnected" }
            );
            if solved {
                return Ok(walls);
            }
        }

        log::warn!(
            "maze: no solvable {width}x{height} maze from {start} to {end} after {} attempts",
            self.attempts
        );
        Err(MazeError::GenerationFailed {
            attempts: self.attempts,
        })
    }

    /// One carving pass. Returns the walls clipped to `width × height`.
    fn carve(&mut self, width: i32, height: i32, start: Point, end: Point) -> WallSet {
        let mut cells = Cells::new(Range::grid(odd(width), odd(height)));
        let mut frontier = OrderedSet::new();

        // Each root grows a tree over its own parity lattice. Two roots on
        // one lattice would split it into trees that never meet, while an
        // end off the start's lattice is only reached by a tree of its own.
        let second = (!same_lattice(start, end)).then_some(end);
        let roots: Vec<Point> = std::iter::once(start).chain(second).collect();
        cells.open(end);
        for &root in &roots {
            cells.join(root);
        }
        for &root in &roots {
            for n in cells.strides(root) {
                if !cells.in_maze(n) {
                    frontier.insert(n);
                }
            }
        }

        loop {
            let Some(cell) = frontier.random(&mut self.rng).copied() else {
                break;
            };
            frontier.swap_remove(&cell);
            let joined: Vec<Point> = cells.strides(cell).filter(|&n| cells.in_maze(n)).collect();
            if joined.is_empty() {
                continue;
            }
            let target = joined[self.rng.random_range(0..joined.len())];
            cells.open(midpoint(cell, target));
            cells.join(cell);
            for n in cells.strides(cell) {
                if !cells.in_maze(n) {
                    frontier.insert(n);
                }
            }
        }

        cells.walls_within(Range::grid(width, height))
    }
}

/// Round an even dimension up to the next odd one.
#[inline]
fn odd(n: i32) -> i32 {
    if n % 2 == 0 { n + 1 } else { n }
}

/// Whether `a` and `b` are an even number of steps apart on both axes.
#[inline]
fn same_lattice(a: Point, b: Point) -> bool {
    (a.x - b.x) % 2 == 0 && (a.y - b.y) % 2 == 0
}

#[inline]
fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2, (a.y + b.y) / 2)
}

/// Per-attempt scratch grid: a wall flag and an in-maze flag per cell.
struct Cells {
    bounds: Range,
    wall: Vec<bool>,
    in_maze: Vec<bool>,
}

impl Cells {
    fn new(bounds: Range) -> Self {
        Self {
            bounds,
            wall: vec![true; bounds.len()],
            in_maze: vec![false; bounds.len()],
        }
    }

    fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        let rel = p - self.bounds.min;
        Some((rel.y * self.bounds.width() + rel.x) as usize)
    }

    fn open(&mut self, p: Point) {
        if let Some(i) = self.idx(p) {
            self.wall[i] = false;
        }
    }

    /// Carve `p` and add it to the maze.
    fn join(&mut self, p: Point) {
        if let Some(i) = self.idx(p) {
            self.wall[i] = false;
            self.in_maze[i] = true;
        }
    }

    fn in_maze(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.in_maze[i])
    }

    fn is_wall(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.wall[i])
    }

    /// In-bounds cells two steps away from `p`.
    fn strides(&self, p: Point) -> impl Iterator<Item = Point> + use<> {
        let bounds = self.bounds;
        STRIDES.into_iter().map(move |d| p + d).filter(move |&n| bounds.contains(n))
    }

    fn walls_within(&self, clip: Range) -> WallSet {
        clip.iter()
            .filter(|&p| self.is_wall(p))
            .map(CellKey::new)
            .collect()
    }
}
