use gridtrace_core::Point;

use crate::distance;

/// Estimate of the remaining cost from `from` to `to`, used by A* as
/// `f = g + h`.
///
/// A* only returns shortest paths when the estimate never exceeds the true
/// remaining cost (admissible). That is up to the implementor; nothing
/// checks it.
pub trait Heuristic {
    fn estimate(&self, from: Point, to: Point) -> f64;
}

impl<F> Heuristic for F
where
    F: Fn(Point, Point) -> f64,
{
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> f64 {
        self(from, to)
    }
}

/// Straight-line distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl Heuristic for Euclidean {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> f64 {
        distance::euclidean(from, to)
    }
}

/// Grid distance with 4-directional moves. Exact on an open grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> f64 {
        f64::from(distance::manhattan(from, to))
    }
}

/// No estimate at all; turns A* into uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zero;

impl Heuristic for Zero {
    #[inline]
    fn estimate(&self, _from: Point, _to: Point) -> f64 {
        0.0
    }
}
