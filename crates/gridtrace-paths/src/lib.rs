//! Stepwise grid searches for animating pathfinding.
//!
//! Every search runs on a `width × height` grid with 4-directional unit-cost
//! moves and a [`WallSet`](gridtrace_core::WallSet) of blocked cells. Instead
//! of returning a path, a search is an [`Iterator`] of [`AlgorithmStep`]
//! snapshots: nothing happens until the next step is pulled, and a consumer
//! may stop pulling at any time.
//!
//! - **Breadth-first search** ([`Bfs`])
//! - **Depth-first search** ([`Dfs`])
//! - **Dijkstra** ([`Dijkstra`])
//! - **A\*** with a pluggable [`Heuristic`] ([`AStar`]), and uniform-cost
//!   search as A* without a heuristic ([`ucs`])
//!
//! [`Algorithm`] picks one of these by name. The containers the searches are
//! built on, [`MinPriorityQueue`] and [`Queue`], are public as well.
//!
//! An unreachable end is not an error: the search ends normally with a step
//! whose status is [`StepStatus::NotFound`].

mod algorithm;
mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod neighbors;
mod pqueue;
mod queue;
mod step;
mod trace;
mod traits;

pub use algorithm::{Algorithm, Steps, UnknownAlgorithm};
pub use astar::{AStar, ucs};
pub use bfs::Bfs;
pub use dfs::Dfs;
pub use dijkstra::Dijkstra;
pub use distance::{euclidean, manhattan};
pub use neighbors::{DIRS, Expansion, SearchGrid};
pub use pqueue::{MinPriorityQueue, QueueNode};
pub use queue::Queue;
pub use step::{AlgorithmStep, StepStatus, final_step};
pub use trace::reconstruct_path;
pub use traits::{Euclidean, Heuristic, Manhattan, Zero};
