//! **gridtrace-maze** — random mazes that are guaranteed to be solvable.
//!
//! [`MazeGen`] carves a randomized spanning tree of corridors, checks with a
//! search from `gridtrace-paths` that the end can be reached from the start,
//! and carves again if not. The result is a
//! [`WallSet`](gridtrace_core::WallSet) ready to hand to any search.
//!
//! ```
//! use gridtrace_core::{CellKey, Point};
//! use gridtrace_maze::{MazeError, MazeGen};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! # fn main() -> Result<(), MazeError> {
//! let (start, end) = (Point::new(0, 0), Point::new(20, 14));
//! let mut mg = MazeGen::new(StdRng::seed_from_u64(7));
//! let walls = mg.generate(21, 15, start, end)?;
//! assert!(!walls.contains(&CellKey::new(start)));
//! assert!(!walls.contains(&CellKey::new(end)));
//! # Ok(())
//! # }
//! ```

mod error;
mod mapgen;
mod ordered_set;

pub use error::MazeError;
pub use mapgen::{MazeConfig, MazeGen};
pub use ordered_set::OrderedSet;
