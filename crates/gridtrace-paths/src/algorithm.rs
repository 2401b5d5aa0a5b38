use std::fmt;
use std::str::FromStr;

use gridtrace_core::{ConfigError, Point, WallSet};

use crate::astar::{AStar, ucs};
use crate::bfs::Bfs;
use crate::dfs::Dfs;
use crate::dijkstra::Dijkstra;
use crate::step::AlgorithmStep;
use crate::traits::{Euclidean, Manhattan};

/// A running search of any kind, pulled one step at a time.
pub type Steps<'a> = Box<dyn Iterator<Item = AlgorithmStep> + 'a>;

/// The searches a caller can pick by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[cfg_attr(feature = "serde", serde(rename = "bfs"))]
    Bfs,
    #[cfg_attr(feature = "serde", serde(rename = "dfs"))]
    Dfs,
    #[cfg_attr(feature = "serde", serde(rename = "dijkstra"))]
    Dijkstra,
    #[cfg_attr(feature = "serde", serde(rename = "astar-euclidean"))]
    AStarEuclidean,
    #[cfg_attr(feature = "serde", serde(rename = "astar-manhattan"))]
    AStarManhattan,
    #[cfg_attr(feature = "serde", serde(rename = "ucs"))]
    Ucs,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::AStarEuclidean,
        Algorithm::AStarManhattan,
        Algorithm::Ucs,
    ];

    /// Stable kebab-case name, accepted back by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Dijkstra => "dijkstra",
            Self::AStarEuclidean => "astar-euclidean",
            Self::AStarManhattan => "astar-manhattan",
            Self::Ucs => "ucs",
        }
    }

    /// Whether the final path is guaranteed to be a shortest one.
    pub fn is_optimal(self) -> bool {
        !matches!(self, Self::Dfs)
    }

    /// Start a search from `start` to `end` on a `width × height` grid.
    pub fn search<'a>(
        self,
        start: Point,
        end: Point,
        width: i32,
        height: i32,
        walls: &'a WallSet,
    ) -> Result<Steps<'a>, ConfigError> {
        let steps: Steps<'a> = match self {
            Self::Bfs => Box::new(Bfs::new(start, end, width, height, walls)?),
            Self::Dfs => Box::new(Dfs::new(start, end, width, height, walls)?),
            Self::Dijkstra => Box::new(Dijkstra::new(start, end, width, height, walls)?),
            Self::AStarEuclidean => {
                Box::new(AStar::new(Euclidean, start, end, width, height, walls)?)
            }
            Self::AStarManhattan => {
                Box::new(AStar::new(Manhattan, start, end, width, height, walls)?)
            }
            Self::Ucs => Box::new(ucs(start, end, width, height, walls)?),
        };
        Ok(steps)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A name that matches no [`Algorithm`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm {0:?}")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, UnknownAlgorithm> {
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownAlgorithm(s.to_owned()))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn serializes_by_name() {
        let json = serde_json::to_string(&Algorithm::AStarManhattan).unwrap();
        assert_eq!(json, "\"astar-manhattan\"");
        let back: Algorithm = serde_json::from_str("\"ucs\"").unwrap();
        assert_eq!(back, Algorithm::Ucs);
    }
}
