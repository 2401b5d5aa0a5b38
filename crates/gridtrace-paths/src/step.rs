use std::collections::HashSet;

use gridtrace_core::{CellKey, Point};

/// Where a search stands when a step is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepStatus {
    /// The search is still running; `path` leads to the cell just
    /// discovered or improved.
    #[default]
    Exploring,
    /// Final step: `path` runs from start to end.
    Found,
    /// Final step: every reachable cell was expanded without reaching the
    /// end. `path` does not connect start and end (it is empty or a single
    /// cell, depending on the algorithm).
    NotFound,
}

/// One snapshot of a search, emitted each time something worth drawing
/// happens.
///
/// Every step owns its sets: keeping an old step around and pulling more
/// steps never changes it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlgorithmStep {
    /// Best known route from start to the cell this step is about, start
    /// first.
    pub path: Vec<Point>,
    /// Cells the algorithm considers settled.
    pub visited: HashSet<CellKey>,
    /// Cells discovered but not yet expanded.
    pub frontier: HashSet<CellKey>,
    pub status: StepStatus,
}

impl AlgorithmStep {
    /// Whether this is the last step of its search.
    #[inline]
    pub fn is_final(&self) -> bool {
        self.status != StepStatus::Exploring
    }

    /// Whether this is a final step that connects start and end.
    #[inline]
    pub fn found(&self) -> bool {
        self.status == StepStatus::Found
    }

    /// Number of moves along `path` (one less than its cell count).
    #[inline]
    pub fn path_moves(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Pull every step out of `steps` and return the last one.
///
/// Returns `None` only for an iterator that yields nothing, which none of
/// the searches in this crate do.
pub fn final_step<I>(steps: I) -> Option<AlgorithmStep>
where
    I: IntoIterator<Item = AlgorithmStep>,
{
    steps.into_iter().last()
}
