use std::collections::{HashMap, HashSet};

use gridtrace_core::{CellKey, Point};

use crate::step::{AlgorithmStep, StepStatus};

/// Walk `previous` backward from `to` until a cell with no predecessor (the
/// start) and return the cells in start-to-`to` order.
///
/// A cell that was never reached yields just `[to]`.
pub fn reconstruct_path(previous: &HashMap<CellKey, Point>, to: Point) -> Vec<Point> {
    let mut path = vec![to];
    let mut cur = to;
    while let Some(&prev) = previous.get(&CellKey::new(cur)) {
        path.push(prev);
        cur = prev;
    }
    path.reverse();
    path
}

/// Per-run bookkeeping shared by every search: settled cells, predecessor
/// links and a count of emitted steps.
#[derive(Debug, Default)]
pub(crate) struct Trace {
    pub(crate) visited: HashSet<CellKey>,
    pub(crate) previous: HashMap<CellKey, Point>,
    pub(crate) emitted: usize,
}

impl Trace {
    pub(crate) fn path_to(&self, cell: Point) -> Vec<Point> {
        reconstruct_path(&self.previous, cell)
    }

    /// Copy the current state into a step.
    pub(crate) fn step(
        &mut self,
        path: Vec<Point>,
        frontier: HashSet<CellKey>,
        status: StepStatus,
    ) -> AlgorithmStep {
        self.emitted += 1;
        AlgorithmStep {
            path,
            visited: self.visited.clone(),
            frontier,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_back_to_start() {
        let mut previous = HashMap::new();
        previous.insert(CellKey::new(Point::new(1, 0)), Point::new(0, 0));
        previous.insert(CellKey::new(Point::new(1, 1)), Point::new(1, 0));
        previous.insert(CellKey::new(Point::new(2, 1)), Point::new(1, 1));
        assert_eq!(
            reconstruct_path(&previous, Point::new(2, 1)),
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(1, 1),
                Point::new(2, 1)
            ]
        );
        assert_eq!(reconstruct_path(&previous, Point::new(0, 0)), vec![Point::new(0, 0)]);
        assert_eq!(reconstruct_path(&previous, Point::new(5, 5)), vec![Point::new(5, 5)]);
    }
}
