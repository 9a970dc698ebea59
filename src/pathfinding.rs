use crate::grid::{Cell, Grid};
use log::trace;
use std::collections::{HashMap, VecDeque};

/// Find one shortest path from `start` to `end` with breadth-first search.
///
/// Returns the cells from start to end inclusive, or `None` when the end is
/// unreachable or either endpoint is not an open cell. Neighbours are tried
/// in [`Cell::neighbors`] order (up, down, left, right), so the returned path
/// is stable between runs.
pub fn solve(grid: &Grid) -> Option<Vec<Cell>> {
    let start = grid.start();
    let end = grid.end();

    if !grid.is_open(start) || !grid.is_open(end) {
        trace!("[solve] start {} or end {} is not an open cell", start, end);
        return None;
    }

    // Every discovered cell has an entry here, inserted when the cell is
    // enqueued. The start maps to itself.
    let mut parents: HashMap<Cell, Cell> = HashMap::new();
    let mut queue: VecDeque<Cell> = VecDeque::new();
    parents.insert(start, start);
    queue.push_back(start);

    let mut expanded = 0usize;
    while let Some(cell) = queue.pop_front() {
        expanded += 1;

        if cell == end {
            let path = reconstruct(&parents, start, end);
            trace!(
                "[solve] reached {} after expanding {} cells, {} moves",
                end,
                expanded,
                path.len() - 1
            );
            return Some(path);
        }

        for next in cell.neighbors() {
            if grid.is_open(next) && !parents.contains_key(&next) {
                parents.insert(next, cell);
                queue.push_back(next);
            }
        }
    }

    trace!("[solve] no path to {} after expanding {} cells", end, expanded);
    None
}

/// Number of moves on a shortest path, if there is one
pub fn shortest_distance(grid: &Grid) -> Option<usize> {
    solve(grid).map(|path| path.len() - 1)
}

fn reconstruct(parents: &HashMap<Cell, Cell>, start: Cell, end: Cell) -> Vec<Cell> {
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        current = parents[&current];
        path.push(current);
    }
    path.reverse();
    path
}
