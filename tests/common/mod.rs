#![allow(dead_code)]

use mazescore::{load_grid, Cell, Grid};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};

/// Directory holding the JSON maze and solution fixtures
pub fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
}

pub fn fixture(name: &str) -> Grid {
    load_grid(data_dir().join(name)).unwrap_or_else(|e| panic!("fixture {}: {}", name, e))
}

/// Scratch directory unique to one test
pub fn scratch_dir(test_name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "mazescore-{}-{}",
        test_name,
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Distance from start to every reachable open cell, by flood fill.
/// Kept separate from the solver so tests can cross-check it.
pub fn distance_map(grid: &Grid) -> HashMap<Cell, usize> {
    let mut dist = HashMap::new();
    if !grid.is_open(grid.start()) {
        return dist;
    }
    let mut queue = VecDeque::from([grid.start()]);
    dist.insert(grid.start(), 0);
    while let Some(cell) = queue.pop_front() {
        let d = dist[&cell];
        for (dr, dc) in [(0, 1), (1, 0), (0, -1), (-1, 0)] {
            let next = Cell::new(cell.row + dr, cell.col + dc);
            if grid.is_open(next) && !dist.contains_key(&next) {
                dist.insert(next, d + 1);
                queue.push_back(next);
            }
        }
    }
    dist
}

/// Expected shortest move count, `None` if the end is unreachable or walled
pub fn reference_distance(grid: &Grid) -> Option<usize> {
    if !grid.is_open(grid.end()) {
        return None;
    }
    distance_map(grid).get(&grid.end()).copied()
}

/// Seeded generator so that grid sweeps are reproducible
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Random grid with roughly `wall_percent` of its cells walled.
/// Start and end may land on walls.
pub fn random_grid(rng: &mut StdRng, wall_percent: u32) -> Grid {
    let width = rng.random_range(1..=12);
    let height = rng.random_range(1..=12);
    let start = Cell::new(rng.random_range(1..=height), rng.random_range(1..=width));
    let end = Cell::new(rng.random_range(1..=height), rng.random_range(1..=width));

    let mut walls = Vec::new();
    for row in 1..=height {
        for col in 1..=width {
            if rng.random_range(0..100) < wall_percent {
                walls.push(Cell::new(row, col));
            }
        }
    }
    Grid::new(width, height, start, end, &walls)
}

/// Grid and path drawn together, for assertion messages
pub fn visualize(grid: &Grid, path: &[Cell]) -> String {
    format!(
        "\n{}x{} start {} end {}\n{}",
        grid.width(),
        grid.height(),
        grid.start(),
        grid.end(),
        grid.render(path)
    )
}
