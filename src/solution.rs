use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::grid::Grid;
use crate::io::{self, FileError};
use crate::notation::encode_path;
use crate::pathfinding::solve;
use crate::validate::validate;

/// A team's submitted answer for one maze
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    #[serde(default)]
    pub team: String,
    #[serde(rename = "mazeName", default)]
    pub maze_name: String,
    /// Cells in `(r<row>c<col>)` notation, start to end. `null` reads as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub path: Vec<String>,
    /// Seconds spent solving, rounded to two decimals. Older tools wrote it
    /// as a string such as `"0.02"`, which is accepted on load.
    #[serde(rename = "executionTime", default, deserialize_with = "seconds")]
    pub execution_time: f64,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Seconds {
    Number(f64),
    Text(String),
}

fn seconds<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Seconds>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(Seconds::Number(secs)) => Ok(secs),
        Some(Seconds::Text(text)) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| {
                serde::de::Error::custom(format!("executionTime `{}` is not a number", text))
            }),
    }
}

impl Solution {
    /// Solve `grid` and package the result, timing the search.
    /// Returns `None` if the maze has no path.
    pub fn generate(grid: &Grid, team: &str, maze_name: &str) -> Option<Self> {
        let started = Instant::now();
        let path = solve(grid)?;
        let elapsed = started.elapsed().as_secs_f64();

        Some(Solution {
            team: team.to_string(),
            maze_name: maze_name.to_string(),
            path: encode_path(&path),
            execution_time: (elapsed * 100.0).round() / 100.0,
        })
    }

    /// Number of moves claimed by the path, without checking it
    pub fn claimed_moves(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Score this solution's path against `grid`
    pub fn score(&self, grid: &Grid) -> u32 {
        validate(grid, &self.path)
    }

    /// Save to file as pretty-printed JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), FileError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).map_err(|source| FileError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        fs::write(path, json).map_err(|source| FileError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, FileError> {
        let path = path.as_ref();
        let json = io::read_to_string(path)?;
        serde_json::from_str(&json).map_err(|source| FileError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// File name a solution for `maze_name` is stored under
pub fn solution_file_name(maze_name: &str) -> String {
    format!("solution_{}", maze_name)
}

/// Load a solution file and the maze it names from `maze_dir`, then score it.
///
/// File problems come back as errors; only the path itself is scored, so an
/// illegal path is `Ok(INVALID_SCORE)`.
pub fn score_solution_file<P: AsRef<Path>, D: AsRef<Path>>(
    solution_path: P,
    maze_dir: D,
) -> Result<u32, FileError> {
    let solution_path = solution_path.as_ref();
    let solution = Solution::load_from_file(solution_path)?;
    if solution.maze_name.is_empty() {
        return Err(FileError::MissingMazeName {
            path: solution_path.to_path_buf(),
        });
    }

    let grid = io::load_grid(maze_dir.as_ref().join(&solution.maze_name))?;
    Ok(solution.score(&grid))
}
