pub mod config;
pub mod grid;
pub mod io;
pub mod notation;
pub mod pathfinding;
pub mod solution;
pub mod validate;

pub use grid::{Cell, Grid, MalformedGridError};
pub use io::{load_grid, FileError};
pub use pathfinding::solve;
pub use solution::Solution;
pub use validate::{check_path, validate, Rejection, INVALID_SCORE};
