//! Independent checking and scoring of submitted paths.
//!
//! Nothing here calls the solver. A path from any source is parsed from its
//! notation and re-checked against the grid in five stages; the first failing
//! stage decides the [`Rejection`].

use log::debug;
use thiserror::Error;

use crate::grid::{Cell, Grid};
use crate::notation::{self, NotationError};

/// Score given to any path that is missing or illegal
pub const INVALID_SCORE: u32 = 5000;

/// Why a submitted path was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("path is empty")]
    Empty,
    #[error(transparent)]
    Notation(#[from] NotationError),
    #[error("path starts at {found}, maze starts at {expected}")]
    WrongStart { expected: Cell, found: Cell },
    #[error("path ends at {found}, maze ends at {expected}")]
    WrongEnd { expected: Cell, found: Cell },
    #[error("step {index} {cell} is outside the grid")]
    OutOfBounds { index: usize, cell: Cell },
    #[error("step {index} {cell} is a wall")]
    Wall { index: usize, cell: Cell },
    #[error("step {index} jumps from {from} to {to}")]
    NotAdjacent { index: usize, from: Cell, to: Cell },
}

/// Check a path and return its move count, or the first stage that failed
pub fn check_path<S: AsRef<str>>(grid: &Grid, tokens: &[S]) -> Result<usize, Rejection> {
    if tokens.is_empty() {
        return Err(Rejection::Empty);
    }

    let cells = notation::decode_path(tokens)?;

    // Non-empty, so first and last exist
    let (first, last) = (cells[0], cells[cells.len() - 1]);
    if first != grid.start() {
        return Err(Rejection::WrongStart {
            expected: grid.start(),
            found: first,
        });
    }
    if last != grid.end() {
        return Err(Rejection::WrongEnd {
            expected: grid.end(),
            found: last,
        });
    }

    for (index, &cell) in cells.iter().enumerate() {
        if !grid.in_bounds(cell) {
            return Err(Rejection::OutOfBounds { index, cell });
        }
        if grid.is_wall(cell) {
            return Err(Rejection::Wall { index, cell });
        }
    }

    for (index, pair) in cells.windows(2).enumerate() {
        if pair[0].manhattan(&pair[1]) != 1 {
            return Err(Rejection::NotAdjacent {
                index: index + 1,
                from: pair[0],
                to: pair[1],
            });
        }
    }

    Ok(cells.len() - 1)
}

/// Score a path: its move count, or [`INVALID_SCORE`] if it is not legal
pub fn validate<S: AsRef<str>>(grid: &Grid, tokens: &[S]) -> u32 {
    match check_path(grid, tokens) {
        Ok(moves) => u32::try_from(moves).unwrap_or(u32::MAX),
        Err(rejection) => {
            debug!("path rejected: {}", rejection);
            INVALID_SCORE
        }
    }
}

/// Score a path given as a single string of tokens
pub fn validate_text(grid: &Grid, text: &str) -> u32 {
    validate(grid, &notation::split_tokens(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_3x3() -> Grid {
        Grid::new(3, 3, Cell::new(1, 1), Cell::new(3, 3), &[])
    }

    #[test]
    fn test_valid_path() {
        let grid = open_3x3();
        let path = ["(r1c1)", "(r1c2)", "(r1c3)", "(r2c3)", "(r3c3)"];

        assert_eq!(check_path(&grid, &path), Ok(4));
        assert_eq!(validate(&grid, &path), 4);
    }

    #[test]
    fn test_empty() {
        let grid = open_3x3();
        let empty: [&str; 0] = [];

        assert_eq!(check_path(&grid, &empty), Err(Rejection::Empty));
        assert_eq!(validate(&grid, &empty), INVALID_SCORE);
        assert_eq!(validate_text(&grid, ""), INVALID_SCORE);
    }

    #[test]
    fn test_wrong_notation() {
        let grid = open_3x3();
        let path = ["R1C1", "R1C2", "R1C3", "R2C3", "R3C3"];

        assert!(matches!(
            check_path(&grid, &path),
            Err(Rejection::Notation(NotationError::BadToken { index: 0, .. }))
        ));
        assert_eq!(validate(&grid, &path), INVALID_SCORE);
    }

    #[test]
    fn test_one_bad_token_rejects_everything() {
        let grid = open_3x3();
        let path = ["(r1c1)", "(r1c2)", "(R1C3)", "(r2c3)", "(r3c3)"];
        assert_eq!(validate(&grid, &path), INVALID_SCORE);
    }

    #[test]
    fn test_endpoints() {
        let grid = open_3x3();

        assert_eq!(
            check_path(&grid, &["(r1c2)", "(r1c3)", "(r2c3)", "(r3c3)"]),
            Err(Rejection::WrongStart {
                expected: Cell::new(1, 1),
                found: Cell::new(1, 2)
            })
        );
        assert_eq!(
            check_path(&grid, &["(r1c1)", "(r1c2)", "(r1c3)", "(r2c3)"]),
            Err(Rejection::WrongEnd {
                expected: Cell::new(3, 3),
                found: Cell::new(2, 3)
            })
        );
    }

    #[test]
    fn test_wall_on_path() {
        let grid = Grid::new(3, 3, Cell::new(1, 1), Cell::new(3, 3), &[Cell::new(2, 2)]);
        let path = ["(r1c1)", "(r2c1)", "(r2c2)", "(r2c3)", "(r3c3)"];

        assert_eq!(
            check_path(&grid, &path),
            Err(Rejection::Wall {
                index: 2,
                cell: Cell::new(2, 2)
            })
        );
    }

    #[test]
    fn test_out_of_bounds() {
        let grid = open_3x3();
        let path = ["(r1c1)", "(r1c2)", "(r1c3)", "(r1c4)", "(r2c4)", "(r2c3)", "(r3c3)"];

        assert_eq!(
            check_path(&grid, &path),
            Err(Rejection::OutOfBounds {
                index: 3,
                cell: Cell::new(1, 4)
            })
        );
    }

    #[test]
    fn test_bounds_checked_before_adjacency() {
        let grid = open_3x3();
        // Jumps and also leaves the grid; the bounds stage reports first
        let path = ["(r1c1)", "(r9c9)", "(r3c3)"];
        assert!(matches!(
            check_path(&grid, &path),
            Err(Rejection::OutOfBounds { index: 1, .. })
        ));
    }

    #[test]
    fn test_skipped_cell() {
        let grid = Grid::new(4, 1, Cell::new(1, 1), Cell::new(1, 4), &[]);
        let path = ["(r1c1)", "(r1c2)", "(r1c4)"];

        assert_eq!(
            check_path(&grid, &path),
            Err(Rejection::NotAdjacent {
                index: 2,
                from: Cell::new(1, 2),
                to: Cell::new(1, 4)
            })
        );
        assert_eq!(validate(&grid, &path), INVALID_SCORE);
    }

    #[test]
    fn test_diagonal_and_standing_still() {
        let grid = Grid::new(2, 2, Cell::new(1, 1), Cell::new(2, 2), &[]);

        assert_eq!(validate(&grid, &["(r1c1)", "(r2c2)"]), INVALID_SCORE);
        assert_eq!(
            validate(&grid, &["(r1c1)", "(r1c1)", "(r1c2)", "(r2c2)"]),
            INVALID_SCORE
        );
    }

    #[test]
    fn test_revisiting_cells_is_allowed() {
        // Back-and-forth steps are legal moves, they just cost more
        let grid = Grid::new(2, 1, Cell::new(1, 1), Cell::new(1, 2), &[]);
        let path = ["(r1c1)", "(r1c2)", "(r1c1)", "(r1c2)"];
        assert_eq!(validate(&grid, &path), 3);
    }

    #[test]
    fn test_start_equals_end() {
        let grid = Grid::new(3, 3, Cell::new(2, 2), Cell::new(2, 2), &[]);

        assert_eq!(validate(&grid, &["(r2c2)"]), 0);
        assert_eq!(validate(&grid, &["(r2c1)"]), INVALID_SCORE);
    }

    #[test]
    fn test_walled_start_rejects_every_path() {
        let grid = Grid::new(2, 2, Cell::new(1, 1), Cell::new(1, 2), &[Cell::new(1, 1)]);
        assert_eq!(
            check_path(&grid, &["(r1c1)", "(r1c2)"]),
            Err(Rejection::Wall {
                index: 0,
                cell: Cell::new(1, 1)
            })
        );
    }

    #[test]
    fn test_validate_text() {
        let grid = open_3x3();
        assert_eq!(
            validate_text(&grid, "(r1c1) (r2c1), (r3c1) -> (r3c2) (r3c3)"),
            4
        );
        assert_eq!(validate_text(&grid, "(r1c1)(r2c1)(r3c1)(r3c2)(r3c3)"), INVALID_SCORE);
    }

    #[test]
    fn test_garbage_never_panics() {
        let grid = open_3x3();
        for text in [
            "\u{0}",
            "((((",
            "(r1c1",
            "(r99999999999999999999c1)",
            "(r9223372036854775807c9223372036854775807)",
            "🦀 (r1c1) 🦀",
            "->->->",
        ] {
            assert_eq!(validate_text(&grid, text), INVALID_SCORE, "input {:?}", text);
        }
    }

    #[test]
    fn test_idempotent() {
        let grid = open_3x3();
        let path = ["(r1c1)", "(r2c1)", "(r3c1)", "(r3c2)", "(r3c3)"];
        assert_eq!(validate(&grid, &path), validate(&grid, &path));
    }
}
