//! Path notation shared by the solver and the validator.
//!
//! A cell is written `(r<row>c<col>)`, e.g. `(r2c3)` for row 2, column 3.
//! Both numbers are positive decimal integers without sign or leading zeros.
//! A path is an ordered list of such tokens.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::grid::Cell;

static CELL_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\(r([1-9][0-9]*)c([1-9][0-9]*)\)$").expect("valid cell regex"));

static SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\s|,|->)+").expect("valid separator regex"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("token {index} `{token}` is not of the form (r<row>c<col>)")]
    BadToken { index: usize, token: String },
}

pub fn encode_cell(cell: Cell) -> String {
    format!("(r{}c{})", cell.row, cell.col)
}

/// Parse a single token. Anything other than the exact grammar fails,
/// including surrounding whitespace and the uppercase `R1C1` form.
pub fn decode_cell(token: &str) -> Option<Cell> {
    let caps = CELL_TOKEN.captures(token)?;
    let row = caps[1].parse().ok()?;
    let col = caps[2].parse().ok()?;
    Some(Cell::new(row, col))
}

pub fn encode_path(path: &[Cell]) -> Vec<String> {
    path.iter().copied().map(encode_cell).collect()
}

/// Parse every token of a path; the first bad token rejects the whole path
pub fn decode_path<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Cell>, NotationError> {
    tokens
        .iter()
        .enumerate()
        .map(|(index, token)| {
            let token = token.as_ref();
            decode_cell(token).ok_or_else(|| NotationError::BadToken {
                index,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Split a free-form path string such as `(r1c1), (r1c2) -> (r2c2)` into
/// tokens. Tokens themselves are not checked here.
pub fn split_tokens(text: &str) -> Vec<&str> {
    SEPARATORS
        .split(text)
        .filter(|token| !token.is_empty())
        .collect()
}
