//! Maze file loading. Everything that can fail on disk or in JSON fails here,
//! so the solver and validator only ever see a well-formed [`Grid`].

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::grid::{Grid, MalformedGridError};

#[derive(Debug, Error)]
pub enum FileError {
    #[error("cannot read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid json in {path:?}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("malformed maze {path:?}: {source}")]
    Malformed {
        path: PathBuf,
        source: MalformedGridError,
    },
    #[error("cannot write {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("no mazeName in {path:?}")]
    MissingMazeName { path: PathBuf },
}

pub(crate) fn read_to_string(path: &Path) -> Result<String, FileError> {
    fs::read_to_string(path).map_err(|source| FileError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a maze JSON file into a [`Grid`]
pub fn load_grid<P: AsRef<Path>>(path: P) -> Result<Grid, FileError> {
    let path = path.as_ref();
    let json = read_to_string(path)?;
    Grid::from_json_str(&json).map_err(|source| FileError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}
