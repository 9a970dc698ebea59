use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub solver: SolverConfig,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SolverConfig {
    /// Team name written into generated solutions
    #[serde(default = "default_team")]
    pub team: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_maze_dir")]
    pub maze_dir: PathBuf,
    #[serde(default = "default_solution_dir")]
    pub solution_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    /// env_logger filter used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default values
fn default_team() -> String { "TeaMu".to_string() }
fn default_maze_dir() -> PathBuf { PathBuf::from("mazes") }
fn default_solution_dir() -> PathBuf { PathBuf::from("solutions") }
fn default_log_level() -> String { "info".to_string() }

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            team: default_team(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            maze_dir: default_maze_dir(),
            solution_dir: default_solution_dir(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            solver: SolverConfig::default(),
            paths: PathsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from `path`. A missing file gives the defaults;
    /// an unreadable or unparsable one is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}
