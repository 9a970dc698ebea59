use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, error, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use mazescore::config::{Config, DEFAULT_CONFIG_PATH};
use mazescore::notation::{decode_path, split_tokens};
use mazescore::solution::{score_solution_file, solution_file_name};
use mazescore::{check_path, load_grid, Solution, INVALID_SCORE};

/// Solve grid mazes and score submitted paths.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// Configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve maze files and write one solution file per maze
    Solve {
        /// Maze JSON files
        #[arg(required = true)]
        mazes: Vec<PathBuf>,

        /// Team name stored in the solutions [default: from config]
        #[arg(short, long)]
        team: Option<String>,

        /// Directory for solution files [default: from config]
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
    /// Score solution files against the mazes they name
    Validate {
        /// Solution JSON files
        #[arg(required = true)]
        solutions: Vec<PathBuf>,

        /// Directory holding the maze files [default: from config]
        #[arg(short, long)]
        maze_dir: Option<PathBuf>,
    },
    /// Score a path given on the command line
    Check {
        /// Maze JSON file
        maze: PathBuf,

        /// Path tokens, e.g. "(r1c1)" "(r1c2)"; separators may also be commas or "->"
        tokens: Vec<String>,
    },
    /// Print a maze, optionally with a solution's path drawn on it
    Show {
        /// Maze JSON file
        maze: PathBuf,

        /// Solution JSON file
        solution: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let (config, config_error) = match Config::load(&args.config) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    let level = if args.debug {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Some(e) = config_error {
        warn!("{:#}; using default configuration", e);
    }

    match run(args.command, &config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when some input files could not be processed
fn run(command: Command, config: &Config) -> Result<bool> {
    match command {
        Command::Solve {
            mazes,
            team,
            out_dir,
        } => {
            let team = team.unwrap_or_else(|| config.solver.team.clone());
            let out_dir = out_dir.unwrap_or_else(|| config.paths.solution_dir.clone());
            solve_all(&mazes, &team, &out_dir)
        }
        Command::Validate {
            solutions,
            maze_dir,
        } => {
            let maze_dir = maze_dir.unwrap_or_else(|| config.paths.maze_dir.clone());
            Ok(validate_all(&solutions, &maze_dir))
        }
        Command::Check { maze, tokens } => {
            check(&maze, &tokens)?;
            Ok(true)
        }
        Command::Show { maze, solution } => {
            show(&maze, solution.as_deref())?;
            Ok(true)
        }
    }
}

fn solve_all(mazes: &[PathBuf], team: &str, out_dir: &Path) -> Result<bool> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create solution directory: {:?}", out_dir))?;

    let mut all_ok = true;
    for maze_path in mazes {
        let grid = match load_grid(maze_path) {
            Ok(grid) => grid,
            Err(e) => {
                error!("{}", e);
                println!("Failed to generate solution for {}", maze_path.display());
                all_ok = false;
                continue;
            }
        };

        let maze_name = maze_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| maze_path.display().to_string());

        let Some(solution) = Solution::generate(&grid, team, &maze_name) else {
            println!("No valid path found for {}", maze_path.display());
            continue;
        };

        let output_file = out_dir.join(solution_file_name(&maze_name));
        if let Err(e) = solution.save_to_file(&output_file) {
            error!("{}", e);
            println!("Failed to save solution for {}", maze_path.display());
            all_ok = false;
            continue;
        }
        info!("Solution for {} saved to {}", maze_name, output_file.display());
        println!(
            "{}: moves {}, execution time {:.2}s",
            maze_name,
            solution.claimed_moves(),
            solution.execution_time
        );
    }
    Ok(all_ok)
}

fn validate_all(solutions: &[PathBuf], maze_dir: &Path) -> bool {
    let mut all_ok = true;
    for solution_path in solutions {
        let moves = match score_solution_file(solution_path, maze_dir) {
            Ok(moves) => moves,
            Err(e) => {
                error!("{}", e);
                all_ok = false;
                INVALID_SCORE
            }
        };
        println!("Validation for {}: {} moves", solution_path.display(), moves);
    }
    all_ok
}

fn check(maze: &Path, tokens: &[String]) -> Result<()> {
    let grid = load_grid(maze)?;
    let joined = tokens.join(" ");
    let tokens = split_tokens(&joined);
    debug!("checking {} tokens against {}", tokens.len(), maze.display());

    match check_path(&grid, &tokens) {
        Ok(moves) => println!("{}", moves),
        Err(rejection) => println!("{} ({})", INVALID_SCORE, rejection),
    }
    Ok(())
}

fn show(maze: &Path, solution: Option<&Path>) -> Result<()> {
    let grid = load_grid(maze)?;
    let path = match solution {
        Some(solution) => {
            let solution = Solution::load_from_file(solution)?;
            match decode_path(&solution.path) {
                Ok(cells) => cells,
                Err(e) => {
                    warn!("not drawing path: {}", e);
                    Vec::new()
                }
            }
        }
        None => Vec::new(),
    };
    print!("{}", grid.render(&path));
    Ok(())
}
