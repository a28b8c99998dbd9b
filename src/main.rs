//! Sliding-Tile Puzzle Solver
//!
//! Finds the tile slides that turn one 3x3 board into another. Boards are
//! given row-major with 0 for the blank, either comma separated
//! (`1,2,3,4,5,6,7,8,0`) or packed (`123456780`).

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};

use tilesolve::board::{Board, BoardError, Move};
use tilesolve::replay::{self, ReplayError};
use tilesolve::search::{Algorithm, Settings, SolveError, DEFAULT_DEPTH_BOUND};
use tilesolve::solvability;

/// Textbook start board used when no subcommand is given.
const SAMPLE_INITIAL: [u8; 9] = [2, 8, 3, 1, 6, 4, 7, 0, 5];
const SAMPLE_GOAL: [u8; 9] = [1, 2, 3, 8, 0, 4, 7, 6, 5];

/// Solves 3x3 sliding-tile puzzles between arbitrary boards.
#[derive(Parser)]
#[command(name = "tilesolve")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args)]
struct PuzzleArgs {
    /// Starting board.
    #[arg(long)]
    initial: Board,
    /// Board to reach.
    #[arg(long, default_value = "123456780")]
    goal: Board,
}

#[derive(Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    Bfs,
    Dfs,
    Dls,
    Astar,
    Bidir,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Bfs => Algorithm::BreadthFirst,
            AlgorithmArg::Dfs => Algorithm::DepthFirst,
            AlgorithmArg::Dls => Algorithm::DepthLimited,
            AlgorithmArg::Astar => Algorithm::AStar,
            AlgorithmArg::Bidir => Algorithm::Bidirectional,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Solve one puzzle and print the moves.
    Solve {
        #[command(flatten)]
        puzzle: PuzzleArgs,
        /// Search algorithm.
        #[arg(long, value_enum, default_value_t = AlgorithmArg::Bfs)]
        algorithm: AlgorithmArg,
        /// Depth bound for depth-limited search.
        #[arg(long, default_value_t = DEFAULT_DEPTH_BOUND)]
        depth: u32,
        /// Print the board after every move.
        #[arg(long)]
        steps: bool,
    },
    /// Report inversion counts and whether the goal is reachable.
    Check {
        #[command(flatten)]
        puzzle: PuzzleArgs,
    },
    /// Run every algorithm on one puzzle and compare the results.
    Compare {
        #[command(flatten)]
        puzzle: PuzzleArgs,
        /// Depth bound for depth-limited search.
        #[arg(long, default_value_t = DEFAULT_DEPTH_BOUND)]
        depth: u32,
    },
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("{_0}")]
    Board(BoardError),
    #[display("{_0}")]
    Solve(SolveError),
    #[display("{_0}")]
    Replay(ReplayError),
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::Solve {
            puzzle,
            algorithm,
            depth,
            steps,
        }) => run_solve(&puzzle, Settings::new(algorithm.into(), depth), steps),
        Some(Command::Check { puzzle }) => {
            run_check(&puzzle);
            Ok(())
        }
        Some(Command::Compare { puzzle, depth }) => {
            run_compare(&puzzle, depth);
            Ok(())
        }
        None => run_sample(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            if matches!(err, CliError::Solve(SolveError::DepthExhausted)) {
                eprintln!("A larger --depth may find a solution.");
            }
            ExitCode::FAILURE
        }
    }
}

/// Solves one puzzle, printing statistics, the moves, and optionally each board.
fn run_solve(puzzle: &PuzzleArgs, settings: Settings, steps: bool) -> Result<(), CliError> {
    let solution = tilesolve::solve(&puzzle.initial, &puzzle.goal, &settings)?;

    println!(
        "{}: {} expanded, {} generated",
        settings.algorithm, solution.stats.expanded, solution.stats.generated
    );
    println!("{}", format_moves(&solution.moves));
    if steps {
        println!();
        print!("{}", replay::format_replay(&puzzle.initial, &solution.moves)?);
    }

    Ok(())
}

/// Prints inversion counts and the solvability verdict.
fn run_check(puzzle: &PuzzleArgs) {
    let parity = |count: usize| if count % 2 == 0 { "even" } else { "odd" };
    let initial = solvability::inversions(&puzzle.initial);
    let goal = solvability::inversions(&puzzle.goal);

    println!("initial inversions: {} ({})", initial, parity(initial));
    println!("goal inversions: {} ({})", goal, parity(goal));
    if solvability::is_solvable(&puzzle.initial, &puzzle.goal) {
        println!("solvable");
    } else {
        println!("not solvable");
    }
}

/// Runs every algorithm and prints one row per algorithm.
fn run_compare(puzzle: &PuzzleArgs, depth: u32) {
    println!(
        "{:<10}{:>8}{:>12}{:>12}",
        "algorithm", "moves", "expanded", "generated"
    );
    for algorithm in Algorithm::ALL {
        let settings = Settings::new(algorithm, depth);
        match tilesolve::solve(&puzzle.initial, &puzzle.goal, &settings) {
            Ok(solution) => println!(
                "{:<10}{:>8}{:>12}{:>12}",
                algorithm.to_string(),
                solution.moves.len(),
                solution.stats.expanded,
                solution.stats.generated
            ),
            Err(err) => println!("{:<10}{}", algorithm.to_string(), err),
        }
    }
}

/// Solves the built-in sample with breadth-first search and shows every step.
fn run_sample() -> Result<(), CliError> {
    let (initial, goal) = sample()?;
    println!("No command given, solving a sample puzzle with bfs.\n");
    print!("{}", sample_report(&initial, &goal)?);
    Ok(())
}

fn sample() -> Result<(Board, Board), BoardError> {
    Ok((Board::new(SAMPLE_INITIAL)?, Board::new(SAMPLE_GOAL)?))
}

/// Formats the move list followed by the full replay.
fn sample_report(initial: &Board, goal: &Board) -> Result<String, CliError> {
    let solution = tilesolve::solve(initial, goal, &Settings::default())?;
    let mut output = format_moves(&solution.moves);
    output.push_str("\n\n");
    output.push_str(&replay::format_replay(initial, &solution.moves)?);
    Ok(output)
}

/// Formats a move list as `N moves: a b c`.
fn format_moves(moves: &[Move]) -> String {
    let noun = if moves.len() == 1 { "move" } else { "moves" };
    let tiles: Vec<String> = moves.iter().map(Move::to_string).collect();
    if tiles.is_empty() {
        format!("0 {noun}: already at the goal")
    } else {
        format!("{} {noun}: {}", moves.len(), tiles.join(" "))
    }
}
