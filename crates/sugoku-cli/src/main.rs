//! Command-line front end: fetch or parse a puzzle, print it, optionally
//! solve it.

use clap::Parser;
use sugoku_core::{Difficulty, Grid, LocalProvider, Puzzle, PuzzleProvider};

#[derive(Parser)]
#[command(name = "sugoku", about = "Fetch and solve Sudoku puzzles")]
struct Args {
    /// Puzzle as an 81-character string (digits, '0' or '.' for empty).
    /// When omitted, a bundled sample of the chosen difficulty is used.
    #[arg(short, long)]
    puzzle: Option<String>,

    /// Difficulty of the sample puzzle: easy, medium, hard or random.
    #[arg(short, long, default_value = "easy")]
    difficulty: Difficulty,

    /// Also compute and print the solution.
    #[arg(short, long)]
    solve: bool,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let grid = match &args.puzzle {
        Some(s) => Grid::from_string(s)?,
        None => LocalProvider::new().fetch_puzzle(args.difficulty)?,
    };

    let mut puzzle = Puzzle::new(grid);

    match &args.puzzle {
        Some(_) => println!("Puzzle:"),
        None => println!("Puzzle ({}):", args.difficulty),
    }
    println!("{}", puzzle.original_board());
    println!(
        "Givens: {}  Empty: {}",
        puzzle.original_board().given_count(),
        puzzle.original_board().empty_count()
    );

    if args.solve {
        let solution = puzzle.solved_board()?;
        println!("\nSolution:");
        println!("{}", solution);
    }

    Ok(())
}
