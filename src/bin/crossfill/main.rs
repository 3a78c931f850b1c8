#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

use anyhow::{Context, Result};

use crossfill::crossword::Crossword;
use crossfill::render;
use crossfill::solve::{CrosswordSolver, SolveResult, SolveStats};
use crossfill::words::WordList;

use crate::options::Options;

mod options;

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args()?;
    let crossword = Crossword::from_file(options.structure_path()).with_context(|| {
        format!("failed to read structure from \"{}\"", options.structure_path().display())
    })?;
    let words = WordList::from_file(options.words_path()).with_context(|| {
        format!("failed to read words from \"{}\"", options.words_path().display())
    })?;
    let data = match CrosswordSolver::new(&crossword, &words).solve() {
        SolveResult::Unsolvable => {
            println!("No solution.");
            return Ok(());
        }
        SolveResult::Solved(data) => data,
    };
    print!("{}", render::render(&crossword, &data.assignment));
    if let Some(path) = options.output_path() {
        render::save(path, &crossword, &data.assignment)
            .with_context(|| format!("failed to save to \"{}\"", path.display()))?;
        println!("Saved crossword to {}", path.display());
    }
    if options.stats() {
        print_stats(&data.stats);
    }
    Ok(())
}

fn print_stats(stats: &SolveStats) {
    println!("Revisions: {}", stats.revisions);
    println!("States: {}", stats.states);
    println!("Backtracks: {}", stats.backtracks);
    println!("Max depth: {}", stats.max_depth);
}
