//! Fill crosswords by constraint satisfaction

pub use self::assignment::Assignment;

use crate::crossword::Crossword;
use crate::solve::consistency::{PropagateResult, Propagator};
use crate::solve::domains::Domains;
use crate::solve::search::SearchContext;
use crate::words::WordList;

mod assignment;
mod consistency;
mod domains;
mod search;

/// The outcome of filling a crossword
pub enum SolveResult {
    /// No assignment fills the crossword with the given words
    Unsolvable,
    /// Every slot has a word
    Solved(SolvedData),
}

impl SolveResult {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveResult::Solved(_))
    }

    pub fn solved(&self) -> Option<&SolvedData> {
        match self {
            SolveResult::Solved(data) => Some(data),
            SolveResult::Unsolvable => None,
        }
    }

    pub fn into_assignment(self) -> Option<Assignment> {
        match self {
            SolveResult::Solved(data) => Some(data.assignment),
            SolveResult::Unsolvable => None,
        }
    }
}

/// A filled crossword and how the search got there
pub struct SolvedData {
    pub assignment: Assignment,
    pub stats: SolveStats,
}

/// Counters collected while solving
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SolveStats {
    /// arc revisions that removed words before the search started
    pub revisions: usize,
    /// partial assignments visited by the search
    pub states: u64,
    /// tentative assignments that were undone
    pub backtracks: u64,
    /// the number of assigned slots in the deepest state visited
    pub max_depth: usize,
}

pub struct CrosswordSolver<'a> {
    crossword: &'a Crossword,
    words: &'a WordList,
}

impl<'a> CrosswordSolver<'a> {
    pub fn new(crossword: &'a Crossword, words: &'a WordList) -> Self {
        Self { crossword, words }
    }

    pub fn solve(&self) -> SolveResult {
        let mut domains = Domains::with_all(self.crossword.slot_count(), self.words.len());
        let propagator = Propagator::new(self.crossword, self.words);
        propagator.enforce_node_consistency(&mut domains);
        if let Some(slot) = domains.empty_slot() {
            info!("No word fits slot {}", self.crossword.slot(slot));
            return SolveResult::Unsolvable;
        }
        let revisions = match propagator.propagate(&mut domains, None) {
            PropagateResult::Consistent { revisions } => revisions,
            PropagateResult::Invalid { slot } => {
                info!("No word fits slot {} after arc consistency", self.crossword.slot(slot));
                return SolveResult::Unsolvable;
            }
        };
        info!("Begin backtracking");
        let mut context = SearchContext::new(self.crossword, self.words, &domains);
        let solution = context.search_solution();
        let stats = SolveStats {
            revisions,
            ..*context.stats()
        };
        info!("{:?}", stats);
        let assignment = match solution {
            Some(solution) => Assignment::from_word_ids(&solution, self.words),
            None => return SolveResult::Unsolvable,
        };
        debug_assert!(self.crossword.verify(&assignment));
        SolveResult::Solved(SolvedData { assignment, stats })
    }
}

/// Fills every slot of `crossword` with a distinct word from `words`.
/// Returns `None` if the crossword cannot be filled.
pub fn solve(crossword: &Crossword, words: &WordList) -> Option<Assignment> {
    CrosswordSolver::new(crossword, words).solve().into_assignment()
}
