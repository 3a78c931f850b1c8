//! Node and arc consistency for slot domains

use itertools::Itertools;

use crate::collections::LinkedAHashSet;
use crate::crossword::{Crossword, Overlap, SlotId};
use crate::solve::domains::Domains;
use crate::words::WordList;

/// An ordered pair of crossing slots. Revising `(x, y)` prunes the domain of `x`.
pub(crate) type Arc = (SlotId, SlotId);

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum PropagateResult {
    /// Every arc is consistent. `revisions` counts the revisions that removed words.
    Consistent { revisions: usize },
    /// The domain of `slot` was emptied
    Invalid { slot: SlotId },
}

impl PropagateResult {
    #[cfg(test)]
    pub fn is_consistent(self) -> bool {
        matches!(self, PropagateResult::Consistent { .. })
    }
}

pub(crate) struct Propagator<'a> {
    crossword: &'a Crossword,
    words: &'a WordList,
}

impl<'a> Propagator<'a> {
    pub fn new(crossword: &'a Crossword, words: &'a WordList) -> Self {
        Self { crossword, words }
    }

    /// Removes words that do not have the length of their slot
    pub fn enforce_node_consistency(&self, domains: &mut Domains) {
        let words = self.words;
        for slot in self.crossword.slots() {
            let removed = domains.retain(slot.id(), |word| words[word].len() == slot.length());
            debug!(
                "removed {} words of the wrong length from slot {}, {} remain",
                removed,
                slot,
                domains.len(slot.id())
            );
        }
    }

    /// Removes words from the domain of `x` that have no matching word in the domain of `y`.
    /// Returns `true` if any word was removed. Domains must be node consistent.
    pub fn revise(&self, domains: &mut Domains, (x, y): Arc) -> bool {
        let Overlap(i, j) = match self.crossword.overlap(x, y) {
            Some(overlap) => overlap,
            None => {
                debug_assert!(false, "slots {} and {} do not cross", x, y);
                return false;
            }
        };
        let words = self.words;
        let letters: Vec<char> = domains[y]
            .iter()
            .map(|word| words[word].letter(j))
            .sorted()
            .dedup()
            .collect();
        let removed = domains.retain(x, |word| {
            letters.binary_search(&words[word].letter(i)).is_ok()
        });
        if removed > 0 {
            trace!(
                "revised slot {} against slot {}: removed {} words",
                x,
                y,
                removed
            );
        }
        removed > 0
    }

    /// Establishes arc consistency (AC-3) starting from `arcs`,
    /// or from every arc in the crossword if `arcs` is `None`
    pub fn propagate(&self, domains: &mut Domains, arcs: Option<Vec<Arc>>) -> PropagateResult {
        let mut pending: LinkedAHashSet<Arc> = match arcs {
            Some(arcs) => arcs.into_iter().collect(),
            None => self.crossword.arcs().collect(),
        };
        let mut revisions = 0;
        while let Some((x, y)) = pending.pop_front() {
            if !self.revise(domains, (x, y)) {
                continue;
            }
            revisions += 1;
            if domains[x].is_empty() {
                debug!("arc consistency emptied the domain of slot {}", x);
                return PropagateResult::Invalid { slot: x };
            }
            // words removed from x may leave words of its other neighbors unsupported
            for &z in self.crossword.neighbors(x) {
                if z != y && !pending.contains(&(z, x)) {
                    pending.insert((z, x));
                }
            }
        }
        debug!("arc consistency finished after {} revisions", revisions);
        PropagateResult::Consistent { revisions }
    }
}
