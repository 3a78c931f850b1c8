use std::cmp::Reverse;

use vec_map::VecMap;

use crate::crossword::{Crossword, Overlap, SlotId};
use crate::solve::domains::Domains;
use crate::solve::SolveStats;
use crate::words::{WordId, WordList};

/// A partial assignment of words to slots
pub(crate) type PartialAssignment = VecMap<WordId>;

/// Backtracking search over domains that are already arc consistent.
/// Domains are never modified during the search.
pub(crate) struct SearchContext<'a> {
    crossword: &'a Crossword,
    words: &'a WordList,
    domains: &'a Domains,
    stats: SolveStats,
}

impl<'a> SearchContext<'a> {
    pub fn new(crossword: &'a Crossword, words: &'a WordList, domains: &'a Domains) -> Self {
        Self {
            crossword,
            words,
            domains,
            stats: SolveStats::default(),
        }
    }

    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }

    pub fn search_solution(&mut self) -> Option<PartialAssignment> {
        let mut assignment = VecMap::with_capacity(self.crossword.slot_count());
        if self.search_next(&mut assignment) {
            Some(assignment)
        } else {
            None
        }
    }

    fn search_next(&mut self, assignment: &mut PartialAssignment) -> bool {
        self.stats.states += 1;
        let depth = assignment.len();
        self.stats.max_depth = self.stats.max_depth.max(depth);
        let slot = match self.select_unassigned_slot(assignment) {
            Some(slot) => slot,
            // every slot is assigned
            None => return true,
        };
        for (i, word) in self.order_domain_values(slot, assignment).into_iter().enumerate() {
            if !self.is_consistent(assignment, slot, word) {
                continue;
            }
            trace!(
                "Guessing {} for slot {} (depth={}, guess #: {})",
                self.words[word],
                slot,
                depth + 1,
                i + 1
            );
            assignment.insert(slot, word);
            if self.search_next(assignment) {
                return true;
            }
            assignment.remove(slot);
            self.stats.backtracks += 1;
        }
        debug!("No word fits slot {} (depth={})", slot, depth + 1);
        false
    }

    /// Picks the unassigned slot with the fewest remaining words,
    /// preferring the slot with the most neighbors on a tie
    pub fn select_unassigned_slot(&self, assignment: &PartialAssignment) -> Option<SlotId> {
        (0..self.crossword.slot_count())
            .filter(|&slot| !assignment.contains_key(slot))
            .min_by_key(|&slot| {
                (
                    self.domains.len(slot),
                    Reverse(self.crossword.neighbors(slot).len()),
                )
            })
    }

    /// The words of a slot's domain, ordered by how many words they rule out
    /// from the domains of unassigned neighbors, fewest first
    pub fn order_domain_values(
        &self,
        slot: SlotId,
        assignment: &PartialAssignment,
    ) -> Vec<WordId> {
        let neighbors: Vec<(SlotId, Overlap)> = self
            .crossword
            .neighbors(slot)
            .iter()
            .filter(|&&neighbor| !assignment.contains_key(neighbor))
            .filter_map(|&neighbor| {
                self.crossword
                    .overlap(slot, neighbor)
                    .map(|overlap| (neighbor, overlap))
            })
            .collect();
        let mut values: Vec<(WordId, usize)> = self.domains[slot]
            .iter()
            .map(|word| (word, self.ruled_out(word, &neighbors)))
            .collect();
        values.sort_by_key(|&(_, ruled_out)| ruled_out);
        values.into_iter().map(|(word, _)| word).collect()
    }

    fn ruled_out(&self, word: WordId, neighbors: &[(SlotId, Overlap)]) -> usize {
        neighbors
            .iter()
            .map(|&(neighbor, Overlap(i, j))| {
                let letter = self.words[word].letter(i);
                self.domains[neighbor]
                    .iter()
                    .filter(|&other| self.words[other].letter(j) != letter)
                    .count()
            })
            .sum()
    }

    /// Checks `word` in `slot` against the rest of the assignment: the word is not used
    /// by another slot and agrees with every assigned crossing slot
    pub fn is_consistent(
        &self,
        assignment: &PartialAssignment,
        slot: SlotId,
        word: WordId,
    ) -> bool {
        assignment
            .iter()
            .filter(|&(other, _)| other != slot)
            .all(|(other, &other_word)| {
                if other_word == word {
                    return false;
                }
                match self.crossword.overlap(slot, other) {
                    Some(Overlap(i, j)) => {
                        self.words[word].letter(i) == self.words[other_word].letter(j)
                    }
                    None => true,
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use vec_map::VecMap;

    use crate::collections::grid::Coord;
    use crate::crossword::{Crossword, Direction, Slot};
    use crate::solve::domains::Domains;
    use crate::solve::search::SearchContext;
    use crate::words::WordList;

    fn rows(count: usize) -> Crossword {
        let slots = (0..count)
            .map(|row| Slot::new(row, Coord::new(0, row * 2), Direction::Across, 3))
            .collect();
        Crossword::from_slots(3, count * 2, slots).unwrap()
    }

    #[test]
    fn select_fewest_remaining_values() {
        let crossword = rows(3);
        let words = WordList::new(vec!["cat", "dog", "elk"]);
        let mut domains = Domains::with_all(3, words.len());
        // sizes: slot 0 = 3, slot 1 = 1, slot 2 = 2
        domains.remove(1, 0);
        domains.remove(1, 1);
        domains.remove(2, 2);
        let context = SearchContext::new(&crossword, &words, &domains);
        assert_eq!(Some(1), context.select_unassigned_slot(&VecMap::new()));

        let mut assignment = VecMap::new();
        assignment.insert(1, 2);
        assert_eq!(Some(2), context.select_unassigned_slot(&assignment));
        assignment.insert(2, 0);
        assignment.insert(0, 1);
        assert_eq!(None, context.select_unassigned_slot(&assignment));
    }

    #[test]
    fn select_most_neighbors_on_tie() {
        // slot 0 stands alone, slot 1 is crossed by slots 2 and 3
        let crossword = Crossword::from_slots(
            3,
            5,
            vec![
                Slot::new(0, Coord::new(0, 0), Direction::Across, 3),
                Slot::new(1, Coord::new(0, 2), Direction::Across, 3),
                Slot::new(2, Coord::new(0, 2), Direction::Down, 3),
                Slot::new(3, Coord::new(2, 2), Direction::Down, 3),
            ],
        )
        .unwrap();
        let words = WordList::new(vec!["cat", "dog", "elk"]);
        let mut domains = Domains::with_all(4, words.len());
        domains.remove(0, 0);
        domains.remove(1, 0);
        let context = SearchContext::new(&crossword, &words, &domains);
        assert_eq!(Some(1), context.select_unassigned_slot(&VecMap::new()));
    }

    #[test]
    fn order_least_constraining_first() {
        // slot 0 across, crossed at its first letter by slot 1 down
        let crossword = Crossword::from_slots(
            3,
            3,
            vec![
                Slot::new(0, Coord::new(0, 0), Direction::Across, 3),
                Slot::new(1, Coord::new(0, 0), Direction::Down, 3),
            ],
        )
        .unwrap();
        let words = WordList::new(vec!["dog", "cat", "cow", "cup"]);
        let domains = Domains::with_all(2, words.len());
        let context = SearchContext::new(&crossword, &words, &domains);
        // words starting with C rule out 1 word of slot 1, DOG rules out 3
        let order = context.order_domain_values(0, &VecMap::new());
        assert_eq!(vec![1, 2, 3, 0], order);

        // assigned neighbors do not count
        let mut assignment = VecMap::new();
        assignment.insert(1, 1);
        assert_eq!(vec![0, 1, 2, 3], context.order_domain_values(0, &assignment));
    }

    #[test]
    fn consistency_rejects_reuse_and_conflicts() {
        let crossword = Crossword::from_slots(
            3,
            3,
            vec![
                Slot::new(0, Coord::new(0, 0), Direction::Across, 3),
                Slot::new(1, Coord::new(0, 0), Direction::Down, 3),
            ],
        )
        .unwrap();
        let words = WordList::new(vec!["cat", "cow", "dog"]);
        let domains = Domains::with_all(2, words.len());
        let context = SearchContext::new(&crossword, &words, &domains);
        let mut assignment = VecMap::new();
        assignment.insert(0, 0);
        assert!(context.is_consistent(&assignment, 1, 1));
        assert!(!context.is_consistent(&assignment, 1, 0));
        assert!(!context.is_consistent(&assignment, 1, 2));
    }

    #[test]
    fn search_fills_every_slot() {
        let crossword = rows(2);
        let words = WordList::new(vec!["cat", "dog"]);
        let domains = Domains::with_all(2, words.len());
        let mut context = SearchContext::new(&crossword, &words, &domains);
        let assignment = context.search_solution().unwrap();
        assert_eq!(2, assignment.len());
        assert_ne!(assignment[0], assignment[1]);
        assert_eq!(0, context.stats().backtracks);
    }

    #[test]
    fn search_exhausts() {
        // two slots but only one word
        let crossword = rows(2);
        let words = WordList::new(vec!["cat"]);
        let domains = Domains::with_all(2, words.len());
        let mut context = SearchContext::new(&crossword, &words, &domains);
        assert_eq!(None, context.search_solution());
        assert_eq!(1, context.stats().backtracks);
    }
}
