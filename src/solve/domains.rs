use std::ops::Index;

use crate::collections::RangeSet;
use crate::crossword::SlotId;
use crate::words::WordId;

/// The words still possible for each slot
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Domains {
    sets: Vec<RangeSet>,
}

impl Domains {
    /// Every slot starts with the entire word list
    pub fn with_all(slot_count: usize, word_count: usize) -> Self {
        Self {
            sets: vec![RangeSet::with_all(word_count); slot_count],
        }
    }

    pub fn len(&self, slot: SlotId) -> usize {
        self.sets[slot].len()
    }

    /// Removes every word from the slot's domain for which `f` returns false.
    /// Returns the number of words removed.
    pub fn retain(&mut self, slot: SlotId, f: impl FnMut(WordId) -> bool) -> usize {
        self.sets[slot].retain(f)
    }

    #[cfg(test)]
    pub fn remove(&mut self, slot: SlotId, word: WordId) -> bool {
        self.sets[slot].remove(word)
    }

    /// The first slot with no words left
    pub fn empty_slot(&self) -> Option<SlotId> {
        self.sets.iter().position(RangeSet::is_empty)
    }
}

impl Index<SlotId> for Domains {
    type Output = RangeSet;

    fn index(&self, slot: SlotId) -> &Self::Output {
        &self.sets[slot]
    }
}
