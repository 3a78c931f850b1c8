use std::iter::FromIterator;
use std::ops::Index;

use vec_map::VecMap;

use crate::crossword::{Slot, SlotId};
use crate::words::{WordId, WordList};

/// Words chosen for the slots of a crossword
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Assignment {
    words: VecMap<String>,
}

impl Assignment {
    pub(crate) fn from_word_ids(ids: &VecMap<WordId>, words: &WordList) -> Self {
        ids.iter()
            .map(|(slot, &word)| (slot, words[word].as_str()))
            .collect()
    }

    /// The number of slots with a word
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, slot: SlotId) -> Option<&str> {
        self.words.get(slot).map(String::as_str)
    }

    /// The letter written into the `i`th cell of the slot
    pub fn letter(&self, slot: &Slot, i: usize) -> Option<char> {
        self.get(slot.id())?.chars().nth(i)
    }

    /// Every slot with its word, in slot order
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &str)> {
        self.words.iter().map(|(slot, word)| (slot, word.as_str()))
    }
}

impl<S: Into<String>> FromIterator<(SlotId, S)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (SlotId, S)>>(iter: T) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(|(slot, word)| (slot, word.into()))
                .collect(),
        }
    }
}

impl Index<SlotId> for Assignment {
    type Output = str;

    fn index(&self, slot: SlotId) -> &Self::Output {
        self.words[slot].as_str()
    }
}

impl Index<&Slot> for Assignment {
    type Output = str;

    fn index(&self, slot: &Slot) -> &Self::Output {
        &self[slot.id()]
    }
}
