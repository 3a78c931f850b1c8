//! The vocabulary available to fill a crossword

use std::fmt;
use std::fs;
use std::io;
use std::ops::Index;
use std::path::Path;

use ahash::AHashMap;

pub type WordId = usize;

/// An upper-cased word, indexable by letter
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: Vec<char>,
}

impl Word {
    fn new(text: String) -> Self {
        let letters = text.chars().collect();
        Self { text, letters }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The number of letters in the word
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn letter(&self, i: usize) -> char {
        self.letters[i]
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A list of distinct words, each with a `WordId` given by its position
#[derive(Clone, Debug, Default)]
pub struct WordList {
    words: Vec<Word>,
    ids: AHashMap<String, WordId>,
}

impl WordList {
    /// Creates a word list from raw words. Words are trimmed and upper-cased.
    /// Blank words and repeats are skipped.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::default();
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            list.insert(word.to_uppercase());
        }
        list
    }

    /// Parses one word per line
    pub fn parse(s: &str) -> Self {
        Self::new(s.lines())
    }

    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let s = fs::read_to_string(path)?;
        let words = Self::parse(&s);
        debug!("read {} words", words.len());
        Ok(words)
    }

    fn insert(&mut self, text: String) {
        if self.ids.contains_key(&text) {
            return;
        }
        let id = self.words.len();
        self.ids.insert(text.clone(), id);
        self.words.push(Word::new(text));
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Finds the id of a word, ignoring case
    pub fn id(&self, word: &str) -> Option<WordId> {
        self.ids.get(&word.trim().to_uppercase()).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}

impl Index<WordId> for WordList {
    type Output = Word;

    fn index(&self, id: WordId) -> &Self::Output {
        &self.words[id]
    }
}
