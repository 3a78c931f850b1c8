use std::fmt;
use std::hash::{Hash, Hasher};

use crate::collections::grid::Coord;

pub type SlotId = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    pub fn name(self) -> &'static str {
        match self {
            Direction::Across => "across",
            Direction::Down => "down",
        }
    }
}

/// A run of cells in one direction to be filled by exactly one word.
/// Slots are identified by their id alone.
#[derive(Clone, Debug)]
pub struct Slot {
    id: SlotId,
    start: Coord,
    direction: Direction,
    length: usize,
}

impl Slot {
    pub fn new(id: SlotId, start: Coord, direction: Direction, length: usize) -> Self {
        Self {
            id,
            start,
            direction,
            length,
        }
    }

    pub fn id(&self) -> SlotId {
        self.id
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The number of letters a word needs to fill this slot
    pub fn length(&self) -> usize {
        self.length
    }

    /// The coordinate of the letter at index `i` of the slot's word
    pub fn cell(&self, i: usize) -> Coord {
        assert!(i < self.length, "letter {} is outside of slot {}", i, self.id);
        match self.direction {
            Direction::Across => self.start.offset(i, 0),
            Direction::Down => self.start.offset(0, i),
        }
    }

    /// Every covered coordinate, in word order
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.length).map(move |i| self.cell(i))
    }
}

impl PartialEq for Slot {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Slot {}

impl Hash for Slot {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} at {:?} (length {})",
            self.id,
            self.direction.name(),
            self.start,
            self.length
        )
    }
}

/// The letter indices at which two crossing slots share a cell,
/// in the order the slots were given
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Overlap(pub usize, pub usize);

impl Overlap {
    pub fn reversed(self) -> Self {
        Overlap(self.1, self.0)
    }
}
