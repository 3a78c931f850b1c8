//! The structure of a crossword: fillable cells, slots and where slots cross

pub use self::slot::{Direction, Overlap, Slot, SlotId};

use std::fs;
use std::path::Path;

use ahash::AHashMap;
use itertools::Itertools;

use crate::collections::grid::Coord;
use crate::collections::Grid;
use crate::error::{FromFileError, InvalidCrossword, ParseCrosswordError};
use crate::solve::Assignment;

mod parse;
mod slot;

/// An unfilled crossword
#[derive(Debug)]
pub struct Crossword {
    cells: Grid<bool>,
    slots: Vec<Slot>,
    overlaps: AHashMap<(SlotId, SlotId), Overlap>,
    neighbors: Vec<Vec<SlotId>>,
}

impl Crossword {
    /// Creates a crossword from its fillable cells and the slots laid over them.
    /// Slot ids must match their position in `slots`.
    pub fn new(cells: Grid<bool>, slots: Vec<Slot>) -> Result<Self, InvalidCrossword> {
        let mut occupants = Grid::with_value(cells.width(), cells.height(), Vec::new());
        for (i, slot) in slots.iter().enumerate() {
            if slot.id() != i {
                return Err(InvalidCrossword::new(format!(
                    "slot at position {} has id {}",
                    i,
                    slot.id()
                )));
            }
            if slot.length() == 0 {
                return Err(InvalidCrossword::new(format!("slot {} is empty", i)));
            }
            for (letter, coord) in slot.cells().enumerate() {
                if cells.get(coord) != Some(&true) {
                    return Err(InvalidCrossword::new(format!(
                        "slot {} covers {:?} which is not a fillable cell",
                        i, coord
                    )));
                }
                occupants[coord].push((slot.id(), letter));
            }
        }
        let overlaps = build_overlaps(&slots, &occupants)?;
        let mut neighbors = vec![Vec::new(); slots.len()];
        for &(a, b) in overlaps.keys() {
            neighbors[a].push(b);
        }
        for list in &mut neighbors {
            list.sort_unstable();
        }
        debug!(
            "crossword has {} slots and {} crossings",
            slots.len(),
            overlaps.len() / 2
        );
        Ok(Self {
            cells,
            slots,
            overlaps,
            neighbors,
        })
    }

    /// Creates a crossword where exactly the cells covered by `slots` are fillable
    pub fn from_slots(
        width: usize,
        height: usize,
        slots: Vec<Slot>,
    ) -> Result<Self, InvalidCrossword> {
        let mut cells = Grid::with_value(width, height, false);
        for coord in slots.iter().flat_map(|slot| slot.cells()) {
            if !cells.contains(coord) {
                return Err(InvalidCrossword::new(format!(
                    "{:?} is outside of a {}x{} grid",
                    coord, width, height
                )));
            }
            cells[coord] = true;
        }
        Self::new(cells, slots)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FromFileError> {
        let s = fs::read_to_string(path)?;
        let crossword = Self::parse(&s)?;
        Ok(crossword)
    }

    pub fn parse(s: &str) -> Result<Self, ParseCrosswordError> {
        parse::parse_crossword(s)
    }

    pub fn width(&self) -> usize {
        self.cells.width()
    }

    pub fn height(&self) -> usize {
        self.cells.height()
    }

    pub fn cells(&self) -> &Grid<bool> {
        &self.cells
    }

    pub fn is_fillable(&self, coord: Coord) -> bool {
        self.cells.get(coord).copied().unwrap_or(false)
    }

    pub fn slot(&self, id: SlotId) -> &Slot {
        &self.slots[id]
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// The letter indices at which `a` and `b` cross, if they do
    pub fn overlap(&self, a: SlotId, b: SlotId) -> Option<Overlap> {
        self.overlaps.get(&(a, b)).copied()
    }

    /// Slots crossing `id`, in ascending order
    pub fn neighbors(&self, id: SlotId) -> &[SlotId] {
        &self.neighbors[id]
    }

    /// Every ordered pair of crossing slots
    pub fn arcs(&self) -> impl Iterator<Item = (SlotId, SlotId)> + '_ {
        self.neighbors
            .iter()
            .enumerate()
            .flat_map(|(x, list)| list.iter().map(move |&y| (x, y)))
    }

    /// Checks that `assignment` fills every slot with a distinct word of the right length
    /// and that crossing slots agree on their shared letters
    pub fn verify(&self, assignment: &Assignment) -> bool {
        if assignment.len() != self.slots.len() {
            return false;
        }
        let letters: Option<Vec<Vec<char>>> = self
            .slots
            .iter()
            .map(|slot| assignment.get(slot.id()).map(|word| word.chars().collect()))
            .collect();
        let letters = match letters {
            Some(letters) => letters,
            None => return false,
        };
        let lengths_match = self
            .slots
            .iter()
            .all(|slot| letters[slot.id()].len() == slot.length());
        if !lengths_match {
            return false;
        }
        if assignment.iter().map(|(_, word)| word).unique().count() != assignment.len() {
            return false;
        }
        self.overlaps
            .iter()
            .all(|(&(a, b), &Overlap(i, j))| letters[a][i] == letters[b][j])
    }
}

fn build_overlaps(
    slots: &[Slot],
    occupants: &Grid<Vec<(SlotId, usize)>>,
) -> Result<AHashMap<(SlotId, SlotId), Overlap>, InvalidCrossword> {
    let mut overlaps = AHashMap::new();
    for (coord, cell) in occupants.iter_coord() {
        for (&(a, i), &(b, j)) in cell.iter().tuple_combinations() {
            if slots[a].direction() == slots[b].direction() {
                return Err(InvalidCrossword::new(format!(
                    "slots {} and {} run {} through the same cell {:?}",
                    a,
                    b,
                    slots[a].direction().name(),
                    coord
                )));
            }
            if overlaps.insert((a, b), Overlap(i, j)).is_some() {
                return Err(InvalidCrossword::shared_cells(a, b));
            }
            overlaps.insert((b, a), Overlap(i, j).reversed());
        }
    }
    Ok(overlaps)
}

#[cfg(test)]
mod tests {
    use crate::collections::grid::Coord;
    use crate::crossword::{Crossword, Direction, Overlap, Slot};

    fn corner() -> Crossword {
        Crossword::from_slots(
            3,
            3,
            vec![
                Slot::new(0, Coord::new(0, 0), Direction::Across, 3),
                Slot::new(1, Coord::new(2, 0), Direction::Down, 3),
            ],
        )
        .unwrap()
    }

    #[test]
    fn overlap_is_symmetric() {
        let crossword = corner();
        assert_eq!(Some(Overlap(2, 0)), crossword.overlap(0, 1));
        assert_eq!(Some(Overlap(0, 2)), crossword.overlap(1, 0));
        assert_eq!(None, crossword.overlap(0, 0));
        assert_eq!(&[1], crossword.neighbors(0));
        assert_eq!(&[0], crossword.neighbors(1));
        assert_eq!(vec![(0, 1), (1, 0)], crossword.arcs().collect::<Vec<_>>());
    }

    #[test]
    fn fillable_cells_follow_slots() {
        let crossword = corner();
        assert!(crossword.is_fillable(Coord::new(2, 2)));
        assert!(!crossword.is_fillable(Coord::new(0, 1)));
        assert!(!crossword.is_fillable(Coord::new(5, 5)));
    }

    #[test]
    fn slot_outside_grid() {
        let result = Crossword::from_slots(
            2,
            2,
            vec![Slot::new(0, Coord::new(0, 0), Direction::Across, 3)],
        );
        assert!(result.is_err());
    }

    #[test]
    fn slot_ids_out_of_order() {
        let result = Crossword::from_slots(
            3,
            3,
            vec![
                Slot::new(1, Coord::new(0, 0), Direction::Across, 3),
                Slot::new(0, Coord::new(0, 0), Direction::Down, 3),
            ],
        );
        assert!(result.is_err());
    }

    #[test]
    fn parallel_slots_sharing_a_cell() {
        let result = Crossword::from_slots(
            4,
            1,
            vec![
                Slot::new(0, Coord::new(0, 0), Direction::Across, 3),
                Slot::new(1, Coord::new(2, 0), Direction::Across, 2),
            ],
        );
        assert!(result.is_err());
    }

    #[test]
    fn empty_slot() {
        let result = Crossword::from_slots(
            2,
            2,
            vec![Slot::new(0, Coord::new(0, 0), Direction::Down, 0)],
        );
        assert!(result.is_err());
    }

    #[test]
    fn slot_equality_is_by_id() {
        let a = Slot::new(3, Coord::new(0, 0), Direction::Across, 3);
        let b = Slot::new(3, Coord::new(1, 1), Direction::Down, 5);
        assert_eq!(a, b);
        assert_eq!(
            vec![Coord::new(1, 1), Coord::new(1, 2), Coord::new(1, 3)],
            b.cells().take(3).collect::<Vec<_>>()
        );
    }
}
