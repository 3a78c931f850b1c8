//! Text rendering of filled crosswords

use std::fs;
use std::io;
use std::path::Path;

use itertools::Itertools;

use crate::collections::Grid;
use crate::crossword::Crossword;
use crate::solve::Assignment;

const BLOCKED: char = '█';
const EMPTY: char = ' ';

/// The letter in each cell. Blocked cells and cells of unassigned slots are `None`.
pub fn letter_grid(crossword: &Crossword, assignment: &Assignment) -> Grid<Option<char>> {
    let mut grid = Grid::with_value(crossword.width(), crossword.height(), None);
    for slot in crossword.slots() {
        for (i, coord) in slot.cells().enumerate() {
            if let Some(letter) = assignment.letter(slot, i) {
                grid[coord] = Some(letter);
            }
        }
    }
    grid
}

/// One line per row with a trailing newline
pub fn render(crossword: &Crossword, assignment: &Assignment) -> String {
    let letters = letter_grid(crossword, assignment);
    let mut s = crossword
        .cells()
        .rows()
        .zip(letters.rows())
        .map(|(cells, letters)| {
            cells
                .iter()
                .zip(letters)
                .map(|(&fillable, &letter)| match letter {
                    Some(letter) => letter,
                    None if fillable => EMPTY,
                    None => BLOCKED,
                })
                .collect::<String>()
        })
        .join("\n");
    s.push('\n');
    s
}

pub fn save(
    path: impl AsRef<Path>,
    crossword: &Crossword,
    assignment: &Assignment,
) -> io::Result<()> {
    fs::write(path, render(crossword, assignment))
}
