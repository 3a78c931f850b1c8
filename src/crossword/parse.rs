//! Parse crossword structures from text

use crate::collections::grid::Coord;
use crate::collections::Grid;
use crate::crossword::{Crossword, Direction, Slot};
use crate::error::ParseCrosswordError;

const FILLABLE: char = '_';

/// Parses a structure where `_` marks a fillable cell and any other character a blocked one.
/// Lines shorter than the longest line are padded with blocked cells.
pub(crate) fn parse_crossword(s: &str) -> Result<Crossword, ParseCrosswordError> {
    let cells = parse_cells(s).ok_or(ParseCrosswordError::Empty)?;
    let slots = find_slots(&cells);
    debug!(
        "parsed {}x{} structure with {} slots",
        cells.width(),
        cells.height(),
        slots.len()
    );
    let crossword = Crossword::new(cells, slots)?;
    Ok(crossword)
}

fn parse_cells(s: &str) -> Option<Grid<bool>> {
    let lines: Vec<Vec<char>> = s.lines().map(|line| line.chars().collect()).collect();
    let width = lines.iter().map(Vec::len).max()?;
    if width == 0 {
        return None;
    }
    let mut cells = Grid::with_value(width, lines.len(), false);
    for (row, line) in lines.iter().enumerate() {
        for (col, &c) in line.iter().enumerate() {
            cells[Coord::new(col, row)] = c == FILLABLE;
        }
    }
    Some(cells)
}

/// Finds every run of at least two fillable cells.
/// Across slots come first, then down slots, each ordered by their starting cell.
fn find_slots(cells: &Grid<bool>) -> Vec<Slot> {
    let mut slots = Vec::new();
    for &direction in &[Direction::Across, Direction::Down] {
        for (start, _) in cells.iter_coord().filter(|&(_, &fillable)| fillable) {
            if is_fillable(cells, before(start, direction)) {
                continue;
            }
            let length = (0..)
                .take_while(|&i| is_fillable(cells, Some(step(start, direction, i))))
                .count();
            if length > 1 {
                slots.push(Slot::new(slots.len(), start, direction, length));
            }
        }
    }
    slots
}

fn is_fillable(cells: &Grid<bool>, coord: Option<Coord>) -> bool {
    coord.and_then(|coord| cells.get(coord)).copied().unwrap_or(false)
}

fn before(coord: Coord, direction: Direction) -> Option<Coord> {
    match direction {
        Direction::Across => coord.col().checked_sub(1).map(|col| Coord::new(col, coord.row())),
        Direction::Down => coord.row().checked_sub(1).map(|row| Coord::new(coord.col(), row)),
    }
}

fn step(coord: Coord, direction: Direction, i: usize) -> Coord {
    match direction {
        Direction::Across => coord.offset(i, 0),
        Direction::Down => coord.offset(0, i),
    }
}
