/*
grid.rs

Copyright 2025 Hervé Quatremain

This file is part of Cruzadas.

Cruzadas is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Cruzadas is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Cruzadas. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Square working grid used while placing the words.
//!
//! The grid is created empty for every generation attempt. Words are first validated with
//! [`Grid::can_place`] and then written with [`Grid::place`]. When all the words are placed, the
//! grid is cropped to the bounding box of its active cells with [`Grid::trim`].

use super::cell::Cell;
use super::position::{Direction, Position};

/// Working grid.
#[derive(Debug, Clone)]
pub struct Grid {
    /// Number of rows and columns.
    size: usize,

    /// Cells, indexed by row and then by column.
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create an empty [`Grid`] object of `size` x `size` cells.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![vec![Cell::default(); size]; size],
        }
    }

    /// Return the number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Return the cell at the given position, or None if the position is outside the grid.
    pub fn get(&self, position: Position) -> Option<&Cell> {
        self.cells.get(position.row)?.get(position.col)
    }

    /// Whether the cell at the given position is part of a word. Positions outside the grid are
    /// never active.
    fn is_active(&self, position: Position) -> bool {
        self.get(position).is_some_and(|c| c.is_active)
    }

    /// Whether `position` is one of the `len` cells of a word starting at `start`.
    fn in_span(position: Position, start: Position, direction: Direction, len: usize) -> bool {
        match direction {
            Direction::Horizontal => {
                position.row == start.row
                    && position.col >= start.col
                    && position.col < start.col + len
            }
            Direction::Vertical => {
                position.col == start.col
                    && position.row >= start.row
                    && position.row < start.row + len
            }
        }
    }

    /// Whether the word can be written at the given position and direction.
    ///
    /// `intersection` is the cell the word shares with an already placed word. That cell is not
    /// checked: the letter was matched when the candidate position was computed.
    ///
    /// The word is rejected when:
    ///
    /// * it runs off the grid,
    /// * one of its letters collides with a different letter,
    /// * it would extend another word (active cell just before its first letter or just after
    ///   its last letter),
    /// * it overlaps a word running in the same direction (two consecutive cells already active),
    /// * one of its new cells touches an active cell that is neither part of the word nor the
    ///   intersection.
    pub fn can_place(
        &self,
        word: &[char],
        position: Position,
        direction: Direction,
        intersection: Option<Position>,
    ) -> bool {
        let len: usize = word.len();
        if len == 0 {
            return false;
        }

        let last: Position = position.step(direction, len - 1);
        if last.row >= self.size || last.col >= self.size {
            return false;
        }

        // No letter right before or right after the word
        let (dr, dc) = direction.delta();
        if let Some(before) = position.offset(-dr, -dc) {
            if self.is_active(before) {
                return false;
            }
        }
        if self.is_active(position.step(direction, len)) {
            return false;
        }

        let mut previous_active: bool = false;
        for (i, letter) in word.iter().enumerate() {
            let current: Position = position.step(direction, i);
            let cell: &Cell = &self.cells[current.row][current.col];

            if cell.is_active && previous_active {
                return false;
            }
            previous_active = cell.is_active;

            if intersection == Some(current) {
                continue;
            }

            if cell.is_active {
                if cell.letter != Some(*letter) {
                    return false;
                }
                continue;
            }

            for neighbor in current.neighbors() {
                if !self.is_active(neighbor)
                    || Self::in_span(neighbor, position, direction, len)
                    || intersection == Some(neighbor)
                {
                    continue;
                }
                return false;
            }
        }
        true
    }

    /// Write the word in the grid.
    ///
    /// The position must have been validated with [`Grid::can_place`]. Only the first letter
    /// receives the word number; the other cells keep the numbers they already have.
    pub fn place(&mut self, word: &[char], position: Position, direction: Direction, number: usize) {
        for (i, letter) in word.iter().enumerate() {
            let current: Position = position.step(direction, i);
            let cell: &mut Cell = &mut self.cells[current.row][current.col];

            if !cell.is_active {
                *cell = Cell::with_letter(*letter);
            }
            if i == 0 {
                cell.word_numbers.insert(number);
            }
        }
    }

    /// Return the top-left and bottom-right corners of the smallest rectangle that contains all
    /// the active cells, or None if the grid has no active cell.
    pub fn bounding_box(&self) -> Option<(Position, Position)> {
        let mut first: Option<Position> = None;
        let mut last: Position = Position::default();

        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if !cell.is_active {
                    continue;
                }
                first = Some(match first {
                    Some(f) => Position::new(f.row.min(row), f.col.min(col)),
                    None => Position::new(row, col),
                });
                last = Position::new(last.row.max(row), last.col.max(col));
            }
        }
        first.map(|f| (f, last))
    }

    /// Return the cells of the bounding box and the position of its top-left corner in the
    /// working grid. Subtract that offset from the word positions to get their position in the
    /// trimmed cells.
    pub fn trim(&self) -> Option<(Vec<Vec<Cell>>, Position)> {
        let (first, last) = self.bounding_box()?;
        let cells: Vec<Vec<Cell>> = self.cells[first.row..=last.row]
            .iter()
            .map(|row| row[first.col..=last.col].to_vec())
            .collect();
        Some((cells, first))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(word: &str) -> Vec<char> {
        word.chars().collect()
    }

    /// Grid with "GATO" written horizontally at (7, 5).
    fn grid_with_gato() -> Grid {
        let mut grid: Grid = Grid::new(15);
        grid.place(&chars("GATO"), Position::new(7, 5), Direction::Horizontal, 1);
        grid
    }

    #[test]
    fn rejects_word_running_off_the_grid() {
        let grid: Grid = Grid::new(5);
        assert!(!grid.can_place(&chars("CASAS"), Position::new(0, 1), Direction::Horizontal, None));
        assert!(grid.can_place(&chars("CASAS"), Position::new(0, 0), Direction::Horizontal, None));
        assert!(!grid.can_place(&chars("CASAS"), Position::new(1, 0), Direction::Vertical, None));
    }

    #[test]
    fn accepts_perpendicular_intersection() {
        let grid: Grid = grid_with_gato();
        // "RATO" going down through the A of "GATO"
        let intersection: Position = Position::new(7, 6);
        assert!(grid.can_place(
            &chars("RATO"),
            Position::new(6, 6),
            Direction::Vertical,
            Some(intersection)
        ));
    }

    #[test]
    fn rejects_collision_with_other_letter() {
        let grid: Grid = grid_with_gato();
        // "SAPO" down from (5, 7): the P would land on the T of "GATO"
        assert!(!grid.can_place(&chars("SAPO"), Position::new(5, 7), Direction::Vertical, None));
    }

    #[test]
    fn rejects_side_by_side_words() {
        let grid: Grid = grid_with_gato();
        // Parallel word on the row below
        assert!(!grid.can_place(&chars("SAPO"), Position::new(8, 5), Direction::Horizontal, None));
        // Vertical word touching the G from the left
        assert!(!grid.can_place(&chars("TATU"), Position::new(6, 4), Direction::Vertical, None));
    }

    #[test]
    fn rejects_extension_of_existing_word() {
        let grid: Grid = grid_with_gato();
        // "SOL" starting right after "GATO" on the same row
        assert!(!grid.can_place(&chars("SOL"), Position::new(7, 9), Direction::Horizontal, None));
        // A word ending right before the G
        assert!(!grid.can_place(&chars("RUA"), Position::new(7, 2), Direction::Horizontal, None));
    }

    #[test]
    fn rejects_collinear_overlap() {
        let grid: Grid = grid_with_gato();
        // "ATO" lies inside "GATO": same letters, same direction
        let intersection: Position = Position::new(7, 6);
        assert!(!grid.can_place(
            &chars("ATO"),
            Position::new(7, 6),
            Direction::Horizontal,
            Some(intersection)
        ));
    }

    #[test]
    fn isolated_placement_needs_free_space() {
        let grid: Grid = grid_with_gato();
        assert!(grid.can_place(&chars("SOL"), Position::new(1, 1), Direction::Vertical, None));
        // Starts right below the O of "GATO" at (7, 8)
        assert!(!grid.can_place(&chars("SOL"), Position::new(8, 8), Direction::Vertical, None));
    }

    #[test]
    fn shared_first_cell_keeps_both_numbers() {
        let mut grid: Grid = grid_with_gato();
        let start: Position = Position::new(7, 5);
        assert!(grid.can_place(&chars("GOL"), start, Direction::Vertical, Some(start)));
        grid.place(&chars("GOL"), start, Direction::Vertical, 2);

        let cell: &Cell = grid.get(start).unwrap();
        assert_eq!(cell.word_numbers.get(), &[1, 2]);
        assert!(grid.get(Position::new(8, 5)).unwrap().word_numbers.is_empty());
    }

    #[test]
    fn inner_letters_keep_existing_numbers() {
        let mut grid: Grid = grid_with_gato();
        // "RATO" down, its A is the second letter of "GATO" which has no number
        grid.place(&chars("RATO"), Position::new(6, 6), Direction::Vertical, 2);
        assert_eq!(grid.get(Position::new(6, 6)).unwrap().word_numbers.get(), &[2]);
        assert!(grid.get(Position::new(7, 6)).unwrap().word_numbers.is_empty());
        assert_eq!(grid.get(Position::new(7, 5)).unwrap().word_numbers.get(), &[1]);
    }

    #[test]
    fn trim_crops_to_active_cells() {
        let mut grid: Grid = grid_with_gato();
        grid.place(&chars("RATO"), Position::new(6, 6), Direction::Vertical, 2);

        let (cells, offset) = grid.trim().unwrap();
        assert_eq!(offset, Position::new(6, 5));
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0].len(), 4);
        assert_eq!(cells[1][0].letter, Some('G'));
        assert_eq!(cells[0][1].letter, Some('R'));
        assert!(!cells[0][0].is_active);
    }

    #[test]
    fn empty_grid_has_no_bounding_box() {
        assert!(Grid::new(15).trim().is_none());
    }
}
