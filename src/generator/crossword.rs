/*
crossword.rs

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

//! Generated crossword: the trimmed cells and the list of placed words.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::position::{Direction, Position};

/// How a word found its place in the grid.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// First word, centered in the working grid.
    Seed,

    /// Crosses a word that was already placed.
    Intersection,

    /// Replaces a selected word that could not be placed, and crosses a placed word.
    Substitute,

    /// Placed near the previous word without crossing it.
    Forced,
}

/// Word in the crossword.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    pub word: String,

    pub clue: String,

    /// Position of the first letter.
    pub position: Position,

    pub direction: Direction,

    /// Label used by the clue list. Numbers start at 1 and follow the placement order.
    pub number: usize,

    pub placement: Placement,
}

impl PlacedWord {
    /// Return the letters of the word.
    pub fn letters(&self) -> Vec<char> {
        self.word.chars().collect()
    }

    /// Return the number of letters.
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Return the positions of the letters, in order.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.len()).map(move |i| self.position.step(self.direction, i))
    }

    /// Return the letter index of the given position, or None if the word does not cover it.
    pub fn index_of(&self, position: Position) -> Option<usize> {
        self.cells().position(|p| p == position)
    }
}

/// Crossword grid.
///
/// For every word, walking its letters from its position in its direction gives active cells that
/// hold the word's letters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Crossword {
    /// Cells, indexed by row and then by column.
    pub cells: Vec<Vec<Cell>>,

    /// Words in placement order.
    pub words: Vec<PlacedWord>,
}

impl Crossword {
    /// Return the number of rows.
    pub fn height(&self) -> usize {
        self.cells.len()
    }

    /// Return the number of columns.
    pub fn width(&self) -> usize {
        self.cells.first().map_or(0, |r| r.len())
    }

    /// Return the cell at the given position, or None if the position is outside the grid.
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.cells.get(position.row)?.get(position.col)
    }

    /// Whether the cell at the given position is part of a word.
    pub fn is_active(&self, position: Position) -> bool {
        self.cell(position).is_some_and(|c| c.is_active)
    }

    /// Return the word with the given number.
    pub fn word(&self, number: usize) -> Option<&PlacedWord> {
        self.words.iter().find(|w| w.number == number)
    }

    /// Return the words running in the given direction, in placement order.
    pub fn words_in(&self, direction: Direction) -> impl Iterator<Item = &PlacedWord> {
        self.words.iter().filter(move |w| w.direction == direction)
    }

    /// Verify that the cells and the word list agree.
    ///
    /// # Errors
    ///
    /// Return a message describing the first problem found.
    pub fn verify(&self) -> Result<(), String> {
        let height: usize = self.height();
        let width: usize = self.width();

        if self.cells.iter().any(|r| r.len() != width) {
            return Err("rows do not have the same length".to_string());
        }

        // Letters
        for (i, w) in self.words.iter().enumerate() {
            if w.number != i + 1 {
                return Err(format!("{} has number {} instead of {}", w.word, w.number, i + 1));
            }
            for (p, letter) in w.cells().zip(w.word.chars()) {
                match self.cell(p) {
                    Some(c) if c.is_active && c.letter == Some(letter) => (),
                    Some(_) => return Err(format!("{}: wrong cell at {p:?}", w.word)),
                    None => return Err(format!("{}: {p:?} outside the grid", w.word)),
                }
            }
        }

        // Labels and coverage
        for row in 0..height {
            for col in 0..width {
                let p: Position = Position::new(row, col);
                let cell: &Cell = &self.cells[row][col];
                let starting: Vec<usize> = self
                    .words
                    .iter()
                    .filter(|w| w.position == p)
                    .map(|w| w.number)
                    .collect();
                if cell.word_numbers.get() != starting.as_slice() {
                    return Err(format!("{p:?}: labels {:?}, expected {starting:?}", cell.word_numbers));
                }
                if cell.is_active != self.words.iter().any(|w| w.index_of(p).is_some()) {
                    return Err(format!("{p:?}: active status does not match the words"));
                }
            }
        }

        // Adjacent letters must belong to the same word
        for row in 0..height {
            for col in 0..width {
                let p: Position = Position::new(row, col);
                if !self.is_active(p) {
                    continue;
                }
                for direction in [Direction::Horizontal, Direction::Vertical] {
                    let next: Position = p.step(direction, 1);
                    if !self.is_active(next) {
                        continue;
                    }
                    let shared: bool = self.words_in(direction).any(|w| {
                        w.index_of(p).is_some() && w.index_of(next).is_some()
                    });
                    if !shared {
                        return Err(format!("{p:?} and {next:?} are adjacent but unrelated"));
                    }
                }
            }
        }

        // No empty border
        if height == 0 || width == 0 {
            return Err("empty grid".to_string());
        }
        let row_active = |r: usize| self.cells[r].iter().any(|c| c.is_active);
        let col_active = |c: usize| self.cells.iter().any(|r| r[c].is_active);
        if !row_active(0) || !row_active(height - 1) || !col_active(0) || !col_active(width - 1) {
            return Err("the grid has an empty border".to_string());
        }
        Ok(())
    }
}
