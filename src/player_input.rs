/*
player_input.rs

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

//! Manage the player's cell input.
//!
//! The module stores the letters that the player entered, one per cell. Letters are compared to
//! the solution without regard to case.

use serde::{Deserialize, Serialize};

use crate::generator::crossword::Crossword;
use crate::generator::position::Position;

/// Whether two letters are the same, ignoring case.
pub fn same_letter(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Letters entered by the player.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlayerInput {
    /// Entered letters, indexed by row and then by column. Same size as the crossword grid.
    letters: Vec<Vec<Option<char>>>,
}

impl PlayerInput {
    /// Create an empty [`PlayerInput`] object.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            letters: vec![vec![None; width]; height],
        }
    }

    /// Create an empty [`PlayerInput`] object the size of the crossword.
    pub fn for_crossword(crossword: &Crossword) -> Self {
        Self::new(crossword.height(), crossword.width())
    }

    /// Remove all the letters.
    pub fn clear(&mut self) {
        for row in self.letters.iter_mut() {
            row.fill(None);
        }
    }

    /// Return the letter in the cell, or None if the cell is empty or outside the grid.
    pub fn get(&self, position: Position) -> Option<char> {
        *self.letters.get(position.row)?.get(position.col)?
    }

    /// Store what the player typed in a cell and return the stored letter.
    ///
    /// Only the last character of `text` is kept. An empty or blank text clears the cell.
    /// Positions outside the grid are ignored.
    pub fn set(&mut self, position: Position, text: &str) -> Option<char> {
        let letter: Option<char> = text.chars().last().filter(|c| !c.is_whitespace());
        match self
            .letters
            .get_mut(position.row)
            .and_then(|r| r.get_mut(position.col))
        {
            Some(cell) => {
                *cell = letter;
                letter
            }
            None => None,
        }
    }

    /// Clear a cell.
    pub fn remove(&mut self, position: Position) {
        self.set(position, "");
    }

    /// Return the number of cells that the player filled (maybe with incorrect letters).
    pub fn len(&self) -> usize {
        self.letters.iter().flatten().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the cell holds the expected letter.
    pub fn matches(&self, position: Position, expected: char) -> bool {
        self.get(position).is_some_and(|c| same_letter(c, expected))
    }
}
