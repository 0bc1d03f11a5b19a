/*
cell.rs

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

//! Grid cells.

use serde::{Deserialize, Serialize};

/// Word numbers attached to a cell.
///
/// Only the cell holding the first letter of a word gets that word's number. When two words start
/// on the same cell, both numbers are kept in the order they were assigned.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct WordLabels(Vec<usize>);

impl WordLabels {
    /// Add a word number. Numbers already present are ignored.
    pub fn insert(&mut self, number: usize) {
        if !self.0.contains(&number) {
            self.0.push(number);
        }
    }

    /// Whether no word starts on the cell.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the numbers in assignment order.
    pub fn get(&self) -> &[usize] {
        &self.0
    }
}

impl std::fmt::Display for WordLabels {
    /// Numbers separated by a slash, such as `2/5`.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let labels: Vec<String> = self.0.iter().map(|n| n.to_string()).collect();
        write!(f, "{}", labels.join("/"))
    }
}

/// Crossword cell.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    /// Letter of the solution, or None for an inert cell.
    pub letter: Option<char>,

    /// Whether the cell is part of a word.
    pub is_active: bool,

    /// Numbers of the words that start on this cell.
    #[serde(skip_serializing_if = "WordLabels::is_empty", default)]
    pub word_numbers: WordLabels,
}

impl Cell {
    /// Create an active [`Cell`] object holding the given letter.
    pub fn with_letter(letter: char) -> Self {
        Self {
            letter: Some(letter),
            is_active: true,
            word_numbers: WordLabels::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_keep_assignment_order_without_duplicates() {
        let mut labels: WordLabels = WordLabels::default();
        labels.insert(4);
        labels.insert(2);
        labels.insert(4);
        assert_eq!(labels.get(), &[4, 2]);
        assert_eq!(labels.to_string(), "4/2");
    }

    #[test]
    fn default_cell_is_inert() {
        let cell: Cell = Cell::default();
        assert!(!cell.is_active);
        assert_eq!(cell.letter, None);
        assert!(cell.word_numbers.is_empty());
    }

    #[test]
    fn cell_with_letter_is_active() {
        let cell: Cell = Cell::with_letter('Ç');
        assert!(cell.is_active);
        assert_eq!(cell.letter, Some('Ç'));
        assert!(cell.word_numbers.is_empty());
    }
}
