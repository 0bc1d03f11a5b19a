/*
position.rs

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

//! Grid coordinates and word directions.

use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Cell coordinates in a grid. Rows and columns start at 0.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Row index, from the top.
    pub row: usize,

    /// Column index, from the left.
    pub col: usize,
}

impl Position {
    /// Create a [`Position`] object.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Return the position moved by the given signed offsets, or None if the result would have a
    /// negative coordinate.
    pub fn offset(&self, delta_row: isize, delta_col: isize) -> Option<Position> {
        Some(Position {
            row: self.row.checked_add_signed(delta_row)?,
            col: self.col.checked_add_signed(delta_col)?,
        })
    }

    /// Return the position of the letter at `index` for a word that starts here.
    pub fn step(&self, direction: Direction, index: usize) -> Position {
        match direction {
            Direction::Horizontal => Position::new(self.row, self.col + index),
            Direction::Vertical => Position::new(self.row + index, self.col),
        }
    }

    /// Return the four orthogonal neighbors that have non-negative coordinates.
    /// The caller still has to check the upper bounds.
    pub fn neighbors(&self) -> impl Iterator<Item = Position> + '_ {
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .filter_map(move |(dr, dc)| self.offset(dr, dc))
    }
}

/// Direction in which a word runs.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Display)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left to right.
    #[strum(to_string = "Horizontal")]
    Horizontal,

    /// Top to bottom.
    #[strum(to_string = "Vertical")]
    Vertical,
}

impl Direction {
    /// Return the perpendicular direction.
    pub fn perpendicular(self) -> Self {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }

    /// Row and column increments for one step in that direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_rejects_negative_coordinates() {
        let p: Position = Position::new(0, 3);
        assert_eq!(p.offset(-1, 0), None);
        assert_eq!(p.offset(2, -3), Some(Position::new(2, 0)));
    }

    #[test]
    fn step_follows_direction() {
        let p: Position = Position::new(4, 2);
        assert_eq!(p.step(Direction::Horizontal, 3), Position::new(4, 5));
        assert_eq!(p.step(Direction::Vertical, 3), Position::new(7, 2));
    }

    #[test]
    fn neighbors_at_origin() {
        let n: Vec<Position> = Position::new(0, 0).neighbors().collect();
        assert_eq!(n, vec![Position::new(1, 0), Position::new(0, 1)]);
    }

    #[test]
    fn direction_names() {
        assert_eq!(Direction::Horizontal.to_string(), "Horizontal");
        assert_eq!(Direction::Vertical.perpendicular(), Direction::Horizontal);
    }
}
