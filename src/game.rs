/*
game.rs

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

//! Manage the status of a puzzle in progress.
//!
//! A [`Game`] object holds the generated crossword, the letters the player entered, and the
//! selected cell. The crossword is never modified: a new puzzle replaces the whole object
//! content.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::generator::crossword::{Crossword, PlacedWord};
use crate::generator::position::{Direction, Position};
use crate::generator::random_crossword::{GenerateError, RandomCrossword};
use crate::generator::word_pool::Candidate;
use crate::player_input::PlayerInput;

/// Selection moves (arrow keys).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    fn delta(self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }
}

/// Clue with its completion status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueStatus {
    /// Word number.
    pub number: usize,

    pub clue: String,

    /// Whether the player entered all the letters of the word correctly.
    pub complete: bool,
}

/// Manage the status of the puzzle in progress.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Game {
    /// Generated crossword (solution).
    pub crossword: Crossword,

    /// Letters entered by the player.
    pub player_input: PlayerInput,

    /// Position of the selected cell. Always an active cell.
    selected_cell: Option<Position>,
}

impl Game {
    /// Create a [`Game`] object for the given crossword.
    /// The first letter of the first word is selected.
    pub fn new(crossword: Crossword) -> Self {
        let player_input: PlayerInput = PlayerInput::for_crossword(&crossword);
        let selected_cell: Option<Position> = crossword.words.first().map(|w| w.position);
        Self {
            crossword,
            player_input,
            selected_cell,
        }
    }

    /// Replace the puzzle with a newly generated one.
    ///
    /// On error, the current puzzle is kept.
    pub fn new_puzzle<R: Rng>(
        &mut self,
        generator: &mut RandomCrossword<R>,
        pool: &[Candidate],
        count: usize,
    ) -> Result<(), GenerateError> {
        let crossword: Crossword = generator.generate(pool, count)?;
        *self = Self::new(crossword);
        Ok(())
    }

    /// Remove all the letters the player entered.
    pub fn reset(&mut self) {
        self.player_input.clear();
    }

    /// Get the position of the selected cell.
    pub fn selected_cell(&self) -> Option<Position> {
        self.selected_cell
    }

    /// Change the selected cell. Inactive cells cannot be selected and are ignored.
    pub fn set_selected_cell(&mut self, position: Position) -> bool {
        if !self.crossword.is_active(position) {
            return false;
        }
        self.selected_cell = Some(position);
        true
    }

    /// Move the selection to the next active cell in the given direction, skipping the inactive
    /// cells. The selection does not change if there is no active cell in that direction.
    ///
    /// Return the new selected cell.
    pub fn move_selection(&mut self, m: Move) -> Option<Position> {
        let (dr, dc) = m.delta();
        let mut current: Position = self.selected_cell?;

        while let Some(next) = current.offset(dr, dc) {
            if next.row >= self.crossword.height() || next.col >= self.crossword.width() {
                break;
            }
            if self.crossword.is_active(next) {
                self.selected_cell = Some(next);
                break;
            }
            current = next;
        }
        self.selected_cell
    }

    /// Store the letter typed in a cell. Return false if the cell is not part of a word.
    pub fn set_letter(&mut self, position: Position, text: &str) -> bool {
        if !self.crossword.is_active(position) {
            return false;
        }
        self.player_input.set(position, text);
        true
    }

    /// Fill all the cells of a word with the given answer.
    ///
    /// Return false if the word does not exist or if the answer does not have the same number
    /// of letters. In that case nothing is changed.
    pub fn enter_word(&mut self, number: usize, answer: &str) -> bool {
        let Some(word) = self.crossword.word(number) else {
            return false;
        };
        let letters: Vec<char> = answer.trim().chars().collect();
        if letters.len() != word.len() {
            debug!(
                "Answer {answer} for #{number} has {} letters instead of {}",
                letters.len(),
                word.len()
            );
            return false;
        }
        let cells: Vec<Position> = word.cells().collect();
        for (position, letter) in cells.into_iter().zip(letters) {
            self.player_input.set(position, &letter.to_string());
        }
        true
    }

    /// Whether every letter of the word was entered and matches the solution.
    pub fn is_word_complete(&self, number: usize) -> bool {
        match self.crossword.word(number) {
            Some(word) => self.is_complete(word),
            None => false,
        }
    }

    fn is_complete(&self, word: &PlacedWord) -> bool {
        word.cells()
            .zip(word.word.chars())
            .all(|(position, letter)| self.player_input.matches(position, letter))
    }

    /// Return the number of completed words.
    pub fn completed_words(&self) -> usize {
        self.crossword
            .words
            .iter()
            .filter(|w| self.is_complete(w))
            .count()
    }

    /// Whether all the words are completed.
    pub fn is_solved(&self) -> bool {
        self.completed_words() == self.crossword.words.len()
    }

    /// Return the clues of the words running in the given direction, in placement order.
    pub fn clues(&self, direction: Direction) -> Vec<ClueStatus> {
        self.crossword
            .words_in(direction)
            .map(|w| ClueStatus {
                number: w.number,
                clue: w.clue.clone(),
                complete: self.is_complete(w),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::cell::Cell;
    use crate::generator::crossword::Placement;

    /// ```text
    /// . R . .
    /// G A T O
    /// . T . I
    /// . O . .
    /// ```
    fn sample() -> Crossword {
        let mut cells: Vec<Vec<Cell>> = vec![vec![Cell::default(); 4]; 4];
        let words: Vec<PlacedWord> = vec![
            PlacedWord {
                word: "GATO".to_string(),
                clue: "Mia".to_string(),
                position: Position::new(1, 0),
                direction: Direction::Horizontal,
                number: 1,
                placement: Placement::Seed,
            },
            PlacedWord {
                word: "RATO".to_string(),
                clue: "Roedor".to_string(),
                position: Position::new(0, 1),
                direction: Direction::Vertical,
                number: 2,
                placement: Placement::Intersection,
            },
            PlacedWord {
                word: "OI".to_string(),
                clue: "Olá".to_string(),
                position: Position::new(1, 3),
                direction: Direction::Vertical,
                number: 3,
                placement: Placement::Intersection,
            },
        ];
        for w in &words {
            for (p, letter) in w.cells().zip(w.word.chars()) {
                let mut cell: Cell = Cell::with_letter(letter);
                cell.word_numbers = cells[p.row][p.col].word_numbers.clone();
                cells[p.row][p.col] = cell;
            }
            cells[w.position.row][w.position.col]
                .word_numbers
                .insert(w.number);
        }
        Crossword { cells, words }
    }

    #[test]
    fn first_word_is_selected() {
        let game: Game = Game::new(sample());
        assert_eq!(game.selected_cell(), Some(Position::new(1, 0)));
    }

    #[test]
    fn moves_skip_inactive_cells() {
        let mut game: Game = Game::new(sample());
        assert!(game.set_selected_cell(Position::new(2, 1)));
        // (2, 2) is inactive, (2, 3) holds the I of "OI"
        assert_eq!(game.move_selection(Move::Right), Some(Position::new(2, 3)));
        // Nothing further right: the selection stays
        assert_eq!(game.move_selection(Move::Right), Some(Position::new(2, 3)));
        assert_eq!(game.move_selection(Move::Up), Some(Position::new(1, 3)));
        assert_eq!(game.move_selection(Move::Up), Some(Position::new(1, 3)));
        assert_eq!(game.move_selection(Move::Left), Some(Position::new(1, 2)));
        assert_eq!(game.move_selection(Move::Down), Some(Position::new(1, 2)));
    }

    #[test]
    fn inactive_cells_cannot_be_selected_or_filled() {
        let mut game: Game = Game::new(sample());
        assert!(!game.set_selected_cell(Position::new(0, 0)));
        assert!(!game.set_letter(Position::new(0, 0), "x"));
        assert!(game.player_input.is_empty());
    }

    #[test]
    fn completion_ignores_case() {
        let mut game: Game = Game::new(sample());
        for (col, letter) in ["g", "A", "t", "o"].iter().enumerate() {
            assert!(game.set_letter(Position::new(1, col), letter));
        }
        assert!(game.is_word_complete(1));
        assert!(!game.is_word_complete(2));
        // "OI" has its O filled through "GATO" but not its I
        assert!(!game.is_word_complete(3));
        assert_eq!(game.completed_words(), 1);
    }

    #[test]
    fn wrong_letter_is_incomplete() {
        let mut game: Game = Game::new(sample());
        assert!(game.enter_word(1, "GALO"));
        assert!(!game.is_word_complete(1));
        assert!(!game.enter_word(1, "GAT"));
        assert!(!game.enter_word(9, "GATO"));
    }

    #[test]
    fn solving_every_word() {
        let mut game: Game = Game::new(sample());
        assert!(game.enter_word(1, "gato"));
        assert!(game.enter_word(2, "rato"));
        assert!(game.enter_word(3, "oi"));
        assert!(game.is_solved());

        let down: Vec<ClueStatus> = game.clues(Direction::Vertical);
        assert_eq!(down.len(), 2);
        assert_eq!(down[0].number, 2);
        assert!(down.iter().all(|c| c.complete));

        game.reset();
        assert!(!game.is_solved());
        assert!(!game.clues(Direction::Horizontal)[0].complete);
    }
}
