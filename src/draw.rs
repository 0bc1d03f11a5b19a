/*
draw.rs

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

//! Draw the puzzle as text.
//!
//! Each cell takes four columns. A grid row is drawn on two lines: the word numbers, and then the
//! letters between brackets. Inactive cells are left blank.
//!
//! ```text
//!     2
//! 1   [R] [ ]
//! [G] [A] [T] [O]
//! ```

use crate::game::{ClueStatus, Game};
use crate::generator::crossword::Crossword;
use crate::generator::position::{Direction, Position};
use crate::player_input::PlayerInput;

/// Width of a cell, in characters.
const CELL_WIDTH: usize = 4;

/// Placeholder for an empty cell.
const EMPTY_LETTER: char = ' ';

/// What to show in the active cells.
#[derive(Debug, Copy, Clone)]
pub enum Content<'a> {
    /// Empty cells.
    Blank,

    /// Letters entered by the player.
    Input(&'a PlayerInput),

    /// Letters of the solution.
    Solution,
}

/// Draw the crossword grid.
pub fn grid(crossword: &Crossword, content: Content) -> String {
    let mut out: String = String::new();

    for (row, cells) in crossword.cells.iter().enumerate() {
        let mut labels: String = String::new();
        let mut letters: String = String::new();

        for (col, cell) in cells.iter().enumerate() {
            if !cell.is_active {
                labels.push_str(&" ".repeat(CELL_WIDTH));
                letters.push_str(&" ".repeat(CELL_WIDTH));
                continue;
            }
            let label: String = cell.word_numbers.to_string();
            labels.push_str(&format!("{label:<width$}", width = CELL_WIDTH));

            let letter: char = match content {
                Content::Blank => EMPTY_LETTER,
                Content::Input(input) => input
                    .get(Position::new(row, col))
                    .map_or(EMPTY_LETTER, |c| c.to_uppercase().next().unwrap_or(c)),
                Content::Solution => cell.letter.unwrap_or(EMPTY_LETTER),
            };
            letters.push_str(&format!("[{letter}] "));
        }
        for line in [labels, letters] {
            let line: &str = line.trim_end();
            if !line.is_empty() {
                out.push_str(line);
                out.push('\n');
            }
        }
    }
    out
}

/// Draw one clue list.
fn clue_list(title: &str, clues: &[ClueStatus]) -> String {
    let mut out: String = format!("{title}\n");
    for c in clues {
        out.push_str(&format!("  {}. {}", c.number, c.clue));
        if c.complete {
            out.push_str(" ✓");
        }
        out.push('\n');
    }
    out
}

/// Draw the horizontal and the vertical clues, with a check mark for the completed words.
pub fn clues(game: &Game) -> String {
    let mut out: String = String::new();
    for direction in [Direction::Horizontal, Direction::Vertical] {
        let list: Vec<ClueStatus> = game.clues(direction);
        if !list.is_empty() {
            out.push_str(&clue_list(&direction.to_string(), &list));
        }
    }
    out
}

/// Draw the completion status.
pub fn status(game: &Game) -> String {
    if game.is_solved() {
        return "Parabéns! Todas as palavras estão completas.".to_string();
    }
    format!(
        "{} de {} palavras completas",
        game.completed_words(),
        game.crossword.words.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::cell::Cell;
    use crate::generator::crossword::{Placement, PlacedWord};

    /// "SOL" across and "SÓ" down from the same cell.
    fn sample() -> Crossword {
        let mut cells: Vec<Vec<Cell>> = vec![vec![Cell::default(); 3]; 2];
        for (i, c) in "SOL".chars().enumerate() {
            cells[0][i] = Cell::with_letter(c);
        }
        cells[1][0] = Cell::with_letter('Ó');
        cells[0][0].word_numbers.insert(1);
        cells[0][0].word_numbers.insert(2);
        let word = |w: &str, d: Direction, n: usize| PlacedWord {
            word: w.to_string(),
            clue: format!("pista {n}"),
            position: Position::new(0, 0),
            direction: d,
            number: n,
            placement: Placement::Seed,
        };
        Crossword {
            cells,
            words: vec![
                word("SOL", Direction::Horizontal, 1),
                word("SÓ", Direction::Vertical, 2),
            ],
        }
    }

    #[test]
    fn solution_grid() {
        let text: String = grid(&sample(), Content::Solution);
        assert_eq!(text, "1/2\n[S] [O] [L]\n[Ó]\n");
    }

    #[test]
    fn input_grid_shows_uppercase_letters() {
        let crossword: Crossword = sample();
        let mut input: PlayerInput = PlayerInput::for_crossword(&crossword);
        input.set(Position::new(0, 1), "o");
        let text: String = grid(&crossword, Content::Input(&input));
        assert_eq!(text, "1/2\n[ ] [O] [ ]\n[ ]\n");
    }

    #[test]
    fn clue_lists_mark_completed_words() {
        let mut game: Game = Game::new(sample());
        game.enter_word(2, "só");
        assert_eq!(
            clues(&game),
            "Horizontal\n  1. pista 1\nVertical\n  2. pista 2 ✓\n"
        );
        assert_eq!(status(&game), "1 de 2 palavras completas");
    }
}
