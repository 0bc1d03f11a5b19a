/*
random_crossword.rs

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

//! Generate a random crossword.

use log::{Level, debug, log_enabled};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::{StdRng, ThreadRng};
use rand::seq::SliceRandom;
use std::time::Instant;
use thiserror::Error;

use super::crossword::{Crossword, Placement, PlacedWord};
use super::grid::Grid;
use super::position::{Direction, Position};
use super::word_pool::{self, Candidate};
use crate::config::GeneratorConfig;

/// Type of errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GenerateError {
    /// The requested number of words is zero.
    #[error("at least one word must be requested")]
    EmptyRequest,

    /// The word list does not have enough usable words.
    #[error("not enough words: {requested} requested but only {available} available")]
    NotEnoughWords { requested: usize, available: usize },

    /// Every attempt to build the grid fell short.
    #[error("no crossword could be built after {attempts} attempts")]
    AttemptsExhausted { attempts: usize },
}

/// Reason why a single generation attempt failed.
#[derive(Debug, PartialEq)]
enum AttemptError {
    /// No random draw had all its words sharing a letter with another word.
    NoConnectableDraw,

    /// Some words could not be placed.
    Shortfall { placed: usize, selected: usize },
}

/// Whether every word shares at least one letter with another word of the list.
///
/// This is required for the words to cross each other, but does not guarantee it.
/// A list with a single word is connectable.
pub fn is_connectable(words: &[Candidate]) -> bool {
    if words.len() < 2 {
        return true;
    }
    words.iter().enumerate().all(|(i, w)| {
        words
            .iter()
            .enumerate()
            .any(|(j, other)| i != j && w.shares_letter_with(other))
    })
}

/// Words placed so far in the working grid.
struct Layout {
    grid: Grid,

    /// Words in placement order. The word number is the index plus one.
    words: Vec<PlacedWord>,
}

impl Layout {
    fn new(size: usize) -> Self {
        Self {
            grid: Grid::new(size),
            words: Vec::new(),
        }
    }

    /// Write the word in the grid and record it with the next number.
    fn push(
        &mut self,
        candidate: &Candidate,
        position: Position,
        direction: Direction,
        placement: Placement,
    ) {
        let number: usize = self.words.len() + 1;
        self.grid
            .place(&candidate.letters(), position, direction, number);
        debug!(
            "    #{number} {} {direction} at {},{} ({placement:?})",
            candidate.word, position.row, position.col
        );
        self.words.push(PlacedWord {
            word: candidate.word.clone(),
            clue: candidate.clue.clone(),
            position,
            direction,
            number,
            placement,
        });
    }

    /// Place the first word horizontally in the middle of the grid.
    fn place_seed(&mut self, candidate: &Candidate) -> bool {
        let size: usize = self.grid.size();
        let len: usize = candidate.len();
        if len > size {
            return false;
        }
        let position: Position = Position::new(size / 2, (size - len) / 2);
        if !self
            .grid
            .can_place(&candidate.letters(), position, Direction::Horizontal, None)
        {
            return false;
        }
        self.push(candidate, position, Direction::Horizontal, Placement::Seed);
        true
    }

    /// Find the first position where the word crosses a placed word.
    ///
    /// Placed words are tried in placement order, then the letters of the new word from left to
    /// right, then the letters of the placed word from left to right.
    fn find_crossing(&self, letters: &[char]) -> Option<(Position, Direction)> {
        for placed in &self.words {
            let placed_letters: Vec<char> = placed.letters();
            let direction: Direction = placed.direction.perpendicular();
            let (dr, dc) = direction.delta();

            for (i, letter) in letters.iter().enumerate() {
                for (j, placed_letter) in placed_letters.iter().enumerate() {
                    if letter != placed_letter {
                        continue;
                    }
                    let intersection: Position = placed.position.step(placed.direction, j);
                    let back: isize = i as isize;
                    let Some(position) = intersection.offset(-dr * back, -dc * back) else {
                        continue;
                    };
                    if self
                        .grid
                        .can_place(letters, position, direction, Some(intersection))
                    {
                        return Some((position, direction));
                    }
                }
            }
        }
        None
    }

    /// Place the word across a placed word.
    fn place_crossing(&mut self, candidate: &Candidate, placement: Placement) -> bool {
        match self.find_crossing(&candidate.letters()) {
            Some((position, direction)) => {
                self.push(candidate, position, direction, placement);
                true
            }
            None => false,
        }
    }

    /// Look in the word list for a word that can replace the one that could not be placed.
    ///
    /// Words already selected or placed are skipped, and so are words that do not share any
    /// letter with the placed words. At most `max_alternates` words are tried.
    fn place_substitute(
        &mut self,
        pool: &[Candidate],
        selected: &[Candidate],
        max_alternates: usize,
    ) -> bool {
        let mut tried: usize = 0;

        for alternate in pool {
            if tried >= max_alternates {
                break;
            }
            if selected.iter().any(|s| s.word == alternate.word)
                || self.words.iter().any(|w| w.word == alternate.word)
            {
                continue;
            }
            if !self
                .words
                .iter()
                .any(|w| alternate.word.chars().any(|c| w.word.contains(c)))
            {
                continue;
            }
            tried += 1;
            debug!("    Trying alternate {}", alternate.word);
            if self.place_crossing(alternate, Placement::Substitute) {
                return true;
            }
        }
        false
    }

    /// Place the word, without crossing, near the start of the last placed word.
    ///
    /// The word runs perpendicular to the last word. Positions in a window of
    /// `(2 * window + 1)` x `(2 * window + 1)` cells around the anchor are tried row by row.
    fn place_forced(&mut self, candidate: &Candidate, window: usize) -> bool {
        let Some(last) = self.words.last() else {
            return false;
        };
        let direction: Direction = last.direction.perpendicular();
        let anchor: Position = match last.direction {
            Direction::Horizontal => {
                Position::new(last.position.row.saturating_sub(1), last.position.col)
            }
            Direction::Vertical => {
                Position::new(last.position.row, last.position.col.saturating_sub(1))
            }
        };
        let letters: Vec<char> = candidate.letters();
        let size: usize = self.grid.size();
        let w: isize = window as isize;

        for dr in -w..=w {
            for dc in -w..=w {
                let Some(position) = anchor.offset(dr, dc) else {
                    continue;
                };
                if position.row >= size || position.col >= size {
                    continue;
                }
                if self.grid.can_place(&letters, position, direction, None) {
                    self.push(candidate, position, direction, Placement::Forced);
                    return true;
                }
            }
        }
        false
    }

    /// Crop the grid and move the words into the cropped coordinates.
    fn finish(self) -> Option<Crossword> {
        let (cells, offset) = self.grid.trim()?;
        let words: Vec<PlacedWord> = self
            .words
            .into_iter()
            .map(|w| PlacedWord {
                position: Position::new(w.position.row - offset.row, w.position.col - offset.col),
                ..w
            })
            .collect();
        let crossword: Crossword = Crossword { cells, words };
        debug_assert_eq!(crossword.verify(), Ok(()));
        Some(crossword)
    }
}

/// [`RandomCrossword`] object.
///
/// The random number generator is provided by the caller so that tests can use a seeded
/// generator and get the same crossword every time.
pub struct RandomCrossword<R: Rng> {
    /// Source of randomness for drawing the words.
    rng: R,

    /// Generator settings.
    config: GeneratorConfig,

    /// Number of attempts it took to generate the last crossword.
    pub attempts: usize,

    /// Duration in seconds it took to generate the last crossword.
    pub duration: f32,
}

impl RandomCrossword<ThreadRng> {
    /// Create the object with the thread random number generator.
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_rng(config, rand::rng())
    }
}

impl RandomCrossword<StdRng> {
    /// Create the object with a seeded random number generator.
    pub fn from_seed(config: GeneratorConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomCrossword<R> {
    /// Create the object with the given random number generator.
    pub fn with_rng(config: GeneratorConfig, rng: R) -> Self {
        Self {
            rng,
            config,
            attempts: 0,
            duration: 0.0,
        }
    }

    /// Generate and return a crossword of `count` words taken from `pool`.
    ///
    /// If some words cannot be placed, the grid is discarded and rebuilt from a new draw, up to
    /// [`GeneratorConfig::max_generation_attempts`] times.
    ///
    /// # Errors
    ///
    /// The method returns an error if `count` is zero, if the pool does not have `count` usable
    /// words, or if no attempt succeeds.
    pub fn generate(
        &mut self,
        pool: &[Candidate],
        count: usize,
    ) -> Result<Crossword, GenerateError> {
        let start: Instant = Instant::now();
        self.attempts = 0;
        self.duration = 0.0;

        if count == 0 {
            return Err(GenerateError::EmptyRequest);
        }
        let words: Vec<Candidate> = word_pool::sanitize(pool, self.config.grid_size);
        if words.len() < count {
            return Err(GenerateError::NotEnoughWords {
                requested: count,
                available: words.len(),
            });
        }

        let max_attempts: usize = self.config.max_generation_attempts.max(1);
        for attempt in 1..=max_attempts {
            self.attempts = attempt;
            debug!("== Generation attempt {attempt}");

            match self.attempt(&words, count) {
                Ok(crossword) => {
                    self.duration = start.elapsed().as_secs_f32();
                    debug!(
                        "Attempts = {}  Duration = {}",
                        self.attempts, self.duration
                    );
                    return Ok(crossword);
                }
                Err(AttemptError::NoConnectableDraw) => {
                    debug!("    No draw with shared letters");
                }
                Err(AttemptError::Shortfall { placed, selected }) => {
                    debug!("    Only {placed} of {selected} words placed");
                }
            }
        }
        self.duration = start.elapsed().as_secs_f32();
        Err(GenerateError::AttemptsExhausted {
            attempts: max_attempts,
        })
    }

    /// Build one grid from a fresh draw.
    fn attempt(&mut self, pool: &[Candidate], count: usize) -> Result<Crossword, AttemptError> {
        let selected: Vec<Candidate> = self.select_words(pool, count)?;

        // Longest words first: they give more crossing opportunities to the shorter words
        let mut sorted: Vec<Candidate> = selected.clone();
        sorted.sort_by_key(|c| std::cmp::Reverse(c.len()));

        if log_enabled!(Level::Debug) {
            let list: Vec<&str> = sorted.iter().map(|c| c.word.as_str()).collect();
            debug!("    words = {list:?}");
        }

        let mut layout: Layout = Layout::new(self.config.grid_size);
        let shortfall = |layout: &Layout| AttemptError::Shortfall {
            placed: layout.words.len(),
            selected: sorted.len(),
        };

        if !layout.place_seed(&sorted[0]) {
            return Err(shortfall(&layout));
        }

        for candidate in &sorted[1..] {
            if layout.place_crossing(candidate, Placement::Intersection) {
                continue;
            }
            debug!("    {} does not cross any placed word", candidate.word);
            if layout.place_substitute(pool, &selected, self.config.max_alternates) {
                continue;
            }
            if layout.place_forced(candidate, self.config.force_window) {
                continue;
            }
            debug!("    {} cannot be placed", candidate.word);
        }

        if layout.words.len() < sorted.len() {
            return Err(shortfall(&layout));
        }
        let placed: usize = layout.words.len();
        layout.finish().ok_or(AttemptError::Shortfall {
            placed,
            selected: sorted.len(),
        })
    }

    /// Draw `count` distinct words, retrying until all the words share letters with each other.
    fn select_words(
        &mut self,
        pool: &[Candidate],
        count: usize,
    ) -> Result<Vec<Candidate>, AttemptError> {
        for _ in 0..self.config.selection_attempts {
            let draw: Vec<Candidate> = self.draw(pool, count);
            if is_connectable(&draw) {
                return Ok(draw);
            }
        }
        if self.config.allow_unscreened_draw {
            debug!("    Using an unchecked draw");
            return Ok(self.draw(pool, count));
        }
        Err(AttemptError::NoConnectableDraw)
    }

    /// Draw `count` distinct words at random.
    fn draw(&mut self, pool: &[Candidate], count: usize) -> Vec<Candidate> {
        let mut indices: Vec<usize> = (0..pool.len()).collect();
        indices.shuffle(&mut self.rng);
        indices
            .iter()
            .take(count)
            .map(|i| pool[*i].clone())
            .collect()
    }
}

/// Generate a crossword with the default settings and the thread random number generator.
pub fn generate(pool: &[Candidate], count: usize) -> Result<Crossword, GenerateError> {
    RandomCrossword::new(GeneratorConfig::default()).generate(pool, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(words: &[&str]) -> Vec<Candidate> {
        words.iter().map(|w| Candidate::new(w, "pista")).collect()
    }

    #[test]
    fn connectable_draws() {
        assert!(is_connectable(&pool(&["GATO", "RATO", "SAPO"])));
        assert!(!is_connectable(&pool(&["GATO", "RATO", "SUL"])));
        assert!(is_connectable(&pool(&["SUL"])));
    }

    #[test]
    fn seed_is_centered() {
        let mut layout: Layout = Layout::new(15);
        assert!(layout.place_seed(&Candidate::new("CASA", "")));
        assert_eq!(layout.words[0].position, Position::new(7, 5));
        assert_eq!(layout.words[0].number, 1);
        assert_eq!(layout.words[0].direction, Direction::Horizontal);
    }

    #[test]
    fn crossing_uses_first_fit_order() {
        let mut layout: Layout = Layout::new(15);
        layout.place_seed(&Candidate::new("CASA", ""));
        // First letter of "GATO" that matches is its A, against the first A of "CASA" at (7, 6)
        assert!(layout.place_crossing(&Candidate::new("GATO", ""), Placement::Intersection));
        let w: &PlacedWord = &layout.words[1];
        assert_eq!(w.position, Position::new(6, 6));
        assert_eq!(w.direction, Direction::Vertical);
        assert_eq!(w.number, 2);
    }

    #[test]
    fn substitute_skips_selected_words() {
        let mut layout: Layout = Layout::new(15);
        layout.place_seed(&Candidate::new("CASA", ""));
        let selected: Vec<Candidate> = pool(&["CASA", "SUL"]);
        let words: Vec<Candidate> = pool(&["CASA", "SUL", "PÉ", "GATO"]);
        assert!(layout.place_substitute(&words, &selected, 3));
        assert_eq!(layout.words[1].word, "GATO");
        assert_eq!(layout.words[1].placement, Placement::Substitute);
    }

    #[test]
    fn substitute_gives_up_after_max_alternates() {
        let mut layout: Layout = Layout::new(3);
        layout.place_seed(&Candidate::new("SOL", ""));
        // The first three alternates share letters with "SOL" but are too long for the grid
        let words: Vec<Candidate> = pool(&["SOLO", "LOLO", "OLOS", "SO"]);
        assert!(!layout.place_substitute(&words, &[], 3));
        assert_eq!(layout.words.len(), 1);
        assert!(layout.place_substitute(&words, &[], 4));
        assert_eq!(layout.words[1].word, "SO");
        assert_eq!(layout.words[1].number, 2);
    }

    #[test]
    fn forced_placement_is_isolated() {
        let mut layout: Layout = Layout::new(15);
        layout.place_seed(&Candidate::new("CASA", ""));
        assert!(layout.place_forced(&Candidate::new("PÉ", ""), 2));
        let w: &PlacedWord = &layout.words[1];
        assert_eq!(w.placement, Placement::Forced);
        assert_eq!(w.direction, Direction::Vertical);
        // Anchor is (6, 5); the first window position (4, 3) is free
        assert_eq!(w.position, Position::new(4, 3));
    }

    #[test]
    fn finish_moves_words_to_trimmed_coordinates() {
        let mut layout: Layout = Layout::new(15);
        layout.place_seed(&Candidate::new("CASA", ""));
        layout.place_crossing(&Candidate::new("GATO", ""), Placement::Intersection);
        let crossword: Crossword = layout.finish().unwrap();
        assert_eq!(crossword.words[0].position, Position::new(1, 0));
        assert_eq!(crossword.words[1].position, Position::new(0, 1));
        assert_eq!(crossword.verify(), Ok(()));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn finish_checks_consistency_in_debug_builds() {
        let mut layout: Layout = Layout::new(15);
        layout.place_seed(&Candidate::new("CASA", ""));
        // The word list no longer agrees with the letters in the grid
        layout.words[0].word = "COSA".to_string();
        let _ = layout.finish();
    }

    #[test]
    fn zero_words_is_an_error() {
        let mut generator = RandomCrossword::from_seed(GeneratorConfig::default(), 1);
        assert_eq!(
            generator.generate(&pool(&["GATO"]), 0),
            Err(GenerateError::EmptyRequest)
        );
    }
}
