/*
generator.rs

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

//! Generate random crosswords.
//!
//! A [`random_crossword::RandomCrossword`] object builds a [`crossword::Crossword`] from a list
//! of [`word_pool::Candidate`] words:
//!
//! * Words are drawn at random until every word in the draw shares a letter with another one.
//! * The longest word is placed horizontally in the middle of a square
//!   [`grid::Grid`].
//!   The other words, longest first, are placed across a word already in the grid.
//!   When a word cannot cross any placed word, an alternate word from the list is tried instead,
//!   and then the word is placed near the previous word without crossing it.
//! * If some words are still missing, the grid is discarded and a new draw is made.
//!   The number of attempts is limited, and the method returns an error when it is reached.
//! * The grid is finally cropped to the rectangle that contains all the letters.
//!
//! The random number generator is a parameter of [`random_crossword::RandomCrossword`], so that a
//! seeded generator always produces the same crossword.

pub mod cell;
pub mod crossword;
pub mod grid;
pub mod position;
pub mod random_crossword;
pub mod word_pool;
