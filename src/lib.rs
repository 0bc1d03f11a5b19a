/*
lib.rs

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

//! Crossword generator for basic Portuguese words.
//!
//! The [`generator`] module builds the grid. The [`game`], [`player_input`], and [`draw`] modules
//! track and display the player's progress on a generated grid.

pub mod cli_options;
pub mod config;
pub mod draw;
pub mod game;
pub mod generator;
pub mod player_input;

pub use generator::crossword::{Crossword, PlacedWord};
pub use generator::random_crossword::{GenerateError, RandomCrossword, generate};
pub use generator::word_pool::Candidate;
