/*
config.rs

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

//! Package constants and generator settings.
//!
//! The settings have default values, which can be overridden by a JSON file (see
//! [`GeneratorConfig::load`]) and then by command-line options. Missing keys in the file keep
//! their default value:
//!
//! ```json
//! { "grid_size": 21, "max_generation_attempts": 500 }
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub const COPYRIGHT_NOTICE: &str = "Copyright 2025 Hervé Quatremain
License GPL-3.0-or-later <https://www.gnu.org/licenses/gpl-3.0.html>
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.";

/// Number of words in a puzzle when not specified.
pub const DEFAULT_WORD_COUNT: usize = 5;

/// Generator settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of rows and columns of the working grid.
    pub grid_size: usize,

    /// Number of random draws tried before giving up on finding words that share letters.
    pub selection_attempts: usize,

    /// Number of alternate words tried when a selected word cannot cross any placed word.
    pub max_alternates: usize,

    /// Half-width of the window scanned around the previous word when a word is placed without
    /// crossing. A value of 2 gives a 5x5 window.
    pub force_window: usize,

    /// Number of times the whole grid is rebuilt from a new draw before giving up.
    pub max_generation_attempts: usize,

    /// When no draw of words sharing letters is found, proceed with an unchecked draw instead of
    /// starting a new attempt.
    pub allow_unscreened_draw: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            grid_size: 15,
            selection_attempts: 20,
            max_alternates: 3,
            force_window: 2,
            max_generation_attempts: 100,
            allow_unscreened_draw: false,
        }
    }
}

impl GeneratorConfig {
    /// Read the settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        debug!("Loading settings from {path:?}");
        let file: File = File::open(path)?;
        let reader: BufReader<File> = BufReader::new(file);
        let config: GeneratorConfig = serde_json::from_reader(reader)?;
        Ok(config)
    }
}
