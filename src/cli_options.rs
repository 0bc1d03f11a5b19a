/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! List the built-in words:
//!
//! ```text
//! $ cruzadas --ls
//! CASA        Lugar onde moramos
//! GATO        Animal doméstico que mia
//! ...
//! ```
//!
//! Generate a puzzle with six words and display the solution. The same seed always gives the same
//! puzzle:
//!
//! ```text
//! $ cruzadas -c 6 --seed 42 --solution
//! ```
//!
//! Play in the terminal. Type the word number followed by the answer, `show` to redraw the grid,
//! `new` for a new puzzle, and `quit` to leave:
//!
//! ```text
//! $ cruzadas --play
//! ```

use clap::Parser;
use log::{debug, error};
use rand::Rng;
use rand::rngs::StdRng;
use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::config::{COPYRIGHT_NOTICE, DEFAULT_WORD_COUNT, GeneratorConfig};
use crate::draw;
use crate::game::Game;
use crate::generator::crossword::Crossword;
use crate::generator::random_crossword::RandomCrossword;
use crate::generator::word_pool::{self, Candidate};

/// Generate crossword puzzles with basic Portuguese words.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// List the words and their clues
    #[arg(long, default_value_t = false)]
    ls: bool,

    /// Number of words in the puzzle
    #[arg(short, long, default_value_t = DEFAULT_WORD_COUNT)]
    count: usize,

    /// Seed for the random number generator, to reproduce a puzzle
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with the words and clues to use instead of the built-in list
    #[arg(short, long)]
    words: Option<PathBuf>,

    /// JSON file with the generator settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Size of the working grid
    #[arg(long)]
    grid_size: Option<usize>,

    /// Maximum number of attempts to build the grid
    #[arg(long)]
    max_attempts: Option<usize>,

    /// Display the letters of the solution
    #[arg(long, default_value_t = false, conflicts_with = "play")]
    solution: bool,

    /// Print the crossword in JSON format
    #[arg(long, default_value_t = false, conflicts_with_all = ["play", "solution"])]
    json: bool,

    /// Play the puzzle in the terminal
    #[arg(short, long, default_value_t = false)]
    play: bool,

    /// Print some statistics after generating the puzzle
    #[arg(short, long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Build the generator settings from the configuration file and the command-line options.
fn build_config(args: &Args) -> Result<GeneratorConfig, Box<dyn std::error::Error>> {
    let mut config: GeneratorConfig = match &args.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(size) = args.grid_size {
        config.grid_size = size;
    }
    if let Some(max) = args.max_attempts {
        config.max_generation_attempts = max;
    }
    debug!("Settings: {config:?}");
    Ok(config)
}

/// Parse and process command-line options. Return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let pool: Vec<Candidate> = match &args.words {
        Some(path) => match word_pool::load_pool(path) {
            Ok(p) => p,
            Err(e) => {
                error!("Cannot read the word file {path:?}: {e}");
                return 1;
            }
        },
        None => word_pool::portuguese_words(),
    };

    //
    // List the words
    //
    if args.ls {
        for c in &pool {
            println!("{:<12}{}", c.word, c.clue);
        }
        return 0;
    }

    let config: GeneratorConfig = match build_config(&args) {
        Ok(c) => c,
        Err(e) => {
            error!("Cannot read the settings: {e}");
            return 1;
        }
    };

    let seed: u64 = args.seed.unwrap_or_else(|| rand::rng().random());
    debug!("Seed = {seed}");
    let mut generator: RandomCrossword<StdRng> = RandomCrossword::from_seed(config, seed);

    let crossword: Crossword = match generator.generate(&pool, args.count) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };
    if args.summary {
        eprintln!(
            "    seed = {seed}
attempts = {}
    time = {}s",
            generator.attempts, generator.duration
        );
    }

    if args.json {
        return match serde_json::to_string_pretty(&crossword) {
            Ok(text) => {
                println!("{text}");
                0
            }
            Err(e) => {
                error!("Cannot serialize the crossword: {e}");
                1
            }
        };
    }

    let mut game: Game = Game::new(crossword);
    if args.play {
        return play(&mut game, &mut generator, &pool, args.count);
    }

    let content: draw::Content = if args.solution {
        draw::Content::Solution
    } else {
        draw::Content::Blank
    };
    println!("{}", draw::grid(&game.crossword, content));
    print!("{}", draw::clues(&game));
    0
}

/// Print the grid with the player's letters, the clues, and the status.
fn show(game: &Game) {
    println!(
        "{}",
        draw::grid(&game.crossword, draw::Content::Input(&game.player_input))
    );
    print!("{}", draw::clues(game));
    println!("{}", draw::status(game));
}

/// Play loop reading the answers from the standard input.
fn play(
    game: &mut Game,
    generator: &mut RandomCrossword<StdRng>,
    pool: &[Candidate],
    count: usize,
) -> u8 {
    let stdin = io::stdin();
    show(game);

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            return 1;
        }
        let mut line: String = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return 0,
            Ok(_) => (),
            Err(e) => {
                error!("Cannot read the standard input: {e}");
                return 1;
            }
        }

        let mut fields = line.split_whitespace();
        match (fields.next(), fields.next()) {
            (None, _) => continue,
            (Some("quit" | "sair"), _) => return 0,
            (Some("show"), _) => show(game),
            (Some("solution"), _) => {
                println!("{}", draw::grid(&game.crossword, draw::Content::Solution))
            }
            (Some("new"), _) => match game.new_puzzle(generator, pool, count) {
                Ok(()) => show(game),
                Err(e) => eprintln!("Error: {e}"),
            },
            (Some(number), Some(answer)) => match number.parse::<usize>() {
                Ok(n) if game.enter_word(n, answer) => {
                    show(game);
                    if game.is_solved() {
                        return 0;
                    }
                }
                Ok(n) => println!("Resposta inválida para a palavra {n}"),
                Err(_) => println!("Comando desconhecido: {number}"),
            },
            (Some(command), None) => println!("Comando desconhecido: {command}"),
        }
    }
}
