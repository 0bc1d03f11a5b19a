/*
word_pool.rs

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

//! Candidate words and their clues.
//!
//! A built-in list of basic Portuguese words is provided by [`portuguese_words`].
//! Other lists can be loaded from a JSON file with [`load_pool`]. The file contains an array of
//! objects with the `word` and `clue` keys:
//!
//! ```json
//! [
//!     { "word": "GATO", "clue": "Animal doméstico que mia" },
//!     { "word": "CASA", "clue": "Lugar onde moramos" }
//! ]
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Word that can be selected for a crossword, with its clue.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Word, in its canonical spelling. Letters are placed as they are written here.
    pub word: String,

    /// Clue displayed to the player.
    pub clue: String,
}

impl Candidate {
    /// Create a [`Candidate`] object.
    pub fn new(word: &str, clue: &str) -> Self {
        Self {
            word: word.to_string(),
            clue: clue.to_string(),
        }
    }

    /// Return the letters of the word.
    pub fn letters(&self) -> Vec<char> {
        self.word.chars().collect()
    }

    /// Return the number of letters in the word.
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Whether the two words have at least one letter in common.
    pub fn shares_letter_with(&self, other: &Candidate) -> bool {
        self.word.chars().any(|c| other.word.contains(c))
    }
}

/// Built-in word list: (word, clue)
const PORTUGUESE_WORDS: [(&str, &str); 48] = [
    ("CASA", "Lugar onde moramos"),
    ("GATO", "Animal doméstico que mia"),
    ("CACHORRO", "Melhor amigo do homem"),
    ("SAPO", "Anfíbio que coaxa"),
    ("TATU", "Animal com carapaça que cava buracos"),
    ("RATO", "Pequeno roedor"),
    ("ESCOLA", "Lugar onde estudamos"),
    ("LIVRO", "Objeto com páginas para ler"),
    ("ÁGUA", "Líquido essencial para a vida"),
    ("SOL", "Estrela que ilumina a Terra"),
    ("LUA", "Satélite natural da Terra"),
    ("MAR", "Grande extensão de água salgada"),
    ("PRAIA", "Faixa de areia à beira-mar"),
    ("CARRO", "Veículo de quatro rodas"),
    ("BOLA", "Objeto redondo usado em jogos"),
    ("MESA", "Móvel com tampo e pernas"),
    ("CADEIRA", "Móvel para sentar"),
    ("JANELA", "Abertura na parede para entrar luz"),
    ("PORTA", "Por onde entramos em casa"),
    ("FLOR", "Parte colorida da planta"),
    ("ÁRVORE", "Planta grande com tronco"),
    ("PÁSSARO", "Animal que voa e tem penas"),
    ("PEIXE", "Animal que vive na água"),
    ("BANANA", "Fruta amarela e comprida"),
    ("LARANJA", "Fruta cítrica cor de laranja"),
    ("MAÇÃ", "Fruta vermelha ou verde"),
    ("PÃO", "Alimento feito de farinha"),
    ("LEITE", "Bebida branca que vem da vaca"),
    ("QUEIJO", "Alimento feito de leite"),
    ("CAFÉ", "Bebida escura tomada de manhã"),
    ("AMIGO", "Pessoa querida com quem convivemos"),
    ("FAMÍLIA", "Pais, filhos e parentes"),
    ("CIDADE", "Lugar com muitas ruas e prédios"),
    ("RUA", "Via pública"),
    ("TEMPO", "Passa sem parar"),
    ("CHUVA", "Água que cai do céu"),
    ("NUVEM", "Fica no céu e traz a chuva"),
    ("VENTO", "Ar em movimento"),
    ("MÚSICA", "Arte dos sons"),
    ("DANÇA", "Movimento ao ritmo da música"),
    ("TELEFONE", "Aparelho para falar à distância"),
    ("CAMISA", "Roupa com mangas e botões"),
    ("SAPATO", "Calçado"),
    ("CAMA", "Móvel para dormir"),
    ("COZINHA", "Onde preparamos a comida"),
    ("JARDIM", "Espaço com plantas e flores"),
    ("ESTRELA", "Brilha no céu à noite"),
    ("COELHO", "Animal de orelhas compridas"),
];

/// Return the built-in list of basic Portuguese words.
pub fn portuguese_words() -> Vec<Candidate> {
    PORTUGUESE_WORDS
        .iter()
        .map(|(word, clue)| Candidate::new(word, clue))
        .collect()
}

/// Load a word list from a JSON file.
pub fn load_pool(path: &Path) -> Result<Vec<Candidate>, Box<dyn Error>> {
    debug!("Loading words from {path:?}");
    let file: File = File::open(path)?;
    let reader: BufReader<File> = BufReader::new(file);
    let pool: Vec<Candidate> = serde_json::from_reader(reader)?;
    Ok(pool)
}

/// Return the words that can be used in a grid of `grid_size` cells.
///
/// Surrounding spaces are removed. Empty words, words longer than the grid, and duplicated words
/// are dropped (the first occurrence is kept).
pub fn sanitize(pool: &[Candidate], grid_size: usize) -> Vec<Candidate> {
    let mut seen: HashSet<String> = HashSet::with_capacity(pool.len());
    let mut words: Vec<Candidate> = Vec::with_capacity(pool.len());

    for candidate in pool {
        let c: Candidate = Candidate::new(candidate.word.trim(), candidate.clue.trim());
        if c.is_empty() {
            warn!("Ignoring empty word (clue \"{}\")", c.clue);
            continue;
        }
        if c.len() > grid_size {
            warn!(
                "Ignoring {}: longer than the grid ({} > {grid_size})",
                c.word,
                c.len()
            );
            continue;
        }
        if !seen.insert(c.word.clone()) {
            warn!("Ignoring duplicated word {}", c.word);
            continue;
        }
        words.push(c);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_words_are_usable() {
        let pool: Vec<Candidate> = portuguese_words();
        assert_eq!(sanitize(&pool, 15).len(), pool.len());
    }

    #[test]
    fn length_counts_letters_not_bytes() {
        let c: Candidate = Candidate::new("MAÇÃ", "Fruta");
        assert_eq!(c.len(), 4);
        assert_eq!(c.letters(), vec!['M', 'A', 'Ç', 'Ã']);
    }

    #[test]
    fn shared_letters() {
        let gato: Candidate = Candidate::new("GATO", "");
        assert!(gato.shares_letter_with(&Candidate::new("RUA", "")));
        assert!(!gato.shares_letter_with(&Candidate::new("SUL", "")));
    }

    #[test]
    fn sanitize_drops_unusable_words() {
        let pool: Vec<Candidate> = vec![
            Candidate::new(" GATO ", "Mia"),
            Candidate::new("", "Nada"),
            Candidate::new("GATO", "Outra pista"),
            Candidate::new("PARALELEPÍPEDO", "Longo demais"),
            Candidate::new("RATO", "Roedor"),
        ];
        let words: Vec<Candidate> = sanitize(&pool, 10);
        assert_eq!(
            words,
            vec![Candidate::new("GATO", "Mia"), Candidate::new("RATO", "Roedor")]
        );
    }
}
