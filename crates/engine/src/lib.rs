use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use rand::Rng;
use shared::domain::{GameId, Rating};
use thiserror::Error;

pub mod board;
pub mod words;

pub use board::{Board, BOARD_LETTERS};

pub const PANGRAM_BONUS: u32 = 7;

/// Why a submission was refused. Display strings are the user-facing
/// rejection messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordRejection {
    #[error("Type a word.")]
    Empty,
    #[error("The word needs at least {min} letters.")]
    TooShort { min: usize },
    #[error("Use only letters (no numbers or symbols).")]
    NotAlphabetic,
    #[error("The word must contain the letter '{center}'.")]
    MissingCenter { center: char },
    #[error("Use only the letters: {letters}.")]
    OutsideBoard { letters: String },
    #[error("You already found that word.")]
    AlreadyFound,
    #[error("Not in this game's dictionary.")]
    NotInDictionary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundWord {
    pub word: String,
    pub points: u32,
    pub pangram: bool,
}

fn length_points(len: usize) -> u32 {
    match len {
        0..=4 => 1,
        5 => 2,
        6 => 3,
        _ => 4,
    }
}

/// Points and pangram flag for a word already known to be spelled from the
/// board's letters.
pub fn word_score(word: &str, board: &Board) -> (u32, bool) {
    let pangram = board.letters().iter().all(|&c| word.contains(c));
    let mut points = length_points(word.chars().count());
    if pangram {
        points += PANGRAM_BONUS;
    }
    (points, pangram)
}

/// Tier for `score` out of the board's maximum attainable score.
pub fn rating_for(score: u32, max_score: u32) -> Rating {
    if score == 0 || max_score == 0 {
        return Rating::Beginner;
    }
    if score >= max_score {
        return Rating::QueenBee;
    }
    let percent = u64::from(score) * 100 / u64::from(max_score);
    match percent {
        50.. => Rating::Amazing,
        40..=49 => Rating::Great,
        25..=39 => Rating::Nice,
        _ => Rating::GoodStart,
    }
}

/// One in-progress game: a board, its solution set, and the words found so
/// far. Found words and score only grow; starting over means a new `Game`.
#[derive(Debug, Clone)]
pub struct Game {
    id: GameId,
    board: Board,
    solutions: BTreeSet<String>,
    found: Vec<FoundWord>,
    score: u32,
    max_score: u32,
    min_word_length: usize,
    started_at: DateTime<Utc>,
}

impl Game {
    pub fn generate(words: &[String], min_word_length: usize, rng: &mut impl Rng) -> Self {
        let (board, solutions) = board::generate_board(words, min_word_length, rng);
        Self::from_parts(board, solutions, min_word_length)
    }

    pub fn from_parts(board: Board, solutions: Vec<String>, min_word_length: usize) -> Self {
        let max_score = solutions
            .iter()
            .map(|word| word_score(word, &board).0)
            .sum();
        Self {
            id: GameId::new(),
            board,
            solutions: solutions.into_iter().collect(),
            found: Vec::new(),
            score: 0,
            max_score,
            min_word_length,
            started_at: Utc::now(),
        }
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn found(&self) -> &[FoundWord] {
        &self.found
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    pub fn rating(&self) -> Rating {
        rating_for(self.score, self.max_score)
    }

    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }

    pub fn solutions(&self) -> impl Iterator<Item = &str> {
        self.solutions.iter().map(String::as_str)
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Validates one submission against the game rules in rejection-priority
    /// order; accepted words are recorded before returning.
    pub fn submit(&mut self, raw: &str) -> Result<FoundWord, WordRejection> {
        let word = words::normalize(raw.trim());
        if word.is_empty() {
            return Err(WordRejection::Empty);
        }
        if word.chars().count() < self.min_word_length {
            return Err(WordRejection::TooShort {
                min: self.min_word_length,
            });
        }
        if !word.chars().all(|c| c.is_alphabetic()) {
            return Err(WordRejection::NotAlphabetic);
        }
        if !word.contains(self.board.center()) {
            return Err(WordRejection::MissingCenter {
                center: self.board.center(),
            });
        }
        if word.chars().any(|c| !self.board.letters().contains(&c)) {
            let mut letters: Vec<String> = self
                .board
                .letters()
                .iter()
                .map(|c| c.to_string())
                .collect();
            letters.sort();
            return Err(WordRejection::OutsideBoard {
                letters: letters.join(", "),
            });
        }
        if self.found.iter().any(|entry| entry.word == word) {
            return Err(WordRejection::AlreadyFound);
        }
        if !self.solutions.contains(&word) {
            return Err(WordRejection::NotInDictionary);
        }

        let (points, pangram) = word_score(&word, &self.board);
        let entry = FoundWord {
            word,
            points,
            pangram,
        };
        self.found.push(entry.clone());
        self.score += points;
        Ok(entry)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
