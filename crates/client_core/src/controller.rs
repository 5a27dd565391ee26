//! Input-side state machine for the word game: the letter board, the word
//! being composed, and the display state the last verdict produced. Pure
//! state; frontends own the event wiring and the network round trip.

use anyhow::{anyhow, Result};
use rand::Rng;
use shared::protocol::{BoardSnapshot, SubmitOutcome};

pub const OUTER_LETTERS: usize = 6;

/// Shown when the submit round trip fails at the transport level.
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Could not reach the game server.";

const PANGRAM_MARK: &str = " ★";

/// Six shuffleable outer letters around one fixed center letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterBoard {
    outer: [char; OUTER_LETTERS],
    center: char,
}

impl LetterBoard {
    pub fn new(outer: [char; OUTER_LETTERS], center: char) -> Self {
        Self { outer, center }
    }

    pub fn from_snapshot(snapshot: &BoardSnapshot) -> Result<Self> {
        let outer: [char; OUTER_LETTERS] = snapshot
            .outer_letters
            .as_slice()
            .try_into()
            .map_err(|_| {
                anyhow!(
                    "expected {OUTER_LETTERS} outer letters, server sent {}",
                    snapshot.outer_letters.len()
                )
            })?;
        Ok(Self::new(outer, snapshot.center_letter))
    }

    pub fn outer(&self) -> &[char; OUTER_LETTERS] {
        &self.outer
    }

    pub fn center(&self) -> char {
        self.center
    }

    /// Fisher–Yates permutation of the outer letters, last index down to 1.
    /// The center letter never moves.
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        for i in (1..self.outer.len()).rev() {
            let j = rng.gen_range(0..=i);
            self.outer.swap(i, j);
        }
    }

    pub fn outer_glyphs(&self) -> [String; OUTER_LETTERS] {
        self.outer.map(glyph)
    }

    pub fn center_glyph(&self) -> String {
        glyph(self.center)
    }
}

fn glyph(c: char) -> String {
    c.to_uppercase().collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundEntry {
    pub word: String,
    pub pangram: bool,
}

impl FoundEntry {
    /// List text: the word, star-suffixed for pangrams.
    pub fn display(&self) -> String {
        if self.pangram {
            format!("{}{PANGRAM_MARK}", self.word)
        } else {
            self.word.clone()
        }
    }
}

/// Translates UI gestures into buffer mutations and consumes submit
/// verdicts into display state.
#[derive(Debug, Clone)]
pub struct InputController {
    board: LetterBoard,
    buffer: String,
    found: Vec<FoundEntry>,
    message: String,
    score_text: String,
    rating_text: String,
}

impl InputController {
    pub fn new(board: LetterBoard) -> Self {
        Self {
            board,
            buffer: String::new(),
            found: Vec::new(),
            message: String::new(),
            score_text: String::new(),
            rating_text: String::new(),
        }
    }

    /// Bootstraps board, found list, and totals from a server snapshot.
    pub fn from_snapshot(snapshot: &BoardSnapshot) -> Result<Self> {
        let mut controller = Self::new(LetterBoard::from_snapshot(snapshot)?);
        controller.apply_snapshot(snapshot)?;
        Ok(controller)
    }

    /// Replaces the whole game view (new board, found list, totals) and
    /// starts the next word from an empty buffer.
    pub fn apply_snapshot(&mut self, snapshot: &BoardSnapshot) -> Result<()> {
        self.board = LetterBoard::from_snapshot(snapshot)?;
        self.found = snapshot
            .found_words
            .iter()
            .map(|entry| FoundEntry {
                word: entry.word.clone(),
                pangram: entry.pangram,
            })
            .collect();
        self.score_text = snapshot.score.to_string();
        self.rating_text = snapshot.rating.clone();
        self.buffer.clear();
        Ok(())
    }

    pub fn board(&self) -> &LetterBoard {
        &self.board
    }

    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.board.shuffle(rng);
    }

    pub fn push_letter(&mut self, letter: char) {
        self.buffer.push(letter);
    }

    /// Removes the last character; no-op on an empty buffer.
    pub fn delete_last(&mut self) {
        self.buffer.pop();
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Mutable handle for text-input widgets that edit the buffer directly.
    pub fn buffer_mut(&mut self) -> &mut String {
        &mut self.buffer
    }

    /// Trims the buffer and, when anything remains, clears it and yields
    /// the word to submit. Whitespace-only input aborts silently with the
    /// buffer left untouched; this is the only client-side validation.
    pub fn take_submission(&mut self) -> Option<String> {
        let word = self.buffer.trim().to_string();
        if word.is_empty() {
            return None;
        }
        self.buffer.clear();
        Some(word)
    }

    /// Renders one submit verdict: message, score, and rating verbatim;
    /// accepted words join the found list.
    pub fn apply_verdict(&mut self, outcome: &SubmitOutcome) {
        self.message = outcome.message.clone();
        self.score_text = outcome.score.to_string();
        self.rating_text = outcome.rating.clone();

        if outcome.ok {
            if let Some(word) = &outcome.word {
                self.found.push(FoundEntry {
                    word: word.clone(),
                    pangram: outcome.pangram,
                });
            }
        }
    }

    /// Transport-level failure: fixed message, everything else untouched.
    pub fn apply_transport_failure(&mut self) {
        self.message = TRANSPORT_FAILURE_MESSAGE.to_string();
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn score_text(&self) -> &str {
        &self.score_text
    }

    pub fn rating_text(&self) -> &str {
        &self.rating_text
    }

    pub fn found(&self) -> &[FoundEntry] {
        &self.found
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
