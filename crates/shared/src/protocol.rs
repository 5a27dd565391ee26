use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::GameId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitRequest {
    pub word: String,
}

/// Verdict for one submitted word. A rejected word is a normal response
/// (`ok: false`), not a transport error; `score` and `rating` always carry
/// the game's cumulative totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitOutcome {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    #[serde(default)]
    pub pangram: bool,
    #[serde(default)]
    pub message: String,
    pub score: u32,
    pub rating: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundWordEntry {
    pub word: String,
    pub pangram: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub game_id: GameId,
    pub outer_letters: Vec<char>,
    pub center_letter: char,
    pub found_words: Vec<FoundWordEntry>,
    pub score: u32,
    pub rating: String,
    pub solution_count: usize,
    pub started_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionList {
    pub words: Vec<String>,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_outcome_defaults_optional_fields() {
        // Servers omit `word` and may omit `pangram`/`message` on rejection.
        let outcome: SubmitOutcome =
            serde_json::from_str(r#"{"ok":false,"score":3,"rating":"Beginner"}"#).expect("decode");
        assert!(!outcome.ok);
        assert_eq!(outcome.word, None);
        assert!(!outcome.pangram);
        assert_eq!(outcome.message, "");
        assert_eq!(outcome.score, 3);
    }

    #[test]
    fn accepted_word_is_not_serialized_as_null() {
        let outcome = SubmitOutcome {
            ok: false,
            word: None,
            pangram: false,
            message: "Not in this game's dictionary.".into(),
            score: 0,
            rating: "Beginner".into(),
        };
        let encoded = serde_json::to_string(&outcome).expect("encode");
        assert!(!encoded.contains("\"word\""));
    }
}
