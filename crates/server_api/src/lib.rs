use std::sync::Arc;

use engine::{FoundWord, Game};
use shared::protocol::{BoardSnapshot, FoundWordEntry, SolutionList, SubmitOutcome};
use tokio::sync::RwLock;
use tracing::info;

/// Shared service state: the one active game plus the material needed to
/// deal a fresh one.
#[derive(Clone)]
pub struct ApiContext {
    pub game: Arc<RwLock<Game>>,
    pub words: Arc<Vec<String>>,
    pub min_word_length: usize,
}

impl ApiContext {
    pub fn new(words: Vec<String>, min_word_length: usize) -> Self {
        let game = Game::generate(&words, min_word_length, &mut rand::thread_rng());
        info!(
            game_id = ?game.id(),
            solutions = game.solution_count(),
            "dealt initial board"
        );
        Self {
            game: Arc::new(RwLock::new(game)),
            words: Arc::new(words),
            min_word_length,
        }
    }
}

pub async fn submit_word(ctx: &ApiContext, raw_word: &str) -> SubmitOutcome {
    let mut game = ctx.game.write().await;
    let verdict = game.submit(raw_word);
    let score = game.score();
    let rating = game.rating().label().to_string();

    match verdict {
        Ok(FoundWord {
            word,
            points,
            pangram,
        }) => {
            info!(%word, points, pangram, score, "word accepted");
            let message = if pangram {
                format!("Pangram! '{word}' is worth {points} points.")
            } else {
                format!("Nice! '{word}' is worth {points} points.")
            };
            SubmitOutcome {
                ok: true,
                word: Some(word),
                pangram,
                message,
                score,
                rating,
            }
        }
        Err(rejection) => SubmitOutcome {
            ok: false,
            word: None,
            pangram: false,
            message: rejection.to_string(),
            score,
            rating,
        },
    }
}

pub async fn game_snapshot(ctx: &ApiContext) -> BoardSnapshot {
    let game = ctx.game.read().await;
    snapshot_of(&game)
}

pub async fn start_new_game(ctx: &ApiContext) -> BoardSnapshot {
    let fresh = Game::generate(&ctx.words, ctx.min_word_length, &mut rand::thread_rng());
    info!(
        game_id = ?fresh.id(),
        solutions = fresh.solution_count(),
        "dealt new board"
    );
    let mut game = ctx.game.write().await;
    *game = fresh;
    snapshot_of(&game)
}

pub async fn reveal_solutions(ctx: &ApiContext) -> SolutionList {
    let game = ctx.game.read().await;
    let words: Vec<String> = game.solutions().map(str::to_string).collect();
    let total = words.len();
    SolutionList { words, total }
}

fn snapshot_of(game: &Game) -> BoardSnapshot {
    BoardSnapshot {
        game_id: game.id(),
        outer_letters: game.board().outer(),
        center_letter: game.board().center(),
        found_words: game
            .found()
            .iter()
            .map(|entry| FoundWordEntry {
                word: entry.word.clone(),
                pangram: entry.pangram,
            })
            .collect(),
        score: game.score(),
        rating: game.rating().label().to_string(),
        solution_count: game.solution_count(),
        started_at: game.started_at(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::Board;

    fn ctx_with_fixed_board() -> ApiContext {
        let board = Board::new(vec!['a', 'b', 'e', 'l', 'n', 'o', 't'], 'n');
        let solutions = ["notable", "note", "tone", "talon"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        let game = Game::from_parts(board, solutions, 4);
        ApiContext {
            game: Arc::new(RwLock::new(game)),
            words: Arc::new(vec!["note".to_string(), "tone".into()]),
            min_word_length: 4,
        }
    }

    #[tokio::test]
    async fn accepted_word_reports_cumulative_score() {
        let ctx = ctx_with_fixed_board();

        let outcome = submit_word(&ctx, "note").await;
        assert!(outcome.ok);
        assert_eq!(outcome.word.as_deref(), Some("note"));
        assert_eq!(outcome.score, 1);

        let outcome = submit_word(&ctx, "talon").await;
        assert!(outcome.ok);
        assert_eq!(outcome.score, 3);
        assert_eq!(outcome.rating, "Good Start");
    }

    #[tokio::test]
    async fn rejected_word_is_an_outcome_not_an_error() {
        let ctx = ctx_with_fixed_board();

        let outcome = submit_word(&ctx, "zzzz").await;
        assert!(!outcome.ok);
        assert_eq!(outcome.word, None);
        assert!(!outcome.message.is_empty());
        assert_eq!(outcome.score, 0);
    }

    #[tokio::test]
    async fn pangram_is_flagged_and_messaged() {
        let ctx = ctx_with_fixed_board();

        let outcome = submit_word(&ctx, "notable").await;
        assert!(outcome.ok);
        assert!(outcome.pangram);
        assert!(outcome.message.starts_with("Pangram!"));
    }

    #[tokio::test]
    async fn snapshot_tracks_found_words() {
        let ctx = ctx_with_fixed_board();
        submit_word(&ctx, "note").await;
        submit_word(&ctx, "notable").await;

        let snapshot = game_snapshot(&ctx).await;
        assert_eq!(snapshot.center_letter, 'n');
        assert_eq!(snapshot.outer_letters.len(), 6);
        assert_eq!(snapshot.found_words.len(), 2);
        assert!(snapshot.found_words[1].pangram);
        assert_eq!(snapshot.solution_count, 4);
    }

    #[tokio::test]
    async fn new_game_resets_progress_under_a_new_id() {
        let ctx = ctx_with_fixed_board();
        submit_word(&ctx, "note").await;
        let before = game_snapshot(&ctx).await;

        let after = start_new_game(&ctx).await;
        assert_ne!(before.game_id, after.game_id);
        assert_eq!(after.score, 0);
        assert!(after.found_words.is_empty());
    }

    #[tokio::test]
    async fn reveal_lists_every_solution() {
        let ctx = ctx_with_fixed_board();
        let solutions = reveal_solutions(&ctx).await;
        assert_eq!(solutions.total, 4);
        assert!(solutions.words.contains(&"notable".to_string()));
    }
}
