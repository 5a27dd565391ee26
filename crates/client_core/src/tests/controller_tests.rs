use super::*;
use rand::{rngs::StdRng, SeedableRng};
use shared::{domain::GameId, protocol::FoundWordEntry};

fn board() -> LetterBoard {
    LetterBoard::new(['a', 'b', 'e', 'l', 'o', 't'], 'n')
}

fn outcome(ok: bool, word: Option<&str>, pangram: bool, message: &str) -> SubmitOutcome {
    SubmitOutcome {
        ok,
        word: word.map(str::to_string),
        pangram,
        message: message.to_string(),
        score: 12,
        rating: "Good".to_string(),
    }
}

#[test]
fn buffer_is_the_concatenation_of_clicked_letters() {
    let mut controller = InputController::new(board());
    for letter in ['n', 'o', 't', 'e'] {
        controller.push_letter(letter);
    }
    assert_eq!(controller.buffer(), "note");
}

#[test]
fn delete_on_empty_buffer_is_a_no_op() {
    let mut controller = InputController::new(board());
    controller.delete_last();
    controller.delete_last();
    assert_eq!(controller.buffer(), "");

    controller.push_letter('a');
    controller.delete_last();
    assert_eq!(controller.buffer(), "");
}

#[test]
fn shuffle_keeps_center_and_outer_multiset() {
    let mut board = board();
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..100 {
        board.shuffle(&mut rng);
        assert_eq!(board.center(), 'n');

        let mut outer = *board.outer();
        outer.sort_unstable();
        assert_eq!(outer, ['a', 'b', 'e', 'l', 'o', 't']);
    }
}

#[test]
fn shuffle_is_statistically_uniform() {
    const TRIALS: u32 = 6_000;
    // ~±5σ around the expected TRIALS / 6 per cell.
    const LOW: u32 = 850;
    const HIGH: u32 = 1_150;

    let start = ['a', 'b', 'e', 'l', 'o', 't'];
    let mut rng = StdRng::seed_from_u64(7);
    let mut counts = [[0u32; OUTER_LETTERS]; OUTER_LETTERS];

    for _ in 0..TRIALS {
        let mut board = LetterBoard::new(start, 'n');
        board.shuffle(&mut rng);
        for (position, letter) in board.outer().iter().enumerate() {
            let which = start.iter().position(|c| c == letter).expect("known letter");
            counts[which][position] += 1;
        }
    }

    for (which, row) in counts.iter().enumerate() {
        for (position, &count) in row.iter().enumerate() {
            assert!(
                (LOW..=HIGH).contains(&count),
                "letter {} landed on position {position} {count} times",
                start[which]
            );
        }
    }
}

#[test]
fn take_submission_trims_and_clears() {
    let mut controller = InputController::new(board());
    *controller.buffer_mut() = "  note ".to_string();

    assert_eq!(controller.take_submission().as_deref(), Some("note"));
    assert_eq!(controller.buffer(), "");
}

#[test]
fn whitespace_only_buffer_aborts_without_submission() {
    let mut controller = InputController::new(board());
    *controller.buffer_mut() = "   ".to_string();

    assert_eq!(controller.take_submission(), None);
    assert_eq!(controller.buffer(), "   ");
}

#[test]
fn accepted_verdict_updates_display_and_found_list() {
    let mut controller = InputController::new(board());
    *controller.buffer_mut() = "apple".to_string();
    let word = controller.take_submission().expect("submission");
    assert_eq!(word, "apple");

    controller.apply_verdict(&outcome(true, Some("APPLE"), false, "Nice!"));

    assert_eq!(controller.message(), "Nice!");
    assert_eq!(controller.score_text(), "12");
    assert_eq!(controller.rating_text(), "Good");
    assert_eq!(controller.found().len(), 1);
    assert_eq!(controller.found()[0].display(), "APPLE");
    assert_eq!(controller.buffer(), "");
}

#[test]
fn pangram_entry_is_star_suffixed() {
    let mut controller = InputController::new(board());
    controller.apply_verdict(&outcome(true, Some("EXAMPLE"), true, "Pangram!"));
    assert!(controller.found()[0].display().ends_with('★'));
}

#[test]
fn rejected_verdict_shows_message_without_found_entry() {
    let mut controller = InputController::new(board());
    controller.apply_verdict(&outcome(false, None, false, "Not in this game's dictionary."));

    assert_eq!(controller.message(), "Not in this game's dictionary.");
    assert!(controller.found().is_empty());
}

#[test]
fn transport_failure_shows_fixed_message_only() {
    let mut controller = InputController::new(board());
    controller.apply_verdict(&outcome(true, Some("note"), false, "Nice!"));

    controller.apply_transport_failure();

    assert_eq!(controller.message(), TRANSPORT_FAILURE_MESSAGE);
    assert_eq!(controller.found().len(), 1);
    assert_eq!(controller.score_text(), "12");
}

#[test]
fn snapshot_bootstraps_board_found_list_and_totals() {
    let snapshot = BoardSnapshot {
        game_id: GameId::new(),
        outer_letters: vec!['a', 'b', 'e', 'l', 'o', 't'],
        center_letter: 'n',
        found_words: vec![FoundWordEntry {
            word: "notable".to_string(),
            pangram: true,
        }],
        score: 11,
        rating: "Nice".to_string(),
        solution_count: 20,
        started_at: chrono::Utc::now(),
    };

    let controller = InputController::from_snapshot(&snapshot).expect("controller");
    assert_eq!(controller.board().center(), 'n');
    assert_eq!(controller.score_text(), "11");
    assert_eq!(controller.rating_text(), "Nice");
    assert_eq!(controller.found()[0].display(), "notable ★");
}

#[test]
fn snapshot_with_wrong_outer_count_is_rejected() {
    let snapshot = BoardSnapshot {
        game_id: GameId::new(),
        outer_letters: vec!['a', 'b'],
        center_letter: 'n',
        found_words: Vec::new(),
        score: 0,
        rating: "Beginner".to_string(),
        solution_count: 0,
        started_at: chrono::Utc::now(),
    };
    assert!(InputController::from_snapshot(&snapshot).is_err());
}
