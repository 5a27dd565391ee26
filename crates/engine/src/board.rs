use rand::{seq::SliceRandom, Rng};

use crate::words;

pub const BOARD_LETTERS: usize = 7;

const GENERATION_ATTEMPTS: usize = 200;
const MIN_SOLUTIONS: usize = 10;
const TOPUP_ATTEMPTS: usize = 50;

/// Seven distinct letters, one of which is the mandatory center letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    letters: Vec<char>,
    center: char,
}

impl Board {
    pub fn new(letters: Vec<char>, center: char) -> Self {
        debug_assert_eq!(letters.len(), BOARD_LETTERS);
        debug_assert!(letters.contains(&center));
        Self { letters, center }
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn center(&self) -> char {
        self.center
    }

    /// The six shuffleable letters, in board order.
    pub fn outer(&self) -> Vec<char> {
        self.letters
            .iter()
            .copied()
            .filter(|&c| c != self.center)
            .collect()
    }
}

/// Picks a random base word, tops its letter set up to seven distinct
/// letters from other words, and keeps the first board with enough
/// solutions. Falls back to a fixed board when the word list never yields
/// a rich enough letter set.
pub fn generate_board(
    words: &[String],
    min_len: usize,
    rng: &mut impl Rng,
) -> (Board, Vec<String>) {
    for _ in 0..GENERATION_ATTEMPTS {
        let Some(base) = words.choose(rng) else { break };

        let mut letters: Vec<char> = {
            let mut unique: Vec<char> = base.chars().collect();
            unique.sort_unstable();
            unique.dedup();
            unique
        };
        if letters.len() > BOARD_LETTERS {
            continue;
        }

        for _ in 0..TOPUP_ATTEMPTS {
            if letters.len() == BOARD_LETTERS {
                break;
            }
            let Some(extra) = words.choose(rng) else { break };
            for c in extra.chars() {
                if letters.len() == BOARD_LETTERS {
                    break;
                }
                if c.is_alphabetic() && !letters.contains(&c) {
                    letters.push(c);
                }
            }
        }
        if letters.len() != BOARD_LETTERS {
            continue;
        }

        letters.shuffle(rng);
        let Some(&center) = letters.choose(rng) else {
            continue;
        };

        let solutions = words::solutions_for_board(words, &letters, center, min_len);
        if solutions.len() >= MIN_SOLUTIONS {
            return (Board::new(letters, center), solutions);
        }
    }

    fallback_board(words, min_len)
}

/// Deterministic board used when generation cannot find a rich enough
/// letter set in the configured word list.
pub fn fallback_board(words: &[String], min_len: usize) -> (Board, Vec<String>) {
    let letters = vec!['a', 'b', 'e', 'l', 'n', 'o', 't'];
    let center = 'n';
    let solutions = words::solutions_for_board(words, &letters, center, min_len);
    (Board::new(letters, center), solutions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn word_list() -> Vec<String> {
        crate::words::load_word_list(None, 4).expect("builtin list")
    }

    #[test]
    fn generated_board_has_seven_distinct_letters_and_enough_solutions() {
        let words = word_list();
        let mut rng = StdRng::seed_from_u64(7);

        let (board, solutions) = generate_board(&words, 4, &mut rng);
        let mut unique = board.letters().to_vec();
        unique.sort_unstable();
        unique.dedup();

        assert_eq!(unique.len(), BOARD_LETTERS);
        assert!(board.letters().contains(&board.center()));
        assert_eq!(board.outer().len(), BOARD_LETTERS - 1);
        assert!(solutions.len() >= MIN_SOLUTIONS);
    }

    #[test]
    fn every_solution_is_playable_on_its_board() {
        let words = word_list();
        let mut rng = StdRng::seed_from_u64(11);

        let (board, solutions) = generate_board(&words, 4, &mut rng);
        for word in &solutions {
            assert!(word.contains(board.center()), "{word} misses center");
            assert!(
                word.chars().all(|c| board.letters().contains(&c)),
                "{word} uses letters off the board"
            );
        }
    }

    #[test]
    fn empty_word_list_falls_back_to_fixed_board() {
        let mut rng = StdRng::seed_from_u64(1);
        let (board, solutions) = generate_board(&[], 4, &mut rng);
        assert_eq!(board.center(), 'n');
        assert!(solutions.is_empty());
    }
}
