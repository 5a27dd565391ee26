use std::{collections::BTreeSet, fs, path::Path};

use anyhow::{Context, Result};

/// Seed dictionary used when no word-list file is configured. Clustered
/// around a handful of letter sets so generated boards reliably clear the
/// minimum-solution bar.
const DEFAULT_WORDS: &[&str] = &[
    "able", "alone", "atone", "bale", "ballet", "balloon", "ballot", "banal", "bane", "baton",
    "bean", "belt", "bent", "bloat", "bolt", "bone", "drone", "hive", "honey", "lane", "late",
    "lean", "lent", "loan", "lone", "neat", "nectar", "noble", "notable", "note", "oaten",
    "pollen", "queen", "table", "tablet", "tale", "talon", "tonal", "tone",
];

fn fold_char(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}

/// Lowercases and strips Latin diacritics so dictionary entries and typed
/// input compare equal ("Salão" == "salao").
pub fn normalize(word: &str) -> String {
    word.chars()
        .flat_map(char::to_lowercase)
        .map(fold_char)
        .collect()
}

/// Loads one word per line, normalized, keeping alphabetic words of at
/// least `min_len` characters. A missing file falls back to the built-in
/// list; an unreadable file is an error.
pub fn load_word_list(path: Option<&Path>, min_len: usize) -> Result<Vec<String>> {
    let raw: Vec<String> = match path {
        Some(path) if path.exists() => fs::read_to_string(path)
            .with_context(|| format!("failed to read word list '{}'", path.display()))?
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(normalize)
            .collect(),
        _ => DEFAULT_WORDS.iter().map(|word| normalize(word)).collect(),
    };

    let words: BTreeSet<String> = raw
        .into_iter()
        .filter(|word| word.chars().count() >= min_len)
        .filter(|word| word.chars().all(|c| c.is_alphabetic()))
        .collect();

    Ok(words.into_iter().collect())
}

/// All words playable on a board: long enough, containing the center
/// letter, and spelled entirely from the board's letters.
pub fn solutions_for_board(
    words: &[String],
    letters: &[char],
    center: char,
    min_len: usize,
) -> Vec<String> {
    let allowed: BTreeSet<char> = letters.iter().copied().collect();
    let mut solutions: Vec<String> = words
        .iter()
        .filter(|word| word.chars().count() >= min_len)
        .filter(|word| word.contains(center))
        .filter(|word| word.chars().all(|c| allowed.contains(&c)))
        .cloned()
        .collect();
    solutions.sort();
    solutions.dedup();
    solutions
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn normalize_strips_accents_and_case() {
        assert_eq!(normalize("Salão"), "salao");
        assert_eq!(normalize("AÇÚCAR"), "acucar");
        assert_eq!(normalize("plain"), "plain");
    }

    #[test]
    fn missing_file_falls_back_to_builtin_list() {
        let words = load_word_list(Some(Path::new("/no/such/wordlist.txt")), 4).expect("load");
        assert!(words.iter().any(|w| w == "notable"));
        assert!(words.iter().all(|w| w.chars().count() >= 4));
    }

    #[test]
    fn file_entries_are_normalized_filtered_and_deduped() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "Árvore\ncat\nhello\nhello\nnot-a-word\n  spaced  ").expect("write");

        let words = load_word_list(Some(file.path()), 4).expect("load");
        assert_eq!(
            words,
            vec!["arvore".to_string(), "hello".into(), "spaced".into()]
        );
    }

    #[test]
    fn solutions_require_center_letter_and_board_letters() {
        let words: Vec<String> = ["note", "tone", "tale", "cozy"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        let letters = ['a', 'e', 'l', 'n', 'o', 't', 'b'];

        let solutions = solutions_for_board(&words, &letters, 'n', 4);
        assert_eq!(solutions, vec!["note".to_string(), "tone".into()]);
    }
}
