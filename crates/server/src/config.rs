use std::{collections::HashMap, fs, path::PathBuf};

#[derive(Debug, Clone)]
pub struct Settings {
    pub server_bind: String,
    pub wordlist_path: Option<PathBuf>,
    pub min_word_length: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8700".into(),
            wordlist_path: None,
            min_word_length: 4,
        }
    }
}

/// Layered settings: defaults, then `server.toml`, then environment
/// variables (`SERVER_BIND`/`APP__*`), last writer wins.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("server.toml") {
        apply_file_config(&mut settings, &raw);
    }

    if let Ok(v) = std::env::var("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Ok(v) = std::env::var("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Ok(v) = std::env::var("APP__WORDLIST_PATH") {
        settings.wordlist_path = Some(PathBuf::from(v));
    }

    if let Ok(v) = std::env::var("APP__MIN_WORD_LENGTH") {
        if let Ok(parsed) = v.parse::<usize>() {
            settings.min_word_length = parsed;
        }
    }

    settings
}

fn apply_file_config(settings: &mut Settings, raw: &str) {
    let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) else {
        return;
    };
    if let Some(v) = file_cfg.get("bind_addr") {
        settings.server_bind = v.clone();
    }
    if let Some(v) = file_cfg.get("wordlist_path") {
        settings.wordlist_path = Some(PathBuf::from(v));
    }
    if let Some(v) = file_cfg.get("min_word_length") {
        if let Ok(parsed) = v.parse::<usize>() {
            settings.min_word_length = parsed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_config_overrides_defaults() {
        let mut settings = Settings::default();
        apply_file_config(
            &mut settings,
            "bind_addr = \"0.0.0.0:9000\"\nwordlist_path = \"./words.txt\"\nmin_word_length = \"5\"\n",
        );

        assert_eq!(settings.server_bind, "0.0.0.0:9000");
        assert_eq!(settings.wordlist_path, Some(PathBuf::from("./words.txt")));
        assert_eq!(settings.min_word_length, 5);
    }

    #[test]
    fn malformed_file_config_is_ignored() {
        let mut settings = Settings::default();
        apply_file_config(&mut settings, "not valid toml [");
        assert_eq!(settings.server_bind, Settings::default().server_bind);
    }

    #[test]
    fn unparseable_min_word_length_keeps_default() {
        let mut settings = Settings::default();
        apply_file_config(&mut settings, "min_word_length = \"many\"\n");
        assert_eq!(settings.min_word_length, 4);
    }
}
