use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub Uuid);

impl GameId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

/// Score tier for the current game, ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Beginner,
    GoodStart,
    Nice,
    Great,
    Amazing,
    QueenBee,
}

impl Rating {
    pub fn label(self) -> &'static str {
        match self {
            Rating::Beginner => "Beginner",
            Rating::GoodStart => "Good Start",
            Rating::Nice => "Nice",
            Rating::Great => "Great",
            Rating::Amazing => "Amazing",
            Rating::QueenBee => "Queen Bee",
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
