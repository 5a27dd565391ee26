//! Backend commands queued from UI to backend worker.

pub enum BackendCommand {
    FetchGame,
    SubmitWord { word: String },
    NewGame,
    RevealSolutions,
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::FetchGame => "fetch_game",
            BackendCommand::SubmitWord { .. } => "submit_word",
            BackendCommand::NewGame => "new_game",
            BackendCommand::RevealSolutions => "reveal_solutions",
        }
    }
}
