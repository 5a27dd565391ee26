use anyhow::{Context, Result};
use reqwest::Client;
use shared::protocol::{BoardSnapshot, SolutionList, SubmitOutcome, SubmitRequest};
use tracing::debug;

pub mod controller;

pub use controller::{
    FoundEntry, InputController, LetterBoard, OUTER_LETTERS, TRANSPORT_FAILURE_MESSAGE,
};

/// HTTP client for the game service. One fire-and-forget request per
/// submission: no retries, timeouts, or de-duplication.
pub struct GameClient {
    http: Client,
    server_url: String,
}

impl GameClient {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            server_url: server_url.into(),
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub async fn fetch_game(&self) -> Result<BoardSnapshot> {
        let res = self
            .http
            .get(format!("{}/game", self.server_url))
            .send()
            .await
            .context("failed to reach game endpoint")?
            .error_for_status()?;
        res.json().await.context("invalid game snapshot payload")
    }

    pub async fn submit(&self, word: &str) -> Result<SubmitOutcome> {
        debug!(%word, "submitting word");
        let res = self
            .http
            .post(format!("{}/submit", self.server_url))
            .json(&SubmitRequest {
                word: word.to_string(),
            })
            .send()
            .await
            .context("failed to reach submit endpoint")?
            .error_for_status()?;
        res.json().await.context("invalid submit verdict payload")
    }

    pub async fn new_game(&self) -> Result<BoardSnapshot> {
        let res = self
            .http
            .post(format!("{}/new", self.server_url))
            .send()
            .await
            .context("failed to reach new-game endpoint")?
            .error_for_status()?;
        res.json().await.context("invalid game snapshot payload")
    }

    pub async fn reveal(&self) -> Result<SolutionList> {
        let res = self
            .http
            .get(format!("{}/reveal", self.server_url))
            .send()
            .await
            .context("failed to reach reveal endpoint")?
            .error_for_status()?;
        res.json().await.context("invalid solution list payload")
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
