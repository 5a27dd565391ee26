//! Events flowing from the backend worker to the UI thread.

use shared::protocol::{BoardSnapshot, SolutionList, SubmitOutcome};

pub enum UiEvent {
    GameLoaded(BoardSnapshot),
    Verdict(SubmitOutcome),
    SubmitFailed(UiError),
    SolutionsRevealed(SolutionList),
    Info(String),
    Error(UiError),
}

/// Which backend request failed. Everything here is transport-level: a
/// word the server rejects arrives as a normal `Verdict`, never as an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailedRequest {
    BackendStartup,
    FetchGame,
    Submit,
    NewGame,
    Reveal,
}

#[derive(Debug, Clone)]
pub struct UiError {
    request: FailedRequest,
    detail: String,
}

impl UiError {
    pub fn new(request: FailedRequest, detail: impl Into<String>) -> Self {
        Self {
            request,
            detail: detail.into(),
        }
    }

    pub fn request(&self) -> FailedRequest {
        self.request
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// Status-line text for the player; the full detail stays in the logs.
    pub fn status_line(&self) -> String {
        match self.request {
            FailedRequest::BackendStartup => {
                format!("Backend worker failed to start: {}", self.detail)
            }
            FailedRequest::FetchGame | FailedRequest::NewGame => {
                "Game server unreachable; check the URL and network, then retry.".to_string()
            }
            FailedRequest::Submit => client_core::TRANSPORT_FAILURE_MESSAGE.to_string(),
            FailedRequest::Reveal => {
                format!("Could not fetch the solution list: {}", self.detail)
            }
        }
    }
}
