use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use server_api::{game_snapshot, reveal_solutions, start_new_game, submit_word, ApiContext};
use shared::{
    error::{ApiError, ErrorCode},
    protocol::{BoardSnapshot, SolutionList, SubmitOutcome, SubmitRequest},
};
use tracing::info;

mod config;

use config::load_settings;

#[derive(Clone)]
struct AppState {
    api: ApiContext,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    let words = engine::words::load_word_list(
        settings.wordlist_path.as_deref(),
        settings.min_word_length,
    )?;
    info!(words = words.len(), "word list loaded");

    let api = ApiContext::new(words, settings.min_word_length);
    let state = AppState { api };
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/game", get(http_game_snapshot))
        .route("/submit", post(http_submit))
        .route("/new", post(http_new_game))
        .route("/reveal", get(http_reveal))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn http_game_snapshot(State(state): State<Arc<AppState>>) -> Json<BoardSnapshot> {
    Json(game_snapshot(&state.api).await)
}

async fn http_submit(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SubmitRequest>, JsonRejection>,
) -> Result<Json<SubmitOutcome>, (StatusCode, Json<ApiError>)> {
    let Json(req) = payload.map_err(|rejection| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiError::new(ErrorCode::Validation, rejection.body_text())),
        )
    })?;
    Ok(Json(submit_word(&state.api, &req.word).await))
}

async fn http_new_game(State(state): State<Arc<AppState>>) -> Json<BoardSnapshot> {
    Json(start_new_game(&state.api).await)
}

async fn http_reveal(State(state): State<Arc<AppState>>) -> Json<SolutionList> {
    Json(reveal_solutions(&state.api).await)
}
