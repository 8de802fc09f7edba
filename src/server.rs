//! HTTP surface: `POST /` takes a match snapshot and answers with the chosen
//! column; any other request answers `ok`.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};

use crate::ai::{select_move, EvaluatorConfig};
use crate::config::ServerConfig;
use crate::error::{EvalError, WireError};
use crate::wire::{parse_external_state, MoveResponse, WireFormat};

/// Shared, read-only handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub evaluator: EvaluatorConfig,
    pub wire_format: WireFormat,
}

/// Errors a request can end in.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("bad match payload: {0}")]
    Wire(#[from] WireError),

    #[error("cannot select a move: {0}")]
    Eval(#[from] EvalError),

    #[error("evaluation task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Wire(_) => StatusCode::BAD_REQUEST,
            ApiError::Eval(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::warn!(%status, error = %self, "request failed");
        (status, self.to_string()).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", post(select_handler).fallback(health))
        .fallback(health)
        .with_state(Arc::new(state))
}

async fn health() -> &'static str {
    "ok"
}

async fn select_handler(
    State(app): State<Arc<AppState>>,
    body: String,
) -> Result<Json<MoveResponse>, ApiError> {
    let game = parse_external_state(&body, app.wire_format)?;
    tracing::debug!(to_move = ?game.to_move(), board = %game.board(), "received match");

    let config = app.evaluator.clone();
    let column = tokio::task::spawn_blocking(move || {
        let mut rng = config.rng();
        select_move(&game, &config, &mut rng)
    })
    .await??;

    Ok(Json(MoveResponse::new(column)))
}

/// Bind and serve until Ctrl-C.
pub async fn serve(config: &ServerConfig, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(addr = %listener.local_addr()?, format = ?state.wire_format, "listening");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
