//! Axum HTTP server: player registration, frame recording, score lookups.
//!
//! Handlers go through the shared [`PlayerStore`]; scoring itself stays in
//! `score_computation` and is invoked by the store when frames change.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/player` | Register a player |
//! | PUT | `/player` | Record frames and recompute the score |
//! | GET | `/player/{id}` | Look up a player's stored record |

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};

use crate::constants::FRAME_COUNT;
use crate::frame_mechanics::frame_pin_counts_valid;
use crate::storage::PlayerStore;
use crate::types::{Frame, Player};

pub type AppState = Arc<PlayerStore>;

pub fn create_router(store: Arc<PlayerStore>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health_check))
        .route(
            "/player",
            post(handle_register_player).put(handle_record_frames),
        )
        .route("/player/{id}", get(handle_get_player))
        .layer(cors)
        .with_state(store)
}

// ── Request/Response types ──────────────────────────────────────────

#[derive(Deserialize)]
struct RegisterRequest {
    name: String,
}

#[derive(Deserialize)]
struct RecordFramesRequest {
    id: u64,
    frames: BTreeMap<u8, Frame>,
}

fn error_response(status: StatusCode, msg: &str) -> (StatusCode, Json<serde_json::Value>) {
    (status, Json(serde_json::json!({ "error": msg })))
}

fn player_json(player: &Player) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "id": player.id,
        "name": player.name,
        "frames": player.frames,
        "score": player.score,
    }))
}

// ── Handlers ────────────────────────────────────────────────────────

async fn handle_health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}

async fn handle_register_player(
    State(store): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    if req.name.trim().is_empty() {
        return Err(error_response(StatusCode::BAD_REQUEST, "Missing name"));
    }
    let player = store.register(req.name.trim());
    Ok((StatusCode::CREATED, player_json(&player)))
}

async fn handle_record_frames(
    State(store): State<AppState>,
    Json(req): Json<RecordFramesRequest>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    for (&number, frame) in &req.frames {
        if number < 1 || number > FRAME_COUNT {
            return Err(error_response(
                StatusCode::BAD_REQUEST,
                "Frame number must be between 1 and 10",
            ));
        }
        if !frame_pin_counts_valid(number, frame) {
            return Err(error_response(StatusCode::BAD_REQUEST, "Invalid pin count"));
        }
    }

    let player = store
        .record_frames(req.id, &req.frames)
        .ok_or_else(|| error_response(StatusCode::NOT_FOUND, "Player not found"))?;

    Ok(player_json(&player))
}

async fn handle_get_player(
    State(store): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let player = store
        .get(id)
        .ok_or_else(|| error_response(StatusCode::NOT_FOUND, "Player not found"))?;
    Ok(player_json(&player))
}
