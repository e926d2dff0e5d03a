use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// POST /api/auth/login
///
/// Checks the static admin credentials. There is no session: the client
/// keeps its own logged-in flag.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<Value>, AppError> {
    let Some(credentials) = &state.credentials else {
        tracing::warn!("login attempted but admin credentials are not configured");
        return Err(AppError::unauthorized("Invalid credentials"));
    };
    if !credentials.verify(&req.username, &req.password) {
        tracing::info!(username = %req.username, "rejected login");
        return Err(AppError::unauthorized("Invalid credentials"));
    }
    Ok(Json(json!({
        "success": true,
        "user": { "username": req.username },
    })))
}
