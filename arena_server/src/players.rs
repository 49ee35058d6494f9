use arena_entities::prelude::*;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{response::APIError, state::AppState};


const MAX_USERNAME_LENGTH: usize = 64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterPlayerRequest {
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterPlayerResponse {
    pub id: i32,
    pub username: String,
}

fn validate_username(username: &str) -> Result<(), APIError> {
    if username.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Username must not be empty").into());
    }
    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err((StatusCode::BAD_REQUEST, format!("Username must be at most {} characters", MAX_USERNAME_LENGTH)).into());
    }
    if username.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err((StatusCode::BAD_REQUEST, "Username must not contain whitespace").into());
    }
    Ok(())
}

async fn register_player_handler(
    State(db): State<DatabaseConnection>,
    Json(request): Json<RegisterPlayerRequest>,
) -> Result<Json<RegisterPlayerResponse>, APIError> {
    let username = request.username.trim();
    validate_username(username)?;

    let player = Player::create(&db, username.to_string()).await?;
    info!(player_id = player.id, "Registered player");

    Ok(Json(RegisterPlayerResponse { id: player.id, username: player.username }))
}


pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/players", post(register_player_handler))
}
