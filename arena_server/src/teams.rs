use arena_entities::prelude::*;
use axum::{extract::{Path, State}, http::StatusCode, routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{auth::ExtractAdmin, response::APIError, state::AppState};


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTeamRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTeamResponse {
    pub id: i32,
}

async fn create_team_handler(
    State(db): State<DatabaseConnection>,
    ExtractAdmin(_): ExtractAdmin,
    Path(tournament_id): Path<i32>,
    Json(request): Json<CreateTeamRequest>,
) -> Result<Json<CreateTeamResponse>, APIError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Team name must not be empty").into());
    }

    let tournament = Tournament::get(&db, tournament_id).await?;
    if tournament.mode == TournamentMode::Solo {
        return Err((StatusCode::BAD_REQUEST, "Solo tournaments do not have teams").into());
    }

    let team = Team::create(&db, tournament.id, name.to_string()).await?;
    info!(tournament_id, team_id = team.id, "Created team");

    Ok(Json(CreateTeamResponse { id: team.id }))
}

async fn list_teams_handler(
    State(db): State<DatabaseConnection>,
    Path(tournament_id): Path<i32>,
) -> Result<Json<Vec<Team>>, APIError> {
    let tournament = Tournament::get(&db, tournament_id).await?;
    Ok(Json(Team::get_all_in_tournament(&db, tournament.id).await?))
}


pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/tournaments/:tournament_id/teams", get(list_teams_handler).post(create_team_handler))
}
