use arena_entities::prelude::*;
use axum::{extract::{Path, State}, http::StatusCode, routing::{get, post}, Json, Router};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{auth::ExtractAdmin, response::APIError, state::AppState};


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTournamentRequest {
    pub name: String,
    #[serde(default = "default_mode")]
    pub mode: TournamentMode,
}

fn default_mode() -> TournamentMode {
    TournamentMode::Team
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTournamentResponse {
    pub id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundSummary {
    pub id: i32,
    pub name: String,
    pub round_number: i32,
    pub status: RoundStatus,
    pub teams_count: Option<i32>,
}

impl From<TournamentRound> for RoundSummary {
    fn from(round: TournamentRound) -> Self {
        RoundSummary {
            id: round.id,
            name: round.name,
            round_number: round.round_number,
            status: round.status,
            teams_count: round.teams_count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentOverview {
    pub id: i32,
    pub name: String,
    pub mode: TournamentMode,
    pub participant_kind: ParticipantKind,
    pub rounds: Vec<RoundSummary>,
}


async fn create_tournament_handler(
    State(db): State<DatabaseConnection>,
    ExtractAdmin(admin): ExtractAdmin,
    Json(request): Json<CreateTournamentRequest>,
) -> Result<Json<CreateTournamentResponse>, APIError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Tournament name must not be empty").into());
    }

    let tournament = Tournament::create(&db, name.to_string(), request.mode).await?;
    info!(tournament_id = tournament.id, admin = admin.key_index, mode = %tournament.mode, "Created tournament");

    Ok(Json(CreateTournamentResponse { id: tournament.id }))
}

async fn list_tournaments_handler(
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<Tournament>>, APIError> {
    Ok(Json(Tournament::get_all(&db).await?))
}

async fn get_tournament_handler(
    State(db): State<DatabaseConnection>,
    Path(tournament_id): Path<i32>,
) -> Result<Json<TournamentOverview>, APIError> {
    let tournament = Tournament::get(&db, tournament_id).await?;
    let rounds = TournamentRound::get_all_in_tournament(&db, tournament_id).await?;

    Ok(Json(TournamentOverview {
        id: tournament.id,
        name: tournament.name,
        mode: tournament.mode,
        participant_kind: tournament.mode.participant_kind(),
        rounds: rounds.into_iter().map(RoundSummary::from).collect(),
    }))
}


pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/tournaments", post(create_tournament_handler).get(list_tournaments_handler))
        .route("/tournaments/:tournament_id", get(get_tournament_handler))
}
