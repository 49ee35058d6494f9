use arena_entities::{domain::round::NewRound, prelude::*};
use axum::{
    extract::{Path, State}, http::StatusCode, routing::{get, patch, post}, Json, Router
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    auth::{ExtractAdmin, MaybeExtractAdmin},
    patch::PatchValue,
    response::APIError,
    state::AppState
};


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomInfo {
    pub room_code: Option<String>,
    /// Only sent to admins
    pub room_password: Option<String>,
    pub start_time: Option<chrono::NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundInfoResponse {
    pub id: i32,
    pub tournament_id: i32,
    pub name: String,
    pub round_number: i32,
    pub status: RoundStatus,
    pub teams_count: Option<i32>,
    pub capacity: usize,
    pub participant_kind: ParticipantKind,
    pub participants: Vec<i32>,
    pub room: RoomInfo,
}

impl RoundInfoResponse {
    async fn load(state: &AppState, round: TournamentRound, include_secrets: bool) -> Result<Self, APIError> {
        let tournament = Tournament::get(&state.db, round.tournament_id).await?;
        let participants = DbRosterStore::new(&state.db).current_roster(round.id).await?;

        Ok(RoundInfoResponse {
            id: round.id,
            tournament_id: round.tournament_id,
            capacity: round.effective_capacity(state.config.default_round_capacity),
            name: round.name,
            round_number: round.round_number,
            status: round.status,
            teams_count: round.teams_count,
            participant_kind: tournament.mode.participant_kind(),
            participants: participants.into_iter().collect(),
            room: RoomInfo {
                room_code: round.room.room_code,
                room_password: if include_secrets { round.room.room_password } else { None },
                start_time: round.room.start_time,
            },
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoundRequest {
    pub name: String,
    pub round_number: i32,
    #[serde(default)]
    pub teams_count: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRoundStatusRequest {
    pub status: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomUpdate {
    #[serde(default)]
    pub room_code: PatchValue<Option<String>>,
    #[serde(default)]
    pub room_password: PatchValue<Option<String>>,
    #[serde(default)]
    pub start_time: PatchValue<Option<chrono::NaiveDateTime>>,
}


async fn get_round_handler(
    State(state): State<AppState>,
    Path(round_id): Path<i32>,
    MaybeExtractAdmin(admin): MaybeExtractAdmin,
) -> Result<Json<RoundInfoResponse>, APIError> {
    let round = TournamentRound::get(&state.db, round_id).await?;
    Ok(Json(RoundInfoResponse::load(&state, round, admin.is_some()).await?))
}

async fn create_round_handler(
    State(state): State<AppState>,
    ExtractAdmin(admin): ExtractAdmin,
    Path(tournament_id): Path<i32>,
    Json(request): Json<CreateRoundRequest>,
) -> Result<Json<RoundInfoResponse>, APIError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Round name must not be empty").into());
    }
    if request.round_number <= 0 {
        return Err((StatusCode::BAD_REQUEST, "Round number must be positive").into());
    }
    if matches!(request.teams_count, Some(count) if count < 0) {
        return Err((StatusCode::BAD_REQUEST, "Teams count must not be negative").into());
    }

    let tournament = Tournament::get(&state.db, tournament_id).await?;
    let round = TournamentRound::create(&state.db, NewRound {
        tournament_id: tournament.id,
        name: name.to_string(),
        round_number: request.round_number,
        teams_count: request.teams_count,
    }).await?;
    info!(round_id = round.id, tournament_id, admin = admin.key_index, "Created round");

    Ok(Json(RoundInfoResponse::load(&state, round, true).await?))
}

async fn update_round_status_handler(
    State(state): State<AppState>,
    ExtractAdmin(admin): ExtractAdmin,
    Path(round_id): Path<i32>,
    Json(request): Json<UpdateRoundStatusRequest>,
) -> Result<Json<RoundInfoResponse>, APIError> {
    let status: RoundStatus = request.status.parse()
        .map_err(|err: String| APIError::from((StatusCode::BAD_REQUEST, err)))?;

    let mut round = TournamentRound::get(&state.db, round_id).await?;
    let previous = round.status;
    round.set_status(&state.db, status).await?;
    info!(round_id, admin = admin.key_index, from = %previous, to = %status, "Updated round status");

    Ok(Json(RoundInfoResponse::load(&state, round, true).await?))
}

async fn update_room_handler(
    State(state): State<AppState>,
    ExtractAdmin(admin): ExtractAdmin,
    Path(round_id): Path<i32>,
    Json(update): Json<RoomUpdate>,
) -> Result<Json<RoundInfoResponse>, APIError> {
    let mut round = TournamentRound::get(&state.db, round_id).await?;

    if update.room_code.is_set() || update.room_password.is_set() || update.start_time.is_set() {
        let mut room = round.room.clone();
        update.room_code.apply_to(&mut room.room_code);
        update.room_password.apply_to(&mut room.room_password);
        update.start_time.apply_to(&mut room.start_time);

        round.set_room_details(&state.db, room).await?;
        info!(round_id, admin = admin.key_index, "Updated room details");
    }

    Ok(Json(RoundInfoResponse::load(&state, round, true).await?))
}


pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/tournaments/:tournament_id/rounds", post(create_round_handler))
        .route("/rounds/:round_id", get(get_round_handler))
        .route("/rounds/:round_id/status", post(update_round_status_handler))
        .route("/rounds/:round_id/room", patch(update_room_handler))
}
