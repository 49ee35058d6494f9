use std::collections::BTreeSet;

use arena_entities::prelude::*;
use arena_entities::roster::{check_capacity, reconcile_round};
use axum::{
    extract::{rejection::JsonRejection, State}, http::StatusCode, routing::post, Json, Router
};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{auth::ExtractAdmin, ids::RawId, response::APIError, state::AppState};


#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRoundTeamsRequest {
    #[serde(default)]
    pub round_id: Option<RawId>,
    #[serde(default)]
    pub tournament_id: Option<RawId>,
    #[serde(default)]
    pub selected_teams: Vec<RawId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTeamsSelection {
    pub round_id: i32,
    pub tournament_id: i32,
    pub selected: BTreeSet<i32>,
}

impl UpdateRoundTeamsRequest {
    pub fn validate(&self) -> Result<RoundTeamsSelection, String> {
        let round_id = self.round_id.as_ref()
            .ok_or_else(|| "Missing round id".to_string())?;
        let round_id = round_id.parse_positive()
            .ok_or_else(|| format!("Invalid round id {}", round_id))?;

        let tournament_id = self.tournament_id.as_ref()
            .ok_or_else(|| "Missing tournament id".to_string())?;
        let tournament_id = tournament_id.parse_positive()
            .ok_or_else(|| format!("Invalid tournament id {}", tournament_id))?;

        let invalid = self.selected_teams.iter()
            .filter(|id| id.parse_positive().is_none())
            .collect_vec();
        if !invalid.is_empty() {
            return Err(format!("Invalid participant ids: {}", invalid.iter().join(", ")));
        }

        Ok(RoundTeamsSelection {
            round_id,
            tournament_id,
            selected: self.selected_teams.iter().filter_map(RawId::parse_positive).collect(),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRoundTeamsDetails {
    pub teams_added: usize,
    pub teams_removed: usize,
    pub failed_operations: usize,
    pub total_selected: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRoundTeamsResponse {
    pub success: bool,
    pub message: String,
    pub teams_count: usize,
    pub details: UpdateRoundTeamsDetails,
}


async fn update_round_teams_handler(
    State(state): State<AppState>,
    ExtractAdmin(admin): ExtractAdmin,
    request: Result<Json<UpdateRoundTeamsRequest>, JsonRejection>,
) -> Result<Json<UpdateRoundTeamsResponse>, APIError> {
    let Json(request) = request
        .map_err(|err| APIError::from((StatusCode::BAD_REQUEST, format!("Malformed request: {}", err))))?;
    let selection = request.validate()
        .map_err(|message| APIError::from((StatusCode::BAD_REQUEST, message)))?;

    let round = TournamentRound::try_get(&state.db, selection.round_id).await?
        .ok_or_else(|| APIError::from((StatusCode::NOT_FOUND, "Round not found")))?;
    if round.tournament_id != selection.tournament_id {
        return Err((StatusCode::BAD_REQUEST, "Round does not belong to this tournament").into());
    }

    let tournament = Tournament::get(&state.db, round.tournament_id).await?;
    let kind = tournament.mode.participant_kind();
    let known = match kind {
        ParticipantKind::Team => Team::existing_ids_in_tournament(&state.db, tournament.id, &selection.selected).await?,
        ParticipantKind::Player => Player::existing_ids(&state.db, &selection.selected).await?,
    };
    if known.len() != selection.selected.len() {
        let unknown = selection.selected.difference(&known).join(", ");
        return Err((StatusCode::BAD_REQUEST, format!("Unknown {} ids: {}", kind.label(), unknown)).into());
    }

    let capacity = round.effective_capacity(state.config.default_round_capacity);
    if round.uses_fallback_capacity() {
        warn!(round_id = round.id, capacity, "Round has no capacity set, using default capacity");
    }

    check_capacity(&selection.selected, capacity)?;

    let (outcome, teams_count) = {
        let _guard = state.round_locks.lock(round.id).await;
        let store = DbRosterStore::new(&state.db);
        let outcome = reconcile_round(&store, round.id, &selection.selected, capacity).await?;
        (outcome, store.current_roster(round.id).await?.len())
    };

    info!(
        round_id = round.id,
        admin = admin.key_index,
        selected = selection.selected.len(),
        teams_count,
        "Updated round roster"
    );

    let message = if outcome.is_clean() {
        "Round teams updated successfully".to_string()
    } else {
        format!("Round teams updated with {} failed operations", outcome.failed)
    };

    Ok(Json(UpdateRoundTeamsResponse {
        success: outcome.is_clean(),
        message,
        teams_count,
        details: UpdateRoundTeamsDetails {
            teams_added: outcome.added,
            teams_removed: outcome.removed,
            failed_operations: outcome.failed,
            total_selected: selection.selected.len(),
        },
    }))
}


pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/update_round_teams", post(update_round_teams_handler))
}
