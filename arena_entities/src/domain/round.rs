use sea_orm::{prelude::*, ActiveValue, QueryOrder};
use serde::{Deserialize, Serialize};

use crate::{schema, EntityError};

use super::RoundStatus;


#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDetails {
    pub room_code: Option<String>,
    pub room_password: Option<String>,
    pub start_time: Option<chrono::NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentRound {
    pub id: i32,
    pub tournament_id: i32,
    pub name: String,
    pub round_number: i32,
    pub teams_count: Option<i32>,
    pub status: RoundStatus,
    pub room: RoomDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRound {
    pub tournament_id: i32,
    pub name: String,
    pub round_number: i32,
    pub teams_count: Option<i32>,
}

impl TournamentRound {
    pub fn from_model(model: schema::tournament_round::Model) -> Self {
        TournamentRound {
            id: model.id,
            tournament_id: model.tournament_id,
            name: model.name,
            round_number: model.round_number,
            teams_count: model.teams_count,
            status: model.status,
            room: RoomDetails {
                room_code: model.room_code,
                room_password: model.room_password,
                start_time: model.start_time,
            },
        }
    }

    pub async fn try_get<C>(db: &C, id: i32) -> Result<Option<TournamentRound>, DbErr> where C: ConnectionTrait {
        let round = schema::tournament_round::Entity::find_by_id(id).one(db).await?;
        Ok(round.map(Self::from_model))
    }

    pub async fn get<C>(db: &C, id: i32) -> Result<TournamentRound, EntityError> where C: ConnectionTrait {
        Self::try_get(db, id).await?.ok_or(EntityError::not_found("Round", id))
    }

    pub async fn get_all_in_tournament<C>(db: &C, tournament_id: i32) -> Result<Vec<TournamentRound>, DbErr> where C: ConnectionTrait {
        let rounds = schema::tournament_round::Entity::find()
            .filter(schema::tournament_round::Column::TournamentId.eq(tournament_id))
            .order_by_asc(schema::tournament_round::Column::RoundNumber)
            .order_by_asc(schema::tournament_round::Column::Id)
            .all(db)
            .await?;
        Ok(rounds.into_iter().map(Self::from_model).collect())
    }

    pub async fn create<C>(db: &C, round: NewRound) -> Result<TournamentRound, DbErr> where C: ConnectionTrait {
        let model = schema::tournament_round::ActiveModel {
            tournament_id: ActiveValue::Set(round.tournament_id),
            name: ActiveValue::Set(round.name),
            round_number: ActiveValue::Set(round.round_number),
            teams_count: ActiveValue::Set(round.teams_count),
            status: ActiveValue::Set(RoundStatus::Upcoming),
            ..Default::default()
        }.insert(db).await?;
        Ok(Self::from_model(model))
    }

    /// Capacity of the round, or `fallback` if none is configured.
    pub fn effective_capacity(&self, fallback: usize) -> usize {
        match self.teams_count {
            Some(count) if count > 0 => count as usize,
            _ => fallback,
        }
    }

    pub fn uses_fallback_capacity(&self) -> bool {
        !matches!(self.teams_count, Some(count) if count > 0)
    }

    pub async fn set_status<C>(&mut self, db: &C, status: RoundStatus) -> Result<(), EntityError> where C: ConnectionTrait {
        if !self.status.can_transition_to(status) {
            return Err(EntityError::InvalidStatusTransition { from: self.status, to: status });
        }
        if self.status == status {
            return Ok(());
        }

        let mut model = self.to_active_model();
        model.status = ActiveValue::Set(status);
        model.update(db).await?;
        self.status = status;
        Ok(())
    }

    pub async fn set_room_details<C>(&mut self, db: &C, room: RoomDetails) -> Result<(), EntityError> where C: ConnectionTrait {
        let mut model = self.to_active_model();
        model.room_code = ActiveValue::Set(room.room_code.clone());
        model.room_password = ActiveValue::Set(room.room_password.clone());
        model.start_time = ActiveValue::Set(room.start_time);
        model.update(db).await?;
        self.room = room;
        Ok(())
    }

    /// Active model that only writes the fields set on it afterwards.
    fn to_active_model(&self) -> schema::tournament_round::ActiveModel {
        schema::tournament_round::ActiveModel {
            id: ActiveValue::Unchanged(self.id),
            ..Default::default()
        }
    }
}
