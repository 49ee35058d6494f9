use sea_orm::{prelude::*, ActiveValue, QueryOrder};
use serde::{Deserialize, Serialize};

use crate::{schema, EntityError};

use super::TournamentMode;


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: i32,
    pub name: String,
    pub mode: TournamentMode,
}

impl Tournament {
    pub fn from_model(model: schema::tournament::Model) -> Self {
        Tournament {
            id: model.id,
            name: model.name,
            mode: model.mode,
        }
    }

    pub async fn try_get<C>(db: &C, id: i32) -> Result<Option<Tournament>, DbErr> where C: ConnectionTrait {
        let tournament = schema::tournament::Entity::find_by_id(id).one(db).await?;
        Ok(tournament.map(Self::from_model))
    }

    pub async fn get<C>(db: &C, id: i32) -> Result<Tournament, EntityError> where C: ConnectionTrait {
        Self::try_get(db, id).await?.ok_or(EntityError::not_found("Tournament", id))
    }

    pub async fn get_all<C>(db: &C) -> Result<Vec<Tournament>, DbErr> where C: ConnectionTrait {
        let tournaments = schema::tournament::Entity::find()
            .order_by_asc(schema::tournament::Column::Id)
            .all(db)
            .await?;
        Ok(tournaments.into_iter().map(Self::from_model).collect())
    }

    pub async fn create<C>(db: &C, name: String, mode: TournamentMode) -> Result<Tournament, DbErr> where C: ConnectionTrait {
        let model = schema::tournament::ActiveModel {
            name: ActiveValue::Set(name),
            mode: ActiveValue::Set(mode),
            created_at: ActiveValue::Set(chrono::Utc::now().naive_utc()),
            ..Default::default()
        }.insert(db).await?;

        Ok(Self::from_model(model))
    }
}
