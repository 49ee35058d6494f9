use std::collections::BTreeSet;

use sea_orm::{prelude::*, ActiveValue, QuerySelect, SqlErr};
use serde::{Deserialize, Serialize};

use crate::{schema, EntityError};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: i32,
    pub username: String,
}

impl Player {
    pub fn from_model(model: schema::player::Model) -> Self {
        Player {
            id: model.id,
            username: model.username,
        }
    }

    pub async fn get<C>(db: &C, id: i32) -> Result<Player, EntityError> where C: ConnectionTrait {
        schema::player::Entity::find_by_id(id)
            .one(db)
            .await?
            .map(Self::from_model)
            .ok_or(EntityError::not_found("Player", id))
    }

    /// Usernames are unique, a taken one is reported as `UsernameTaken`.
    pub async fn create<C>(db: &C, username: String) -> Result<Player, EntityError> where C: ConnectionTrait {
        let result = schema::player::ActiveModel {
            username: ActiveValue::Set(username.clone()),
            created_at: ActiveValue::Set(chrono::Utc::now().naive_utc()),
            ..Default::default()
        }.insert(db).await;

        match result {
            Ok(model) => Ok(Self::from_model(model)),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(EntityError::UsernameTaken(username))
            }
            Err(err) => Err(err.into()),
        }
    }

    pub async fn existing_ids<C>(db: &C, ids: &BTreeSet<i32>) -> Result<BTreeSet<i32>, DbErr> where C: ConnectionTrait {
        if ids.is_empty() {
            return Ok(BTreeSet::new());
        }
        let found: Vec<i32> = schema::player::Entity::find()
            .select_only()
            .column(schema::player::Column::Id)
            .filter(schema::player::Column::Id.is_in(ids.iter().copied()))
            .into_tuple()
            .all(db)
            .await?;
        Ok(found.into_iter().collect())
    }
}
