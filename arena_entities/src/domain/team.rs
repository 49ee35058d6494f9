use std::collections::BTreeSet;

use sea_orm::{prelude::*, ActiveValue, QueryOrder, QuerySelect};
use serde::{Deserialize, Serialize};

use crate::schema;


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: i32,
    pub tournament_id: i32,
    pub name: String,
}

impl Team {
    pub fn from_model(model: schema::team::Model) -> Self {
        Team {
            id: model.id,
            tournament_id: model.tournament_id,
            name: model.name,
        }
    }

    pub async fn get_all_in_tournament<C>(db: &C, tournament_id: i32) -> Result<Vec<Team>, DbErr> where C: ConnectionTrait {
        let teams = schema::team::Entity::find()
            .filter(schema::team::Column::TournamentId.eq(tournament_id))
            .order_by_asc(schema::team::Column::Id)
            .all(db)
            .await?;
        Ok(teams.into_iter().map(Self::from_model).collect())
    }

    pub async fn create<C>(db: &C, tournament_id: i32, name: String) -> Result<Team, DbErr> where C: ConnectionTrait {
        let model = schema::team::ActiveModel {
            tournament_id: ActiveValue::Set(tournament_id),
            name: ActiveValue::Set(name),
            ..Default::default()
        }.insert(db).await?;
        Ok(Self::from_model(model))
    }

    /// Returns the number of inserted teams.
    pub async fn create_many<C>(db: &C, tournament_id: i32, names: Vec<String>) -> Result<usize, DbErr> where C: ConnectionTrait {
        if names.is_empty() {
            return Ok(0);
        }
        let count = names.len();
        let models = names.into_iter().map(|name| schema::team::ActiveModel {
            tournament_id: ActiveValue::Set(tournament_id),
            name: ActiveValue::Set(name),
            ..Default::default()
        });
        schema::team::Entity::insert_many(models).exec_without_returning(db).await?;
        Ok(count)
    }

    /// Filters `ids` down to the teams that exist in the tournament.
    pub async fn existing_ids_in_tournament<C>(db: &C, tournament_id: i32, ids: &BTreeSet<i32>) -> Result<BTreeSet<i32>, DbErr> where C: ConnectionTrait {
        if ids.is_empty() {
            return Ok(BTreeSet::new());
        }
        let found: Vec<i32> = schema::team::Entity::find()
            .select_only()
            .column(schema::team::Column::Id)
            .filter(
                schema::team::Column::TournamentId.eq(tournament_id).and(
                    schema::team::Column::Id.is_in(ids.iter().copied())
                )
            )
            .into_tuple()
            .all(db)
            .await?;
        Ok(found.into_iter().collect())
    }
}
