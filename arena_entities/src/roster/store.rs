use std::collections::BTreeSet;

use async_trait::async_trait;
use sea_orm::{prelude::*, ActiveValue};
use tracing::debug;

use crate::schema::round_participant;

use super::RosterStore;


pub struct DbRosterStore<'a, C> where C: ConnectionTrait {
    db: &'a C,
}

impl<'a, C> DbRosterStore<'a, C> where C: ConnectionTrait {
    pub fn new(db: &'a C) -> Self {
        DbRosterStore { db }
    }
}

#[async_trait]
impl<'a, C> RosterStore for DbRosterStore<'a, C> where C: ConnectionTrait {
    async fn current_roster(&self, round_id: i32) -> anyhow::Result<BTreeSet<i32>> {
        let rows = round_participant::Entity::find()
            .filter(round_participant::Column::RoundId.eq(round_id))
            .all(self.db)
            .await?;
        Ok(rows.into_iter().map(|row| row.participant_id).collect())
    }

    async fn contains(&self, round_id: i32, participant_id: i32) -> anyhow::Result<bool> {
        let row = round_participant::Entity::find_by_id((round_id, participant_id))
            .one(self.db)
            .await?;
        Ok(row.is_some())
    }

    async fn insert(&self, round_id: i32, participant_id: i32) -> anyhow::Result<()> {
        round_participant::Entity::insert(round_participant::ActiveModel {
            round_id: ActiveValue::Set(round_id),
            participant_id: ActiveValue::Set(participant_id),
        }).exec_without_returning(self.db).await?;
        Ok(())
    }

    async fn remove(&self, round_id: i32, participant_id: i32) -> anyhow::Result<()> {
        let result = round_participant::Entity::delete_many()
            .filter(
                round_participant::Column::RoundId.eq(round_id).and(
                    round_participant::Column::ParticipantId.eq(participant_id)
                )
            )
            .exec(self.db)
            .await?;
        if result.rows_affected == 0 {
            debug!(round_id, participant_id, "Membership row was already gone");
        }
        Ok(())
    }
}
