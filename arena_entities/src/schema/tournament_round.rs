use sea_orm::entity::prelude::*;

use super::enums::RoundStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tournament_round")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tournament_id: i32,
    pub name: String,
    pub round_number: i32,
    pub teams_count: Option<i32>,
    pub status: RoundStatus,
    pub room_code: Option<String>,
    pub room_password: Option<String>,
    pub start_time: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tournament::Entity",
        from = "Column::TournamentId",
        to = "super::tournament::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Tournament,
    #[sea_orm(has_many = "super::round_participant::Entity")]
    RoundParticipant,
}

impl Related<super::tournament::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tournament.def()
    }
}

impl Related<super::round_participant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoundParticipant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
