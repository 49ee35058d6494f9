use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;


#[derive(DeriveIden)]
pub enum Tournament {
    Table,
    Id,
    Name,
    Mode,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum Player {
    Table,
    Id,
    Username,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum Team {
    Table,
    Id,
    TournamentId,
    Name,
}

#[derive(DeriveIden)]
pub enum TournamentRound {
    Table,
    Id,
    TournamentId,
    Name,
    RoundNumber,
    TeamsCount,
    Status,
}

#[derive(DeriveIden)]
pub enum RoundParticipant {
    Table,
    RoundId,
    ParticipantId,
}


#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(
            Table::create()
                .table(Tournament::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(Tournament::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key()
                )
                .col(
                    ColumnDef::new(Tournament::Name)
                        .string_len(255)
                        .not_null()
                )
                .col(
                    ColumnDef::new(Tournament::Mode)
                        .string_len(16)
                        .not_null()
                        .default("team")
                )
                .col(
                    ColumnDef::new(Tournament::CreatedAt)
                        .timestamp()
                        .not_null()
                        .default(Expr::current_timestamp())
                )
                .to_owned(),
        ).await?;

        manager.create_table(
            Table::create()
                .table(Player::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(Player::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key()
                )
                .col(
                    ColumnDef::new(Player::Username)
                        .string_len(64)
                        .not_null()
                        .unique_key()
                )
                .col(
                    ColumnDef::new(Player::CreatedAt)
                        .timestamp()
                        .not_null()
                        .default(Expr::current_timestamp())
                )
                .to_owned(),
        ).await?;

        manager.create_table(
            Table::create()
                .table(Team::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(Team::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key()
                )
                .col(
                    ColumnDef::new(Team::TournamentId)
                        .integer()
                        .not_null()
                )
                .col(
                    ColumnDef::new(Team::Name)
                        .string_len(255)
                        .not_null()
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk-team-tournament-id")
                        .from(Team::Table, Team::TournamentId)
                        .to(Tournament::Table, Tournament::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        manager.create_table(
            Table::create()
                .table(TournamentRound::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(TournamentRound::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key()
                )
                .col(
                    ColumnDef::new(TournamentRound::TournamentId)
                        .integer()
                        .not_null()
                )
                .col(
                    ColumnDef::new(TournamentRound::Name)
                        .string_len(255)
                        .not_null()
                )
                .col(
                    ColumnDef::new(TournamentRound::RoundNumber)
                        .integer()
                        .not_null()
                )
                .col(
                    ColumnDef::new(TournamentRound::TeamsCount)
                        .integer()
                        .null()
                )
                .col(
                    ColumnDef::new(TournamentRound::Status)
                        .string_len(32)
                        .not_null()
                        .default("upcoming")
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk-tournament-round-tournament-id")
                        .from(TournamentRound::Table, TournamentRound::TournamentId)
                        .to(Tournament::Table, Tournament::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        manager.create_table(
            Table::create()
                .table(RoundParticipant::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(RoundParticipant::RoundId)
                        .integer()
                        .not_null()
                )
                .col(
                    ColumnDef::new(RoundParticipant::ParticipantId)
                        .integer()
                        .not_null()
                )
                .primary_key(
                    Index::create()
                        .name("pk-round-participant")
                        .col(RoundParticipant::RoundId)
                        .col(RoundParticipant::ParticipantId)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk-round-participant-round-id")
                        .from(RoundParticipant::Table, RoundParticipant::RoundId)
                        .to(TournamentRound::Table, TournamentRound::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        manager.create_index(
            Index::create()
                .name("idx-tournament-round-tournament-id")
                .table(TournamentRound::Table)
                .col(TournamentRound::TournamentId)
                .to_owned()
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(RoundParticipant::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(TournamentRound::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Team::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Player::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Tournament::Table).to_owned()).await?;

        Ok(())
    }
}
