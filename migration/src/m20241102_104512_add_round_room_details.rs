use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum TournamentRound {
    Table,
    RoomCode,
    RoomPassword,
    StartTime,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Sqlite only accepts one column per ALTER statement
        manager.alter_table(
            Table::alter()
                .table(TournamentRound::Table)
                .add_column(ColumnDef::new(TournamentRound::RoomCode).string_len(64).null())
                .to_owned()
        ).await?;

        manager.alter_table(
            Table::alter()
                .table(TournamentRound::Table)
                .add_column(ColumnDef::new(TournamentRound::RoomPassword).string_len(64).null())
                .to_owned()
        ).await?;

        manager.alter_table(
            Table::alter()
                .table(TournamentRound::Table)
                .add_column(ColumnDef::new(TournamentRound::StartTime).timestamp().null())
                .to_owned()
        ).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.alter_table(
            Table::alter()
                .table(TournamentRound::Table)
                .drop_column(TournamentRound::StartTime)
                .to_owned()
        ).await?;

        manager.alter_table(
            Table::alter()
                .table(TournamentRound::Table)
                .drop_column(TournamentRound::RoomPassword)
                .to_owned()
        ).await?;

        manager.alter_table(
            Table::alter()
                .table(TournamentRound::Table)
                .drop_column(TournamentRound::RoomCode)
                .to_owned()
        ).await
    }
}
