use arena_entities::mock::{make_mock_tournament_with_options, MockOption, MockTournament};
use migration::MigratorTrait;
use sea_orm::{prelude::*, Database, Statement};


pub async fn set_up_db() -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    migration::Migrator::up(&db, None).await?;
    db.execute(Statement::from_sql_and_values(
        db.get_database_backend(),
        "PRAGMA foreign_keys = ON;",
        vec![])
    ).await?;
    Ok(db)
}

#[allow(dead_code)]
pub async fn set_up_mock_db(options: MockOption) -> Result<(DatabaseConnection, MockTournament), Box<dyn std::error::Error>> {
    let db = set_up_db().await?;
    let mock = make_mock_tournament_with_options(&db, MockOption {
        deterministic_ids: true,
        ..options
    }).await?;
    Ok((db, mock))
}
