use migration::MigratorTrait;
use sea_orm::{prelude::*, Database, DbBackend, Statement};
use tracing::debug;

pub struct DatabaseConfig {
    url: String,
}


impl DatabaseConfig {
    pub fn new(url: String) -> DatabaseConfig {
        DatabaseConfig { url }
    }
}


pub async fn set_up_db(config: DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(config.url).await?;
    prepare_db(&db).await?;
    Ok(db)
}

/// Enables foreign keys on sqlite and brings the schema up to date.
pub async fn prepare_db(db: &DatabaseConnection) -> Result<(), DbErr> {
    if db.get_database_backend() == DbBackend::Sqlite {
        db.execute(Statement::from_sql_and_values(
            db.get_database_backend(),
            "PRAGMA foreign_keys = ON;",
            vec![])
        ).await?;
    }
    migration::Migrator::up(db, None).await?;
    debug!("Database migrations applied");
    Ok(())
}
