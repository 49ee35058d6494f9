use std::sync::Arc;

use axum::extract::FromRef;
use sea_orm::prelude::*;

use crate::{config::Config, db::{self, DatabaseConfig}, locks::RoundLocks};


#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<Config>,
    pub round_locks: RoundLocks,
}

impl AppState {
    pub async fn new(config: Config) -> Result<AppState, DbErr> {
        let db = db::set_up_db(DatabaseConfig::new(config.db_url.clone())).await?;
        Ok(Self::from_parts(db, config))
    }

    pub async fn new_test_app(config: Config) -> Result<AppState, DbErr> {
        Self::new(
            Config {
                db_url: "sqlite::memory:".into(),
                ..config
            }
        ).await
    }

    fn from_parts(db: DatabaseConnection, config: Config) -> AppState {
        AppState {
            db,
            config: Arc::new(config),
            round_locks: RoundLocks::new(),
        }
    }
}

impl FromRef<AppState> for DatabaseConnection {
    fn from_ref(app_state: &AppState) -> DatabaseConnection {
        app_state.db.clone()
    }
}

impl FromRef<AppState> for Arc<Config> {
    fn from_ref(app_state: &AppState) -> Arc<Config> {
        app_state.config.clone()
    }
}
