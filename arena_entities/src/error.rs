use sea_orm::DbErr;

use crate::domain::RoundStatus;

#[derive(Debug, thiserror::Error)]
pub enum EntityError {
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: i32 },
    #[error("Username {0} is already taken")]
    UsernameTaken(String),
    #[error("Round can not change status from {from} to {to}")]
    InvalidStatusTransition { from: RoundStatus, to: RoundStatus },
    #[error(transparent)]
    Db(#[from] DbErr),
}

impl EntityError {
    pub fn not_found(kind: &'static str, id: i32) -> Self {
        EntityError::NotFound { kind, id }
    }
}
