use arena_entities::{roster::RosterError, EntityError};
use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use sea_orm::DbErr;
use serde::{Serialize, Deserialize};
use tracing::{error, info};


#[derive(Debug, Clone)]
pub struct APIError {
    pub message: String,
    pub code: StatusCode
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct APIErrorResponse {
    pub success: bool,
    pub message: String
}

impl APIError {
    pub fn new(message: String) -> Self {
        APIError {
            message,
            code: StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for APIError
{
    fn into_response(self) -> Response {
        let body = APIErrorResponse {
            success: false,
            message: self.message,
        };
        (self.code, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for APIError {
    fn from(err: anyhow::Error) -> Self {
        error!("Error while handling request {}", err);
        APIError::new(err.to_string())
    }
}

impl From<DbErr> for APIError {
    fn from(err: DbErr) -> Self {
        handle_error(err)
    }
}

impl From<EntityError> for APIError {
    fn from(err: EntityError) -> Self {
        match err {
            EntityError::NotFound { .. } => APIError { message: err.to_string(), code: StatusCode::NOT_FOUND },
            EntityError::UsernameTaken(_) => APIError { message: err.to_string(), code: StatusCode::CONFLICT },
            EntityError::InvalidStatusTransition { .. } => APIError { message: err.to_string(), code: StatusCode::BAD_REQUEST },
            EntityError::Db(err) => handle_error(err),
        }
    }
}

impl From<RosterError> for APIError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::CapacityExceeded { .. } => {
                info!("Rejected roster update: {}", err);
                APIError { message: err.to_string(), code: StatusCode::BAD_REQUEST }
            },
            RosterError::Store { .. } => {
                error!("Error while handling request {}", err);
                APIError::new(err.to_string())
            }
        }
    }
}

impl From<(StatusCode, &str)> for APIError {
    fn from((code, message): (StatusCode, &str)) -> Self {
        info!("Rejected request: {}", message);
        APIError { message: message.to_string(), code }
    }
}

impl From<(StatusCode, String)> for APIError {
    fn from((code, message): (StatusCode, String)) -> Self {
        info!("Rejected request: {}", message);
        APIError { message, code }
    }
}

pub fn handle_error<E>(err: E) -> APIError
where
    E: std::error::Error
{
    error!("Error while handling request {}", err);
    APIError::new(err.to_string())
}
