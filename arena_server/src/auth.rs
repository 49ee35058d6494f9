use axum::{
    async_trait,
    extract::FromRequestParts,
    headers::{authorization::Bearer, Authorization},
    http::{request::Parts, StatusCode},
    TypedHeader,
};

use crate::{response::APIError, state::AppState};


#[derive(Debug, Clone, Copy)]
pub struct Admin {
    /// Position of the matching token in the configured admin tokens
    pub key_index: usize,
}

impl Admin {
    fn from_token(state: &AppState, token: &str) -> Option<Admin> {
        state.config.admin_tokens
            .iter()
            .position(|t| !t.is_empty() && t == token)
            .map(|key_index| Admin { key_index })
    }
}

pub struct ExtractAdmin(pub Admin);

#[async_trait]
impl FromRequestParts<AppState> for ExtractAdmin
{
    type Rejection = APIError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
            .await
            .map_err(|_| (StatusCode::UNAUTHORIZED, "No valid authorization header found"))?;

        Admin::from_token(state, bearer.token())
            .map(ExtractAdmin)
            .ok_or_else(|| (StatusCode::UNAUTHORIZED, "Bearer token invalid").into())
    }
}

/// Like `ExtractAdmin`, but lets anonymous requests through.
pub struct MaybeExtractAdmin(pub Option<Admin>);

#[async_trait]
impl FromRequestParts<AppState> for MaybeExtractAdmin
{
    type Rejection = APIError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let header = TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await;

        match header {
            Ok(TypedHeader(Authorization(bearer))) => {
                let admin = Admin::from_token(state, bearer.token())
                    .ok_or_else(|| APIError::from((StatusCode::UNAUTHORIZED, "Bearer token invalid")))?;
                Ok(MaybeExtractAdmin(Some(admin)))
            },
            Err(_) => Ok(MaybeExtractAdmin(None))
        }
    }
}
