use std::net::SocketAddr;

use axum::{body::Body, extract::MatchedPath, http::Request, Router};
use tower_http::trace::TraceLayer;
use tracing::{info, info_span};

pub mod auth;
pub mod commands;
pub mod config;
pub mod db;
pub mod ids;
pub mod locks;
pub mod patch;
pub mod players;
pub mod response;
pub mod round;
pub mod round_teams;
pub mod state;
pub mod teams;
pub mod tournament;

use state::AppState;


fn api_router() -> Router<AppState> {
    Router::new()
        .merge(tournament::router())
        .merge(teams::router())
        .merge(players::router())
        .merge(round::router())
        .merge(round_teams::router())
}

pub async fn app_with_state(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_router())
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let matched_path = request
                    .extensions()
                    .get::<MatchedPath>()
                    .map(MatchedPath::as_str);

                info_span!(
                    "http_request",
                    method = ?request.method(),
                    matched_path,
                )
            })
        )
        .with_state(state)
}

pub async fn serve(state: AppState) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", state.config.host, state.config.port).parse()?;
    let app = app_with_state(state).await;

    info!("Listening on {}", addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
