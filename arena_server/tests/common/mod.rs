use std::{borrow::BorrowMut, future::Future};

use arena_entities::{domain::TournamentMode, mock::{self, MockOption, MockTournament}};
use arena_server::{config::Config, locks::RoundLocks, state::AppState};
use axum::{response::Response, http::{Request, request::Builder}, body::Body};
use http_body::Body as _;
use sea_orm::DatabaseConnection;
use tower::Service;


pub const ADMIN_TOKEN: &str = "admin-token";

pub struct FixtureOptions {
    pub mock_default_tournament: bool,
    pub mode: TournamentMode,
    pub teams_per_round: Option<i32>,
    pub default_round_capacity: usize,
}

impl Default for FixtureOptions {
    fn default() -> Self {
        FixtureOptions {
            mock_default_tournament: false,
            mode: TournamentMode::Team,
            teams_per_round: Some(4),
            default_round_capacity: Config::default().default_round_capacity,
        }
    }
}

pub struct Fixture {
    pub app: axum::Router,
    pub auth: Auth,
    pub db: DatabaseConnection,
    pub round_locks: RoundLocks,
    pub mock: Option<MockTournament>,
}

pub enum Auth {
    None,
    Bearer {
        token: String,
    },
}

pub struct APIResponse {
    response: Response,
}

impl APIResponse {
    pub fn status(&self) -> axum::http::StatusCode {
        self.response.status()
    }

    async fn bytes(&mut self) -> Vec<u8> {
        let mut buf = Vec::new();

        let body = self.response.body_mut();

        while let Some(next) = body.data().await {
            buf.extend_from_slice(&next.unwrap());
        }
        buf
    }

    pub async fn json<T: serde::de::DeserializeOwned>(&mut self) -> T {
        let buf = self.bytes().await;
        serde_json::from_slice(&buf).unwrap()
    }

    #[allow(dead_code)]
    pub async fn text(&mut self) -> String {
        let buf = self.bytes().await;
        String::from_utf8(buf).unwrap()
    }
}

impl From<Response> for APIResponse {
    fn from(response: Response) -> Self {
        Self {
            response,
        }
    }
}

impl Fixture {
    pub async fn new(options: FixtureOptions) -> Self {
        Self::new_with_setup(options, |_| async {  }).await
    }

    pub async fn new_with_setup<F, Fut>(options: FixtureOptions, setup_func: F) -> Self
    where
    F: FnOnce(DatabaseConnection) -> Fut,
    Fut: Future<Output = ()>,
     {
        let state = AppState::new_test_app(Config {
            admin_tokens: vec![ADMIN_TOKEN.to_string()],
            default_round_capacity: options.default_round_capacity,
            ..Default::default()
        }).await.unwrap();

        let mock = if options.mock_default_tournament {
            let mock = mock::make_mock_tournament_with_options(&state.db, MockOption {
                deterministic_ids: true,
                mode: options.mode,
                teams_per_round: options.teams_per_round,
                ..Default::default()
            }).await.unwrap();
            Some(mock)
        }
        else {
            None
        };

        setup_func(state.db.clone()).await;
        let db = state.db.clone();
        let round_locks = state.round_locks.clone();

        Self {
            app: arena_server::app_with_state(state).await,
            auth: Auth::Bearer { token: ADMIN_TOKEN.to_string() },
            db,
            round_locks,
            mock,
        }
    }

    #[allow(dead_code)]
    pub async fn default() -> Self {
        Self::new(FixtureOptions::default()).await
    }

    #[allow(dead_code)]
    pub async fn with_mock_tournament() -> Self {
        Self::new(FixtureOptions {
            mock_default_tournament: true,
            ..Default::default()
        }).await
    }

    #[allow(dead_code)]
    pub fn with_auth(self, auth: Auth) -> Self {
        Self {
            auth,
            ..self
        }
    }

    fn get_base_request(&self) -> Builder {
        let builder = Request::builder();

        match &self.auth {
            Auth::None => builder,
            Auth::Bearer { token } => {
                builder.header(
                    "Authorization",
                    format!("Bearer {}", token)
                )
            }
        }
    }

    async fn send(&mut self, request: Request<Body>) -> APIResponse {
        self.app.borrow_mut()
            .call(request)
            .await
            .unwrap().into()
    }

    #[allow(dead_code)]
    pub async fn get(&mut self, path: &str) -> APIResponse {
        let request = self.get_base_request()
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    #[allow(dead_code)]
    pub async fn post_json<T>(&mut self, path: &str, body: T) -> APIResponse where T: serde::Serialize
    {
        self.send_json("POST", path, body).await
    }

    #[allow(dead_code)]
    pub async fn patch_json<T>(&mut self, path: &str, body: T) -> APIResponse where T: serde::Serialize
    {
        self.send_json("PATCH", path, body).await
    }

    async fn send_json<T>(&mut self, method: &str, path: &str, body: T) -> APIResponse where T: serde::Serialize
    {
        let request = self.get_base_request()
            .method(method)
            .header("Content-Type", "application/json")
            .uri(path)
            .body(
                Body::from(
                    serde_json::to_string(&body).unwrap()
                )
            )
            .unwrap();
        self.send(request).await
    }
}
