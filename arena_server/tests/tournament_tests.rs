mod common;
use arena_entities::domain::{ParticipantKind, TournamentMode};
use arena_server::{
    players::RegisterPlayerResponse,
    teams::CreateTeamResponse,
    tournament::{CreateTournamentRequest, CreateTournamentResponse, TournamentOverview}
};
use serde_json::json;
use tracing_test::traced_test;

use crate::common::{Auth, Fixture};

use assert_matches::assert_matches;


#[tokio::test]
#[traced_test]
async fn test_create_tournament_and_get_overview() {
    let mut fixture = Fixture::default().await;

    let mut response = fixture.post_json("/api/tournaments", CreateTournamentRequest {
        name: "Spring Cup".into(),
        mode: TournamentMode::Solo,
    }).await;
    assert_eq!(response.status(), 200);
    let created: CreateTournamentResponse = response.json().await;

    let mut response = fixture.get(&format!("/api/tournaments/{}", created.id)).await;
    assert_eq!(response.status(), 200);
    let overview: TournamentOverview = response.json().await;
    assert_eq!(overview.name, "Spring Cup");
    assert_matches!(overview.mode, TournamentMode::Solo);
    assert_matches!(overview.participant_kind, ParticipantKind::Player);
    assert!(overview.rounds.is_empty());
}

#[tokio::test]
#[traced_test]
async fn test_mode_defaults_to_team() {
    let mut fixture = Fixture::default().await;

    let mut response = fixture.post_json("/api/tournaments", json!({"name": "Cup"})).await;
    assert_eq!(response.status(), 200);
    let created: CreateTournamentResponse = response.json().await;

    let mut response = fixture.get(&format!("/api/tournaments/{}", created.id)).await;
    let overview: TournamentOverview = response.json().await;
    assert_matches!(overview.mode, TournamentMode::Team);
}

#[tokio::test]
#[traced_test]
async fn test_create_tournament_requires_admin() {
    let mut fixture = Fixture::default().await.with_auth(Auth::None);

    let response = fixture.post_json("/api/tournaments", json!({"name": "Cup"})).await;
    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[traced_test]
async fn test_overview_lists_rounds_in_order() {
    let mut fixture = Fixture::with_mock_tournament().await;

    let mut response = fixture.get("/api/tournaments/1").await;
    assert_eq!(response.status(), 200);
    let overview: TournamentOverview = response.json().await;
    assert_eq!(overview.rounds.iter().map(|r| r.id).collect::<Vec<_>>(), vec![100, 101, 102]);
    assert_eq!(overview.rounds[0].teams_count, Some(4));
}

#[tokio::test]
#[traced_test]
async fn test_unknown_tournament_is_not_found() {
    let mut fixture = Fixture::default().await;
    let response = fixture.get("/api/tournaments/12").await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[traced_test]
async fn test_created_team_is_listed() {
    let mut fixture = Fixture::with_mock_tournament().await;

    let mut response = fixture.post_json("/api/tournaments/1/teams", json!({"name": "Latecomers"})).await;
    assert_eq!(response.status(), 200);
    let created: CreateTeamResponse = response.json().await;

    let mut response = fixture.get("/api/tournaments/1/teams").await;
    assert_eq!(response.status(), 200);
    let teams: Vec<serde_json::Value> = response.json().await;
    assert_eq!(teams.len(), 13);
    assert!(teams.iter().any(|team| team["id"] == json!(created.id) && team["name"] == json!("Latecomers")));
}

#[tokio::test]
#[traced_test]
async fn test_solo_tournament_has_no_teams() {
    let mut fixture = Fixture::default().await;

    let mut response = fixture.post_json("/api/tournaments", json!({"name": "Solo Cup", "mode": "solo"})).await;
    let created: CreateTournamentResponse = response.json().await;

    let response = fixture.post_json(&format!("/api/tournaments/{}/teams", created.id), json!({"name": "A"})).await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[traced_test]
async fn test_register_player() {
    let mut fixture = Fixture::default().await.with_auth(Auth::None);

    let mut response = fixture.post_json("/api/players", json!({"username": " newbie "})).await;
    assert_eq!(response.status(), 200);
    let body: RegisterPlayerResponse = response.json().await;
    assert_eq!(body.username, "newbie");

    let response = fixture.post_json("/api/players", json!({"username": "newbie"})).await;
    assert_eq!(response.status(), 409);

    let response = fixture.post_json("/api/players", json!({"username": "two words"})).await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[traced_test]
async fn test_list_tournaments() {
    let mut fixture = Fixture::with_mock_tournament().await;

    let response = fixture.post_json("/api/tournaments", json!({"name": "Second Cup"})).await;
    assert_eq!(response.status(), 200);

    let mut response = fixture.with_auth(Auth::None).get("/api/tournaments").await;
    assert_eq!(response.status(), 200);
    let tournaments: Vec<serde_json::Value> = response.json().await;
    let names = tournaments.iter().map(|t| t["name"].as_str().unwrap().to_string()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Mock Tournament".to_string(), "Second Cup".to_string()]);
}
