mod utils;

use axum::http::StatusCode;
use bowling_tournament::PlayerRepository;
use serde_json::json;
use utils::*;

#[tokio::test]
async fn test_login_issues_token() {
    let setup = TestSetupBuilder::new().build();

    let (status, body) = setup
        .send(
            "POST",
            "/admin/login",
            Some(json!({ "password": ADMIN_PASSWORD })),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert!(body["expires_at"].is_string());
}

#[tokio::test]
async fn test_login_rejects_wrong_password() {
    let setup = TestSetupBuilder::new().build();

    let (status, body) = setup
        .send(
            "POST",
            "/admin/login",
            Some(json!({ "password": "gutter-ball" })),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_login_disabled_without_password() {
    let setup = TestSetupBuilder::new().without_admin_password().build();

    let (status, _) = setup
        .send(
            "POST",
            "/admin/login",
            Some(json!({ "password": ADMIN_PASSWORD })),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_routes_require_bearer_token() {
    let setup = TestSetupBuilder::new().build();

    let (status, _) = setup.get("/admin/dashboard").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = setup
        .send("GET", "/admin/dashboard", None, Some("not-a-jwt"))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = setup
        .send(
            "PATCH",
            "/admin/players/anyone/payment",
            Some(json!({ "paid": true })),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_payment_update_marks_player_paid() {
    let setup = TestSetupBuilder::new().build();
    let token = setup.admin_token().await;
    let alice = setup.register_player("Alice", "alice@lanes.test").await;

    let (status, body) = setup
        .send(
            "PATCH",
            &format!("/admin/players/{}/payment", alice),
            Some(json!({ "paid": true })),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["paid"], true);

    let stored = setup
        .player_repository
        .get_player(&alice)
        .await
        .unwrap()
        .unwrap();
    assert!(stored.paid);

    let (status, _) = setup
        .send(
            "PATCH",
            "/admin/players/missing/payment",
            Some(json!({ "paid": true })),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_dashboard_summarizes_tournament() {
    let setup = TestSetupBuilder::new().build();
    let token = setup.admin_token().await;

    let alice = setup.register_player("Alice", "alice@lanes.test").await;
    let bob = setup.register_player("Bob", "bob@lanes.test").await;
    setup.register_player("Cara", "cara@lanes.test").await;

    setup
        .send(
            "PATCH",
            &format!("/admin/players/{}/payment", bob),
            Some(json!({ "paid": true })),
            Some(&token),
        )
        .await;

    setup.submit_series(&alice, 1, [250, 260, 270]).await;
    setup.submit_series(&bob, 1, [150, 150, 150]).await;
    setup.submit_series(&bob, 3, [100, 100, 100]).await;

    let (status, body) = setup
        .send("GET", "/admin/dashboard", None, Some(&token))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["player_count"], 3);
    assert_eq!(body["paid_count"], 1);
    assert_eq!(body["unpaid_count"], 2);
    assert_eq!(body["series_count"], 3);
    assert_eq!(body["rounds_recorded"], 2);
    assert_eq!(body["leader"]["player_id"], alice.as_str());
    assert_eq!(body["leader"]["total_score"], 780);
}
