use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt; // for `oneshot`

use super::setup::{TestSetup, ADMIN_PASSWORD};

// ============================================================================
// Request Helpers
// ============================================================================

impl TestSetup {
    /// Sends a request and returns status plus the parsed JSON body (Null when empty)
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send("GET", uri, None, None).await
    }

    /// Registers a player and returns its id
    pub async fn register_player(&self, name: &str, email: &str) -> String {
        let (status, body) = self
            .send(
                "POST",
                "/players",
                Some(json!({ "name": name, "email": email })),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "registration failed: {}", body);
        body["id"].as_str().unwrap().to_string()
    }

    pub async fn submit_series(
        &self,
        player_id: &str,
        round_number: i32,
        games: [i32; 3],
    ) -> (StatusCode, Value) {
        self.send(
            "POST",
            "/series",
            Some(json!({
                "player_id": player_id,
                "round_number": round_number,
                "game_1": games[0],
                "game_2": games[1],
                "game_3": games[2],
            })),
            None,
        )
        .await
    }

    #[allow(dead_code)]
    pub async fn admin_token(&self) -> String {
        let (status, body) = self
            .send(
                "POST",
                "/admin/login",
                Some(json!({ "password": ADMIN_PASSWORD })),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::OK, "admin login failed: {}", body);
        body["token"].as_str().unwrap().to_string()
    }
}
