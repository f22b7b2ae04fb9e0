//! Integration tests for the user-profile aggregation endpoint.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;

// =========================================================================
// GET /api/user/{user_id}
// =========================================================================

#[tokio::test]
async fn get_user_returns_user_with_relations() {
    let (app, state) = common::test_app().await;
    let user = common::create_test_user(&state.db).await;

    let server = TestServer::new(app).unwrap();

    let resp = server.get(&format!("/api/user/{}", user.id)).await;

    resp.assert_status_ok();

    let body: serde_json::Value = resp.json();
    assert_eq!(body["id"].as_str(), Some(user.id.as_str()));
    assert_eq!(body["email"].as_str(), Some(user.email.as_str()));
    assert_eq!(body["profile"]["firstName"].as_str(), Some("Test"));
    assert_eq!(body["profile"]["lastName"].as_str(), Some("Traveler"));
    // Freshly provisioned preferences are empty but present.
    assert_eq!(
        body["eventPreferences"]["preferredExperiences"],
        serde_json::json!([])
    );
    assert!(body["eventPreferences"]["teamBuilding"].is_object());
    assert_eq!(body["restrictions"]["dietary"], serde_json::json!([]));

    common::cleanup_test_user(&state.db, &user.id).await;
}

#[tokio::test]
async fn get_user_returns_null_for_missing_sub_records() {
    let (app, state) = common::test_app().await;
    let user = common::create_bare_test_user(&state.db).await;

    let server = TestServer::new(app).unwrap();

    let resp = server.get(&format!("/api/user/{}", user.id)).await;

    resp.assert_status_ok();

    let body: serde_json::Value = resp.json();
    assert_eq!(body["id"].as_str(), Some(user.id.as_str()));
    assert!(body["profile"].is_null());
    assert!(body["eventPreferences"].is_null());
    assert!(body["restrictions"].is_null());

    common::cleanup_test_user(&state.db, &user.id).await;
}

#[tokio::test]
async fn get_unknown_user_returns_404() {
    let (app, _state) = common::test_app().await;
    let server = TestServer::new(app).unwrap();

    let resp = server.get("/api/user/usr_00000000000000000000000000").await;

    resp.assert_status(StatusCode::NOT_FOUND);
    let body: serde_json::Value = resp.json();
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}
