//! Integration tests for the recent-destinations log.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;

// =========================================================================
// POST /api/user/{user_id}/recent-destinations
// =========================================================================

#[tokio::test]
async fn create_destination_requires_country_and_destination() {
    let (app, state) = common::test_app().await;
    let user = common::create_test_user(&state.db).await;

    let server = TestServer::new(app).unwrap();

    let resp = server
        .post(&format!("/api/user/{}/recent-destinations", user.id))
        .json(&serde_json::json!({ "destination": "Lisbon" }))
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = resp.json();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let resp = server
        .post(&format!("/api/user/{}/recent-destinations", user.id))
        .json(&serde_json::json!({ "country": "Portugal", "destination": "  " }))
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);

    // Neither request wrote a row.
    let resp = server
        .get(&format!("/api/user/{}/recent-destinations", user.id))
        .await;
    resp.assert_status_ok();
    let body: serde_json::Value = resp.json();
    assert_eq!(body.as_array().map(Vec::len), Some(0));

    common::cleanup_test_user(&state.db, &user.id).await;
}

#[tokio::test]
async fn create_destination_returns_created_record() {
    let (app, state) = common::test_app().await;
    let user = common::create_test_user(&state.db).await;

    let server = TestServer::new(app).unwrap();

    let resp = server
        .post(&format!("/api/user/{}/recent-destinations", user.id))
        .json(&serde_json::json!({
            "country": "Portugal",
            "destination": "Lisbon",
            "isArkusTrip": true,
        }))
        .await;

    resp.assert_status(StatusCode::CREATED);
    let body: serde_json::Value = resp.json();
    assert!(body["id"].as_str().unwrap_or_default().starts_with("trip_"));
    assert_eq!(body["country"].as_str(), Some("Portugal"));
    assert_eq!(body["destination"].as_str(), Some("Lisbon"));
    assert_eq!(body["isArkusTrip"], true);
    assert!(body.get("createdAt").is_some());

    common::cleanup_test_user(&state.db, &user.id).await;
}

#[tokio::test]
async fn create_destination_defaults_arkus_flag_to_false() {
    let (app, state) = common::test_app().await;
    let user = common::create_test_user(&state.db).await;

    let server = TestServer::new(app).unwrap();

    let resp = server
        .post(&format!("/api/user/{}/recent-destinations", user.id))
        .json(&serde_json::json!({ "country": "Japan", "destination": "Kyoto" }))
        .await;

    resp.assert_status(StatusCode::CREATED);
    let body: serde_json::Value = resp.json();
    assert_eq!(body["isArkusTrip"], false);

    common::cleanup_test_user(&state.db, &user.id).await;
}

// =========================================================================
// GET /api/user/{user_id}/recent-destinations
// =========================================================================

#[tokio::test]
async fn list_destinations_returns_newest_first() {
    let (app, state) = common::test_app().await;
    let user = common::create_test_user(&state.db).await;

    let server = TestServer::new(app).unwrap();

    for (country, destination) in [("Portugal", "Lisbon"), ("Japan", "Kyoto")] {
        server
            .post(&format!("/api/user/{}/recent-destinations", user.id))
            .json(&serde_json::json!({ "country": country, "destination": destination }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let resp = server
        .get(&format!("/api/user/{}/recent-destinations", user.id))
        .await;

    resp.assert_status_ok();
    let body: serde_json::Value = resp.json();
    let rows = body.as_array().expect("array response");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["destination"].as_str(), Some("Kyoto"));
    assert_eq!(rows[1]["destination"].as_str(), Some("Lisbon"));

    common::cleanup_test_user(&state.db, &user.id).await;
}

#[tokio::test]
async fn list_destinations_is_scoped_to_the_user() {
    let (app, state) = common::test_app().await;
    let user_a = common::create_test_user(&state.db).await;
    let user_b = common::create_test_user(&state.db).await;

    let server = TestServer::new(app).unwrap();

    server
        .post(&format!("/api/user/{}/recent-destinations", user_a.id))
        .json(&serde_json::json!({ "country": "Italy", "destination": "Rome" }))
        .await
        .assert_status(StatusCode::CREATED);

    let resp = server
        .get(&format!("/api/user/{}/recent-destinations", user_b.id))
        .await;

    resp.assert_status_ok();
    let body: serde_json::Value = resp.json();
    assert_eq!(body.as_array().map(Vec::len), Some(0));

    common::cleanup_test_user(&state.db, &user_a.id).await;
    common::cleanup_test_user(&state.db, &user_b.id).await;
}
