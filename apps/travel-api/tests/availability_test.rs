//! Integration tests for the travel-availability upsert.

mod common;

use axum_test::TestServer;

// =========================================================================
// PUT /api/user/{user_id}/travel-availability
// =========================================================================

#[tokio::test]
async fn update_availability_creates_row_on_first_call() {
    let (app, state) = common::test_app().await;
    let user = common::create_test_user(&state.db).await;

    let server = TestServer::new(app).unwrap();

    let resp = server
        .put(&format!("/api/user/{}/travel-availability", user.id))
        .json(&serde_json::json!({
            "currentYear": true,
            "nextYear": false,
            "followingYear": true,
        }))
        .await;

    resp.assert_status_ok();
    let body: serde_json::Value = resp.json();
    assert_eq!(body["currentYear"], true);
    assert_eq!(body["nextYear"], false);
    assert_eq!(body["followingYear"], true);

    common::cleanup_test_user(&state.db, &user.id).await;
}

#[tokio::test]
async fn update_availability_overwrites_instead_of_duplicating() {
    let (app, state) = common::test_app().await;
    let user = common::create_test_user(&state.db).await;

    let server = TestServer::new(app).unwrap();

    server
        .put(&format!("/api/user/{}/travel-availability", user.id))
        .json(&serde_json::json!({ "currentYear": true, "nextYear": true }))
        .await
        .assert_status_ok();

    let resp = server
        .put(&format!("/api/user/{}/travel-availability", user.id))
        .json(&serde_json::json!({ "currentYear": false, "followingYear": true }))
        .await;

    resp.assert_status_ok();
    let body: serde_json::Value = resp.json();
    // Only the second call's values survive.
    assert_eq!(body["currentYear"], false);
    assert_eq!(body["nextYear"], false);
    assert_eq!(body["followingYear"], true);

    // Still exactly one row for the user.
    {
        use diesel::prelude::*;
        use diesel_async::RunQueryDsl;
        use travel_api::db::schema::travel_availability;

        let mut conn = state.db.get().await.expect("pool");
        let count: i64 = travel_availability::table
            .filter(travel_availability::user_id.eq(&user.id))
            .count()
            .get_result(&mut conn)
            .await
            .expect("count rows");
        assert_eq!(count, 1);
    }

    common::cleanup_test_user(&state.db, &user.id).await;
}

#[tokio::test]
async fn update_availability_defaults_missing_flags_to_false() {
    let (app, state) = common::test_app().await;
    let user = common::create_test_user(&state.db).await;

    let server = TestServer::new(app).unwrap();

    let resp = server
        .put(&format!("/api/user/{}/travel-availability", user.id))
        .json(&serde_json::json!({}))
        .await;

    resp.assert_status_ok();
    let body: serde_json::Value = resp.json();
    assert_eq!(body["currentYear"], false);
    assert_eq!(body["nextYear"], false);
    assert_eq!(body["followingYear"], false);

    common::cleanup_test_user(&state.db, &user.id).await;
}
