use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::db::schema::recent_destinations;
use crate::error::{ApiError, ApiErrorBody, FieldError};
use crate::models::destination::{
    NewRecentDestination, RecentDestination, RecentDestinationResponse,
};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/user/{user_id}/recent-destinations",
        get(list_destinations).post(create_destination),
    )
}

// =========================================================================
// GET /api/user/{user_id}/recent-destinations — Newest-first log
// =========================================================================

/// `GET /api/user/{user_id}/recent-destinations` — List a user's logged
/// destinations, newest first.
#[utoipa::path(
    get,
    path = "/api/user/{user_id}/recent-destinations",
    tag = "Destinations",
    params(("user_id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "Destinations, newest first", body = [RecentDestinationResponse]),
    ),
)]
pub async fn list_destinations(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<RecentDestinationResponse>>, ApiError> {
    let mut conn = state.db.get().await?;

    let rows: Vec<RecentDestination> = recent_destinations::table
        .filter(recent_destinations::user_id.eq(&user_id))
        .order((
            recent_destinations::created_at.desc(),
            recent_destinations::id.desc(),
        ))
        .select(RecentDestination::as_select())
        .load(&mut conn)
        .await
        .map_err(ApiError::from)?;

    let data = rows.into_iter().map(RecentDestinationResponse::from).collect();

    Ok(Json(data))
}

// =========================================================================
// POST /api/user/{user_id}/recent-destinations — Append a destination
// =========================================================================

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDestinationRequest {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub is_arkus_trip: bool,
}

/// `POST /api/user/{user_id}/recent-destinations` — Append one destination
/// to the user's travel log.
#[utoipa::path(
    post,
    path = "/api/user/{user_id}/recent-destinations",
    tag = "Destinations",
    params(("user_id" = String, Path, description = "User ID")),
    request_body = CreateDestinationRequest,
    responses(
        (status = 201, description = "Destination logged", body = RecentDestinationResponse),
        (status = 400, description = "Validation error", body = ApiErrorBody),
    ),
)]
pub async fn create_destination(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<CreateDestinationRequest>,
) -> Result<(StatusCode, Json<RecentDestinationResponse>), ApiError> {
    // --- Validation ---
    let mut errors: Vec<FieldError> = Vec::new();

    let country = body.country.as_deref().unwrap_or("").trim().to_string();
    if country.is_empty() {
        errors.push(FieldError {
            field: "country".into(),
            message: "Country is required".into(),
        });
    }

    let destination = body.destination.as_deref().unwrap_or("").trim().to_string();
    if destination.is_empty() {
        errors.push(FieldError {
            field: "destination".into(),
            message: "Destination is required".into(),
        });
    }

    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    let new_row = NewRecentDestination {
        id: arkus_common::id::prefixed_ulid(arkus_common::id::prefix::TRIP),
        user_id,
        country,
        destination,
        is_arkus_trip: body.is_arkus_trip,
    };

    let mut conn = state.db.get().await?;

    let row: RecentDestination = diesel::insert_into(recent_destinations::table)
        .values(&new_row)
        .returning(recent_destinations::all_columns)
        .get_result(&mut conn)
        .await
        .map_err(ApiError::from)?;

    tracing::info!(user_id = %row.user_id, destination_id = %row.id, "destination logged");

    Ok((StatusCode::CREATED, Json(RecentDestinationResponse::from(row))))
}
