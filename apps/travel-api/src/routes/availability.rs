use axum::extract::{Path, State};
use axum::routing::put;
use axum::{Json, Router};
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::db::schema::travel_availability;
use crate::error::{ApiError, ApiErrorBody};
use crate::models::availability::{
    NewTravelAvailability, TravelAvailability, TravelAvailabilityResponse,
};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/user/{user_id}/travel-availability",
        put(update_availability),
    )
}

// =========================================================================
// PUT /api/user/{user_id}/travel-availability — Upsert yearly flags
// =========================================================================

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAvailabilityRequest {
    #[serde(default)]
    pub current_year: bool,
    #[serde(default)]
    pub next_year: bool,
    #[serde(default)]
    pub following_year: bool,
}

/// `PUT /api/user/{user_id}/travel-availability` — Create the user's
/// availability row on first call, overwrite the flags thereafter.
#[utoipa::path(
    put,
    path = "/api/user/{user_id}/travel-availability",
    tag = "Availability",
    params(("user_id" = String, Path, description = "User ID")),
    request_body = UpdateAvailabilityRequest,
    responses(
        (status = 200, description = "Upserted availability", body = TravelAvailabilityResponse),
        (status = 500, description = "Write failed", body = ApiErrorBody),
    ),
)]
pub async fn update_availability(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<UpdateAvailabilityRequest>,
) -> Result<Json<TravelAvailabilityResponse>, ApiError> {
    let mut conn = state.db.get().await?;

    let new_row = NewTravelAvailability {
        user_id: user_id.clone(),
        current_year: body.current_year,
        next_year: body.next_year,
        following_year: body.following_year,
    };

    // Upsert keyed on user_id — the primary key keeps this to one row per
    // user.
    let row: TravelAvailability = diesel::insert_into(travel_availability::table)
        .values(&new_row)
        .on_conflict(travel_availability::user_id)
        .do_update()
        .set((
            travel_availability::current_year.eq(body.current_year),
            travel_availability::next_year.eq(body.next_year),
            travel_availability::following_year.eq(body.following_year),
            travel_availability::updated_at.eq(Utc::now()),
        ))
        .returning(travel_availability::all_columns)
        .get_result(&mut conn)
        .await
        .map_err(ApiError::from)?;

    tracing::info!(user_id = %row.user_id, "travel availability upserted");

    Ok(Json(TravelAvailabilityResponse::from(row)))
}
