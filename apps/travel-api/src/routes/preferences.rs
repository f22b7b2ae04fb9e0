use axum::extract::{Path, State};
use axum::routing::put;
use axum::{Json, Router};
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::db::schema::{event_preferences, team_building_prefs};
use crate::error::{ApiError, ApiErrorBody};
use crate::models::preferences::{EventPreferences, EventPreferencesResponse, TeamBuildingPrefs};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/user/{user_id}/event-preferences",
        put(update_event_preferences),
    )
}

// =========================================================================
// PUT /api/user/{user_id}/event-preferences — Partial preferences update
// =========================================================================

/// Partial update body. Absent keys leave the corresponding columns
/// untouched; an empty `groupSize` clears it.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventPreferencesRequest {
    #[serde(default)]
    pub preferred_experiences: Option<Vec<String>>,
    #[serde(default)]
    pub preferred_destinations: Option<Vec<String>>,
    #[serde(default)]
    pub seasonal_preferences: Option<Vec<String>>,
    #[serde(default)]
    pub group_size: Option<String>,
    #[serde(default)]
    pub blocked_dates: Option<Vec<String>>,
    #[serde(default)]
    pub team_building: Option<UpdateTeamBuildingRequest>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamBuildingRequest {
    #[serde(default)]
    pub activities: Option<Vec<String>>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub suggestions: Option<String>,
}

/// `PUT /api/user/{user_id}/event-preferences` — Merge the provided fields
/// into the user's event preferences. The team-building sub-record is only
/// written when the `teamBuilding` key is present.
#[utoipa::path(
    put,
    path = "/api/user/{user_id}/event-preferences",
    tag = "Preferences",
    params(("user_id" = String, Path, description = "User ID")),
    request_body = UpdateEventPreferencesRequest,
    responses(
        (status = 200, description = "Updated preferences", body = EventPreferencesResponse),
        (status = 500, description = "Update failed", body = ApiErrorBody),
    ),
)]
pub async fn update_event_preferences(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<UpdateEventPreferencesRequest>,
) -> Result<Json<EventPreferencesResponse>, ApiError> {
    let mut conn = state.db.get().await?;
    let now = Utc::now();

    // Keyed update; a missing row surfaces as the generic 500, matching the
    // single-call semantics of the original endpoint.
    let prefs: EventPreferences = diesel::update(event_preferences::table.find(&user_id))
        .set((
            body.preferred_experiences
                .map(|v| event_preferences::preferred_experiences.eq(v)),
            body.preferred_destinations
                .map(|v| event_preferences::preferred_destinations.eq(v)),
            body.seasonal_preferences
                .map(|v| event_preferences::seasonal_preferences.eq(v)),
            body.group_size.as_deref().map(|g| {
                if g.is_empty() {
                    event_preferences::group_size.eq(None::<String>)
                } else {
                    event_preferences::group_size.eq(Some(g.to_string()))
                }
            }),
            body.blocked_dates
                .map(|v| event_preferences::blocked_dates.eq(v)),
            Some(event_preferences::updated_at.eq(now)),
        ))
        .returning(event_preferences::all_columns)
        .get_result(&mut conn)
        .await
        .map_err(ApiError::from)?;

    let team: Option<TeamBuildingPrefs> = match body.team_building {
        Some(tb) => {
            let row: TeamBuildingPrefs =
                diesel::update(team_building_prefs::table.find(&user_id))
                    .set((
                        tb.activities.map(|v| team_building_prefs::activities.eq(v)),
                        tb.location.as_deref().map(|l| {
                            if l.is_empty() {
                                team_building_prefs::location.eq(None::<String>)
                            } else {
                                team_building_prefs::location.eq(Some(l.to_string()))
                            }
                        }),
                        tb.duration.as_deref().map(|d| {
                            if d.is_empty() {
                                team_building_prefs::duration.eq(None::<String>)
                            } else {
                                team_building_prefs::duration.eq(Some(d.to_string()))
                            }
                        }),
                        tb.suggestions.as_deref().map(|s| {
                            if s.is_empty() {
                                team_building_prefs::suggestions.eq(None::<String>)
                            } else {
                                team_building_prefs::suggestions.eq(Some(s.to_string()))
                            }
                        }),
                        Some(team_building_prefs::updated_at.eq(now)),
                    ))
                    .returning(team_building_prefs::all_columns)
                    .get_result(&mut conn)
                    .await
                    .map_err(ApiError::from)?;
            Some(row)
        }
        None => team_building_prefs::table
            .find(&user_id)
            .select(TeamBuildingPrefs::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(ApiError::from)?,
    };

    tracing::info!(user_id = %user_id, "event preferences updated");

    Ok(Json(EventPreferencesResponse::from_rows(prefs, team)))
}
