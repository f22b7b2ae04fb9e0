use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::schema::{event_preferences, restrictions, team_building_prefs, user_profiles, users};
use crate::error::{ApiError, ApiErrorBody};
use crate::models::preferences::{EventPreferences, EventPreferencesResponse, TeamBuildingPrefs};
use crate::models::profile::{ProfileResponse, UserProfile};
use crate::models::restrictions::{Restrictions, RestrictionsResponse};
use crate::models::user::{User, UserDetailResponse};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/user/{user_id}", get(get_user))
}

// =========================================================================
// GET /api/user/{user_id} — User with profile, preferences, restrictions
// =========================================================================

/// `GET /api/user/{user_id}` — Return a user with its 1:1 sub-records.
#[utoipa::path(
    get,
    path = "/api/user/{user_id}",
    tag = "Users",
    params(("user_id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User with relations", body = UserDetailResponse),
        (status = 404, description = "User not found", body = ApiErrorBody),
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserDetailResponse>, ApiError> {
    let mut conn = state.db.get().await?;

    let user: User = users::table
        .find(&user_id)
        .select(User::as_select())
        .first(&mut conn)
        .await
        .optional()
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    let profile: Option<UserProfile> = user_profiles::table
        .find(&user_id)
        .select(UserProfile::as_select())
        .first(&mut conn)
        .await
        .optional()
        .map_err(ApiError::from)?;

    let prefs: Option<EventPreferences> = event_preferences::table
        .find(&user_id)
        .select(EventPreferences::as_select())
        .first(&mut conn)
        .await
        .optional()
        .map_err(ApiError::from)?;

    let team: Option<TeamBuildingPrefs> = team_building_prefs::table
        .find(&user_id)
        .select(TeamBuildingPrefs::as_select())
        .first(&mut conn)
        .await
        .optional()
        .map_err(ApiError::from)?;

    let restr: Option<Restrictions> = restrictions::table
        .find(&user_id)
        .select(Restrictions::as_select())
        .first(&mut conn)
        .await
        .optional()
        .map_err(ApiError::from)?;

    Ok(Json(UserDetailResponse {
        id: user.id,
        email: user.email,
        created_at: user.created_at,
        updated_at: user.updated_at,
        profile: profile.map(ProfileResponse::from),
        event_preferences: prefs.map(|p| EventPreferencesResponse::from_rows(p, team)),
        restrictions: restr.map(RestrictionsResponse::from),
    }))
}
