use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

use crate::db::schema::users;
use crate::models::preferences::EventPreferencesResponse;
use crate::models::profile::ProfileResponse;
use crate::models::restrictions::RestrictionsResponse;

/// Full user row from the database.
#[derive(Debug, Queryable, Selectable, Serialize)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating a new user.
#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub id: String,
    pub email: String,
}

/// User plus its 1:1 sub-records, as returned by `GET /api/user/{user_id}`.
///
/// Sub-records are `null` when the corresponding row does not exist yet.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDetailResponse {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub profile: Option<ProfileResponse>,
    pub event_preferences: Option<EventPreferencesResponse>,
    pub restrictions: Option<RestrictionsResponse>,
}
