use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

use crate::db::schema::travel_availability;

/// Row from the `travel_availability` table — one per user.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = travel_availability)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TravelAvailability {
    pub user_id: String,
    pub current_year: bool,
    pub next_year: bool,
    pub following_year: bool,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = travel_availability)]
pub struct NewTravelAvailability {
    pub user_id: String,
    pub current_year: bool,
    pub next_year: bool,
    pub following_year: bool,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TravelAvailabilityResponse {
    pub current_year: bool,
    pub next_year: bool,
    pub following_year: bool,
    pub updated_at: DateTime<Utc>,
}

impl From<TravelAvailability> for TravelAvailabilityResponse {
    fn from(a: TravelAvailability) -> Self {
        Self {
            current_year: a.current_year,
            next_year: a.next_year,
            following_year: a.following_year,
            updated_at: a.updated_at,
        }
    }
}
