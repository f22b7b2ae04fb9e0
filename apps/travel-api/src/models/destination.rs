use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

use crate::db::schema::recent_destinations;

/// Row from the append-only `recent_destinations` table.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = recent_destinations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RecentDestination {
    pub id: String,
    pub user_id: String,
    pub country: String,
    pub destination: String,
    pub is_arkus_trip: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = recent_destinations)]
pub struct NewRecentDestination {
    pub id: String,
    pub user_id: String,
    pub country: String,
    pub destination: String,
    pub is_arkus_trip: bool,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecentDestinationResponse {
    pub id: String,
    pub country: String,
    pub destination: String,
    pub is_arkus_trip: bool,
    pub created_at: DateTime<Utc>,
}

impl From<RecentDestination> for RecentDestinationResponse {
    fn from(d: RecentDestination) -> Self {
        Self {
            id: d.id,
            country: d.country,
            destination: d.destination,
            is_arkus_trip: d.is_arkus_trip,
            created_at: d.created_at,
        }
    }
}
