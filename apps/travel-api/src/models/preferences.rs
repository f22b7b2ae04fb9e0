use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

use crate::db::schema::{event_preferences, team_building_prefs};

/// Row from the `event_preferences` table.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = event_preferences)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct EventPreferences {
    pub user_id: String,
    pub preferred_experiences: Vec<String>,
    pub preferred_destinations: Vec<String>,
    pub seasonal_preferences: Vec<String>,
    pub group_size: Option<String>,
    pub blocked_dates: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = event_preferences)]
pub struct NewEventPreferences {
    pub user_id: String,
}

/// Row from the `team_building_prefs` table — the team-building sub-record
/// of a user's event preferences.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = team_building_prefs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TeamBuildingPrefs {
    pub user_id: String,
    pub activities: Vec<String>,
    pub location: Option<String>,
    pub duration: Option<String>,
    pub suggestions: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = team_building_prefs)]
pub struct NewTeamBuildingPrefs {
    pub user_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamBuildingResponse {
    pub activities: Vec<String>,
    pub location: Option<String>,
    pub duration: Option<String>,
    pub suggestions: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<TeamBuildingPrefs> for TeamBuildingResponse {
    fn from(t: TeamBuildingPrefs) -> Self {
        Self {
            activities: t.activities,
            location: t.location,
            duration: t.duration,
            suggestions: t.suggestions,
            updated_at: t.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventPreferencesResponse {
    pub preferred_experiences: Vec<String>,
    pub preferred_destinations: Vec<String>,
    pub seasonal_preferences: Vec<String>,
    pub group_size: Option<String>,
    pub blocked_dates: Vec<String>,
    pub updated_at: DateTime<Utc>,
    pub team_building: Option<TeamBuildingResponse>,
}

impl EventPreferencesResponse {
    pub fn from_rows(prefs: EventPreferences, team: Option<TeamBuildingPrefs>) -> Self {
        Self {
            preferred_experiences: prefs.preferred_experiences,
            preferred_destinations: prefs.preferred_destinations,
            seasonal_preferences: prefs.seasonal_preferences,
            group_size: prefs.group_size,
            blocked_dates: prefs.blocked_dates,
            updated_at: prefs.updated_at,
            team_building: team.map(TeamBuildingResponse::from),
        }
    }
}
