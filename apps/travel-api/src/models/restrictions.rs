use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

use crate::db::schema::restrictions;

/// Row from the `restrictions` table.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = restrictions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Restrictions {
    pub user_id: String,
    pub dietary: Vec<String>,
    pub mobility: Option<String>,
    pub notes: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = restrictions)]
pub struct NewRestrictions {
    pub user_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestrictionsResponse {
    pub dietary: Vec<String>,
    pub mobility: Option<String>,
    pub notes: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<Restrictions> for RestrictionsResponse {
    fn from(r: Restrictions) -> Self {
        Self {
            dietary: r.dietary,
            mobility: r.mobility,
            notes: r.notes,
            updated_at: r.updated_at,
        }
    }
}
