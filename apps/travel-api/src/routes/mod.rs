pub mod availability;
pub mod destinations;
pub mod email;
pub mod health;
pub mod preferences;
pub mod users;

use axum::Router;
use utoipa::OpenApi;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().merge(health::router()).nest(
        "/api",
        email::router()
            .merge(users::router())
            .merge(preferences::router())
            .merge(destinations::router())
            .merge(availability::router()),
    )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health,
        // Auth
        email::check_email,
        // Users
        users::get_user,
        // Preferences
        preferences::update_event_preferences,
        // Destinations
        destinations::list_destinations,
        destinations::create_destination,
        // Availability
        availability::update_availability,
    ),
    components(
        schemas(
            // Error types
            crate::error::ApiErrorBody,
            crate::error::ApiErrorDetail,
            crate::error::FieldError,
            // Models
            crate::models::user::UserDetailResponse,
            crate::models::profile::ProfileResponse,
            crate::models::preferences::EventPreferencesResponse,
            crate::models::preferences::TeamBuildingResponse,
            crate::models::restrictions::RestrictionsResponse,
            crate::models::destination::RecentDestinationResponse,
            crate::models::availability::TravelAvailabilityResponse,
            // Route request/response types
            health::HealthResponse,
            email::CheckEmailRequest,
            email::CheckEmailResponse,
            preferences::UpdateEventPreferencesRequest,
            preferences::UpdateTeamBuildingRequest,
            destinations::CreateDestinationRequest,
            availability::UpdateAvailabilityRequest,
        )
    ),
    tags(
        (name = "Health", description = "Health check"),
        (name = "Auth", description = "Email existence probe"),
        (name = "Users", description = "User profile aggregation"),
        (name = "Preferences", description = "Event and team-building preferences"),
        (name = "Destinations", description = "Recent travel destinations"),
        (name = "Availability", description = "Yearly travel availability"),
    )
)]
pub struct ApiDoc;
