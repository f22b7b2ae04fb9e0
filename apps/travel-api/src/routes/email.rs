use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::provider::{indicates_missing_user, OtpOutcome};
use crate::error::{ApiError, ApiErrorBody, FieldError};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/check-email", post(check_email))
}

// =========================================================================
// POST /api/check-email — Probe whether an email has an account
// =========================================================================

#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckEmailRequest {
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckEmailResponse {
    pub success: bool,
    pub exists: bool,
}

/// `POST /api/check-email` — Ask the auth provider for a sign-in passcode
/// with account creation disabled, and read the result as an existence
/// probe.
#[utoipa::path(
    post,
    path = "/api/check-email",
    tag = "Auth",
    request_body = CheckEmailRequest,
    responses(
        (status = 200, description = "No account for this email", body = CheckEmailResponse),
        (status = 400, description = "Validation error", body = ApiErrorBody),
        (status = 409, description = "Email already registered", body = ApiErrorBody),
        (status = 500, description = "Provider failure", body = ApiErrorBody),
    ),
)]
pub async fn check_email(
    State(state): State<AppState>,
    Json(body): Json<CheckEmailRequest>,
) -> Result<Json<CheckEmailResponse>, ApiError> {
    // --- Validation ---
    let mut errors: Vec<FieldError> = Vec::new();

    let email = body
        .email
        .as_deref()
        .unwrap_or("")
        .trim()
        .to_lowercase();
    if email.is_empty() {
        errors.push(FieldError {
            field: "email".into(),
            message: "Email is required".into(),
        });
    } else if !email.contains('@') || email.len() < 3 {
        errors.push(FieldError {
            field: "email".into(),
            message: "Invalid email address".into(),
        });
    }

    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    match state.auth.issue_signin_otp(&email).await? {
        // A clean send is the only signal the provider gives that the
        // address already has an account.
        OtpOutcome::Sent => Err(ApiError::conflict(
            "An account with this email already exists",
        )),
        OtpOutcome::Rejected(msg) if indicates_missing_user(&msg) => Ok(Json(CheckEmailResponse {
            success: true,
            exists: false,
        })),
        OtpOutcome::Rejected(msg) => {
            tracing::error!(%msg, "unexpected auth provider error");
            Err(ApiError::internal("Failed to check email"))
        }
    }
}
