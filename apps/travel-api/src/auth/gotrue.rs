//! HTTP client for the auth provider's GoTrue-style passcode endpoint.

use async_trait::async_trait;
use serde::Deserialize;

use crate::auth::provider::{AuthProvider, OtpOutcome};
use crate::error::ApiError;

/// Client for `POST {base}/auth/v1/otp`.
#[derive(Clone)]
pub struct GotrueClient {
    base_url: String,
    api_key: String,
    http: reqwest::Client,
}

/// Error payload shape returned by the provider. Field names vary between
/// versions, so all are optional.
#[derive(Debug, Deserialize, Default)]
struct ProviderError {
    msg: Option<String>,
    message: Option<String>,
    error_description: Option<String>,
}

impl ProviderError {
    fn into_message(self) -> String {
        self.msg
            .or(self.message)
            .or(self.error_description)
            .unwrap_or_else(|| "unknown provider error".to_string())
    }
}

impl GotrueClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl AuthProvider for GotrueClient {
    async fn issue_signin_otp(&self, email: &str) -> Result<OtpOutcome, ApiError> {
        let url = format!("{}/auth/v1/otp", self.base_url);

        let resp = self
            .http
            .post(&url)
            .header("apikey", &self.api_key)
            .json(&serde_json::json!({
                "email": email,
                "create_user": false,
            }))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(?e, "auth provider unreachable");
                ApiError::internal("Auth provider request failed")
            })?;

        if resp.status().is_success() {
            return Ok(OtpOutcome::Sent);
        }

        let status = resp.status();
        let body: ProviderError = resp.json().await.unwrap_or_default();
        let message = body.into_message();

        tracing::debug!(%status, %message, "auth provider rejected otp request");

        Ok(OtpOutcome::Rejected(message))
    }
}
