use async_trait::async_trait;

use crate::error::ApiError;

/// Result of asking the auth provider to issue a sign-in passcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OtpOutcome {
    /// The provider accepted the request and sent a passcode.
    Sent,
    /// The provider refused, with its error message verbatim.
    Rejected(String),
}

/// Abstraction over the external auth provider's passcode API.
///
/// Backed by an HTTP client in production and a stub in tests.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Request a one-time passcode for `email` with account creation
    /// disabled. Transport-level failures map to `Err`; provider-level
    /// refusals are an `Ok(Rejected(..))` so callers can inspect the
    /// message.
    async fn issue_signin_otp(&self, email: &str) -> Result<OtpOutcome, ApiError>;
}

/// Whether a provider refusal message means the address has no account.
pub fn indicates_missing_user(message: &str) -> bool {
    message.to_lowercase().contains("user not found")
}
