//! Identity DTOs and the identity-service wire schema.
//!
//! DESIGN
//! ======
//! `Identity` is the provider-neutral account shape the rest of the console
//! consumes. The request/response structs below mirror the Identity Toolkit
//! REST payloads (camelCase on the wire) and stay private to the `net` layer.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated account as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Provider-assigned account identifier.
    pub id: String,
    /// Sign-in email address.
    pub email: String,
    /// Optional display name set through the profile editor.
    #[serde(default)]
    pub display_name: Option<String>,
}

impl Identity {
    /// Name shown in console chrome: display name when set, email otherwise.
    #[must_use]
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.email)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PasswordRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub return_secure_token: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OobCodeRequest<'a> {
    pub request_type: &'static str,
    pub email: &'a str,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateRequest<'a> {
    pub id_token: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<&'a str>,
    pub return_secure_token: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LookupRequest<'a> {
    pub id_token: &'a str,
}

/// Successful sign-in / sign-up payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuthResponse {
    pub local_id: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    pub id_token: String,
    pub refresh_token: String,
}

/// `accounts:update` payload. Tokens are only present when rotated.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateResponse {
    pub local_id: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub id_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LookupResponse {
    #[serde(default)]
    pub users: Vec<LookupUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LookupUser {
    pub local_id: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Error body returned with non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub code: u16,
    pub message: String,
}

fn non_empty(name: Option<String>) -> Option<String> {
    name.filter(|n| !n.trim().is_empty())
}

impl From<&AuthResponse> for Identity {
    fn from(resp: &AuthResponse) -> Self {
        Self { id: resp.local_id.clone(), email: resp.email.clone(), display_name: non_empty(resp.display_name.clone()) }
    }
}

impl From<&UpdateResponse> for Identity {
    fn from(resp: &UpdateResponse) -> Self {
        Self { id: resp.local_id.clone(), email: resp.email.clone(), display_name: non_empty(resp.display_name.clone()) }
    }
}

impl From<LookupUser> for Identity {
    fn from(user: LookupUser) -> Self {
        Self { id: user.local_id, email: user.email, display_name: non_empty(user.display_name) }
    }
}
