//! Domain records shared by the stores, the service and the HTTP layer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Label every freshly registered user starts in.
pub const INITIAL_STATE: &str = "initial";

/// Token type reported alongside every issued access token.
pub const BEARER: &str = "bearer";

/// Arbitrary structured payload attached to a workflow state.
pub type StateData = Map<String, Value>;

/// A registered user as held by the credential table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub email: String,
    /// Self-describing digest produced by [`crate::password::PasswordHasher`]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self { email: email.into(), password_hash: password_hash.into(), created_at: Utc::now() }
    }
}

/// Per-user workflow state. Replaced wholesale on every write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowState {
    pub current_state: String,
    #[serde(default)]
    pub data: StateData,
}

impl WorkflowState {
    pub fn new(current_state: impl Into<String>, data: Option<StateData>) -> Self {
        Self { current_state: current_state.into(), data: data.unwrap_or_default() }
    }

    /// State assigned at registration time
    pub fn initial() -> Self {
        Self::new(INITIAL_STATE, None)
    }
}

/// Signed claim set carried inside an access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject email
    pub sub: String,
    /// Absolute expiry, Unix seconds
    pub exp: i64,
}

/// Result of a successful login
#[derive(Debug, Clone, Serialize)]
pub struct IssuedToken {
    pub access_token: String,
    pub token_type: String,
}

impl IssuedToken {
    pub fn bearer(access_token: String) -> Self {
        Self { access_token, token_type: BEARER.to_string() }
    }
}
