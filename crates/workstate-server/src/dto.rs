//! REST API DTOs

use serde::{Deserialize, Serialize};
use workstate_core::StateData;

/// Body of `/register` and `/login`
#[derive(Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Body of `/state/:user_email/transition`
#[derive(Deserialize)]
pub struct TransitionRequest {
    pub current_state: String,
    #[serde(default)]
    pub data: Option<StateData>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}
