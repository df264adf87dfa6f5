//! Workflow state handlers
//!
//! The path email is taken as-is; no token is required to read or overwrite it.

use crate::{
    dto::TransitionRequest,
    error::{ErrorResponse, ServerError},
    middleware::RequestId,
    AppState,
};
use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    response::Json,
};
use workstate_core::WorkflowState;

/// GET /state/:user_email
pub async fn get_state(
    State(app_state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(user_email): Path<String>,
) -> Result<Json<WorkflowState>, (StatusCode, Json<ErrorResponse>)> {
    let state = app_state
        .accounts
        .get_state(&user_email)
        .await
        .map_err(ServerError::from)
        .map_err(|e| e.to_http_response(request_id.0.clone()))?;

    Ok(Json(state))
}

/// POST /state/:user_email/transition
pub async fn transition(
    State(app_state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(user_email): Path<String>,
    Json(req): Json<TransitionRequest>,
) -> Result<Json<WorkflowState>, (StatusCode, Json<ErrorResponse>)> {
    let state = app_state
        .accounts
        .set_state(&user_email, req.current_state, req.data)
        .await
        .map_err(ServerError::from)
        .map_err(|e| e.to_http_response(request_id.0.clone()))?;

    Ok(Json(state))
}
