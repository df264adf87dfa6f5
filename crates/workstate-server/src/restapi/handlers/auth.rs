//! Registration and login handlers

use crate::{
    dto::{CredentialsRequest, MessageResponse},
    error::{ErrorResponse, ServerError},
    middleware::RequestId,
    AppState,
};
use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::Json,
};
use workstate_core::IssuedToken;

/// POST /register
pub async fn register(
    State(app_state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    app_state
        .accounts
        .register(&req.email, &req.password)
        .await
        .map_err(ServerError::from)
        .map_err(|e| e.to_http_response(request_id.0.clone()))?;

    Ok(Json(MessageResponse { message: "Registration successful".to_string() }))
}

/// POST /login
pub async fn login(
    State(app_state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<IssuedToken>, (StatusCode, Json<ErrorResponse>)> {
    let token = app_state
        .accounts
        .login(&req.email, &req.password)
        .await
        .map_err(ServerError::from)
        .map_err(|e| e.to_http_response(request_id.0.clone()))?;

    Ok(Json(token))
}
