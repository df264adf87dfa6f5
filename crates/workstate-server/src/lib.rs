//! Workstate Server
//!
//! HTTP/JSON endpoints for registration, login and per-user workflow state.

pub mod app_state;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod restapi;

// Re-export key types
pub use app_state::AppState;
pub use error::{ServerError, ServerResult};

// REST API
pub async fn serve_rest(app_state: AppState, addr: &str) -> ServerResult<()> {
    restapi::serve(app_state, addr).await
}
