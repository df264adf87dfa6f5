//! Workstate configuration: schema, file loading and environment overrides

pub mod error;
pub mod loader;
pub mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{ConfigLoader, FileFormat};
pub use schema::{AuthConfig, ServerConfig, WorkstateConfig};
