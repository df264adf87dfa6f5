//! Command implementations

pub mod config;
pub mod hash_password;
pub mod serve;

pub use serve::ServeArgs;
