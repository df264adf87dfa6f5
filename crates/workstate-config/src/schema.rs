//! Configuration schema

use crate::error::{ConfigError, ConfigResult};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use workstate_core::{password, token, PasswordHasher, TokenIssuer};

/// Top-level configuration document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorkstateConfig {
    pub server: ServerConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Host and port the HTTP listener binds to
    pub addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { addr: "127.0.0.1:8000".to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthConfig {
    /// Symmetric token signing secret
    pub secret: String,
    /// HS256, HS384 or HS512
    pub algorithm: String,
    pub default_token_ttl_minutes: i64,
    pub login_token_ttl_minutes: i64,
    /// PBKDF2 iterations for newly created password hashes
    pub hash_rounds: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret: "your_secret_key".to_string(),
            algorithm: "HS256".to_string(),
            default_token_ttl_minutes: token::DEFAULT_TOKEN_TTL_MINUTES,
            login_token_ttl_minutes: workstate_core::service::LOGIN_TOKEN_TTL_MINUTES,
            hash_rounds: password::DEFAULT_ROUNDS,
        }
    }
}

impl WorkstateConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        self.server.socket_addr()?;
        self.auth.validate()
    }

    /// Copy with the signing secret masked, for display
    pub fn redacted(&self) -> Self {
        let mut out = self.clone();
        out.auth.secret = "***".to_string();
        out
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> ConfigResult<SocketAddr> {
        self.addr
            .parse()
            .map_err(|e| ConfigError::Validation(format!("invalid server.addr '{}': {}", self.addr, e)))
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.secret.is_empty() {
            return Err(ConfigError::Validation("auth.secret must not be empty".to_string()));
        }
        token::parse_algorithm(&self.algorithm)?;
        check_ttl("default_token_ttl_minutes", self.default_token_ttl_minutes)?;
        check_ttl("login_token_ttl_minutes", self.login_token_ttl_minutes)?;
        if self.hash_rounds == 0 {
            return Err(ConfigError::Validation("auth.hash_rounds must be positive".to_string()));
        }
        Ok(())
    }

    pub fn token_issuer(&self) -> ConfigResult<TokenIssuer> {
        let algorithm = token::parse_algorithm(&self.algorithm)?;
        let default_ttl = ttl("default_token_ttl_minutes", self.default_token_ttl_minutes)?;
        Ok(TokenIssuer::new(&self.secret, algorithm, default_ttl)?)
    }

    pub fn password_hasher(&self) -> ConfigResult<PasswordHasher> {
        Ok(PasswordHasher::new(self.hash_rounds)?)
    }

    pub fn login_ttl(&self) -> ConfigResult<Duration> {
        ttl("login_token_ttl_minutes", self.login_token_ttl_minutes)
    }
}

fn check_ttl(field: &str, minutes: i64) -> ConfigResult<()> {
    if (1..=token::MAX_TOKEN_TTL_MINUTES).contains(&minutes) {
        return Ok(());
    }
    Err(ConfigError::Validation(format!(
        "auth.{field} must be between 1 and {}, got {minutes}",
        token::MAX_TOKEN_TTL_MINUTES
    )))
}

fn ttl(field: &str, minutes: i64) -> ConfigResult<Duration> {
    Duration::try_minutes(minutes)
        .ok_or_else(|| ConfigError::Validation(format!("auth.{field} is out of range: {minutes}")))
}
