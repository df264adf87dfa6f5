//! Account service: registration, login and workflow state access on top of
//! an [`AccountStore`].

use crate::error::{CoreError, CoreResult};
use crate::password::PasswordHasher;
use crate::store::{AccountStore, CredentialStore, WorkflowStateStore};
use crate::token::TokenIssuer;
use crate::types::{IssuedToken, StateData, UserRecord, WorkflowState};
use chrono::Duration;
use std::sync::Arc;
use tracing::{debug, info};

/// Lifetime the login path requests for its tokens
pub const LOGIN_TOKEN_TTL_MINUTES: i64 = 30;

#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn AccountStore>,
    hasher: PasswordHasher,
    issuer: TokenIssuer,
    login_ttl: Duration,
}

impl AccountService {
    pub fn new(
        store: Arc<dyn AccountStore>,
        hasher: PasswordHasher,
        issuer: TokenIssuer,
        login_ttl: Duration,
    ) -> Self {
        Self { store, hasher, issuer, login_ttl }
    }

    pub fn issuer(&self) -> &TokenIssuer {
        &self.issuer
    }

    /// Register a new user and seed its workflow state at `initial`
    pub async fn register(&self, email: &str, password: &str) -> CoreResult<()> {
        let hasher = self.hasher;
        let plain = password.to_string();
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&plain)).await??;

        self.store
            .register_user(UserRecord::new(email, password_hash), WorkflowState::initial())
            .await?;
        info!(email, "user registered");
        Ok(())
    }

    /// Verify credentials and issue a bearer token.
    ///
    /// Unknown email and wrong password both yield `InvalidCredentials`.
    pub async fn login(&self, email: &str, password: &str) -> CoreResult<IssuedToken> {
        let user = self.store.find_user(email).await?;
        let hasher = self.hasher;
        let plain = password.to_string();

        let verified = tokio::task::spawn_blocking(move || match user {
            Some(user) => hasher.verify(&plain, &user.password_hash),
            None => {
                hasher.dummy_verify(&plain);
                false
            }
        })
        .await?;

        if !verified {
            debug!(email, "login rejected");
            return Err(CoreError::InvalidCredentials);
        }

        let token = self.issuer.issue(email, Some(self.login_ttl))?;
        info!(email, "access token issued");
        Ok(IssuedToken::bearer(token))
    }

    pub async fn get_state(&self, email: &str) -> CoreResult<WorkflowState> {
        self.store.get_state(email).await?.ok_or_else(|| CoreError::NotFound(email.to_string()))
    }

    /// Overwrite the user's state. Missing `data` resets the payload to `{}`.
    pub async fn set_state(
        &self,
        email: &str,
        current_state: String,
        data: Option<StateData>,
    ) -> CoreResult<WorkflowState> {
        let state = WorkflowState::new(current_state, data);
        let stored = self
            .store
            .replace_state(email, state)
            .await?
            .ok_or_else(|| CoreError::NotFound(email.to_string()))?;
        debug!(email, current_state = %stored.current_state, "workflow state replaced");
        Ok(stored)
    }
}
