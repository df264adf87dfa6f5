use crate::error::CoreResult;
use crate::types::{UserRecord, WorkflowState};
use async_trait::async_trait;

/// Credential table. Registration also seeds the paired workflow state.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Insert the user together with its initial workflow state as one step.
    ///
    /// Fails with `CoreError::DuplicateUser` when the email is already taken;
    /// in that case neither table is touched.
    async fn register_user(&self, record: UserRecord, initial: WorkflowState) -> CoreResult<()>;

    async fn find_user(&self, email: &str) -> CoreResult<Option<UserRecord>>;
}

/// Workflow state table, keyed by email
#[async_trait]
pub trait WorkflowStateStore: Send + Sync {
    async fn get_state(&self, email: &str) -> CoreResult<Option<WorkflowState>>;

    /// Replace the whole record. Returns `None` when the email has no state.
    async fn replace_state(
        &self,
        email: &str,
        state: WorkflowState,
    ) -> CoreResult<Option<WorkflowState>>;
}

/// Convenience bound for a backend that serves both tables
pub trait AccountStore: CredentialStore + WorkflowStateStore {}

impl<T: CredentialStore + WorkflowStateStore> AccountStore for T {}
