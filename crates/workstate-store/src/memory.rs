use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use workstate_core::{
    store::{CredentialStore, WorkflowStateStore},
    CoreError, CoreResult, UserRecord, WorkflowState,
};

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<String, UserRecord>,
    states: HashMap<String, WorkflowState>,
}

/// In-memory store holding both the credential and the workflow state table.
///
/// Both tables sit behind one lock so registration can write them together.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    data: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self { data: Arc::new(RwLock::new(Tables::default())) }
    }

    pub async fn user_count(&self) -> usize {
        self.data.read().await.users.len()
    }

    pub async fn state_count(&self) -> usize {
        self.data.read().await.states.len()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn register_user(&self, record: UserRecord, initial: WorkflowState) -> CoreResult<()> {
        let mut data = self.data.write().await;
        if data.users.contains_key(&record.email) {
            tracing::debug!(email = %record.email, "registration rejected, email taken");
            return Err(CoreError::DuplicateUser(record.email));
        }
        data.states.insert(record.email.clone(), initial);
        data.users.insert(record.email.clone(), record);
        Ok(())
    }

    async fn find_user(&self, email: &str) -> CoreResult<Option<UserRecord>> {
        let data = self.data.read().await;
        Ok(data.users.get(email).cloned())
    }
}

#[async_trait]
impl WorkflowStateStore for MemoryStore {
    async fn get_state(&self, email: &str) -> CoreResult<Option<WorkflowState>> {
        let data = self.data.read().await;
        Ok(data.states.get(email).cloned())
    }

    async fn replace_state(
        &self,
        email: &str,
        state: WorkflowState,
    ) -> CoreResult<Option<WorkflowState>> {
        let mut data = self.data.write().await;
        match data.states.get_mut(email) {
            Some(slot) => {
                *slot = state;
                Ok(Some(slot.clone()))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn register_seeds_paired_state() {
        let store = MemoryStore::new();
        store
            .register_user(UserRecord::new("a@x.com", "$pbkdf2-sha256$i=1,l=32$c2FsdHNhbHQ$aGFzaA"), WorkflowState::initial())
            .await
            .unwrap();

        assert!(store.find_user("a@x.com").await.unwrap().is_some());
        assert_eq!(store.get_state("a@x.com").await.unwrap(), Some(WorkflowState::initial()));
        assert_eq!(store.user_count().await, 1);
        assert_eq!(store.state_count().await, 1);
    }

    #[tokio::test]
    async fn duplicate_registration_leaves_tables_untouched() {
        let store = MemoryStore::new();
        store
            .register_user(UserRecord::new("a@x.com", "first"), WorkflowState::initial())
            .await
            .unwrap();
        store
            .replace_state("a@x.com", WorkflowState::new("step1", None))
            .await
            .unwrap();

        let err = store
            .register_user(UserRecord::new("a@x.com", "second"), WorkflowState::initial())
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::DuplicateUser(email) if email == "a@x.com"));

        let user = store.find_user("a@x.com").await.unwrap().unwrap();
        assert_eq!(user.password_hash, "first");
        assert_eq!(store.get_state("a@x.com").await.unwrap().unwrap().current_state, "step1");
    }

    #[tokio::test]
    async fn replace_requires_existing_state() {
        let store = MemoryStore::new();
        let out = store.replace_state("ghost@x.com", WorkflowState::new("s", None)).await.unwrap();
        assert!(out.is_none());
        assert_eq!(store.state_count().await, 0);
    }

    #[tokio::test]
    async fn replace_overwrites_whole_record() {
        let store = MemoryStore::new();
        store
            .register_user(UserRecord::new("a@x.com", "h"), WorkflowState::initial())
            .await
            .unwrap();
        let data = json!({"x": 1}).as_object().cloned();
        store.replace_state("a@x.com", WorkflowState::new("step1", data)).await.unwrap();
        let out = store
            .replace_state("a@x.com", WorkflowState::new("step2", None))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(out, WorkflowState::new("step2", None));
    }
}
