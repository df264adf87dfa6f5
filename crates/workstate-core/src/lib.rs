pub mod error;
pub mod password;
pub mod service;
pub mod store;
pub mod token;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, CoreResult};
pub use password::PasswordHasher;
pub use service::AccountService;
pub use store::{AccountStore, CredentialStore, WorkflowStateStore};
pub use token::TokenIssuer;
pub use types::{Claims, IssuedToken, StateData, UserRecord, WorkflowState};
