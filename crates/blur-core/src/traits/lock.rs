//! Lock port - mutual exclusion shared by every service instance

use async_trait::async_trait;
use std::time::Duration;

use crate::value_objects::EntityId;

use super::repositories::RepoResult;

/// Proof of lock ownership returned by [`LockProvider::acquire`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockHandle {
    key: String,
    token: String,
}

impl LockHandle {
    /// Create a handle for `key` owned by `token`
    pub fn new(key: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            token: token.into(),
        }
    }

    /// Create a handle with a fresh random owner token
    pub fn generate(key: impl Into<String>) -> Self {
        Self::new(key, EntityId::generate().to_string())
    }

    /// Locked key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Owner token, unique per acquisition
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Distributed lock provider
#[async_trait]
pub trait LockProvider: Send + Sync {
    /// Acquire the lock on `key`, waiting at most `wait`.
    ///
    /// The lock expires on its own after `lease` if never released.
    /// Fails with `DomainError::LockTimeout` when `wait` elapses.
    async fn acquire(&self, key: &str, wait: Duration, lease: Duration) -> RepoResult<LockHandle>;

    /// Release a lock previously returned by `acquire`.
    ///
    /// Releasing a lock that already expired or is held by someone else is a no-op.
    async fn release(&self, handle: LockHandle) -> RepoResult<()>;
}
