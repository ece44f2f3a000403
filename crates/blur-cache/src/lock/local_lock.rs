//! In-process lock provider.
//!
//! Serializes callers within a single process only. Each key maps to a
//! `tokio::sync::Mutex`; the owned guard is parked under the handle's token
//! until release or lease expiry.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{instrument, warn};

use blur_core::{DomainError, LockHandle, LockProvider, RepoResult};

/// Lock provider for single-instance deployments and tests
#[derive(Debug, Default)]
pub struct LocalLockProvider {
    locks: DashMap<String, Arc<Mutex<()>>>,
    held: Arc<DashMap<String, OwnedMutexGuard<()>>>,
}

impl LocalLockProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of locks currently held
    #[must_use]
    pub fn held_count(&self) -> usize {
        self.held.len()
    }

    fn forget_idle(&self, key: &str) {
        // Only the map's own reference left: nobody holds or waits on it
        self.locks
            .remove_if(key, |_, mutex| Arc::strong_count(mutex) == 1);
    }
}

#[async_trait]
impl LockProvider for LocalLockProvider {
    #[instrument(skip(self))]
    async fn acquire(&self, key: &str, wait: Duration, lease: Duration) -> RepoResult<LockHandle> {
        let mutex = Arc::clone(self.locks.entry(key.to_string()).or_default().value());

        let Ok(guard) = tokio::time::timeout(wait, mutex.lock_owned()).await else {
            return Err(DomainError::LockTimeout {
                key: key.to_string(),
            });
        };

        let handle = LockHandle::generate(key);
        self.held.insert(handle.token().to_string(), guard);

        let held = Arc::clone(&self.held);
        let token = handle.token().to_string();
        let key = key.to_string();
        tokio::spawn(async move {
            tokio::time::sleep(lease).await;
            if held.remove(&token).is_some() {
                warn!(%key, "Lock lease expired before release");
            }
        });

        Ok(handle)
    }

    #[instrument(skip(self, handle), fields(key = %handle.key()))]
    async fn release(&self, handle: LockHandle) -> RepoResult<()> {
        if self.held.remove(handle.token()).is_none() {
            warn!("Lock was already expired before release");
        }
        self.forget_idle(handle.key());
        Ok(())
    }
}
