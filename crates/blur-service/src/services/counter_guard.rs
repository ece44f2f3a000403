//! Per-board counter lock
//!
//! Every read-modify-write of a board's `like_count` runs inside
//! [`CounterGuard::with_board_lock`], so updates to one board are totally
//! ordered across callers and instances.

use std::future::Future;
use std::sync::Arc;

use blur_cache::board_lock_key;
use blur_common::LockConfig;
use blur_core::{EntityId, LockHandle, LockProvider};
use tracing::{debug, warn};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Runs closures while holding a board's counter lock
pub struct CounterGuard<'a> {
    locks: &'a Arc<dyn LockProvider>,
    config: &'a LockConfig,
}

impl<'a> CounterGuard<'a> {
    /// Create a new CounterGuard
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self {
            locks: ctx.lock_provider(),
            config: ctx.lock_config(),
        }
    }

    /// Acquire `lock:board:{board_id}`, run `f` once, release, and return `f`'s result.
    ///
    /// Fails with `DomainError::LockTimeout` if the lock is not acquired within
    /// the configured wait; `f` is not run in that case.
    pub async fn with_board_lock<T, F, Fut>(&self, board_id: EntityId, f: F) -> ServiceResult<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ServiceResult<T>>,
    {
        let key = board_lock_key(board_id);
        let handle = self
            .locks
            .acquire(&key, self.config.wait_timeout(), self.config.lease_time())
            .await?;
        debug!(%key, "Board lock acquired");

        let held = HeldLock::new(Arc::clone(self.locks), handle);
        let result = f().await;
        held.release().await;

        result
    }
}

/// Lock that is released even if the holding future is dropped midway
struct HeldLock {
    locks: Arc<dyn LockProvider>,
    handle: Option<LockHandle>,
}

impl HeldLock {
    fn new(locks: Arc<dyn LockProvider>, handle: LockHandle) -> Self {
        Self {
            locks,
            handle: Some(handle),
        }
    }

    async fn release(mut self) {
        if let Some(handle) = self.handle.take() {
            let key = handle.key().to_string();
            if let Err(e) = self.locks.release(handle).await {
                // Lease expiry frees the key eventually
                warn!(%key, error = %e, "Failed to release board lock");
            }
        }
    }
}

impl Drop for HeldLock {
    fn drop(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        let locks = Arc::clone(&self.locks);
        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                runtime.spawn(async move {
                    if let Err(e) = locks.release(handle).await {
                        warn!(error = %e, "Failed to release abandoned board lock");
                    }
                });
            }
            Err(_) => warn!(key = %handle.key(), "Board lock abandoned outside a runtime"),
        }
    }
}
