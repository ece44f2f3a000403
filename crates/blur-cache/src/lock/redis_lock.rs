//! Redis-backed lease lock.
//!
//! Acquisition is `SET key token NX PX lease`, polled until the wait deadline.
//! Release deletes the key only while it still holds the caller's token, so a
//! holder whose lease expired cannot free a lock someone else now owns.

use std::time::Duration;

use async_trait::async_trait;
use redis::Script;
use tokio::time::Instant;
use tracing::{debug, instrument, warn};

use blur_core::{DomainError, LockHandle, LockProvider, RepoResult};

use crate::pool::{RedisPool, RedisResult};

/// Compare-and-delete
const RELEASE_SCRIPT: &str = r#"
if redis.call("GET", KEYS[1]) == ARGV[1] then
    return redis.call("DEL", KEYS[1])
else
    return 0
end
"#;

/// Lock provider shared by every instance pointed at the same Redis
#[derive(Clone)]
pub struct RedisLockProvider {
    pool: RedisPool,
    retry_interval: Duration,
    release_script: Script,
}

impl std::fmt::Debug for RedisLockProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisLockProvider")
            .field("pool", &self.pool)
            .field("retry_interval", &self.retry_interval)
            .finish()
    }
}

impl RedisLockProvider {
    /// Create a provider polling every `retry_interval` while the lock is busy
    #[must_use]
    pub fn new(pool: RedisPool, retry_interval: Duration) -> Self {
        Self {
            pool,
            retry_interval: retry_interval.max(Duration::from_millis(1)),
            release_script: Script::new(RELEASE_SCRIPT),
        }
    }

    async fn try_acquire(&self, handle: &LockHandle, lease: Duration) -> RedisResult<bool> {
        let lease_ms = u64::try_from(lease.as_millis()).unwrap_or(u64::MAX).max(1);
        let mut conn = self.pool.get().await?;

        // Nil reply means another owner holds the key
        let reply: Option<String> = redis::cmd("SET")
            .arg(handle.key())
            .arg(handle.token())
            .arg("NX")
            .arg("PX")
            .arg(lease_ms)
            .query_async(&mut conn)
            .await?;

        Ok(reply.is_some())
    }
}

#[async_trait]
impl LockProvider for RedisLockProvider {
    #[instrument(skip(self))]
    async fn acquire(&self, key: &str, wait: Duration, lease: Duration) -> RepoResult<LockHandle> {
        let handle = LockHandle::generate(key);
        let deadline = Instant::now() + wait;
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;
            if self.try_acquire(&handle, lease).await? {
                debug!(attempts, "Lock acquired");
                return Ok(handle);
            }

            let now = Instant::now();
            if now >= deadline {
                warn!(attempts, "Gave up waiting for lock");
                return Err(DomainError::LockTimeout {
                    key: key.to_string(),
                });
            }
            tokio::time::sleep(self.retry_interval.min(deadline - now)).await;
        }
    }

    #[instrument(skip(self, handle), fields(key = %handle.key()))]
    async fn release(&self, handle: LockHandle) -> RepoResult<()> {
        let mut conn = self.pool.get().await.map_err(DomainError::from)?;

        let deleted: i64 = self
            .release_script
            .key(handle.key())
            .arg(handle.token())
            .invoke_async(&mut conn)
            .await
            .map_err(|e| DomainError::CacheError(e.to_string()))?;

        if deleted == 0 {
            warn!("Lock was already expired or taken over before release");
        }

        Ok(())
    }
}
