//! # blur-cache
//!
//! Redis layer for the mutual exclusion that guards board counters.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Redis Lock**: Lease-based lock shared by every service instance
//! - **Local Lock**: In-process lock for single-instance deployments and tests
//!
//! ## Example
//!
//! ```ignore
//! use blur_cache::{board_lock_key, RedisLockProvider, RedisPool, RedisPoolConfig};
//! use blur_core::LockProvider;
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let locks = RedisLockProvider::new(pool, Duration::from_millis(50));
//!
//! let handle = locks
//!     .acquire(&board_lock_key(board_id), Duration::from_secs(5), Duration::from_secs(3))
//!     .await?;
//! // mutate the counter...
//! locks.release(handle).await?;
//! ```

pub mod lock;
pub mod pool;

// Re-export pool types
pub use pool::{
    create_shared_pool, RedisPool, RedisPoolConfig, RedisPoolError, RedisResult, SharedRedisPool,
};

// Re-export lock types
pub use lock::{board_lock_key, LocalLockProvider, RedisLockProvider, BOARD_LOCK_PREFIX};
