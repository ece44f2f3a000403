//! Lock providers backing the `LockProvider` port.

mod keys;
mod local_lock;
mod redis_lock;

pub use keys::{board_lock_key, BOARD_LOCK_PREFIX};
pub use local_lock::LocalLockProvider;
pub use redis_lock::RedisLockProvider;
