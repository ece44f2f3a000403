//! Lock key naming conventions.

use blur_core::EntityId;

/// Key prefix for per-board counter locks
pub const BOARD_LOCK_PREFIX: &str = "lock:board:";

/// Lock key serializing like-count mutations of one board
#[must_use]
pub fn board_lock_key(board_id: EntityId) -> String {
    format!("{BOARD_LOCK_PREFIX}{board_id}")
}
