//! Like entity - one member liking one board

use chrono::{DateTime, Utc};

use crate::value_objects::EntityId;

/// Engagement record. At most one exists per (member, board) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Like {
    pub id: EntityId,
    pub member_id: EntityId,
    pub board_id: EntityId,
    pub created_at: DateTime<Utc>,
}

impl Like {
    /// Create a new Like
    pub fn new(member_id: EntityId, board_id: EntityId) -> Self {
        Self {
            id: EntityId::generate(),
            member_id,
            board_id,
            created_at: Utc::now(),
        }
    }

    /// Check if this like belongs to the given pair
    #[inline]
    pub fn is_for(&self, member_id: EntityId, board_id: EntityId) -> bool {
        self.member_id == member_id && self.board_id == board_id
    }
}
