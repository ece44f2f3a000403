//! Mention entity - a board referencing a league

use chrono::{DateTime, Utc};

use crate::value_objects::EntityId;

/// Mention entity, created together with its board and never mutated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mention {
    pub id: EntityId,
    pub board_id: EntityId,
    pub league_id: EntityId,
    pub created_at: DateTime<Utc>,
}

impl Mention {
    /// Create a new Mention
    pub fn new(board_id: EntityId, league_id: EntityId) -> Self {
        Self {
            id: EntityId::generate(),
            board_id,
            league_id,
            created_at: Utc::now(),
        }
    }
}

/// League as seen through a board's mention set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionedLeague {
    pub league_id: EntityId,
    pub league_name: String,
}
