//! Channel entity - named bucket boards are filed under

use chrono::{DateTime, Utc};

use crate::value_objects::{BoardType, EntityId};

/// Channel entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub id: EntityId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Channel {
    /// Create a new channel
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            id: EntityId::generate(),
            name,
            created_at: Utc::now(),
        }
    }

    /// Create the channel that hosts boards of the given type
    #[must_use]
    pub fn for_board_type(board_type: BoardType) -> Self {
        Self::new(board_type.channel_name().to_string())
    }
}
