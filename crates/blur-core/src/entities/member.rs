//! Member entity - a registered community member

use chrono::{DateTime, Utc};

use crate::value_objects::EntityId;

/// Member entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: EntityId,
    pub nickname: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl Member {
    /// Create a new Member with a fresh ID
    pub fn new(nickname: String, email: String) -> Self {
        Self {
            id: EntityId::generate(),
            nickname,
            email,
            created_at: Utc::now(),
        }
    }
}
