//! League entity and league membership

use chrono::{DateTime, Utc};

use crate::value_objects::EntityId;

/// League entity - a named grouping boards can be posted in or mention
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct League {
    pub id: EntityId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl League {
    /// Create a new League
    pub fn new(name: String) -> Self {
        Self {
            id: EntityId::generate(),
            name,
            created_at: Utc::now(),
        }
    }
}

/// Allocation of a member to a league
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueMember {
    pub league_id: EntityId,
    pub member_id: EntityId,
    pub allocated_at: DateTime<Utc>,
}

impl LeagueMember {
    /// Allocate a member to a league
    pub fn new(league_id: EntityId, member_id: EntityId) -> Self {
        Self {
            league_id,
            member_id,
            allocated_at: Utc::now(),
        }
    }
}
