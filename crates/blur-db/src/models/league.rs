//! League database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for leagues table
#[derive(Debug, Clone, FromRow)]
pub struct LeagueModel {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Database model for league_members table
#[derive(Debug, Clone, FromRow)]
pub struct LeagueMemberModel {
    pub league_id: Uuid,
    pub member_id: Uuid,
    pub allocated_at: DateTime<Utc>,
}
