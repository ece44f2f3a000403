//! Like database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for likes table
#[derive(Debug, Clone, FromRow)]
pub struct LikeModel {
    pub id: Uuid,
    pub member_id: Uuid,
    pub board_id: Uuid,
    pub created_at: DateTime<Utc>,
}
