//! Board database model

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for boards table
#[derive(Debug, Clone, FromRow)]
pub struct BoardModel {
    pub id: Uuid,
    pub member_id: Uuid,
    pub channel_id: Option<Uuid>,
    /// 'LEAGUE', 'MYCAR' or 'DASHCAM'
    pub board_type: String,
    pub title: String,
    pub content: String,
    /// Variant payload, tagged with the same discriminator as `board_type`
    pub details: Json<serde_json::Value>,
    pub like_count: i64,
    pub view_count: i64,
    /// 'ACTIVE', 'INACTIVE' or 'DELETED'
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BoardModel {
    /// Check if board is visible
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == "ACTIVE"
    }
}
