//! Channel database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for channels table
#[derive(Debug, Clone, FromRow)]
pub struct ChannelModel {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
