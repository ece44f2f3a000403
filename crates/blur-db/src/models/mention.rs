//! Mention database model

use sqlx::FromRow;
use uuid::Uuid;

/// Mention joined with the mentioned league's name
#[derive(Debug, Clone, FromRow)]
pub struct MentionedLeagueModel {
    pub league_id: Uuid,
    pub league_name: String,
}
