//! PostgreSQL implementation of MentionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blur_core::entities::MentionedLeague;
use blur_core::traits::{MentionRepository, RepoResult};
use blur_core::value_objects::EntityId;

use crate::models::MentionedLeagueModel;

use super::error::map_db_error;

/// PostgreSQL implementation of MentionRepository
#[derive(Clone)]
pub struct PgMentionRepository {
    pool: PgPool,
}

impl PgMentionRepository {
    /// Create a new PgMentionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MentionRepository for PgMentionRepository {
    #[instrument(skip(self))]
    async fn find_mentioned_leagues(&self, board_id: EntityId) -> RepoResult<Vec<MentionedLeague>> {
        let results = sqlx::query_as::<_, MentionedLeagueModel>(
            r"
            SELECT l.id AS league_id, l.name AS league_name
            FROM mentions m
            JOIN leagues l ON l.id = m.league_id
            WHERE m.board_id = $1
            ORDER BY l.name
            ",
        )
        .bind(board_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(MentionedLeague::from).collect())
    }
}
