//! PostgreSQL implementation of LikeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blur_core::entities::Like;
use blur_core::error::DomainError;
use blur_core::traits::{LikeRepository, RepoResult};
use blur_core::value_objects::EntityId;

use crate::models::LikeModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of LikeRepository
#[derive(Clone)]
pub struct PgLikeRepository {
    pool: PgPool,
}

impl PgLikeRepository {
    /// Create a new PgLikeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for PgLikeRepository {
    #[instrument(skip(self))]
    async fn find(&self, member_id: EntityId, board_id: EntityId) -> RepoResult<Option<Like>> {
        let result = sqlx::query_as::<_, LikeModel>(
            r"
            SELECT id, member_id, board_id, created_at
            FROM likes
            WHERE member_id = $1 AND board_id = $2
            ",
        )
        .bind(member_id.into_inner())
        .bind(board_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Like::from))
    }

    #[instrument(skip(self))]
    async fn exists(&self, member_id: EntityId, board_id: EntityId) -> RepoResult<bool> {
        let exists: (bool,) = sqlx::query_as(
            r"
            SELECT EXISTS(
                SELECT 1 FROM likes
                WHERE member_id = $1 AND board_id = $2
            )
            ",
        )
        .bind(member_id.into_inner())
        .bind(board_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists.0)
    }

    #[instrument(skip(self, like), fields(member_id = %like.member_id, board_id = %like.board_id))]
    async fn create(&self, like: &Like) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO likes (id, member_id, board_id, created_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(like.id.into_inner())
        .bind(like.member_id.into_inner())
        .bind(like.board_id.into_inner())
        .bind(like.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::LikeAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: EntityId) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM likes
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn count_by_board(&self, board_id: EntityId) -> RepoResult<i64> {
        let count: (i64,) = sqlx::query_as(
            r"
            SELECT COUNT(*)
            FROM likes
            WHERE board_id = $1
            ",
        )
        .bind(board_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count.0)
    }
}
