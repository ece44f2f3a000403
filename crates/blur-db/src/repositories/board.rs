//! PostgreSQL implementation of BoardRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blur_core::entities::{Board, Mention};
use blur_core::traits::{BoardRepository, RepoResult};
use blur_core::value_objects::EntityId;

use crate::mappers::BoardInsert;
use crate::models::BoardModel;

use super::error::{board_not_found, map_db_error};

const BOARD_COLUMNS: &str = r"
    id, member_id, channel_id, board_type, title, content, details,
    like_count, view_count, status, created_at, updated_at
";

/// PostgreSQL implementation of BoardRepository
#[derive(Clone)]
pub struct PgBoardRepository {
    pool: PgPool,
}

impl PgBoardRepository {
    /// Create a new PgBoardRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BoardRepository for PgBoardRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Board>> {
        let sql = format!("SELECT {BOARD_COLUMNS} FROM boards WHERE id = $1");
        let result = sqlx::query_as::<_, BoardModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(Board::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_active_by_id(&self, id: EntityId) -> RepoResult<Option<Board>> {
        let sql = format!("SELECT {BOARD_COLUMNS} FROM boards WHERE id = $1 AND status = 'ACTIVE'");
        let result = sqlx::query_as::<_, BoardModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(Board::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_active_by_channel(
        &self,
        channel_id: EntityId,
        keyword: Option<&str>,
        limit: i64,
    ) -> RepoResult<Vec<Board>> {
        let sql = format!(
            r"
            SELECT {BOARD_COLUMNS}
            FROM boards
            WHERE channel_id = $1
              AND status = 'ACTIVE'
              AND ($2::TEXT IS NULL OR strpos(lower(title), lower($2)) > 0)
            ORDER BY created_at DESC, id DESC
            LIMIT $3
            "
        );
        let results = sqlx::query_as::<_, BoardModel>(&sql)
            .bind(channel_id.into_inner())
            .bind(keyword)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        results.into_iter().map(Board::try_from).collect()
    }

    #[instrument(skip(self, board, mentions), fields(board_id = %board.id, mentions = mentions.len()))]
    async fn create_with_mentions(&self, board: &Board, mentions: &[Mention]) -> RepoResult<()> {
        let insert = BoardInsert::new(board)?;

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO boards (id, member_id, channel_id, board_type, title, content, details,
                                like_count, view_count, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ",
        )
        .bind(insert.id)
        .bind(insert.member_id)
        .bind(insert.channel_id)
        .bind(insert.board_type)
        .bind(insert.title)
        .bind(insert.content)
        .bind(insert.details)
        .bind(board.like_count)
        .bind(board.view_count)
        .bind(insert.status)
        .bind(board.created_at)
        .bind(board.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        for mention in mentions {
            sqlx::query(
                r"
                INSERT INTO mentions (id, board_id, league_id, created_at)
                VALUES ($1, $2, $3, $4)
                ",
            )
            .bind(mention.id.into_inner())
            .bind(mention.board_id.into_inner())
            .bind(mention.league_id.into_inner())
            .bind(mention.created_at)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_like_count(&self, id: EntityId, like_count: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE boards
            SET like_count = $2, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(like_count)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(board_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn increase_view_count(&self, id: EntityId) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE boards
            SET view_count = view_count + 1
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(board_not_found(id));
        }

        Ok(())
    }
}
