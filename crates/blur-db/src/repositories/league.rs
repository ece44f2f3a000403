//! PostgreSQL implementations of LeagueRepository and LeagueMemberRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blur_core::entities::{League, LeagueMember};
use blur_core::traits::{LeagueMemberRepository, LeagueRepository, RepoResult};
use blur_core::value_objects::EntityId;

use crate::models::LeagueModel;

use super::error::map_db_error;

/// PostgreSQL implementation of LeagueRepository
#[derive(Clone)]
pub struct PgLeagueRepository {
    pool: PgPool,
}

impl PgLeagueRepository {
    /// Create a new PgLeagueRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LeagueRepository for PgLeagueRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<League>> {
        let result = sqlx::query_as::<_, LeagueModel>(
            r"
            SELECT id, name, created_at
            FROM leagues
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(League::from))
    }

    #[instrument(skip(self))]
    async fn find_all_by_names(&self, names: &[String]) -> RepoResult<Vec<League>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, LeagueModel>(
            r"
            SELECT id, name, created_at
            FROM leagues
            WHERE name = ANY($1)
            ORDER BY name
            ",
        )
        .bind(names)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(League::from).collect())
    }

    #[instrument(skip(self, league), fields(league = %league.name))]
    async fn create(&self, league: &League) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO leagues (id, name, created_at)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(league.id.into_inner())
        .bind(&league.name)
        .bind(league.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}

/// PostgreSQL implementation of LeagueMemberRepository
#[derive(Clone)]
pub struct PgLeagueMemberRepository {
    pool: PgPool,
}

impl PgLeagueMemberRepository {
    /// Create a new PgLeagueMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LeagueMemberRepository for PgLeagueMemberRepository {
    #[instrument(skip(self))]
    async fn is_allocated(&self, league_id: EntityId, member_id: EntityId) -> RepoResult<bool> {
        let exists: (bool,) = sqlx::query_as(
            r"
            SELECT EXISTS(
                SELECT 1 FROM league_members
                WHERE league_id = $1 AND member_id = $2
            )
            ",
        )
        .bind(league_id.into_inner())
        .bind(member_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists.0)
    }

    #[instrument(skip(self, allocation), fields(league_id = %allocation.league_id, member_id = %allocation.member_id))]
    async fn allocate(&self, allocation: &LeagueMember) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO league_members (league_id, member_id, allocated_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (league_id, member_id) DO NOTHING
            ",
        )
        .bind(allocation.league_id.into_inner())
        .bind(allocation.member_id.into_inner())
        .bind(allocation.allocated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
