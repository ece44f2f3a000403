//! Like service
//!
//! Handles liking and unliking boards. The like ledger is mutated first and
//! confirmed by a read-back; only then is the board's aggregate counter
//! adjusted, under the board's counter lock.

use blur_core::entities::{Board, Like, Member};
use blur_core::{DomainError, EntityId};
use tracing::{error, info, instrument, warn};

use crate::dto::LikeResponse;

use super::context::ServiceContext;
use super::counter_guard::CounterGuard;
use super::error::{ServiceError, ServiceResult};

/// Like service
pub struct LikeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LikeService<'a> {
    /// Create a new LikeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Like a board
    ///
    /// # Errors
    /// - `MemberNotFound` / `BoardNotFound` for unknown ids
    /// - `NotAllocatedLeague` if the board is league-scoped and the member is not in the league
    /// - `LikeAlreadyExists` if the member already likes the board
    /// - `FailToCreateLike` if the ledger does not show the new like
    /// - `LockTimeout` if the counter lock is busy
    /// - `CacheError` if the lock backend cannot be reached
    ///
    /// If the counter cannot be updated the new like is withdrawn before the error is returned.
    #[instrument(skip(self))]
    pub async fn create_like(
        &self,
        member_id: EntityId,
        board_id: EntityId,
    ) -> ServiceResult<LikeResponse> {
        let (member, board) = self.load_eligible(member_id, board_id).await?;

        let like = Like::new(member.id, board.id);
        self.ctx.like_repo().create(&like).await?;

        if !self.ctx.like_repo().exists(member.id, board.id).await? {
            error!(
                member_id = %member.id,
                board_id = %board.id,
                "Like missing from ledger right after insert"
            );
            return Err(DomainError::FailToCreateLike.into());
        }

        let count = match self.adjust_like_count(board.id, Board::increase_like_count).await {
            Ok(count) => count,
            Err(e) => {
                self.withdraw_like(&like, &e).await;
                return Err(e);
            }
        };

        info!(member_id = %member.id, board_id = %board.id, count, "Board liked");

        Ok(LikeResponse { count, liked: true })
    }

    /// Remove a like from a board
    ///
    /// # Errors
    /// - `MemberNotFound` / `BoardNotFound` for unknown ids
    /// - `NotAllocatedLeague` if the board is league-scoped and the member is not in the league
    /// - `NotExistLike` if there is no like to remove, including when a concurrent
    ///   call removed it first
    /// - `FailToDeleteLike` if the ledger still shows the like
    /// - `LockTimeout` if the counter lock is busy
    /// - `CacheError` if the lock backend cannot be reached
    ///
    /// If the counter cannot be updated the like is restored before the error is returned.
    #[instrument(skip(self))]
    pub async fn delete_like(
        &self,
        member_id: EntityId,
        board_id: EntityId,
    ) -> ServiceResult<LikeResponse> {
        let (member, board) = self.load_eligible(member_id, board_id).await?;

        let like = self
            .ctx
            .like_repo()
            .find(member.id, board.id)
            .await?
            .ok_or(DomainError::NotExistLike)?;

        // Only the caller whose delete removed the row adjusts the counter
        if !self.ctx.like_repo().delete(like.id).await? {
            return Err(DomainError::NotExistLike.into());
        }

        if self.ctx.like_repo().exists(member.id, board.id).await? {
            error!(
                member_id = %member.id,
                board_id = %board.id,
                "Like still in ledger right after delete"
            );
            return Err(DomainError::FailToDeleteLike.into());
        }

        let count = match self.adjust_like_count(board.id, Board::decrease_like_count).await {
            Ok(count) => count,
            Err(e) => {
                self.restore_like(&like, &e).await;
                return Err(e);
            }
        };

        info!(member_id = %member.id, board_id = %board.id, count, "Board unliked");

        Ok(LikeResponse {
            count,
            liked: false,
        })
    }

    /// Current like count of a board and whether the member likes it
    #[instrument(skip(self))]
    pub async fn get_like_status(
        &self,
        member_id: EntityId,
        board_id: EntityId,
    ) -> ServiceResult<LikeResponse> {
        let (member, board) = self.load_eligible(member_id, board_id).await?;
        let liked = self.ctx.like_repo().exists(member.id, board.id).await?;

        Ok(LikeResponse {
            count: board.like_count,
            liked,
        })
    }

    // === Internals ===

    /// Resolve member and board and check the member may engage with the board
    async fn load_eligible(
        &self,
        member_id: EntityId,
        board_id: EntityId,
    ) -> ServiceResult<(Member, Board)> {
        let member = self.ctx.member_repo().get_or_fail(member_id).await?;
        let board = self.ctx.board_repo().get_or_fail(board_id).await?;

        if let Some(league_id) = board.kind.scope_league() {
            let allocated = self
                .ctx
                .league_member_repo()
                .is_allocated(league_id, member.id)
                .await?;
            if !allocated {
                return Err(DomainError::NotAllocatedLeague.into());
            }
        }

        Ok((member, board))
    }

    /// Apply `change` to the board's counter while holding its lock
    async fn adjust_like_count(
        &self,
        board_id: EntityId,
        change: fn(&mut Board),
    ) -> ServiceResult<i64> {
        CounterGuard::new(self.ctx)
            .with_board_lock(board_id, || self.write_like_count(board_id, change))
            .await
    }

    /// Re-read the current count, apply `change` and persist it. Caller holds the lock.
    async fn write_like_count(&self, board_id: EntityId, change: fn(&mut Board)) -> ServiceResult<i64> {
        let mut board = self.ctx.board_repo().get_or_fail(board_id).await?;
        change(&mut board);
        self.ctx
            .board_repo()
            .update_like_count(board.id, board.like_count)
            .await?;
        Ok(board.like_count)
    }

    /// Undo an uncounted insert
    async fn withdraw_like(&self, like: &Like, cause: &ServiceError) {
        match self.ctx.like_repo().delete(like.id).await {
            Ok(_) => error!(
                like_id = %like.id,
                board_id = %like.board_id,
                cause = %cause,
                "Like counter not updated, like withdrawn"
            ),
            Err(e) => error!(
                like_id = %like.id,
                board_id = %like.board_id,
                cause = %cause,
                error = %e,
                "Like counter not updated and like could not be withdrawn"
            ),
        }
    }

    /// Undo an uncounted delete
    ///
    /// If the member liked the board again in the meantime, that like was
    /// counted on its own, so the removal is settled with a decrement instead.
    async fn restore_like(&self, like: &Like, cause: &ServiceError) {
        match self.ctx.like_repo().create(like).await {
            Ok(()) => error!(
                like_id = %like.id,
                board_id = %like.board_id,
                cause = %cause,
                "Like counter not updated, like restored"
            ),
            Err(DomainError::LikeAlreadyExists) => {
                match self
                    .adjust_like_count(like.board_id, Board::decrease_like_count)
                    .await
                {
                    Ok(count) => warn!(
                        like_id = %like.id,
                        board_id = %like.board_id,
                        count,
                        "Board liked again before restore, removal counted"
                    ),
                    Err(e) => error!(
                        like_id = %like.id,
                        board_id = %like.board_id,
                        cause = %cause,
                        error = %e,
                        "Board liked again before restore and removal could not be counted"
                    ),
                }
            }
            Err(e) => error!(
                like_id = %like.id,
                board_id = %like.board_id,
                cause = %cause,
                error = %e,
                "Like counter not updated and like could not be restored"
            ),
        }
    }
}
