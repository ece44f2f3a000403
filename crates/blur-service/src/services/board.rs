//! Board service
//!
//! Handles board creation, the detail view and channel listings.

use blur_core::entities::{Channel, Mention};
use blur_core::{BoardType, DomainError, EntityId};
use tracing::{debug, info, instrument, warn};

use crate::dto::{
    BoardCreateRequest, BoardDetailResponse, BoardSummaryResponse, BoardWithDetails, Viewer,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Largest page `find_boards` returns
pub const MAX_LIST_LIMIT: i64 = 100;

/// Board service
pub struct BoardService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BoardService<'a> {
    /// Create a new BoardService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a board of the request's type together with its league mentions
    ///
    /// Every mentioned league must exist; otherwise nothing is persisted.
    ///
    /// # Errors
    /// - `MemberNotFound` for an unknown author
    /// - `NotExistLeague` if any mentioned league name is unknown
    /// - `LeagueNotFound` / `NotAllocatedLeague` for a league board whose league
    ///   is unknown or does not include the author
    /// - `Validation` for invalid request fields
    /// - `NotExistChannel` if the type's channel has not been provisioned
    #[instrument(skip(self, request), fields(board_type = %request.board_type()))]
    pub async fn create_board(
        &self,
        request: BoardCreateRequest,
        member_id: EntityId,
    ) -> ServiceResult<bool> {
        let member = self.ctx.member_repo().get_or_fail(member_id).await?;
        let board_type = request.board_type();

        let names = request.mentioned_league_names();
        let leagues = if names.is_empty() {
            Vec::new()
        } else {
            self.ctx.league_repo().find_all_by_names(&names).await?
        };
        if leagues.len() != names.len() {
            debug!(requested = names.len(), found = leagues.len(), "Unknown league mentioned");
            return Err(DomainError::NotExistLeague.into());
        }

        if let Some(league_id) = request.scoped_league() {
            self.ctx
                .league_repo()
                .find_by_id(league_id)
                .await?
                .ok_or(DomainError::LeagueNotFound(league_id))?;

            let allocated = self
                .ctx
                .league_member_repo()
                .is_allocated(league_id, member.id)
                .await?;
            if !allocated {
                return Err(DomainError::NotAllocatedLeague.into());
            }
        }

        let mut board = self
            .ctx
            .board_factories()
            .create(board_type, &request, &member)?;

        let channel = self.channel_for(board_type).await?;
        board.attach_channel(channel.id);

        let mentions: Vec<Mention> = leagues
            .iter()
            .map(|league| Mention::new(board.id, league.id))
            .collect();

        self.ctx
            .board_repo()
            .create_with_mentions(&board, &mentions)
            .await?;

        info!(
            board_id = %board.id,
            member_id = %member.id,
            mentions = mentions.len(),
            "Board created"
        );

        Ok(true)
    }

    /// Full view of an active board
    ///
    /// Counts the view; a failure to do so is logged and does not fail the read.
    /// `is_liked` is only computed for members.
    #[instrument(skip(self))]
    pub async fn find_board_detail(
        &self,
        board_id: EntityId,
        viewer: Viewer,
    ) -> ServiceResult<BoardDetailResponse> {
        let mut board = self
            .ctx
            .board_repo()
            .find_active_by_id(board_id)
            .await?
            .ok_or(DomainError::BoardNotFound(board_id))?;

        let mentioned_leagues = self
            .ctx
            .mention_repo()
            .find_mentioned_leagues(board.id)
            .await?;

        match self.ctx.board_repo().increase_view_count(board.id).await {
            Ok(()) => board.increase_view_count(),
            Err(e) => warn!(board_id = %board.id, error = %e, "Failed to count board view"),
        }

        let is_liked = match viewer {
            Viewer::Member(member_id) => self.ctx.like_repo().exists(member_id, board.id).await?,
            Viewer::Anonymous => false,
        };

        Ok(BoardDetailResponse::from(BoardWithDetails {
            board,
            mentioned_leagues,
            is_liked,
        }))
    }

    /// Active boards of a type, newest first, optionally filtered by a title keyword
    ///
    /// `limit` is clamped to `1..=MAX_LIST_LIMIT`; a blank keyword matches everything.
    #[instrument(skip(self))]
    pub async fn find_boards(
        &self,
        board_type: BoardType,
        keyword: Option<&str>,
        limit: i64,
    ) -> ServiceResult<Vec<BoardSummaryResponse>> {
        let channel = self.channel_for(board_type).await?;
        let keyword = keyword.map(str::trim).filter(|k| !k.is_empty());
        let limit = limit.clamp(1, MAX_LIST_LIMIT);

        let boards = self
            .ctx
            .board_repo()
            .find_active_by_channel(channel.id, keyword, limit)
            .await?;

        Ok(boards.into_iter().map(BoardSummaryResponse::from).collect())
    }

    async fn channel_for(&self, board_type: BoardType) -> ServiceResult<Channel> {
        let name = board_type.channel_name();
        let channel = self
            .ctx
            .channel_repo()
            .find_by_name(name)
            .await?
            .ok_or_else(|| DomainError::NotExistChannel(name.to_string()))?;
        Ok(channel)
    }
}
