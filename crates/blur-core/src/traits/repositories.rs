//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Board, Channel, League, LeagueMember, Like, Member, Mention, MentionedLeague};
use crate::error::DomainError;
use crate::value_objects::EntityId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Find member by ID
    async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Member>>;

    /// Create a new member
    async fn create(&self, member: &Member) -> RepoResult<()>;

    /// Find member by ID or fail with `MemberNotFound`
    async fn get_or_fail(&self, id: EntityId) -> RepoResult<Member> {
        self.find_by_id(id)
            .await?
            .ok_or(DomainError::MemberNotFound(id))
    }
}

// ============================================================================
// Board Repository
// ============================================================================

#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// Find board by ID regardless of status
    async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Board>>;

    /// Find board by ID if it is ACTIVE
    async fn find_active_by_id(&self, id: EntityId) -> RepoResult<Option<Board>>;

    /// List ACTIVE boards of a channel whose title contains `keyword`, newest first
    async fn find_active_by_channel(
        &self,
        channel_id: EntityId,
        keyword: Option<&str>,
        limit: i64,
    ) -> RepoResult<Vec<Board>>;

    /// Persist a board and its mentions as a single unit
    async fn create_with_mentions(&self, board: &Board, mentions: &[Mention]) -> RepoResult<()>;

    /// Overwrite the aggregate like counter.
    ///
    /// Callers must hold the board's counter lock.
    async fn update_like_count(&self, id: EntityId, like_count: i64) -> RepoResult<()>;

    /// Increment the view counter in place
    async fn increase_view_count(&self, id: EntityId) -> RepoResult<()>;

    /// Find board by ID or fail with `BoardNotFound`
    async fn get_or_fail(&self, id: EntityId) -> RepoResult<Board> {
        self.find_by_id(id)
            .await?
            .ok_or(DomainError::BoardNotFound(id))
    }
}

// ============================================================================
// Channel Repository
// ============================================================================

#[async_trait]
pub trait ChannelRepository: Send + Sync {
    /// Find channel by its unique name
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Channel>>;

    /// Create a new channel
    async fn create(&self, channel: &Channel) -> RepoResult<()>;
}

// ============================================================================
// League Repository
// ============================================================================

#[async_trait]
pub trait LeagueRepository: Send + Sync {
    /// Find league by ID
    async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<League>>;

    /// Find every league whose name is in `names`; unknown names are skipped
    async fn find_all_by_names(&self, names: &[String]) -> RepoResult<Vec<League>>;

    /// Create a new league
    async fn create(&self, league: &League) -> RepoResult<()>;
}

// ============================================================================
// League Member Repository
// ============================================================================

#[async_trait]
pub trait LeagueMemberRepository: Send + Sync {
    /// Check if a member is allocated to a league
    async fn is_allocated(&self, league_id: EntityId, member_id: EntityId) -> RepoResult<bool>;

    /// Allocate a member to a league
    async fn allocate(&self, allocation: &LeagueMember) -> RepoResult<()>;
}

// ============================================================================
// Like Repository
// ============================================================================

/// The engagement ledger.
///
/// Implementations must reject a second like for the same (member, board)
/// pair with `DomainError::LikeAlreadyExists`.
#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Find the like of a member on a board
    async fn find(&self, member_id: EntityId, board_id: EntityId) -> RepoResult<Option<Like>>;

    /// Check if a member likes a board
    async fn exists(&self, member_id: EntityId, board_id: EntityId) -> RepoResult<bool>;

    /// Record a like
    async fn create(&self, like: &Like) -> RepoResult<()>;

    /// Delete a like by ID, returning whether a row was removed
    async fn delete(&self, id: EntityId) -> RepoResult<bool>;

    /// Count likes referencing a board
    async fn count_by_board(&self, board_id: EntityId) -> RepoResult<i64>;
}

// ============================================================================
// Mention Repository
// ============================================================================

#[async_trait]
pub trait MentionRepository: Send + Sync {
    /// Leagues mentioned by a board, ordered by league name
    async fn find_mentioned_leagues(&self, board_id: EntityId) -> RepoResult<Vec<MentionedLeague>>;
}
