//! # blur-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! lock port used to guard denormalized counters.
//! This crate has zero dependencies on infrastructure (database, cache, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    ActivateStatus, Board, BoardKind, Channel, League, LeagueMember, Like, Member, Mention,
    MentionedLeague,
};
pub use error::DomainError;
pub use traits::{
    BoardRepository, ChannelRepository, LeagueMemberRepository, LeagueRepository, LikeRepository,
    LockHandle, LockProvider, MemberRepository, MentionRepository, RepoResult,
};
pub use value_objects::{BoardType, BoardTypeParseError, EntityId, EntityIdParseError};
