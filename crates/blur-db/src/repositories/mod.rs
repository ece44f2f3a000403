//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in blur-core.
//! Each repository handles database operations for a specific domain entity.

mod board;
mod channel;
mod error;
mod league;
mod like;
mod member;
mod mention;

pub use board::PgBoardRepository;
pub use channel::PgChannelRepository;
pub use league::{PgLeagueMemberRepository, PgLeagueRepository};
pub use like::PgLikeRepository;
pub use member::PgMemberRepository;
pub use mention::PgMentionRepository;
