//! Ports - traits implemented by the infrastructure crates

mod lock;
mod repositories;

pub use lock::{LockHandle, LockProvider};
pub use repositories::{
    BoardRepository, ChannelRepository, LeagueMemberRepository, LeagueRepository,
    LikeRepository, MemberRepository, MentionRepository, RepoResult,
};
