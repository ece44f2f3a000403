//! Database models - SQLx-compatible structs for PostgreSQL tables

mod board;
mod channel;
mod league;
mod like;
mod member;
mod mention;

pub use board::BoardModel;
pub use channel::ChannelModel;
pub use league::{LeagueMemberModel, LeagueModel};
pub use like::LikeModel;
pub use member::MemberModel;
pub use mention::MentionedLeagueModel;
