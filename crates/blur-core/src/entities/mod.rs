//! Domain entities - core business objects

mod board;
mod channel;
mod league;
mod like;
mod member;
mod mention;

pub use board::{ActivateStatus, Board, BoardKind, UnknownStatus};
pub use channel::Channel;
pub use league::{League, LeagueMember};
pub use like::Like;
pub use member::Member;
pub use mention::{Mention, MentionedLeague};
