//! Value objects - immutable types that represent domain concepts

mod board_type;
mod entity_id;

pub use board_type::{BoardType, BoardTypeParseError};
pub use entity_id::{EntityId, EntityIdParseError};
