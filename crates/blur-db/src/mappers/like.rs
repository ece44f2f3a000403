//! Like entity <-> model mapper

use blur_core::entities::Like;
use blur_core::value_objects::EntityId;

use crate::models::LikeModel;

impl From<LikeModel> for Like {
    fn from(model: LikeModel) -> Self {
        Like {
            id: EntityId::from_uuid(model.id),
            member_id: EntityId::from_uuid(model.member_id),
            board_id: EntityId::from_uuid(model.board_id),
            created_at: model.created_at,
        }
    }
}
