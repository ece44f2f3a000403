//! Member entity <-> model mapper

use blur_core::entities::Member;
use blur_core::value_objects::EntityId;

use crate::models::MemberModel;

impl From<MemberModel> for Member {
    fn from(model: MemberModel) -> Self {
        Member {
            id: EntityId::from_uuid(model.id),
            nickname: model.nickname,
            email: model.email,
            created_at: model.created_at,
        }
    }
}
