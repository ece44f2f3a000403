//! Channel entity <-> model mapper

use blur_core::entities::Channel;
use blur_core::value_objects::EntityId;

use crate::models::ChannelModel;

impl From<ChannelModel> for Channel {
    fn from(model: ChannelModel) -> Self {
        Channel {
            id: EntityId::from_uuid(model.id),
            name: model.name,
            created_at: model.created_at,
        }
    }
}
