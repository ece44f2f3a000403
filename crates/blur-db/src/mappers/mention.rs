//! Mention read model mapper

use blur_core::entities::MentionedLeague;
use blur_core::value_objects::EntityId;

use crate::models::MentionedLeagueModel;

impl From<MentionedLeagueModel> for MentionedLeague {
    fn from(model: MentionedLeagueModel) -> Self {
        MentionedLeague {
            league_id: EntityId::from_uuid(model.league_id),
            league_name: model.league_name,
        }
    }
}
