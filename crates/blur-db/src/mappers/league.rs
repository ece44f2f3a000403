//! League entity <-> model mappers

use blur_core::entities::{League, LeagueMember};
use blur_core::value_objects::EntityId;

use crate::models::{LeagueMemberModel, LeagueModel};

impl From<LeagueModel> for League {
    fn from(model: LeagueModel) -> Self {
        League {
            id: EntityId::from_uuid(model.id),
            name: model.name,
            created_at: model.created_at,
        }
    }
}

impl From<LeagueMemberModel> for LeagueMember {
    fn from(model: LeagueMemberModel) -> Self {
        LeagueMember {
            league_id: EntityId::from_uuid(model.league_id),
            member_id: EntityId::from_uuid(model.member_id),
            allocated_at: model.allocated_at,
        }
    }
}
