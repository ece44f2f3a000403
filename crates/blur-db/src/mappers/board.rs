//! Board entity <-> model mapper

use sqlx::types::Json;
use uuid::Uuid;

use blur_core::entities::{ActivateStatus, Board, BoardKind};
use blur_core::error::DomainError;
use blur_core::value_objects::EntityId;

use crate::models::BoardModel;

/// Convert BoardModel to Board entity
///
/// Fails when the stored details do not decode into a known board kind or
/// the status tag is unknown.
impl TryFrom<BoardModel> for Board {
    type Error = DomainError;

    fn try_from(model: BoardModel) -> Result<Self, Self::Error> {
        let kind: BoardKind = serde_json::from_value(model.details.0).map_err(|e| {
            DomainError::DatabaseError(format!("corrupt details for board {}: {e}", model.id))
        })?;

        if kind.board_type().as_str() != model.board_type {
            return Err(DomainError::DatabaseError(format!(
                "board {} is stored as {} but its details describe {}",
                model.id,
                model.board_type,
                kind.board_type()
            )));
        }

        let status = ActivateStatus::try_from(model.status.as_str()).map_err(|e| {
            DomainError::DatabaseError(format!("board {}: {e}", model.id))
        })?;

        Ok(Board {
            id: EntityId::from_uuid(model.id),
            member_id: EntityId::from_uuid(model.member_id),
            channel_id: model.channel_id.map(EntityId::from_uuid),
            title: model.title,
            content: model.content,
            like_count: model.like_count,
            view_count: model.view_count,
            status,
            kind,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Board entity reference flattened to values for database insertion
pub struct BoardInsert<'a> {
    pub id: Uuid,
    pub member_id: Uuid,
    pub channel_id: Option<Uuid>,
    pub board_type: &'static str,
    pub title: &'a str,
    pub content: &'a str,
    pub details: Json<serde_json::Value>,
    pub status: &'static str,
}

impl<'a> BoardInsert<'a> {
    pub fn new(board: &'a Board) -> Result<Self, DomainError> {
        let details = serde_json::to_value(&board.kind)
            .map_err(|e| DomainError::InternalError(format!("unserializable board kind: {e}")))?;

        Ok(Self {
            id: board.id.into_inner(),
            member_id: board.member_id.into_inner(),
            channel_id: board.channel_id.map(EntityId::into_inner),
            board_type: board.board_type().as_str(),
            title: &board.title,
            content: &board.content,
            details: Json(details),
            status: board.status.as_str(),
        })
    }
}
