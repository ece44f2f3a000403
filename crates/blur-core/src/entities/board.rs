//! Board entity - polymorphic content posted by a member

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{BoardType, EntityId};

/// Board lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActivateStatus {
    #[default]
    Active,
    Inactive,
    Deleted,
}

impl ActivateStatus {
    /// Database tag
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Deleted => "DELETED",
        }
    }
}

impl TryFrom<&str> for ActivateStatus {
    type Error = UnknownStatus;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "ACTIVE" => Ok(Self::Active),
            "INACTIVE" => Ok(Self::Inactive),
            "DELETED" => Ok(Self::Deleted),
            _ => Err(UnknownStatus(value.to_string())),
        }
    }
}

/// Stored status tag that names no [`ActivateStatus`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown board status: {0}")]
pub struct UnknownStatus(pub String);

/// Variant-specific board data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum BoardKind {
    /// Board posted inside a league; only league members may engage with it
    League { league_id: EntityId },
    /// Vehicle profile board
    #[serde(rename = "MYCAR")]
    MyCar {
        car_name: String,
        thumbnail_url: Option<String>,
    },
    /// Dash camera footage board
    Dashcam { video_urls: Vec<String> },
}

impl BoardKind {
    /// Discriminator of this variant
    #[must_use]
    pub fn board_type(&self) -> BoardType {
        match self {
            Self::League { .. } => BoardType::League,
            Self::MyCar { .. } => BoardType::MyCar,
            Self::Dashcam { .. } => BoardType::Dashcam,
        }
    }

    /// League a member must be allocated to before engaging, if any
    #[must_use]
    pub fn scope_league(&self) -> Option<EntityId> {
        match self {
            Self::League { league_id } => Some(*league_id),
            Self::MyCar { .. } | Self::Dashcam { .. } => None,
        }
    }
}

/// Board entity
///
/// `like_count` is a denormalized aggregate of the like ledger. It is only
/// mutated under the board's counter lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub id: EntityId,
    pub member_id: EntityId,
    pub channel_id: Option<EntityId>,
    pub title: String,
    pub content: String,
    pub like_count: i64,
    pub view_count: i64,
    pub status: ActivateStatus,
    pub kind: BoardKind,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Board {
    /// Create a new, active, not-yet-persisted board without a channel
    #[must_use]
    pub fn new(member_id: EntityId, title: String, content: String, kind: BoardKind) -> Self {
        let now = Utc::now();
        Self {
            id: EntityId::generate(),
            member_id,
            channel_id: None,
            title,
            content,
            like_count: 0,
            view_count: 0,
            status: ActivateStatus::Active,
            kind,
            created_at: now,
            updated_at: now,
        }
    }

    /// Discriminator of this board
    #[inline]
    #[must_use]
    pub fn board_type(&self) -> BoardType {
        self.kind.board_type()
    }

    /// Check if the board is visible
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.status, ActivateStatus::Active)
    }

    /// File the board under a channel
    pub fn attach_channel(&mut self, channel_id: EntityId) {
        self.channel_id = Some(channel_id);
        self.updated_at = Utc::now();
    }

    /// Increment the like counter
    pub fn increase_like_count(&mut self) {
        self.like_count += 1;
    }

    /// Decrement the like counter, never below zero
    pub fn decrease_like_count(&mut self) {
        self.like_count = (self.like_count - 1).max(0);
    }

    /// Increment the view counter
    pub fn increase_view_count(&mut self) {
        self.view_count += 1;
    }
}
