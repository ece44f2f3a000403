//! Request DTOs for service entry points
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use blur_core::{BoardType, EntityId};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Board Creation Requests
// ============================================================================

/// Board creation request, tagged by `board_type`
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "board_type", rename_all = "UPPERCASE")]
pub enum BoardCreateRequest {
    League(LeagueBoardCreateRequest),
    #[serde(rename = "MYCAR")]
    MyCar(MyCarCreateRequest),
    Dashcam(DashcamCreateRequest),
}

impl BoardCreateRequest {
    /// Discriminator selecting the board factory
    #[must_use]
    pub fn board_type(&self) -> BoardType {
        match self {
            Self::League(_) => BoardType::League,
            Self::MyCar(_) => BoardType::MyCar,
            Self::Dashcam(_) => BoardType::Dashcam,
        }
    }

    /// Mentioned league names, duplicates removed, first occurrence order kept
    #[must_use]
    pub fn mentioned_league_names(&self) -> Vec<String> {
        let names = match self {
            Self::League(_) => return Vec::new(),
            Self::MyCar(req) => &req.mentioned_league_names,
            Self::Dashcam(req) => &req.mentioned_league_names,
        };

        let mut unique: Vec<String> = Vec::with_capacity(names.len());
        for name in names {
            let name = name.trim();
            if !unique.iter().any(|n| n == name) {
                unique.push(name.to_string());
            }
        }
        unique
    }

    /// League the new board will be scoped to, if any
    #[must_use]
    pub fn scoped_league(&self) -> Option<EntityId> {
        match self {
            Self::League(req) => Some(req.league_id),
            Self::MyCar(_) | Self::Dashcam(_) => None,
        }
    }
}

/// League board creation request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LeagueBoardCreateRequest {
    pub league_id: EntityId,

    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 10000, message = "Content must be 1-10000 characters"))]
    pub content: String,
}

/// Vehicle profile board creation request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MyCarCreateRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 10000, message = "Content must be 1-10000 characters"))]
    pub content: String,

    #[validate(length(min = 1, max = 100, message = "Car name must be 1-100 characters"))]
    pub car_name: String,

    /// Uploaded image URL
    #[validate(url(message = "Thumbnail must be a URL"))]
    pub thumbnail_url: Option<String>,

    #[serde(default)]
    #[validate(length(max = 10, message = "At most 10 leagues can be mentioned"))]
    pub mentioned_league_names: Vec<String>,
}

/// Dash camera board creation request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DashcamCreateRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 10000, message = "Content must be 1-10000 characters"))]
    pub content: String,

    #[validate(length(min = 1, max = 5, message = "Attach 1-5 videos"))]
    pub video_urls: Vec<String>,

    #[serde(default)]
    #[validate(length(max = 10, message = "At most 10 leagues can be mentioned"))]
    pub mentioned_league_names: Vec<String>,
}

// ============================================================================
// Read Requests
// ============================================================================

/// Who is reading a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewer {
    /// Authenticated member
    Member(EntityId),
    /// Unauthenticated read; like status is not computed
    Anonymous,
}

impl Viewer {
    /// Viewer from an optional authenticated member id
    #[must_use]
    pub fn from_member(member_id: Option<EntityId>) -> Self {
        member_id.map_or(Self::Anonymous, Self::Member)
    }
}
