//! Response DTOs for service outputs
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Entity IDs are serialized as strings.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Like state of a board as seen by one member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LikeResponse {
    /// Aggregate like count of the board
    pub count: i64,
    /// Whether the member likes the board
    pub liked: bool,
}

/// League mentioned by a board
#[derive(Debug, Clone, Serialize)]
pub struct MentionedLeagueResponse {
    pub id: String,
    pub name: String,
}

/// Variant-specific board fields
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "board_type", rename_all = "UPPERCASE")]
pub enum BoardKindResponse {
    League {
        league_id: String,
    },
    #[serde(rename = "MYCAR")]
    MyCar {
        car_name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        thumbnail_url: Option<String>,
    },
    Dashcam {
        video_urls: Vec<String>,
    },
}

/// Full board view
#[derive(Debug, Clone, Serialize)]
pub struct BoardDetailResponse {
    pub id: String,
    pub member_id: String,
    pub title: String,
    pub content: String,
    pub like_count: i64,
    pub view_count: i64,
    #[serde(flatten)]
    pub kind: BoardKindResponse,
    pub mentioned_leagues: Vec<MentionedLeagueResponse>,
    /// Always false for anonymous viewers
    pub is_liked: bool,
    pub created_at: DateTime<Utc>,
}

/// Board list entry
#[derive(Debug, Clone, Serialize)]
pub struct BoardSummaryResponse {
    pub id: String,
    pub member_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    pub like_count: i64,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
}
