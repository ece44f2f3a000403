//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use blur_core::entities::{Board, BoardKind, MentionedLeague};

use super::responses::{
    BoardDetailResponse, BoardKindResponse, BoardSummaryResponse, MentionedLeagueResponse,
};

// ============================================================================
// Board Mappers
// ============================================================================

impl From<&BoardKind> for BoardKindResponse {
    fn from(kind: &BoardKind) -> Self {
        match kind {
            BoardKind::League { league_id } => Self::League {
                league_id: league_id.to_string(),
            },
            BoardKind::MyCar {
                car_name,
                thumbnail_url,
            } => Self::MyCar {
                car_name: car_name.clone(),
                thumbnail_url: thumbnail_url.clone(),
            },
            BoardKind::Dashcam { video_urls } => Self::Dashcam {
                video_urls: video_urls.clone(),
            },
        }
    }
}

impl From<&Board> for BoardSummaryResponse {
    fn from(board: &Board) -> Self {
        let thumbnail_url = match &board.kind {
            BoardKind::MyCar { thumbnail_url, .. } => thumbnail_url.clone(),
            BoardKind::League { .. } | BoardKind::Dashcam { .. } => None,
        };

        Self {
            id: board.id.to_string(),
            member_id: board.member_id.to_string(),
            title: board.title.clone(),
            thumbnail_url,
            like_count: board.like_count,
            view_count: board.view_count,
            created_at: board.created_at,
        }
    }
}

impl From<Board> for BoardSummaryResponse {
    fn from(board: Board) -> Self {
        Self::from(&board)
    }
}

/// Board with the data its detail view needs
#[derive(Debug, Clone)]
pub struct BoardWithDetails {
    pub board: Board,
    pub mentioned_leagues: Vec<MentionedLeague>,
    pub is_liked: bool,
}

impl From<BoardWithDetails> for BoardDetailResponse {
    fn from(value: BoardWithDetails) -> Self {
        let BoardWithDetails {
            board,
            mentioned_leagues,
            is_liked,
        } = value;

        Self {
            id: board.id.to_string(),
            member_id: board.member_id.to_string(),
            kind: BoardKindResponse::from(&board.kind),
            title: board.title,
            content: board.content,
            like_count: board.like_count,
            view_count: board.view_count,
            mentioned_leagues: mentioned_leagues
                .into_iter()
                .map(|m| MentionedLeagueResponse {
                    id: m.league_id.to_string(),
                    name: m.league_name,
                })
                .collect(),
            is_liked,
            created_at: board.created_at,
        }
    }
}
