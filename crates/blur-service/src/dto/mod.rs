//! Data transfer objects for service inputs and outputs
//!
//! This module provides:
//! - Request DTOs with validation for board creation
//! - Response DTOs for serializing service outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    BoardCreateRequest, DashcamCreateRequest, LeagueBoardCreateRequest, MyCarCreateRequest,
    Viewer,
};

pub use responses::{
    BoardDetailResponse, BoardKindResponse, BoardSummaryResponse, LikeResponse,
    MentionedLeagueResponse,
};

pub use mappers::BoardWithDetails;
