//! Test fixtures and data generators
//!
//! Provides reusable board creation requests for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use blur_core::EntityId;
use blur_service::dto::{
    BoardCreateRequest, DashcamCreateRequest, LeagueBoardCreateRequest, MyCarCreateRequest,
};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Unique league name for tests sharing one database
pub fn unique_league_name(prefix: &str) -> String {
    format!("{prefix}-{}", unique_suffix())
}

/// Vehicle profile board mentioning `leagues`
pub fn my_car_request(title: &str, leagues: &[&str]) -> BoardCreateRequest {
    BoardCreateRequest::MyCar(MyCarCreateRequest {
        title: title.to_string(),
        content: "Fresh detail, new tires".to_string(),
        car_name: "Avante N".to_string(),
        thumbnail_url: Some("https://cdn.example.com/avante.png".to_string()),
        mentioned_league_names: leagues.iter().map(|s| (*s).to_string()).collect(),
    })
}

/// Dash camera board mentioning `leagues`
pub fn dashcam_request(title: &str, leagues: &[&str]) -> BoardCreateRequest {
    BoardCreateRequest::Dashcam(DashcamCreateRequest {
        title: title.to_string(),
        content: "Cut in at the tunnel exit".to_string(),
        video_urls: vec!["https://cdn.example.com/clip.mp4".to_string()],
        mentioned_league_names: leagues.iter().map(|s| (*s).to_string()).collect(),
    })
}

/// Board posted inside a league
pub fn league_request(league_id: EntityId, title: &str) -> BoardCreateRequest {
    BoardCreateRequest::League(LeagueBoardCreateRequest {
        league_id,
        title: title.to_string(),
        content: "Meetup at the usual spot".to_string(),
    })
}
