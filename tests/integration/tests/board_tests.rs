//! Board service tests
//!
//! Run against the in-memory store with local counter locks.
//!
//! Run with: cargo test -p integration-tests --test board_tests

use std::sync::atomic::Ordering;

use blur_core::entities::BoardKind;
use blur_core::{BoardType, DomainError, EntityId};
use blur_service::dto::Viewer;
use blur_service::{BoardService, LikeService, ServiceError};
use integration_tests::{
    dashcam_request, league_request, my_car_request, test_lock_config, TestApp,
};

fn domain(err: &ServiceError) -> &DomainError {
    err.as_domain().expect("expected a domain error")
}

// ============================================================================
// Creation
// ============================================================================

#[tokio::test]
async fn test_create_board_with_mentions() {
    let app = TestApp::start().await.unwrap();
    let member = app.seed_member().await.unwrap();
    app.seed_league("Kia").await.unwrap();
    app.seed_league("Hyundai").await.unwrap();
    let boards = BoardService::new(&app.ctx);

    let created = boards
        .create_board(my_car_request("Fresh wax", &["Kia", "Hyundai", "Kia"]), member.id)
        .await
        .unwrap();

    assert!(created);
    assert_eq!(app.store.board_count(), 1);
    assert_eq!(app.store.mention_count(), 2);

    let listed = boards.find_boards(BoardType::MyCar, None, 10).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Fresh wax");
    assert_eq!(
        listed[0].thumbnail_url.as_deref(),
        Some("https://cdn.example.com/avante.png")
    );
}

#[tokio::test]
async fn test_unknown_mention_persists_nothing() {
    let app = TestApp::start().await.unwrap();
    let member = app.seed_member().await.unwrap();
    app.seed_league("LeagueA").await.unwrap();

    let err = BoardService::new(&app.ctx)
        .create_board(my_car_request("Ride", &["LeagueA", "Nonexistent"]), member.id)
        .await
        .unwrap_err();

    assert!(matches!(domain(&err), DomainError::NotExistLeague));
    assert_eq!(err.status_code(), 404);
    assert_eq!(app.store.board_count(), 0);
    assert_eq!(app.store.mention_count(), 0);
}

#[tokio::test]
async fn test_missing_channel() {
    let app = TestApp::bare(test_lock_config()).unwrap();
    app.seed_channel(BoardType::MyCar).await.unwrap();
    let member = app.seed_member().await.unwrap();
    let boards = BoardService::new(&app.ctx);

    let err = boards
        .create_board(dashcam_request("Near miss", &[]), member.id)
        .await
        .unwrap_err();
    assert!(
        matches!(domain(&err), DomainError::NotExistChannel(name) if name == BoardType::Dashcam.channel_name())
    );
    assert_eq!(app.store.board_count(), 0);

    let err = boards.find_boards(BoardType::Dashcam, None, 10).await.unwrap_err();
    assert!(matches!(domain(&err), DomainError::NotExistChannel(_)));
}

#[tokio::test]
async fn test_unknown_author() {
    let app = TestApp::start().await.unwrap();

    let err = BoardService::new(&app.ctx)
        .create_board(my_car_request("Ride", &[]), EntityId::generate())
        .await
        .unwrap_err();

    assert!(matches!(domain(&err), DomainError::MemberNotFound(_)));
    assert_eq!(app.store.board_count(), 0);
}

#[tokio::test]
async fn test_invalid_request_rejected() {
    let app = TestApp::start().await.unwrap();
    let member = app.seed_member().await.unwrap();

    let err = BoardService::new(&app.ctx)
        .create_board(my_car_request("", &[]), member.id)
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Validation(_)));
    assert_eq!(err.status_code(), 400);
    assert_eq!(app.store.board_count(), 0);
}

#[tokio::test]
async fn test_league_board_requires_allocation() {
    let app = TestApp::start().await.unwrap();
    let league = app.seed_league("Genesis").await.unwrap();
    let member = app.seed_member().await.unwrap();
    let boards = BoardService::new(&app.ctx);

    let err = boards
        .create_board(league_request(league.id, "Track day"), member.id)
        .await
        .unwrap_err();
    assert!(matches!(domain(&err), DomainError::NotAllocatedLeague));

    let err = boards
        .create_board(league_request(EntityId::generate(), "Track day"), member.id)
        .await
        .unwrap_err();
    assert!(matches!(domain(&err), DomainError::LeagueNotFound(_)));
    assert_eq!(app.store.board_count(), 0);

    app.allocate(&league, &member).await.unwrap();
    assert!(boards
        .create_board(league_request(league.id, "Track day"), member.id)
        .await
        .unwrap());
    assert_eq!(app.store.board_count(), 1);
}

// ============================================================================
// Detail
// ============================================================================

#[tokio::test]
async fn test_detail_for_member_and_anonymous() {
    let app = TestApp::start().await.unwrap();
    let author = app.seed_member().await.unwrap();
    let fan = app.seed_member().await.unwrap();
    let board = app
        .seed_board(
            &author,
            "Tunnel cut-in",
            BoardKind::Dashcam {
                video_urls: vec!["https://cdn.example.com/a.mp4".to_string()],
            },
        )
        .await
        .unwrap();
    LikeService::new(&app.ctx).create_like(fan.id, board.id).await.unwrap();
    let boards = BoardService::new(&app.ctx);

    let detail = boards
        .find_board_detail(board.id, Viewer::Member(fan.id))
        .await
        .unwrap();
    assert!(detail.is_liked);
    assert_eq!(detail.like_count, 1);
    assert_eq!(detail.view_count, 1);

    let detail = boards
        .find_board_detail(board.id, Viewer::Anonymous)
        .await
        .unwrap();
    assert!(!detail.is_liked);
    assert_eq!(detail.view_count, 2);

    let detail = boards
        .find_board_detail(board.id, Viewer::Member(author.id))
        .await
        .unwrap();
    assert!(!detail.is_liked);
    assert_eq!(app.store.view_count(board.id), Some(3));
}

#[tokio::test]
async fn test_detail_lists_mentioned_leagues() {
    let app = TestApp::start().await.unwrap();
    let member = app.seed_member().await.unwrap();
    app.seed_league("Kia").await.unwrap();
    app.seed_league("Hyundai").await.unwrap();
    let boards = BoardService::new(&app.ctx);
    boards
        .create_board(dashcam_request("Merge", &["Kia", "Hyundai"]), member.id)
        .await
        .unwrap();

    let listed = boards.find_boards(BoardType::Dashcam, None, 10).await.unwrap();
    let board_id = EntityId::parse(&listed[0].id).unwrap();
    let detail = boards
        .find_board_detail(board_id, Viewer::Anonymous)
        .await
        .unwrap();

    let names: Vec<&str> = detail.mentioned_leagues.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Hyundai", "Kia"]);
}

#[tokio::test]
async fn test_view_count_failure_does_not_fail_read() {
    let app = TestApp::start().await.unwrap();
    let member = app.seed_member().await.unwrap();
    let board = app
        .seed_board(
            &member,
            "Ride",
            BoardKind::MyCar {
                car_name: "K5".to_string(),
                thumbnail_url: None,
            },
        )
        .await
        .unwrap();
    app.store.faults.fail_view_count.store(true, Ordering::SeqCst);

    let detail = BoardService::new(&app.ctx)
        .find_board_detail(board.id, Viewer::Anonymous)
        .await
        .unwrap();

    assert_eq!(detail.view_count, 0);
    assert_eq!(app.store.view_count(board.id), Some(0));
}

#[tokio::test]
async fn test_inactive_board_hidden() {
    let app = TestApp::start().await.unwrap();
    let member = app.seed_member().await.unwrap();
    let mut board = app
        .seed_board(
            &member,
            "Ride",
            BoardKind::MyCar {
                car_name: "K5".to_string(),
                thumbnail_url: None,
            },
        )
        .await
        .unwrap();
    board.status = blur_core::ActivateStatus::Deleted;
    app.store.put_board(board.clone());
    let boards = BoardService::new(&app.ctx);

    let err = boards
        .find_board_detail(board.id, Viewer::Anonymous)
        .await
        .unwrap_err();
    assert!(matches!(domain(&err), DomainError::BoardNotFound(_)));
    assert!(boards.find_boards(BoardType::MyCar, None, 10).await.unwrap().is_empty());
}

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn test_find_boards_keyword_and_limit() {
    let app = TestApp::start().await.unwrap();
    let member = app.seed_member().await.unwrap();
    let boards = BoardService::new(&app.ctx);
    for title in ["Sunday Drive", "Night drive", "Car wash", "Track day"] {
        boards
            .create_board(my_car_request(title, &[]), member.id)
            .await
            .unwrap();
    }
    boards
        .create_board(dashcam_request("Drive cam", &[]), member.id)
        .await
        .unwrap();

    let all = boards.find_boards(BoardType::MyCar, Some("  "), 10).await.unwrap();
    assert_eq!(all.len(), 4);

    let mut titles: Vec<String> = boards
        .find_boards(BoardType::MyCar, Some("DRIVE"), 10)
        .await
        .unwrap()
        .into_iter()
        .map(|b| b.title)
        .collect();
    titles.sort();
    assert_eq!(titles, vec!["Night drive", "Sunday Drive"]);

    let limited = boards.find_boards(BoardType::MyCar, None, 2).await.unwrap();
    assert_eq!(limited.len(), 2);

    // Clamped to at least one
    let clamped = boards.find_boards(BoardType::MyCar, None, 0).await.unwrap();
    assert_eq!(clamped.len(), 1);
}
