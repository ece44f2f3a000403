//! Like service tests
//!
//! Run against the in-memory store with local counter locks.
//!
//! Run with: cargo test -p integration-tests --test like_tests

use std::sync::atomic::Ordering;

use blur_common::LockConfig;
use blur_core::entities::{BoardKind, Like};
use blur_core::{DomainError, EntityId};
use blur_service::dto::LikeResponse;
use blur_service::{LikeService, ServiceError};
use integration_tests::{test_lock_config, TestApp};

fn my_car() -> BoardKind {
    BoardKind::MyCar {
        car_name: "Sonata".to_string(),
        thumbnail_url: None,
    }
}

fn domain(err: &ServiceError) -> &DomainError {
    err.as_domain().expect("expected a domain error")
}

// ============================================================================
// Ledger and counter
// ============================================================================

#[tokio::test]
async fn test_two_members_like_and_unlike() {
    let app = TestApp::start().await.unwrap();
    let author = app.seed_member().await.unwrap();
    let m = app.seed_member().await.unwrap();
    let n = app.seed_member().await.unwrap();
    let board = app.seed_board(&author, "Weekend drive", my_car()).await.unwrap();
    let likes = LikeService::new(&app.ctx);

    let r = likes.create_like(m.id, board.id).await.unwrap();
    assert_eq!(r, LikeResponse { count: 1, liked: true });

    let r = likes.create_like(n.id, board.id).await.unwrap();
    assert_eq!(r, LikeResponse { count: 2, liked: true });

    let r = likes.delete_like(m.id, board.id).await.unwrap();
    assert_eq!(r, LikeResponse { count: 1, liked: false });

    assert_eq!(
        likes.get_like_status(m.id, board.id).await.unwrap(),
        LikeResponse { count: 1, liked: false }
    );
    assert_eq!(
        likes.get_like_status(n.id, board.id).await.unwrap(),
        LikeResponse { count: 1, liked: true }
    );
    assert_eq!(app.store.like_count(board.id), Some(1));
    assert_eq!(app.store.ledger_count(board.id), 1);
}

#[tokio::test]
async fn test_duplicate_like_conflicts() {
    let app = TestApp::start().await.unwrap();
    let member = app.seed_member().await.unwrap();
    let board = app.seed_board(&member, "Own ride", my_car()).await.unwrap();
    let likes = LikeService::new(&app.ctx);

    likes.create_like(member.id, board.id).await.unwrap();
    let err = likes.create_like(member.id, board.id).await.unwrap_err();

    assert!(matches!(domain(&err), DomainError::LikeAlreadyExists));
    assert_eq!(err.status_code(), 409);
    assert_eq!(app.store.like_count(board.id), Some(1));
    assert_eq!(app.store.ledger_count(board.id), 1);
}

#[tokio::test]
async fn test_delete_without_like() {
    let app = TestApp::start().await.unwrap();
    let member = app.seed_member().await.unwrap();
    let board = app.seed_board(&member, "Own ride", my_car()).await.unwrap();

    let err = LikeService::new(&app.ctx)
        .delete_like(member.id, board.id)
        .await
        .unwrap_err();

    assert!(matches!(domain(&err), DomainError::NotExistLike));
    assert_eq!(err.status_code(), 404);
    assert_eq!(app.store.like_count(board.id), Some(0));
}

#[tokio::test]
async fn test_unknown_member_and_board() {
    let app = TestApp::start().await.unwrap();
    let member = app.seed_member().await.unwrap();
    let board = app.seed_board(&member, "Own ride", my_car()).await.unwrap();
    let likes = LikeService::new(&app.ctx);

    let err = likes.create_like(EntityId::generate(), board.id).await.unwrap_err();
    assert!(matches!(domain(&err), DomainError::MemberNotFound(_)));

    let err = likes.get_like_status(member.id, EntityId::generate()).await.unwrap_err();
    assert!(matches!(domain(&err), DomainError::BoardNotFound(_)));
}

// ============================================================================
// League eligibility
// ============================================================================

#[tokio::test]
async fn test_unallocated_member_cannot_like_league_board() {
    let app = TestApp::start().await.unwrap();
    let league = app.seed_league("Hyundai").await.unwrap();
    let author = app.seed_member().await.unwrap();
    let outsider = app.seed_member().await.unwrap();
    app.allocate(&league, &author).await.unwrap();
    let board = app
        .seed_board(&author, "Meetup", BoardKind::League { league_id: league.id })
        .await
        .unwrap();
    let likes = LikeService::new(&app.ctx);

    let err = likes.create_like(outsider.id, board.id).await.unwrap_err();
    assert!(matches!(domain(&err), DomainError::NotAllocatedLeague));
    assert_eq!(err.status_code(), 403);
    assert_eq!(app.store.ledger_count(board.id), 0);
    assert_eq!(app.store.like_count(board.id), Some(0));

    let err = likes.get_like_status(outsider.id, board.id).await.unwrap_err();
    assert!(matches!(domain(&err), DomainError::NotAllocatedLeague));

    // Allocated members engage normally
    let r = likes.create_like(author.id, board.id).await.unwrap();
    assert_eq!(r, LikeResponse { count: 1, liked: true });
}

#[tokio::test]
async fn test_unallocated_member_cannot_unlike_league_board() {
    let app = TestApp::start().await.unwrap();
    let league = app.seed_league("Kia").await.unwrap();
    let author = app.seed_member().await.unwrap();
    let outsider = app.seed_member().await.unwrap();
    app.allocate(&league, &author).await.unwrap();
    let board = app
        .seed_board(&author, "Track day", BoardKind::League { league_id: league.id })
        .await
        .unwrap();
    let likes = LikeService::new(&app.ctx);
    likes.create_like(author.id, board.id).await.unwrap();

    let err = likes.delete_like(outsider.id, board.id).await.unwrap_err();

    assert!(matches!(domain(&err), DomainError::NotAllocatedLeague));
    assert_eq!(err.status_code(), 403);
    assert_eq!(app.store.ledger_count(board.id), 1);
    assert_eq!(app.store.like_count(board.id), Some(1));
}

// ============================================================================
// Consistency violations
// ============================================================================

#[tokio::test]
async fn test_insert_not_visible_fails_without_counting() {
    let app = TestApp::start().await.unwrap();
    let member = app.seed_member().await.unwrap();
    let board = app.seed_board(&member, "Own ride", my_car()).await.unwrap();
    app.store.faults.drop_like_inserts.store(true, Ordering::SeqCst);

    let err = LikeService::new(&app.ctx)
        .create_like(member.id, board.id)
        .await
        .unwrap_err();

    assert!(matches!(domain(&err), DomainError::FailToCreateLike));
    assert_eq!(err.status_code(), 500);
    assert_eq!(app.store.like_count(board.id), Some(0));
    assert_eq!(app.locks.held_count(), 0);
}

#[tokio::test]
async fn test_delete_not_applied_fails_without_counting() {
    let app = TestApp::start().await.unwrap();
    let member = app.seed_member().await.unwrap();
    let board = app.seed_board(&member, "Own ride", my_car()).await.unwrap();
    let likes = LikeService::new(&app.ctx);
    likes.create_like(member.id, board.id).await.unwrap();

    app.store.faults.keep_deleted_likes.store(true, Ordering::SeqCst);
    let err = likes.delete_like(member.id, board.id).await.unwrap_err();

    assert!(matches!(domain(&err), DomainError::FailToDeleteLike));
    assert_eq!(app.store.like_count(board.id), Some(1));
}

// ============================================================================
// Lock timeout
// ============================================================================

fn quick_timeout() -> LockConfig {
    LockConfig {
        wait_timeout_ms: 50,
        ..test_lock_config()
    }
}

#[tokio::test]
async fn test_lock_timeout_withdraws_new_like() {
    let app = TestApp::start_with_lock_config(quick_timeout()).await.unwrap();
    let member = app.seed_member().await.unwrap();
    let board = app.seed_board(&member, "Own ride", my_car()).await.unwrap();
    let _held = app.hold_board_lock(board.id).await.unwrap();

    let err = LikeService::new(&app.ctx)
        .create_like(member.id, board.id)
        .await
        .unwrap_err();

    assert!(matches!(domain(&err), DomainError::LockTimeout { .. }));
    assert!(err.is_retryable());
    assert_eq!(err.status_code(), 503);
    assert_eq!(app.store.ledger_count(board.id), 0);
    assert_eq!(app.store.like_count(board.id), Some(0));
}

#[tokio::test]
async fn test_lock_timeout_restores_removed_like() {
    let app = TestApp::start_with_lock_config(quick_timeout()).await.unwrap();
    let member = app.seed_member().await.unwrap();
    let board = app.seed_board(&member, "Own ride", my_car()).await.unwrap();
    let likes = LikeService::new(&app.ctx);
    likes.create_like(member.id, board.id).await.unwrap();

    let _held = app.hold_board_lock(board.id).await.unwrap();
    let err = likes.delete_like(member.id, board.id).await.unwrap_err();

    assert!(err.is_retryable());
    assert_eq!(app.store.ledger_count(board.id), 1);
    assert_eq!(app.store.like_count(board.id), Some(1));
}

// ============================================================================
// Lock backend failure
// ============================================================================

#[tokio::test]
async fn test_lock_failure_withdraws_new_like() {
    let (app, flaky) = TestApp::start_with_flaky_locks().await.unwrap();
    let member = app.seed_member().await.unwrap();
    let board = app.seed_board(&member, "Own ride", my_car()).await.unwrap();
    flaky.fail_next(1);

    let err = LikeService::new(&app.ctx)
        .create_like(member.id, board.id)
        .await
        .unwrap_err();

    assert!(matches!(domain(&err), DomainError::CacheError(_)));
    assert!(!err.is_retryable());
    assert_eq!(err.status_code(), 500);
    assert_eq!(app.store.ledger_count(board.id), 0);
    assert_eq!(app.store.like_count(board.id), Some(0));
}

#[tokio::test]
async fn test_lock_failure_restores_removed_like() {
    let (app, flaky) = TestApp::start_with_flaky_locks().await.unwrap();
    let member = app.seed_member().await.unwrap();
    let board = app.seed_board(&member, "Own ride", my_car()).await.unwrap();
    let likes = LikeService::new(&app.ctx);
    likes.create_like(member.id, board.id).await.unwrap();

    flaky.fail_next(1);
    let err = likes.delete_like(member.id, board.id).await.unwrap_err();

    assert!(matches!(domain(&err), DomainError::CacheError(_)));
    assert_eq!(app.store.ledger_count(board.id), 1);
    assert_eq!(app.store.like_count(board.id), Some(1));
    assert!(likes.get_like_status(member.id, board.id).await.unwrap().liked);
    assert_eq!(app.locks.held_count(), 0);
}

#[tokio::test]
async fn test_relike_before_restore_is_counted_once() {
    let (app, flaky) = TestApp::start_with_flaky_locks().await.unwrap();
    let member = app.seed_member().await.unwrap();
    let board = app.seed_board(&member, "Own ride", my_car()).await.unwrap();
    let likes = LikeService::new(&app.ctx);
    likes.create_like(member.id, board.id).await.unwrap();

    // While the unlike is stuck on the lock, the member likes again and that like is counted
    let store = app.store.clone();
    let (member_id, board_id) = (member.id, board.id);
    flaky.on_failure(move || {
        store.put_like(Like::new(member_id, board_id));
        if let Some(mut stored) = store.board(board_id) {
            stored.increase_like_count();
            store.put_board(stored);
        }
    });
    flaky.fail_next(1);

    let err = likes.delete_like(member.id, board.id).await.unwrap_err();

    assert!(matches!(domain(&err), DomainError::CacheError(_)));
    assert_eq!(app.store.ledger_count(board.id), 1);
    assert_eq!(app.store.like_count(board.id), Some(1));
    assert_eq!(app.locks.held_count(), 0);
}
