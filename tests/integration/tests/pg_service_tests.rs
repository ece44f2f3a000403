//! Service tests against PostgreSQL
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL
//!
//! Counter locks are local, so Redis is not needed.
//!
//! Run with: cargo test -p integration-tests --test pg_service_tests

use blur_core::entities::{Channel, League, LeagueMember, Member};
use blur_core::{BoardType, DomainError};
use blur_service::dto::{LikeResponse, Viewer};
use blur_service::{BoardService, LikeService, ServiceContext};
use integration_tests::{
    check_test_env, league_request, my_car_request, pg_test_config, unique_league_name,
    unique_suffix,
};

async fn connect() -> ServiceContext {
    let config = pg_test_config().expect("Failed to load test config");
    let ctx = ServiceContext::connect(&config)
        .await
        .expect("Failed to connect service context");

    for board_type in BoardType::ALL {
        let name = board_type.channel_name();
        if ctx.channel_repo().find_by_name(name).await.unwrap().is_none() {
            // Another test may have provisioned it in the meantime
            let _ = ctx.channel_repo().create(&Channel::for_board_type(board_type)).await;
        }
    }
    ctx
}

async fn member(ctx: &ServiceContext) -> Member {
    let suffix = unique_suffix();
    let member = Member::new(
        format!("pg-driver-{suffix}-{}", uuid::Uuid::new_v4().simple()),
        format!("pg-{suffix}-{}@example.com", uuid::Uuid::new_v4().simple()),
    );
    ctx.member_repo().create(&member).await.unwrap();
    member
}

async fn league(ctx: &ServiceContext, prefix: &str) -> League {
    let league = League::new(format!("{}-{}", unique_league_name(prefix), uuid::Uuid::new_v4().simple()));
    ctx.league_repo().create(&league).await.unwrap();
    league
}

#[tokio::test]
async fn test_create_board_and_like_round() {
    if !check_test_env() {
        return;
    }

    let ctx = connect().await;
    let author = member(&ctx).await;
    let fan = member(&ctx).await;
    let kia = league(&ctx, "Kia").await;
    let title = format!("pg ride {}", uuid::Uuid::new_v4().simple());

    let boards = BoardService::new(&ctx);
    boards
        .create_board(my_car_request(&title, &[kia.name.as_str()]), author.id)
        .await
        .unwrap();

    let listed = boards
        .find_boards(BoardType::MyCar, Some(&title), 10)
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    let board_id = blur_core::EntityId::parse(&listed[0].id).unwrap();

    let likes = LikeService::new(&ctx);
    assert_eq!(
        likes.create_like(fan.id, board_id).await.unwrap(),
        LikeResponse { count: 1, liked: true }
    );
    let err = likes.create_like(fan.id, board_id).await.unwrap_err();
    assert!(matches!(err.as_domain(), Some(DomainError::LikeAlreadyExists)));

    let detail = boards
        .find_board_detail(board_id, Viewer::Member(fan.id))
        .await
        .unwrap();
    assert!(detail.is_liked);
    assert_eq!(detail.like_count, 1);
    assert_eq!(detail.mentioned_leagues.len(), 1);
    assert_eq!(detail.mentioned_leagues[0].name, kia.name);

    assert_eq!(
        likes.delete_like(fan.id, board_id).await.unwrap(),
        LikeResponse { count: 0, liked: false }
    );
    assert_eq!(ctx.like_repo().count_by_board(board_id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_unknown_mention_rolls_back() {
    if !check_test_env() {
        return;
    }

    let ctx = connect().await;
    let author = member(&ctx).await;
    let known = league(&ctx, "LeagueA").await;
    let title = format!("pg orphan {}", uuid::Uuid::new_v4().simple());

    let err = BoardService::new(&ctx)
        .create_board(
            my_car_request(&title, &[known.name.as_str(), "Nonexistent-league"]),
            author.id,
        )
        .await
        .unwrap_err();
    assert!(matches!(err.as_domain(), Some(DomainError::NotExistLeague)));

    let listed = BoardService::new(&ctx)
        .find_boards(BoardType::MyCar, Some(&title), 10)
        .await
        .unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_league_board_likes_need_allocation() {
    if !check_test_env() {
        return;
    }

    let ctx = connect().await;
    let author = member(&ctx).await;
    let outsider = member(&ctx).await;
    let home = league(&ctx, "Genesis").await;
    ctx.league_member_repo()
        .allocate(&LeagueMember::new(home.id, author.id))
        .await
        .unwrap();
    let title = format!("pg league {}", uuid::Uuid::new_v4().simple());

    let boards = BoardService::new(&ctx);
    boards
        .create_board(league_request(home.id, &title), author.id)
        .await
        .unwrap();
    let listed = boards
        .find_boards(BoardType::League, Some(&title), 10)
        .await
        .unwrap();
    let board_id = blur_core::EntityId::parse(&listed[0].id).unwrap();

    let err = LikeService::new(&ctx)
        .create_like(outsider.id, board_id)
        .await
        .unwrap_err();
    assert!(matches!(err.as_domain(), Some(DomainError::NotAllocatedLeague)));
    assert_eq!(ctx.like_repo().count_by_board(board_id).await.unwrap(), 0);
}
