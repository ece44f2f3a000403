//! # blur-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `blur-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use blur_db::pool::{create_pool, PoolConfig};
//! use blur_db::repositories::PgBoardRepository;
//! use blur_core::traits::BoardRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PoolConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     blur_db::run_migrations(&pool).await?;
//!     let board_repo = PgBoardRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, PgPool, PoolConfig};
pub use repositories::{
    PgBoardRepository, PgChannelRepository, PgLeagueMemberRepository, PgLeagueRepository,
    PgLikeRepository, PgMemberRepository, PgMentionRepository,
};
