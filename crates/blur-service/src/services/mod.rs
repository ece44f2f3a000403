//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod board;
pub mod board_factory;
pub mod context;
pub mod counter_guard;
pub mod error;
pub mod like;

// Re-export all services for convenience
pub use board::BoardService;
pub use board_factory::{
    BoardFactory, BoardFactoryRegistry, BoardFactoryRegistryBuilder, DashcamBoardFactory,
    LeagueBoardFactory, MyCarBoardFactory,
};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use counter_guard::CounterGuard;
pub use error::{ServiceError, ServiceResult};
pub use like::LikeService;
