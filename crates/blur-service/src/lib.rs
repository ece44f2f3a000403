//! # blur-service
//!
//! Application layer containing business logic, services, and DTOs.
//!
//! - [`LikeService`] keeps the like ledger and each board's aggregate counter in step
//! - [`BoardService`] creates typed boards through the factory registry and serves reads

pub mod dto;
pub mod services;

pub use services::{
    BoardFactory, BoardFactoryRegistry, BoardFactoryRegistryBuilder, BoardService, CounterGuard,
    LikeService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
