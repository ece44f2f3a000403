//! Integration test utilities for the blur services
//!
//! This crate provides an in-memory store, fixtures and helpers for running
//! the like and board services end to end.

pub mod fixtures;

pub use fixtures::*;
pub use helpers::*;
pub use locks::FlakyLocks;
pub use memory::{Faults, MemoryStore};
