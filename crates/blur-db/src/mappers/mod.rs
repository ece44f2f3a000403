//! Entity to model mappers
//!
//! This module provides conversions between domain entities (blur-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `BoardInsert`: Prepare board data for database insertion

mod board;
mod channel;
mod league;
mod like;
mod member;
mod mention;

pub use board::BoardInsert;
