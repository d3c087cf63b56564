//! Model to entity mappers
//!
//! Conversions from database rows (`*Model`) into `jobs-core` entities.

mod company;
mod job;
mod user;
