//! Core types and trait definitions for the joiners service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! Validation and the store gateway live here so every transport and every
//! backend share the same rules.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod catalog;
pub mod error;
pub mod gateway;
pub mod joiner;
pub mod page;
pub mod store;
pub mod validate;

pub use error::{Error, Result};
pub use gateway::JoinerGateway;
