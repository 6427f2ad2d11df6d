//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - The pool is created once by the caller and passed in; no globals
//! - Every statement is parameterized (`$n` binds)
//! - One checkout per request; the guard returns it to the pool on drop
//! - Transactions for multi-step writes, explicit commit/rollback

pub mod pool;
pub mod repos;

pub use pool::{connect_options, create_pool, describe_target};
pub use repos::*;
