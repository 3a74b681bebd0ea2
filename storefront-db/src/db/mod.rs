//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - One pool per process, borrowed by every repository
//! - Every value travels as a bound parameter
//! - Rely on DB constraints (NOT NULL, UNIQUE, CHECK, FK) - no pre-checks
//! - Single statements only, no multi-step transactions

pub mod pool;
pub mod repos;

pub use pool::connect;
pub use repos::*;
