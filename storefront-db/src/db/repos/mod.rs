//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Borrows the shared pool, never owns it
//! - INSERT/DELETE use RETURNING so callers get the persisted rows
//! - List operations are single bulk queries; per-row resolution is opt-in

pub mod products;
pub mod users;
pub mod reviews;
pub mod carts;

pub use products::ProductRepo;
pub use users::UserRepo;
pub use reviews::ReviewRepo;
pub use carts::CartRepo;
