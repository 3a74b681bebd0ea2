//! Row types and insert/update payloads
//!
//! Structs mirror the table columns one-to-one. Constraint enforcement is
//! left to the database; the only client-side parsing is for seed input
//! such as birthdays.

pub mod validation;
pub mod product;
pub mod user;
pub mod cart;
pub mod review;

pub use validation::ValidationError;
pub use product::{NewProduct, Product, ProductPatch};
pub use user::{parse_birthday, NewUser, User};
pub use cart::{Cart, NewCart};
pub use review::{NewReview, Review};
