pub mod dump;
pub mod seed;
