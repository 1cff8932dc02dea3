//! Pure data structures owned and passed around by the roles.

pub mod data;

pub use data::*;
