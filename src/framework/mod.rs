//! Generic ownership framework.
//!
//! This module provides the building blocks the three roles are written against.
//!
//! # Main Components
//!
//! - [`Slot`] - Owning container with an occupancy query
//! - [`Borrows`] / [`Consumes`] - Role traits the [`Producer`](crate::producer::Producer) is generic over
//! - [`Journal`] - Ordered record of every observable event
//! - [`OwnershipError`] - The one hazard class: touching an empty slot
//!
//! # Testing
//!
//! See [`mock`] module for the expected-event builder.

pub mod core;
pub mod journal;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
pub use self::journal::*;
