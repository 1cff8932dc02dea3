//! Orchestration and lifecycle management.
//!
//! This module contains the infrastructure for running the demonstration:
//!
//! - **Role wiring**: Creating the roles around one shared [`Journal`](crate::framework::Journal)
//! - **Run sequencing**: The two production runs, each in its own span
//! - **Teardown**: Dropping roles in order so claimed resources die last
//! - **Observability setup**: Initializing tracing and logging
//!
//! # Main Components
//!
//! - [`OwnershipDemo`] - Owns the producer and the roles it drives
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod demo;
pub mod tracing;

pub use demo::*;
pub use self::tracing::*;
