#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Ownership Recipe
//!
//! > **A Recipe for Exclusive-Ownership Transfer in Rust.**
//!
//! This crate walks one resource through three roles to show what happens to
//! the original holder once ownership has been handed away.
//!
//! ## 🚀 Core Concepts
//!
//! ### Lending vs. Giving
//! The [`Producer`](producer::Producer) *lends* its slot to the
//! [`Borrower`](borrower::Borrower) as `&mut Slot<Data>`. An honest borrower reads
//! and returns. A claiming borrower moves the value out, and the producer's slot
//! is left empty. The [`Consumer`](consumer::Consumer) is then *given* the value
//! by move, and it is destroyed when `consume` returns.
//!
//! ### The Occupancy Check
//! After lending, the producer must ask [`Slot::is_occupied`](framework::Slot::is_occupied)
//! before acting. Handing an empty slot to the consumer is the one hazard this
//! crate guards against. In Rust the guard is a `match` on `Option`, and the
//! type system makes the unchecked path impossible to write.
//!
//! ### Observable Lifetimes
//! Every construction, report, claim and destruction is recorded in a
//! [`Journal`](framework::Journal), so tests can assert the exact order of
//! events and that each resource is destroyed exactly once.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Role**: The slot, the role traits, the journal and the error type.
//! - **Key items**: [`Slot`](framework::Slot), [`Borrows`](framework::Borrows), [`Consumes`](framework::Consumes).
//!
//! ### 2. The Resource ([`model`])
//! - **Key items**: [`Data`](model::Data), [`DataId`](model::DataId).
//!
//! ### 3. The Roles ([`producer`], [`borrower`], [`consumer`])
//! - **Role**: Concrete implementations of the role traits, plus the producer's state machine.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! - **Key items**: [`OwnershipDemo`](lifecycle::OwnershipDemo), [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! cargo run
//! RUST_LOG=debug cargo run
//! cargo test
//! ```

pub mod borrower;
pub mod consumer;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod producer;
