//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! Verbosity is controlled with the `RUST_LOG` environment variable. When it is
//! unset, `info` is used so the narration of each run is visible.
//!
//! ```bash
//! # Narration only (default)
//! cargo run
//!
//! # Every journal event with its structured payload
//! RUST_LOG=debug cargo run
//!
//! # Slot fills as well
//! RUST_LOG=trace cargo run
//! ```
//!
//! ## Run Trace Example
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO first_run: producing some data... role=PRODUCER
//! INFO first_run: Data::new() data_id=data_1
//! INFO first_run: lending the data... role=PRODUCER
//! INFO first_run: got the data role=BORROWER datum="Hello, World!"
//! INFO first_run: data should be mine again, checking... role=PRODUCER occupied=true
//! INFO first_run: got the data role=CONSUMER datum="Hello, World!"
//! INFO first_run: Data::drop() data_id=data_1
//! INFO first_run: slot should be empty now, checking... role=PRODUCER empty=true
//! ```
//!
//! The span prefix (`first_run:`, `second_run:`) tells the two runs apart.
use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Roles are already named in the `role` field
        .compact()
        .init();
}
