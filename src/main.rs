//! Runs the two production runs: an honest borrower, then a claiming one.

use ownership_recipe::lifecycle::{setup_tracing, OwnershipDemo};
use tracing::{info, warn};

fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting ownership demo");

    let mut demo = OwnershipDemo::new();
    let [first, second] = demo.run().map_err(|e| e.to_string())?;

    info!(outcome = ?first, "First run finished");
    info!(outcome = ?second, "Second run finished");

    let still_held = demo.producer().borrower().hoard().len();
    if still_held > 0 {
        warn!(still_held, "Borrower still holds claimed data until teardown");
    }

    demo.shutdown();
    info!("Application completed successfully");
    Ok(())
}
