//! Diagnostic tracing for the patrol binary.
//!
//! Reads `RUST_LOG`; defaults to `warn`.  Output goes to stderr so stdout
//! carries only the result.
//!
//! ```bash
//! RUST_LOG=patrol_sim=trace patrol data/winding.txt
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
