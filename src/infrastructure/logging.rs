//! Tracing setup for the command-line tool.
//!
//! Enabled by `GCLINT_LOG` (falling back to `RUST_LOG`), using the usual
//! filter syntax, e.g. `GCLINT_LOG=gclint=debug`. Output goes to stderr so
//! stdout only carries diagnostics.

use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let filter = match std::env::var("GCLINT_LOG") {
        Ok(val) => EnvFilter::builder().parse_lossy(val),
        Err(_) if std::env::var("RUST_LOG").is_ok() => EnvFilter::from_default_env(),
        Err(_) => return,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
