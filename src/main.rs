//! beanprobe CLI entry point

use tracing_subscriber::EnvFilter;

/// Logs go to stderr so `scan --format json` stays machine-readable on stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn main() {
    init_tracing();
    beanprobe::cli::run();
}
