use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber used by the binaries.
///
/// `RUST_LOG` selects the filter; without it only warnings are shown, so
/// stdout carries nothing but the report.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
