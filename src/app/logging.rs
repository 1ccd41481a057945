use tracing_subscriber::EnvFilter;

fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Route `tracing` output through the test harness's captured writer.
///
/// `RUST_LOG` controls the level (default `warn`). Safe to call from every
/// suite; only the first call installs a subscriber.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_or("warn"))
        .with_test_writer()
        .try_init();
}

pub fn init_cli_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_or(default))
        .with_writer(std::io::stderr)
        .try_init();
}
