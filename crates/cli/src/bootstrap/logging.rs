use dnstamper_domain::Config;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// RUST_LOG wins over the configured level, e.g. `RUST_LOG=dnstamper_application=debug`.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
