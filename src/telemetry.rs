use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs the global fmt subscriber. `RUST_LOG` wins over `config.log_level`.
/// Calling this again once a subscriber is set does nothing.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_ok() {
        tracing::debug!("Tracing initialised at level {}", config.log_level);
    }
}
