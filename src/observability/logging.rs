//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the `tracing` subscriber once per process
//! - Level from `RUST_LOG` when set, else from configuration
//! - Write to stderr; stdout is reserved for command output

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the filter: `RUST_LOG` wins over the configured level.
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(format!("halo_client={0},halo={0},halo_genesis={0}", default_level))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    })
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(default_level: &str) {
    let result = tracing_subscriber::registry()
        .with(env_filter(default_level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();

    if result.is_ok() {
        tracing::debug!(level = %default_level, "Logging initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        init("debug");
        init("info");
    }

    #[test]
    fn test_bad_level_falls_back() {
        // An unparsable directive must not panic.
        let _ = env_filter("not=a=level");
    }
}
