//! Logging initialization
//!
//! Provides a single initialization point for the tracing subscriber.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Should be called once at application startup. Repeated calls are
/// no-ops. The filter defaults to `constructpro=debug` (Development) or
/// `constructpro=info` (Production) and can be overridden via
/// `RUST_LOG`.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("constructpro=debug")),
                )
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("constructpro=info")),
                )
                .init();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init(Profile::Development);
        // Second call must not panic with "a global default trace dispatcher
        // has already been set".
        init(Profile::Production);
    }
}
