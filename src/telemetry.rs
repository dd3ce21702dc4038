//! Tracing setup for embedding applications.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes the global tracing subscriber.
///
/// Honors `RUST_LOG` when set; otherwise defaults to info-level output
/// for this crate. Call once at startup; a second call panics, so tests
/// should not use it.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lexboard=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
