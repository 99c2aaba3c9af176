/// Tracing setup for the server binary and the browser bundle

/// Installs the fmt subscriber. `RUST_LOG` overrides [`DEFAULT_LOG_FILTER`](crate::config::DEFAULT_LOG_FILTER).
#[cfg(feature = "ssr")]
pub fn init_server() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_level(true)
            .compact())
        .init();
}

/// Routes `tracing` events to the browser console.
#[cfg(feature = "hydrate")]
pub fn init_browser() {
    tracing_wasm::set_as_global_default();
}
