//! Zipkin Lens - Main Entry Point
//!
//! Serves the Lens shell through dioxus::serve() on the server, and mounts
//! the same App in the browser or a desktop window.

use zipkin_lens::app::App;

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing(config: &zipkin_lens::config::LensConfig) -> anyhow::Result<()> {
    use anyhow::Context;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("invalid log filter {:?}", config.log_filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(anyhow::Error::msg)?;
    Ok(())
}

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    let config = zipkin_lens::config::LensConfig::from_env();

    // Initialize tracing BEFORE dioxus::serve
    if let Err(e) = init_tracing(&config) {
        eprintln!("Failed to initialize logging: {e:#}");
    }

    tracing::info!(
        legacy_cookie = %config.legacy_cookie,
        "Starting Zipkin Lens..."
    );

    dioxus::serve(|| async move {
        let router = dioxus::server::router(App);
        Ok(router)
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] Zipkin Lens - WASM initialized!".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    let config = zipkin_lens::config::LensConfig::from_env();
    if let Err(e) = init_tracing(&config) {
        eprintln!("Failed to initialize logging: {e:#}");
    }
    dioxus::launch(App);
}
