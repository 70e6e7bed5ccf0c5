/// Initializes the tracing/logging infrastructure for the application.
///
/// This sets up structured logging using the `tracing` crate with:
/// - **Environment-based filtering**: Controlled via `RUST_LOG`, defaulting to `info`
/// - **Compact formatting**: Spans inline (e.g. `submit:create`), no module paths
///
/// # Environment Variables
///
/// - `RUST_LOG=info` - Saved/deleted products and failures
/// - `RUST_LOG=debug` - Also every request, response status and payload
/// - `RUST_LOG=product_catalog::clients=debug` - Debug only for the transport
///
/// # Example
///
/// ```ignore
/// setup_tracing();
/// tracing::info!("Application started");
/// ```
pub fn setup_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // A subscriber installed by the host wins.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
