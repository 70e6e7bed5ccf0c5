//! Demo entry point: fetch the catalog once and log what came back.
//!
//! ```bash
//! PRODUCT_API_BASE_URL=http://localhost:8080 RUST_LOG=info cargo run
//! ```

use product_catalog::clients::HttpProductClient;
use product_catalog::runtime::{setup_tracing, ClientConfig};
use product_catalog::store::ProductStore;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = ClientConfig::from_env();
    info!(base_url = %config.base_url, "Starting catalog client");

    let api = HttpProductClient::new(&config).map_err(|e| e.to_string())?;
    let store = ProductStore::new(api);

    let span = tracing::info_span!("initial_load");
    let result = async {
        info!("Loading products");
        store.load().await
    }
    .instrument(span)
    .await;

    let state = store.snapshot().await;
    if let Err(e) = result {
        error!(error = %e, "Loading products failed");
        return Err(e.to_string());
    }

    info!(count = state.products.len(), "Products loaded");
    for product in &state.products {
        info!(
            id = ?product.id,
            name = %product.name,
            price = product.price,
            stock = product.stock,
            "Product"
        );
    }

    Ok(())
}
