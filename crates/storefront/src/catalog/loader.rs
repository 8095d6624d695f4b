//! Background task that performs the one-time catalog fetch.

use tokio::task::JoinHandle;
use tracing::{error, info};

use super::{Catalog, CatalogClient};

/// Spawn the startup catalog fetch.
///
/// Until it finishes, `catalog` stays in `Loading`. On success the products
/// are swapped in; on failure the catalog moves to `Failed` so the storefront
/// can say so instead of loading forever.
pub fn load_async(catalog: Catalog, client: CatalogClient) -> JoinHandle<()> {
    info!(endpoint = %client.endpoint(), "Spawning catalog load task");
    tokio::spawn(async move {
        match client.fetch_products().await {
            Ok(products) => {
                info!(count = products.len(), "Catalog loaded");
                catalog.set_ready(products);
            }
            Err(e) => {
                error!(error = %e, "Failed to load catalog");
                catalog.set_failed(e.to_string());
            }
        }
    })
}
