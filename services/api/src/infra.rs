use leasehold::config::StoreConfig;
use leasehold::seed::load_sample_data;
use leasehold::store::{MemoryStore, RepositoryError};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Builds the process-wide store, seeding it when configured to.
pub(crate) fn build_store(config: &StoreConfig) -> Result<Arc<MemoryStore>, RepositoryError> {
    let store = MemoryStore::new();
    if config.seed_sample_data {
        load_sample_data(&store)?;
    } else {
        info!("starting with an empty store");
    }
    Ok(Arc::new(store))
}
