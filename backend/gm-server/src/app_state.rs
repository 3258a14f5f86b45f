use gm_config::RemoteConfig;
use gm_core::{Ingestor, UserSource, UserStore};

use std::sync::Arc;

/// Shared handler state: the local store and the ingestion procedure built
/// over it.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub ingestor: Arc<Ingestor>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn UserStore>,
        source: Arc<dyn UserSource>,
        remote: &RemoteConfig,
    ) -> Self {
        let ingestor = Ingestor::new(
            store.clone(),
            source,
            &remote.base_url,
            &remote.pagination_header,
        );

        Self {
            store,
            ingestor: Arc::new(ingestor),
        }
    }
}
