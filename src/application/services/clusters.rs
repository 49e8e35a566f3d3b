//! Cluster listing service

use std::sync::Arc;

use tracing::instrument;

use crate::application::requests;
use crate::application::services::fetch;
use crate::application::ApplicationResult;
use crate::domain::Cluster;
use crate::infrastructure::traits::ApiClient;

/// Read-only access to the clusters known to the platform.
pub struct ClusterService {
    api: Arc<dyn ApiClient>,
}

impl ClusterService {
    pub fn new(api: Arc<dyn ApiClient>) -> Self {
        Self { api }
    }

    #[instrument(skip(self))]
    pub fn list(&self) -> ApplicationResult<Vec<Cluster>> {
        fetch(self.api.as_ref(), &requests::list_clusters())
    }
}
