//! Avro schema listing service

use std::sync::Arc;

use tracing::instrument;

use crate::application::requests;
use crate::application::services::fetch;
use crate::application::ApplicationResult;
use crate::domain::ClusterId;
use crate::infrastructure::traits::ApiClient;

pub struct SchemaService {
    api: Arc<dyn ApiClient>,
}

impl SchemaService {
    pub fn new(api: Arc<dyn ApiClient>) -> Self {
        Self { api }
    }

    /// Names of the Avro schemas registered for a cluster.
    #[instrument(skip(self), fields(cluster = %cluster))]
    pub fn list(&self, cluster: &ClusterId) -> ApplicationResult<Vec<String>> {
        fetch(self.api.as_ref(), &requests::list_schemas(cluster))
    }
}
