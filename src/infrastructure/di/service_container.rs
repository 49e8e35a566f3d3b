//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::{
    ClusterService, ConsumerGroupService, SchemaService, SubscriptionService, TopicService,
};
use crate::config::Settings;
use crate::infrastructure::http::HttpApiClient;
use crate::infrastructure::traits::ApiClient;
use crate::infrastructure::InfraResult;

/// Container holding the one API client every service shares.
pub struct ServiceContainer {
    /// Management API transport
    pub api: Arc<dyn ApiClient>,
}

impl ServiceContainer {
    /// Create a new service container with the HTTP transport.
    pub fn new(settings: &Settings) -> InfraResult<Self> {
        let api = Arc::new(HttpApiClient::new(settings)?);
        Ok(Self::with_deps(api))
    }

    /// Create a service container with a custom transport (for testing).
    pub fn with_deps(api: Arc<dyn ApiClient>) -> Self {
        Self { api }
    }

    pub fn clusters(&self) -> ClusterService {
        ClusterService::new(Arc::clone(&self.api))
    }

    pub fn topics(&self) -> TopicService {
        TopicService::new(Arc::clone(&self.api))
    }

    pub fn subscriptions(&self) -> SubscriptionService {
        SubscriptionService::new(Arc::clone(&self.api))
    }

    pub fn schemas(&self) -> SchemaService {
        SchemaService::new(Arc::clone(&self.api))
    }

    pub fn consumer_groups(&self) -> ConsumerGroupService {
        ConsumerGroupService::new(Arc::clone(&self.api))
    }
}
