//! Topic service
//!
//! Topic listing, detail and preview, plus the mutating operations:
//! create, recreate, delete and key/value schema mappings.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::requests;
use crate::application::services::{fetch, send};
use crate::application::ApplicationResult;
use crate::domain::{
    ClusterId, KeyMapping, NewTopic, Topic, TopicConfigType, TopicPreview, ValueMapping,
};
use crate::infrastructure::traits::ApiClient;

pub struct TopicService {
    api: Arc<dyn ApiClient>,
}

impl TopicService {
    pub fn new(api: Arc<dyn ApiClient>) -> Self {
        Self { api }
    }

    /// Topic config types (state, ledger, event) available in a cluster.
    #[instrument(skip(self), fields(cluster = %cluster))]
    pub fn types(&self, cluster: &ClusterId) -> ApplicationResult<Vec<TopicConfigType>> {
        fetch(self.api.as_ref(), &requests::list_topic_types(cluster))
    }

    #[instrument(skip(self), fields(cluster = %cluster))]
    pub fn list(&self, cluster: &ClusterId) -> ApplicationResult<Vec<Topic>> {
        fetch(self.api.as_ref(), &requests::list_topics(cluster))
    }

    #[instrument(skip(self), fields(cluster = %cluster))]
    pub fn get(&self, cluster: &ClusterId, topic: &str) -> ApplicationResult<Topic> {
        fetch(self.api.as_ref(), &requests::get_topic(cluster, topic))
    }

    #[instrument(skip(self), fields(cluster = %cluster))]
    pub fn preview(&self, cluster: &ClusterId, topic: &str) -> ApplicationResult<TopicPreview> {
        let preview: TopicPreview =
            fetch(self.api.as_ref(), &requests::preview_topic(cluster, topic))?;
        debug!(
            "preview: {} end offsets, {} messages",
            preview.end_offsets.len(),
            preview.preview_messages.len()
        );
        Ok(preview)
    }

    #[instrument(skip(self), fields(cluster = %topic.cluster, topic = %topic.name))]
    pub fn create(&self, topic: &NewTopic) -> ApplicationResult<()> {
        send(self.api.as_ref(), &requests::create_topic(topic)?)
    }

    #[instrument(skip(self), fields(cluster = %topic.cluster, topic = %topic.name))]
    pub fn recreate(&self, topic: &NewTopic) -> ApplicationResult<()> {
        send(self.api.as_ref(), &requests::recreate_topic(topic)?)
    }

    #[instrument(skip(self), fields(cluster = %cluster))]
    pub fn delete(&self, cluster: &ClusterId, topic: &str) -> ApplicationResult<()> {
        send(self.api.as_ref(), &requests::delete_topic(cluster, topic))
    }

    #[instrument(skip(self), fields(topic = %mapping.topic))]
    pub fn assign_key(&self, mapping: &KeyMapping) -> ApplicationResult<()> {
        send(self.api.as_ref(), &requests::assign_key_mapping(mapping)?)
    }

    #[instrument(skip(self), fields(topic = %mapping.topic))]
    pub fn assign_value(&self, mapping: &ValueMapping) -> ApplicationResult<()> {
        send(self.api.as_ref(), &requests::assign_value_mapping(mapping)?)
    }
}
