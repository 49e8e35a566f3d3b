//! Consumer group service

use std::sync::Arc;

use tracing::instrument;

use crate::application::requests;
use crate::application::services::{fetch, send};
use crate::application::ApplicationResult;
use crate::domain::{ClusterId, ConsumerGroup, ConsumerGroupMember, ConsumerGroupOffset, SeekOrder};
use crate::infrastructure::traits::ApiClient;

pub struct ConsumerGroupService {
    api: Arc<dyn ApiClient>,
}

impl ConsumerGroupService {
    pub fn new(api: Arc<dyn ApiClient>) -> Self {
        Self { api }
    }

    #[instrument(skip(self), fields(cluster = %cluster))]
    pub fn list(&self, cluster: &ClusterId) -> ApplicationResult<Vec<ConsumerGroup>> {
        fetch(self.api.as_ref(), &requests::list_consumer_groups(cluster))
    }

    #[instrument(skip(self), fields(cluster = %cluster))]
    pub fn offsets(
        &self,
        cluster: &ClusterId,
        group: &str,
    ) -> ApplicationResult<Vec<ConsumerGroupOffset>> {
        fetch(
            self.api.as_ref(),
            &requests::consumer_group_offsets(cluster, group),
        )
    }

    #[instrument(skip(self), fields(cluster = %cluster))]
    pub fn members(
        &self,
        cluster: &ClusterId,
        group: &str,
    ) -> ApplicationResult<Vec<ConsumerGroupMember>> {
        fetch(
            self.api.as_ref(),
            &requests::consumer_group_members(cluster, group),
        )
    }

    /// Reposition the group's committed offsets on a topic.
    #[instrument(skip(self), fields(group = %order.consumer_group, topic = %order.topic))]
    pub fn seek(&self, order: &SeekOrder) -> ApplicationResult<()> {
        send(self.api.as_ref(), &requests::seek_consumer_group(order)?)
    }
}
