//! Subscription (topic ACL) service

use std::sync::Arc;

use tracing::instrument;

use crate::application::requests;
use crate::application::services::{fetch, send};
use crate::application::ApplicationResult;
use crate::domain::{AppSubscription, Subscription, SubscriptionChange, SubscriptionLookup};
use crate::infrastructure::traits::ApiClient;

/// Subscriptions found by a lookup; the shape depends on the search key.
#[derive(Debug, Clone, PartialEq)]
pub enum Subscriptions {
    ByTopic(Vec<Subscription>),
    ByApp(Vec<AppSubscription>),
}

pub struct SubscriptionService {
    api: Arc<dyn ApiClient>,
}

impl SubscriptionService {
    pub fn new(api: Arc<dyn ApiClient>) -> Self {
        Self { api }
    }

    #[instrument(skip(self))]
    pub fn list(&self, lookup: &SubscriptionLookup) -> ApplicationResult<Subscriptions> {
        match lookup {
            SubscriptionLookup::ByTopic { cluster, topic } => Ok(Subscriptions::ByTopic(fetch(
                self.api.as_ref(),
                &requests::list_topic_subscriptions(cluster, topic),
            )?)),
            SubscriptionLookup::ByApp { app } => Ok(Subscriptions::ByApp(fetch(
                self.api.as_ref(),
                &requests::list_app_subscriptions(app),
            )?)),
        }
    }

    #[instrument(skip(self), fields(app = %change.app, topic = %change.topic))]
    pub fn subscribe(&self, change: &SubscriptionChange) -> ApplicationResult<()> {
        send(self.api.as_ref(), &requests::subscribe(change)?)
    }

    #[instrument(skip(self), fields(app = %change.app, topic = %change.topic))]
    pub fn unsubscribe(&self, change: &SubscriptionChange) -> ApplicationResult<()> {
        send(self.api.as_ref(), &requests::unsubscribe(change))
    }
}
