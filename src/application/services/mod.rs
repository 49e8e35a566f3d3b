//! Application services
//!
//! One service per API resource. Services depend on the `ApiClient` boundary
//! trait but are themselves concrete structs, not traits.

mod clusters;
mod consumer_groups;
mod schemas;
mod subscriptions;
mod topics;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::application::error_ext::JsonResultExt;
use crate::application::ApplicationResult;
use crate::infrastructure::traits::{ApiClient, ApiRequest};

pub use clusters::ClusterService;
pub use consumer_groups::ConsumerGroupService;
pub use schemas::SchemaService;
pub use subscriptions::{SubscriptionService, Subscriptions};
pub use topics::TopicService;

/// Perform a read and decode the response body into `T`.
pub(crate) fn fetch<T: DeserializeOwned>(
    api: &dyn ApiClient,
    request: &ApiRequest,
) -> ApplicationResult<T> {
    let value = api.execute(request)?;
    serde_json::from_value(value).with_response_context(request)
}

/// Perform a mutation; the response body carries nothing to display.
pub(crate) fn send(api: &dyn ApiClient, request: &ApiRequest) -> ApplicationResult<()> {
    let value = api.execute(request)?;
    debug!("{request}: {value}");
    Ok(())
}
