//! Domain entities: response records and validated command inputs
//!
//! Response records mirror the management API's JSON. Fields the API may omit
//! are optional so a sparse record still renders.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::validation::{ClusterId, KeyType, PartitionSelection, Role, SeekPosition};

/// Records that are listed in `name` order.
pub trait Named {
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub name: String,
    #[serde(default)]
    pub region_name: Option<String>,
    #[serde(default)]
    pub tags: Option<Value>,
}

/// Preset defining the defaults of a topic category (state, ledger, event).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicConfigType {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub partitions: Option<i64>,
    #[serde(default)]
    pub replicas: Option<i64>,
    #[serde(default)]
    pub cleanup_policy: Option<String>,
    #[serde(default)]
    pub retention_ms: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    #[serde(default)]
    pub cluster: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    /// Name of the topic config type
    #[serde(default)]
    pub config: Option<String>,
    #[serde(default)]
    pub partitions: Option<i64>,
    #[serde(default)]
    pub replicas: Option<i64>,
    #[serde(default)]
    pub retention_ms: Option<i64>,
    #[serde(default)]
    pub cleanup_policy: Option<String>,
    #[serde(default)]
    pub key_mapping: Option<Value>,
    #[serde(default)]
    pub schemas: Option<Value>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
}

/// Binding of an application to a topic (an ACL).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(default, alias = "topic_acl")]
    pub id: Option<String>,
    #[serde(default)]
    pub app_name: Option<String>,
    #[serde(default)]
    pub space_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub consumer_group_name: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
}

impl Subscription {
    /// `<app>-<space>`, the way apps are addressed on the platform.
    pub fn app_display(&self) -> String {
        match (&self.app_name, &self.space_name) {
            (Some(app), Some(space)) => format!("{app}-{space}"),
            (Some(app), None) => app.clone(),
            (None, Some(space)) => format!("-{space}"),
            (None, None) => String::new(),
        }
    }
}

/// Subscription as listed from the application side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSubscription {
    #[serde(default, alias = "topic")]
    pub topic_name: Option<String>,
    #[serde(default)]
    pub cluster_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub consumer_group_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumerGroup {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumerGroupOffset {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub partition: Option<i64>,
    #[serde(default)]
    pub current_offset: Option<i64>,
    #[serde(default)]
    pub log_end_offset: Option<i64>,
    #[serde(default)]
    pub lag: Option<i64>,
    #[serde(default)]
    pub consumer_id: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumerGroupMember {
    #[serde(default)]
    pub consumer_id: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
    /// Number of partitions assigned to the member
    #[serde(default)]
    pub partitions: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndOffset {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub partition: Option<i64>,
    #[serde(default)]
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewMessage {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub partition: Option<i64>,
    #[serde(default)]
    pub offset: Option<i64>,
    #[serde(default)]
    pub schema_name: Option<String>,
    #[serde(default)]
    pub key: Option<Value>,
    /// JSON-encoded payload (usually a string holding JSON)
    #[serde(default)]
    pub value: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicPreview {
    #[serde(default)]
    pub end_offsets: Vec<EndOffset>,
    #[serde(default)]
    pub preview_messages: Vec<PreviewMessage>,
}

impl Named for Cluster {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for TopicConfigType {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Topic {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for ConsumerGroup {
    fn name(&self) -> &str {
        &self.name
    }
}

// ============================================================
// VALIDATED COMMAND INPUTS
// ============================================================

/// Topic to create or recreate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTopic {
    pub cluster: ClusterId,
    /// Lower-cased topic name
    pub name: String,
    /// Topic config type (state, ledger, event)
    pub config: String,
    pub organization: String,
    pub partitions: Option<u32>,
    pub retention_ms: Option<i64>,
    pub description: Option<String>,
}

/// Key type (and avro schema) for a topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMapping {
    pub cluster: ClusterId,
    pub topic: String,
    pub keytype: KeyType,
    /// Present only for avro keys
    pub schema: Option<String>,
}

/// Avro schema allowed as a value type for a topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueMapping {
    pub cluster: ClusterId,
    pub topic: String,
    pub schema: String,
}

/// Subscribe or unsubscribe an app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionChange {
    pub cluster: ClusterId,
    pub topic: String,
    pub app: String,
    pub role: Role,
    pub consumer_group_name: Option<String>,
}

/// Consumer-group seek.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeekOrder {
    pub cluster: ClusterId,
    pub consumer_group: String,
    pub topic: String,
    pub partitions: PartitionSelection,
    pub position: SeekPosition,
}
