//! Request builders
//!
//! Pure mapping from validated inputs to `ApiRequest` descriptors. Cluster and
//! topic segments arrive lower-cased from validation. Every dynamic segment is
//! percent-encoded, so `/`, `?` and `#` cannot change the shape of the path.

use std::borrow::Cow;

use serde::Serialize;

use crate::application::error_ext::JsonResultExt;
use crate::application::ApplicationResult;
use crate::domain::{
    ClusterId, KeyMapping, NewTopic, PartitionSelection, SeekOrder, SubscriptionChange,
    ValueMapping,
};
use crate::infrastructure::traits::ApiRequest;

#[derive(Debug, Serialize)]
struct TopicBody<'a> {
    region: &'a str,
    name: &'a str,
    config: &'a str,
    organization: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    partitions: Option<u32>,
    #[serde(rename = "retentionms", skip_serializing_if = "Option::is_none")]
    retention_ms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct KeyMappingBody<'a> {
    topic: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    schema: Option<&'a str>,
    keytype: &'a str,
}

#[derive(Debug, Serialize)]
struct ValueMappingBody<'a> {
    topic: &'a str,
    schema: &'a str,
}

#[derive(Debug, Serialize)]
struct SubscribeBody<'a> {
    app: &'a str,
    role: &'a str,
    #[serde(rename = "consumerGroupName", skip_serializing_if = "Option::is_none")]
    consumer_group_name: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct SeekBody<'a> {
    topic: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    partitions: Option<&'a [u32]>,
    #[serde(rename = "allPartitions", skip_serializing_if = "Option::is_none")]
    all_partitions: Option<bool>,
    #[serde(rename = "seekTo")]
    seek_to: &'a str,
}

fn post<B: Serialize>(path: String, body: &B) -> ApplicationResult<ApiRequest> {
    let value = serde_json::to_value(body).with_encode_context(&path)?;
    Ok(ApiRequest::post(path, value))
}

/// One path segment, percent-encoded.
fn segment(raw: &str) -> Cow<'_, str> {
    urlencoding::encode(raw)
}

fn cluster_path(cluster: &ClusterId) -> String {
    format!("/clusters/{}", segment(&cluster.to_string()))
}

fn topic_path(cluster: &ClusterId, topic: &str) -> String {
    format!("{}/topics/{}", cluster_path(cluster), segment(topic))
}

fn consumer_group_path(cluster: &ClusterId, group: &str) -> String {
    format!("{}/consumer-groups/{}", cluster_path(cluster), segment(group))
}

pub fn list_clusters() -> ApiRequest {
    ApiRequest::get("/clusters")
}

pub fn list_topic_types(cluster: &ClusterId) -> ApiRequest {
    ApiRequest::get(format!("{}/configs", cluster_path(cluster)))
}

pub fn list_topics(cluster: &ClusterId) -> ApiRequest {
    ApiRequest::get(format!("{}/topics", cluster_path(cluster)))
}

pub fn get_topic(cluster: &ClusterId, topic: &str) -> ApiRequest {
    ApiRequest::get(topic_path(cluster, topic))
}

pub fn preview_topic(cluster: &ClusterId, topic: &str) -> ApiRequest {
    ApiRequest::get(format!("{}/preview", topic_path(cluster, topic)))
}

fn topic_body(topic: &NewTopic) -> TopicBody<'_> {
    TopicBody {
        region: &topic.cluster.region,
        name: &topic.name,
        config: &topic.config,
        organization: &topic.organization,
        partitions: topic.partitions,
        retention_ms: topic.retention_ms,
        description: topic.description.as_deref(),
    }
}

pub fn create_topic(topic: &NewTopic) -> ApplicationResult<ApiRequest> {
    post(
        format!("{}/topics", cluster_path(&topic.cluster)),
        &topic_body(topic),
    )
}

pub fn recreate_topic(topic: &NewTopic) -> ApplicationResult<ApiRequest> {
    post(
        format!("{}/topics/recreate", cluster_path(&topic.cluster)),
        &topic_body(topic),
    )
}

pub fn delete_topic(cluster: &ClusterId, topic: &str) -> ApiRequest {
    ApiRequest::delete(topic_path(cluster, topic))
}

pub fn assign_key_mapping(mapping: &KeyMapping) -> ApplicationResult<ApiRequest> {
    post(
        format!(
            "{}/key-schema-mapping",
            topic_path(&mapping.cluster, &mapping.topic)
        ),
        &KeyMappingBody {
            topic: &mapping.topic,
            schema: mapping.schema.as_deref(),
            keytype: mapping.keytype.as_str(),
        },
    )
}

pub fn assign_value_mapping(mapping: &ValueMapping) -> ApplicationResult<ApiRequest> {
    post(
        format!(
            "{}/value-schema-mapping",
            topic_path(&mapping.cluster, &mapping.topic)
        ),
        &ValueMappingBody {
            topic: &mapping.topic,
            schema: &mapping.schema,
        },
    )
}

pub fn subscribe(change: &SubscriptionChange) -> ApplicationResult<ApiRequest> {
    post(
        format!("{}/acls", topic_path(&change.cluster, &change.topic)),
        &SubscribeBody {
            app: &change.app,
            role: change.role.as_str(),
            consumer_group_name: change.consumer_group_name.as_deref(),
        },
    )
}

pub fn unsubscribe(change: &SubscriptionChange) -> ApiRequest {
    let mut path = format!(
        "{}/acls/{}/role/{}",
        topic_path(&change.cluster, &change.topic),
        segment(&change.app),
        change.role
    );
    if let Some(group) = &change.consumer_group_name {
        path.push_str(&format!("/consumers/{}", segment(group)));
    }
    ApiRequest::delete(path)
}

pub fn list_topic_subscriptions(cluster: &ClusterId, topic: &str) -> ApiRequest {
    ApiRequest::get(format!("{}/acls", topic_path(cluster, topic)))
}

pub fn list_app_subscriptions(app: &str) -> ApiRequest {
    ApiRequest::get(format!("/apps/{}/topic-acls", segment(app)))
}

pub fn list_schemas(cluster: &ClusterId) -> ApiRequest {
    ApiRequest::get(format!("{}/schemas", cluster_path(cluster)))
}

pub fn list_consumer_groups(cluster: &ClusterId) -> ApiRequest {
    ApiRequest::get(format!("{}/consumer-groups", cluster_path(cluster)))
}

pub fn consumer_group_offsets(cluster: &ClusterId, group: &str) -> ApiRequest {
    ApiRequest::get(format!("{}/offsets", consumer_group_path(cluster, group)))
}

pub fn consumer_group_members(cluster: &ClusterId, group: &str) -> ApiRequest {
    ApiRequest::get(format!("{}/members", consumer_group_path(cluster, group)))
}

pub fn seek_consumer_group(order: &SeekOrder) -> ApplicationResult<ApiRequest> {
    let (partitions, all_partitions) = match &order.partitions {
        PartitionSelection::Explicit(p) => (Some(p.as_slice()), None),
        PartitionSelection::All => (None, Some(true)),
    };
    post(
        format!(
            "{}/seek",
            consumer_group_path(&order.cluster, &order.consumer_group)
        ),
        &SeekBody {
            topic: &order.topic,
            partitions,
            all_partitions,
            seek_to: order.position.as_str(),
        },
    )
}
