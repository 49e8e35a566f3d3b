//! Tests for the application services decoding API responses

mod common;

use serde_json::json;

use common::{container, MockApiClient};
use kafka_admin::application::services::Subscriptions;
use kafka_admin::application::ApplicationError;
use kafka_admin::domain::{ClusterId, SubscriptionLookup};

fn prod() -> ClusterId {
    ClusterId::parse("prod-us-seattle").unwrap()
}

#[test]
fn given_cluster_list_when_listing_then_decodes_records() {
    // Arrange
    let api = MockApiClient::new();
    api.respond(
        "/clusters",
        json!([
            {"name": "prod", "region_name": "us-seattle"},
            {"name": "nonprod", "region_name": "us-seattle", "tags": ["sandbox"]}
        ]),
    );
    let services = container(api);

    // Act
    let clusters = services.clusters().list().unwrap();

    // Assert
    assert_eq!(clusters.len(), 2);
    assert_eq!(clusters[0].name, "prod");
    assert_eq!(clusters[1].region_name.as_deref(), Some("us-seattle"));
    assert!(clusters[1].tags.is_some());
}

#[test]
fn given_preview_payload_when_previewing_then_decodes_offsets_and_messages() {
    let api = MockApiClient::new();
    api.respond(
        "/clusters/prod-us-seattle/topics/orders/preview",
        json!({
            "endOffsets": [
                {"topic": "orders", "partition": 0, "offset": 10},
                {"topic": "orders", "partition": 1, "offset": 12}
            ],
            "previewMessages": [
                {"topic": "orders", "partition": 1, "offset": 11, "schemaName": "order-v1", "key": "k1", "value": {"id": 7}}
            ]
        }),
    );
    let services = container(api);

    let preview = services.topics().preview(&prod(), "orders").unwrap();

    assert_eq!(preview.end_offsets.len(), 2);
    assert_eq!(preview.end_offsets[1].offset, Some(12));
    let message = &preview.preview_messages[0];
    assert_eq!(message.schema_name.as_deref(), Some("order-v1"));
    assert_eq!(message.value, Some(json!({"id": 7})));
}

#[test]
fn given_topic_acls_when_listing_by_topic_then_returns_topic_shape() {
    let api = MockApiClient::new();
    api.respond(
        "/clusters/prod-us-seattle/topics/orders/acls",
        json!([{"topic_acl": "acl-1", "app_name": "api", "space_name": "default", "role": "consumer", "consumer_group_name": "billing"}]),
    );
    let services = container(api);
    let lookup = SubscriptionLookup::from_args(Some("prod-us-seattle"), Some("orders"), None)
        .unwrap();

    let found = services.subscriptions().list(&lookup).unwrap();

    match found {
        Subscriptions::ByTopic(subscriptions) => {
            assert_eq!(subscriptions[0].id.as_deref(), Some("acl-1"));
            assert_eq!(subscriptions[0].app_display(), "api-default");
        }
        other => panic!("expected topic subscriptions, got {other:?}"),
    }
}

#[test]
fn given_app_acls_when_listing_by_app_then_returns_app_shape() {
    let api = MockApiClient::new();
    api.respond(
        "/apps/api-default/topic-acls",
        json!([{"topic": "orders", "cluster_name": "prod", "role": "producer"}]),
    );
    let services = container(api);
    let lookup = SubscriptionLookup::from_args(None, None, Some("api-default")).unwrap();

    let found = services.subscriptions().list(&lookup).unwrap();

    match found {
        Subscriptions::ByApp(subscriptions) => {
            assert_eq!(subscriptions[0].topic_name.as_deref(), Some("orders"));
            assert_eq!(subscriptions[0].role.as_deref(), Some("producer"));
        }
        other => panic!("expected app subscriptions, got {other:?}"),
    }
}

#[test]
fn given_schema_names_when_listing_then_returns_strings() {
    let api = MockApiClient::new();
    api.respond(
        "/clusters/prod-us-seattle/schemas",
        json!(["order-v1", "customer-v2"]),
    );
    let services = container(api);

    let schemas = services.schemas().list(&prod()).unwrap();

    assert_eq!(schemas, vec!["order-v1", "customer-v2"]);
}

#[test]
fn given_object_instead_of_list_when_listing_groups_then_invalid_response() {
    let api = MockApiClient::new();
    api.respond(
        "/clusters/prod-us-seattle/consumer-groups",
        json!({"name": "billing"}),
    );
    let services = container(api);

    let err = services.consumer_groups().list(&prod()).unwrap_err();

    assert!(matches!(err, ApplicationError::InvalidResponse { .. }));
}

#[test]
fn given_api_failure_when_fetching_topic_then_propagates_status() {
    let api = MockApiClient::new();
    api.fail("/clusters/prod-us-seattle/topics/missing", 404, "topic not found");
    let services = container(api);

    let err = services.topics().get(&prod(), "missing").unwrap_err();

    assert_eq!(err.to_string(), "404: topic not found");
}
