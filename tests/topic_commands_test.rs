//! Tests for the kafka:topics:* commands, end to end against a mock API

mod common;

use serde_json::json;

use common::{run_args, MockApiClient};
use kafka_admin::application::ApplicationError;
use kafka_admin::cli::CliError;
use kafka_admin::domain::DomainError;
use kafka_admin::exitcode;
use kafka_admin::infrastructure::traits::{ApiError, Method};
use kafka_admin::infrastructure::InfraError;

fn domain_error(err: CliError) -> DomainError {
    match err {
        CliError::Infra(InfraError::Application(ApplicationError::Domain(e))) => e,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn given_create_args_when_running_then_posts_topic_to_cluster() {
    // Arrange
    let api = MockApiClient::new();

    // Act
    run_args(
        &api,
        &[
            "kafka:topics:create",
            "mytopic",
            "-c",
            "prod-us-seattle",
            "-t",
            "event",
            "-o",
            "payments",
        ],
    )
    .unwrap();

    // Assert
    let requests = api.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].path, "/clusters/prod-us-seattle/topics");
    assert_eq!(
        requests[0].body,
        Some(json!({
            "region": "us-seattle",
            "name": "mytopic",
            "config": "event",
            "organization": "payments"
        }))
    );
}

#[test]
fn given_mixed_case_names_when_recreating_then_lowercases_path_and_body() {
    let api = MockApiClient::new();

    run_args(
        &api,
        &[
            "kafka:topics:recreate",
            "MyTopic",
            "--cluster",
            "Prod-US-Seattle",
            "--type",
            "state",
            "--organization",
            "payments",
            "--numpartitions",
            "4",
            "--retentionms",
            "-1",
            "--description",
            "account state",
        ],
    )
    .unwrap();

    let requests = api.requests();
    assert_eq!(requests[0].path, "/clusters/prod-us-seattle/topics/recreate");
    assert_eq!(
        requests[0].body,
        Some(json!({
            "region": "us-seattle",
            "name": "mytopic",
            "config": "state",
            "organization": "payments",
            "partitions": 4,
            "retentionms": -1,
            "description": "account state"
        }))
    );
}

#[test]
fn given_invalid_topic_name_when_creating_then_no_request_is_made() {
    let api = MockApiClient::new();

    let err = run_args(
        &api,
        &[
            "kafka:topics:create",
            "my_topic",
            "-c",
            "prod-us-seattle",
            "-t",
            "event",
            "-o",
            "payments",
        ],
    )
    .unwrap_err();

    assert_eq!(err.exit_code(), exitcode::USAGE);
    assert_eq!(
        domain_error(err),
        DomainError::InvalidTopicName("my_topic".to_string())
    );
    assert!(api.requests().is_empty());
}

#[test]
fn given_malformed_cluster_when_listing_topics_then_no_request_is_made() {
    let api = MockApiClient::new();

    let err = run_args(&api, &["kafka:topics", "-c", "prod"]).unwrap_err();

    assert_eq!(
        domain_error(err),
        DomainError::InvalidClusterId("prod".to_string())
    );
    assert!(api.requests().is_empty());
}

#[test]
fn given_topic_when_deleting_then_sends_delete() {
    let api = MockApiClient::new();

    run_args(&api, &["kafka:topics:delete", "orders", "-c", "prod-us-seattle"]).unwrap();

    let requests = api.requests();
    assert_eq!(requests[0].method, Method::Delete);
    assert_eq!(requests[0].path, "/clusters/prod-us-seattle/topics/orders");
    assert_eq!(requests[0].body, None);
}

#[test]
fn given_avro_key_without_schema_when_assigning_then_rejected() {
    let api = MockApiClient::new();

    let err = run_args(
        &api,
        &[
            "kafka:topics:assign-key",
            "-c",
            "prod-us-seattle",
            "-t",
            "orders",
            "-k",
            "avro",
        ],
    )
    .unwrap_err();

    assert_eq!(domain_error(err), DomainError::MissingKeySchema);
    assert!(api.requests().is_empty());
}

#[test]
fn given_string_key_without_schema_when_assigning_then_posts_mapping() {
    let api = MockApiClient::new();

    run_args(
        &api,
        &[
            "kafka:topics:assign-key",
            "-c",
            "prod-us-seattle",
            "-t",
            "orders",
            "-k",
            "STRING",
        ],
    )
    .unwrap();

    let requests = api.requests();
    assert_eq!(
        requests[0].path,
        "/clusters/prod-us-seattle/topics/orders/key-schema-mapping"
    );
    assert_eq!(
        requests[0].body,
        Some(json!({"topic": "orders", "keytype": "string"}))
    );
}

#[test]
fn given_avro_key_with_schema_when_assigning_then_body_carries_schema() {
    let api = MockApiClient::new();

    run_args(
        &api,
        &[
            "kafka:topics:assign-key",
            "-c",
            "prod-us-seattle",
            "-t",
            "orders",
            "-k",
            "avro",
            "-s",
            "order-key",
        ],
    )
    .unwrap();

    assert_eq!(
        api.requests()[0].body,
        Some(json!({"topic": "orders", "schema": "order-key", "keytype": "avro"}))
    );
}

#[test]
fn given_empty_value_schema_when_assigning_then_rejected() {
    let api = MockApiClient::new();

    let err = run_args(
        &api,
        &[
            "kafka:topics:assign-value",
            "-c",
            "prod-us-seattle",
            "-t",
            "orders",
            "-s",
            "",
        ],
    )
    .unwrap_err();

    assert_eq!(domain_error(err), DomainError::MissingValueSchema);
    assert!(api.requests().is_empty());
}

#[test]
fn given_value_schema_when_assigning_then_posts_mapping() {
    let api = MockApiClient::new();

    run_args(
        &api,
        &[
            "kafka:topics:assign-value",
            "-c",
            "prod-us-seattle",
            "-t",
            "orders",
            "-s",
            "order-v1",
        ],
    )
    .unwrap();

    let requests = api.requests();
    assert_eq!(
        requests[0].path,
        "/clusters/prod-us-seattle/topics/orders/value-schema-mapping"
    );
    assert_eq!(
        requests[0].body,
        Some(json!({"topic": "orders", "schema": "order-v1"}))
    );
}

#[test]
fn given_api_rejects_create_when_running_then_surfaces_api_error() {
    let api = MockApiClient::new();
    api.fail("/clusters/prod-us-seattle/topics", 409, "topic already exists");

    let err = run_args(
        &api,
        &[
            "kafka:topics:create",
            "orders",
            "-c",
            "prod-us-seattle",
            "-t",
            "event",
            "-o",
            "payments",
        ],
    )
    .unwrap_err();

    assert_eq!(err.exit_code(), exitcode::UNAVAILABLE);
    assert!(matches!(
        err,
        CliError::Infra(InfraError::Application(ApplicationError::Api(
            ApiError::Status { status: 409, .. }
        )))
    ));
    assert_eq!(err.to_string(), "409: topic already exists");
    assert_eq!(api.requests().len(), 1);
}

#[test]
fn given_topic_when_showing_info_and_preview_then_reads_topic_paths() {
    let api = MockApiClient::new();
    api.respond(
        "/clusters/prod-us-seattle/topics/orders",
        json!({"name": "orders", "retention_ms": 172800000}),
    );
    api.respond(
        "/clusters/prod-us-seattle/topics/orders/preview",
        json!({
            "endOffsets": [{"topic": "orders", "partition": 0, "offset": 42}],
            "previewMessages": [{"topic": "orders", "partition": 0, "offset": 41, "value": "{\"id\":1}"}]
        }),
    );

    run_args(&api, &["kafka:topics:info", "-c", "prod-us-seattle", "-t", "orders"]).unwrap();
    run_args(&api, &["kafka:topics:preview", "-c", "prod-us-seattle", "-t", "orders"]).unwrap();

    let paths: Vec<String> = api.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(
        paths,
        vec![
            "/clusters/prod-us-seattle/topics/orders",
            "/clusters/prod-us-seattle/topics/orders/preview"
        ]
    );
}

#[test]
fn given_unexpected_response_shape_when_listing_then_reports_invalid_response() {
    let api = MockApiClient::new();
    api.respond("/clusters/prod-us-seattle/topics", json!({"oops": true}));

    let err = run_args(&api, &["kafka:topics", "-c", "prod-us-seattle"]).unwrap_err();

    assert_eq!(err.exit_code(), exitcode::SOFTWARE);
    assert!(err
        .to_string()
        .starts_with("unexpected response from GET /clusters/prod-us-seattle/topics"));
}

#[test]
fn given_cluster_with_query_characters_when_deleting_then_path_stays_one_segment() {
    let api = MockApiClient::new();

    run_args(&api, &["kafka:topics:delete", "orders", "-c", "prod?x=1#-us"]).unwrap();

    let requests = api.requests();
    assert_eq!(requests[0].method, Method::Delete);
    assert_eq!(
        requests[0].path,
        "/clusters/prod%3Fx%3D1%23-us/topics/orders"
    );
}
