//! Tests for kafka:subscriptions, kafka:subscribe and kafka:unsubscribe

mod common;

use rstest::rstest;
use serde_json::json;

use common::{run_args, MockApiClient};
use kafka_admin::application::ApplicationError;
use kafka_admin::cli::CliError;
use kafka_admin::domain::DomainError;
use kafka_admin::infrastructure::traits::Method;
use kafka_admin::infrastructure::InfraError;

fn domain_error(err: CliError) -> DomainError {
    match err {
        CliError::Infra(InfraError::Application(ApplicationError::Domain(e))) => e,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[rstest]
#[case(&["kafka:subscriptions", "-c", "prod-us-seattle", "-t", "orders", "-a", "api-default"], DomainError::AmbiguousSubscriptionLookup)]
#[case(&["kafka:subscriptions", "-c", "prod-us-seattle"], DomainError::AmbiguousSubscriptionLookup)]
#[case(&["kafka:subscriptions", "-t", "orders"], DomainError::MissingClusterForTopic)]
fn given_bad_lookup_when_listing_subscriptions_then_no_request_is_made(
    #[case] args: &[&str],
    #[case] expected: DomainError,
) {
    let api = MockApiClient::new();

    let err = run_args(&api, args).unwrap_err();

    assert!(err.is_validation());
    assert_eq!(domain_error(err), expected);
    assert!(api.requests().is_empty());
}

#[test]
fn given_topic_when_listing_subscriptions_then_reads_topic_acls() {
    let api = MockApiClient::new();
    api.respond(
        "/clusters/prod-us-seattle/topics/orders/acls",
        json!([{"id": "1", "app_name": "api", "space_name": "default", "role": "producer"}]),
    );

    run_args(
        &api,
        &["kafka:subscriptions", "-c", "prod-us-seattle", "-t", "orders"],
    )
    .unwrap();

    assert_eq!(
        api.requests()[0].path,
        "/clusters/prod-us-seattle/topics/orders/acls"
    );
}

#[test]
fn given_app_when_listing_subscriptions_then_reads_app_topic_acls() {
    let api = MockApiClient::new();
    api.respond(
        "/apps/api-default/topic-acls",
        json!([{"topic_name": "orders", "role": "producer"}]),
    );

    run_args(&api, &["kafka:subscriptions", "-a", "api-default"]).unwrap();

    let requests = api.requests();
    assert_eq!(requests[0].method, Method::Get);
    assert_eq!(requests[0].path, "/apps/api-default/topic-acls");
}

#[test]
fn given_consumer_with_group_when_subscribing_then_posts_acl() {
    let api = MockApiClient::new();

    run_args(
        &api,
        &[
            "kafka:subscribe",
            "-c",
            "prod-us-seattle",
            "-t",
            "orders",
            "-a",
            "worker-default",
            "-r",
            "Consumer",
            "-g",
            "billing",
        ],
    )
    .unwrap();

    let requests = api.requests();
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].path, "/clusters/prod-us-seattle/topics/orders/acls");
    assert_eq!(
        requests[0].body,
        Some(json!({"app": "worker-default", "role": "consumer", "consumerGroupName": "billing"}))
    );
}

#[test]
fn given_consumer_group_when_unsubscribing_then_deletes_group_scoped_acl() {
    let api = MockApiClient::new();

    run_args(
        &api,
        &[
            "kafka:unsubscribe",
            "--cluster",
            "prod-us-seattle",
            "--topic",
            "orders",
            "--app",
            "worker-default",
            "--role",
            "consumer",
            "--consumergroupname",
            "billing",
        ],
    )
    .unwrap();

    let requests = api.requests();
    assert_eq!(requests[0].method, Method::Delete);
    assert_eq!(
        requests[0].path,
        "/clusters/prod-us-seattle/topics/orders/acls/worker-default/role/consumer/consumers/billing"
    );
}

#[test]
fn given_unknown_role_when_subscribing_then_rejected() {
    let api = MockApiClient::new();

    let err = run_args(
        &api,
        &[
            "kafka:subscribe",
            "-c",
            "prod-us-seattle",
            "-t",
            "orders",
            "-a",
            "api-default",
            "-r",
            "admin",
        ],
    )
    .unwrap_err();

    assert_eq!(domain_error(err), DomainError::InvalidRole("admin".to_string()));
    assert!(api.requests().is_empty());
}

#[test]
fn given_app_with_slashes_when_unsubscribing_then_app_is_escaped() {
    let api = MockApiClient::new();

    run_args(
        &api,
        &[
            "kafka:unsubscribe",
            "-c",
            "prod-us-seattle",
            "-t",
            "orders",
            "-a",
            "../../../../orders",
            "-r",
            "producer",
        ],
    )
    .unwrap();

    assert_eq!(
        api.requests()[0].path,
        "/clusters/prod-us-seattle/topics/orders/acls/..%2F..%2F..%2F..%2Forders/role/producer"
    );
}

#[rstest]
#[case(&["-a", ".."])]
#[case(&["-a", "api-default", "-g", "."])]
fn given_dot_segment_name_when_unsubscribing_then_no_request_is_made(#[case] extra: &[&str]) {
    let api = MockApiClient::new();
    let mut args = vec![
        "kafka:unsubscribe",
        "-c",
        "prod-us-seattle",
        "-t",
        "orders",
        "-r",
        "consumer",
    ];
    args.extend_from_slice(extra);

    let err = run_args(&api, &args).unwrap_err();

    assert!(matches!(domain_error(err), DomainError::InvalidPathName(_)));
    assert!(api.requests().is_empty());
}
