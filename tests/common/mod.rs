//! Shared test support: a recording `ApiClient`

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use clap::Parser;
use serde_json::Value;

use kafka_admin::cli::commands::run;
use kafka_admin::cli::{Cli, CliResult};
use kafka_admin::infrastructure::di::ServiceContainer;
use kafka_admin::infrastructure::traits::{ApiClient, ApiError, ApiRequest};

/// Mock API that records every request and answers from canned responses by path.
#[derive(Default)]
pub struct MockApiClient {
    requests: Mutex<Vec<ApiRequest>>,
    responses: Mutex<HashMap<String, Result<Value, ApiError>>>,
}

impl MockApiClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Answer requests to `path` with `value`.
    pub fn respond(&self, path: &str, value: Value) {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), Ok(value));
    }

    /// Answer requests to `path` with an API error.
    pub fn fail(&self, path: &str, status: u16, message: &str) {
        self.responses.lock().unwrap().insert(
            path.to_string(),
            Err(ApiError::Status {
                status,
                message: message.to_string(),
            }),
        );
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl ApiClient for MockApiClient {
    fn execute(&self, request: &ApiRequest) -> Result<Value, ApiError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .get(&request.path)
            .cloned()
            .unwrap_or(Ok(Value::Null))
    }
}

pub fn container(api: Arc<MockApiClient>) -> ServiceContainer {
    ServiceContainer::with_deps(api)
}

/// Parse a command line (without the binary name) and run it against `api`.
pub fn run_args(api: &Arc<MockApiClient>, args: &[&str]) -> CliResult<()> {
    kafka_admin::util::testing::init_test_setup();
    let cli = Cli::try_parse_from(std::iter::once("kafka-admin").chain(args.iter().copied()))
        .expect("command line parses");
    let command = cli.command.expect("a subcommand");
    run(&command, &container(Arc::clone(api)))
}
