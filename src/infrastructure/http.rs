//! Blocking HTTP implementation of `ApiClient`

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde_json::Value;
use tracing::{debug, instrument, trace};

use crate::config::Settings;
use crate::infrastructure::error::{InfraError, InfraResult};
use crate::infrastructure::traits::{ApiClient, ApiError, ApiRequest, Method};

/// Client for the management API, authenticated with an optional bearer token.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    base_url: String,
    client: Client,
}

impl HttpApiClient {
    pub fn new(settings: &Settings) -> InfraResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            "User-Agent",
            HeaderValue::from_static(concat!("kafka-admin/", env!("CARGO_PKG_VERSION"))),
        );
        if let Some(token) = settings.token.as_deref().filter(|t| !t.is_empty()) {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| InfraError::Http(format!("invalid token: {e}")))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| InfraError::Http(format!("create HTTP client: {e}")))?;

        Ok(Self {
            base_url: settings.api_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl ApiClient for HttpApiClient {
    #[instrument(skip(self), fields(request = %request))]
    fn execute(&self, request: &ApiRequest) -> Result<Value, ApiError> {
        let url = self.url(&request.path);
        debug!("{} {}", request.method, url);

        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Delete => self.client.delete(&url),
        };
        if let Some(body) = &request.body {
            trace!("request body: {}", body);
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        debug!("response status: {}", status);
        trace!("response body: {}", text);

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: text,
            });
        }
        Ok(parse_body(&text))
    }
}

/// Empty bodies become `null`; bodies that are not JSON are kept as a string.
fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
