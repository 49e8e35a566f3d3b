//! I/O boundary traits for testability
//!
//! Every command reduces to one `ApiRequest` handed to an `ApiClient`.
//! Services only see the trait, so tests swap in a recording mock.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// HTTP verbs used by the management API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        })
    }
}

/// Call descriptor: method, path relative to the API base, optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: Some(body),
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            body: None,
        }
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// Failure reported by the remote API or the transport beneath it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The API answered with a non-success status; `message` is the body verbatim.
    #[error("{status}: {message}")]
    Status { status: u16, message: String },

    /// No usable answer (connection refused, timeout, TLS, ...).
    #[error("request failed: {0}")]
    Transport(String),
}

/// Transport to the management API.
pub trait ApiClient: Send + Sync {
    /// Perform one round trip. An empty response body yields `Value::Null`.
    fn execute(&self, request: &ApiRequest) -> Result<Value, ApiError>;
}
