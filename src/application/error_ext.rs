//! Error conversion helpers for JSON encoding and decoding
//!
//! Provides extension traits for cleaner error handling with request context.

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `serde_json::Result` to `ApplicationResult` with context.
pub trait JsonResultExt<T> {
    /// Tag a decoding failure with the request whose response could not be read.
    ///
    /// # Example
    /// ```ignore
    /// serde_json::from_value::<Vec<Topic>>(value)
    ///     .with_response_context(&request)?;
    /// ```
    fn with_response_context(self, context: impl ToString) -> ApplicationResult<T>;

    /// Tag an encoding failure with the request being built.
    fn with_encode_context(self, context: impl ToString) -> ApplicationResult<T>;
}

impl<T> JsonResultExt<T> for serde_json::Result<T> {
    fn with_response_context(self, context: impl ToString) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::InvalidResponse {
            context: context.to_string(),
            source: e,
        })
    }

    fn with_encode_context(self, context: impl ToString) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::Encode {
            context: context.to_string(),
            source: e,
        })
    }
}
