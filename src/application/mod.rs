//! Application layer: request building, response formatting and services
//!
//! This layer orchestrates domain logic and depends on the `ApiClient` boundary trait.

pub mod error;
pub mod error_ext;
pub mod format;
pub mod requests;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::JsonResultExt;
