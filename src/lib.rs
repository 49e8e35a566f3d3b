//! Command-line administration of a Kafka-as-a-service platform.
//!
//! Each `kafka:*` command validates its arguments, maps them to one request
//! against the management API and formats the JSON response as text.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
