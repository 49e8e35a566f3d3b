//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors are argument preconditions violated before any request is made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid topic name '{0}': a topic name must only contain lowercase alphanumerics and hyphens")]
    InvalidTopicName(String),

    #[error("invalid cluster '{0}': expected <cluster>-<region>, e.g. \"nonprod-us-seattle\"")]
    InvalidClusterId(String),

    #[error("invalid key type '{0}': must be one of none, string, avro")]
    InvalidKeyType(String),

    #[error("invalid role '{0}': must be \"consumer\" or \"producer\"")]
    InvalidRole(String),

    #[error("a schema name is required when the key type is avro")]
    MissingKeySchema,

    #[error("a schema name is required")]
    MissingValueSchema,

    #[error("must specify only one of --topic or --app")]
    AmbiguousSubscriptionLookup,

    #[error("must provide cluster when searching by topic")]
    MissingClusterForTopic,

    #[error("must specify only one of --partitions or --allpartitions")]
    AmbiguousPartitions,

    #[error("must specify only one of --seektobeginning or --seektoend")]
    AmbiguousSeekPosition,

    #[error("invalid name '{0}': must not be empty, \".\" or \"..\"")]
    InvalidPathName(String),

    #[error("invalid partition list '{0}': expected comma-separated non-negative integers")]
    InvalidPartitions(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
