//! Argument validation
//!
//! Every rule here runs before a request is built. A rule either returns the
//! normalized (lower-cased) value or the precondition that failed.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};

use crate::domain::error::{DomainError, DomainResult};

fn topic_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        RegexBuilder::new(r"^[a-z0-9-]+$")
            .case_insensitive(true)
            .build()
            .expect("topic name pattern is valid")
    })
}

fn cluster_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        RegexBuilder::new(r"^[^-]+-[a-z0-9-]+$")
            .case_insensitive(true)
            .build()
            .expect("cluster pattern is valid")
    })
}

/// Validate a topic name and return it lower-cased.
pub fn validate_topic_name(name: &str) -> DomainResult<String> {
    if topic_name_regex().is_match(name) {
        Ok(name.to_lowercase())
    } else {
        Err(DomainError::InvalidTopicName(name.to_string()))
    }
}

/// A `<cluster>-<region>` identifier, e.g. `prod-us-seattle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterId {
    /// Text before the first hyphen
    pub cluster: String,
    /// Everything after the first hyphen
    pub region: String,
}

impl ClusterId {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        if !cluster_id_regex().is_match(raw) {
            return Err(DomainError::InvalidClusterId(raw.to_string()));
        }
        let lowered = raw.to_lowercase();
        match lowered.split_once('-') {
            Some((cluster, region)) => Ok(Self {
                cluster: cluster.to_string(),
                region: region.to_string(),
            }),
            None => Err(DomainError::InvalidClusterId(raw.to_string())),
        }
    }

}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.cluster, self.region)
    }
}

impl FromStr for ClusterId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Serialization type of a topic key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyType {
    None,
    String,
    Avro,
}

impl KeyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyType::None => "none",
            KeyType::String => "string",
            KeyType::Avro => "avro",
        }
    }
}

impl FromStr for KeyType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(KeyType::None),
            "string" => Ok(KeyType::String),
            "avro" => Ok(KeyType::Avro),
            _ => Err(DomainError::InvalidKeyType(s.to_string())),
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role of an application on a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Producer,
    Consumer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Producer => "producer",
            Role::Consumer => "consumer",
        }
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "producer" => Ok(Role::Producer),
            "consumer" => Ok(Role::Consumer),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate a key-schema mapping: returns the key type and, for avro, the schema.
///
/// A schema passed alongside `none`/`string` is dropped.
pub fn validate_key_mapping(
    keytype: &str,
    schema: Option<&str>,
) -> DomainResult<(KeyType, Option<String>)> {
    let keytype: KeyType = keytype.parse()?;
    match keytype {
        KeyType::Avro => match schema.map(str::trim) {
            Some(s) if !s.is_empty() => Ok((keytype, Some(s.to_string()))),
            _ => Err(DomainError::MissingKeySchema),
        },
        _ => Ok((keytype, None)),
    }
}

/// Validate a value-schema mapping: the schema must be non-empty.
pub fn validate_value_schema(schema: Option<&str>) -> DomainResult<String> {
    match schema.map(str::trim) {
        Some(s) if !s.is_empty() => Ok(s.to_string()),
        _ => Err(DomainError::MissingValueSchema),
    }
}

/// App and consumer group names end up as single URL path segments.
pub fn validate_path_name(name: &str) -> DomainResult<String> {
    match name {
        "" | "." | ".." => Err(DomainError::InvalidPathName(name.to_string())),
        _ => Ok(name.to_string()),
    }
}

/// Search key for listing subscriptions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionLookup {
    ByTopic { cluster: ClusterId, topic: String },
    ByApp { app: String },
}

impl SubscriptionLookup {
    /// Exactly one of `app` or `topic`; `topic` additionally needs `cluster`.
    pub fn from_args(
        cluster: Option<&str>,
        topic: Option<&str>,
        app: Option<&str>,
    ) -> DomainResult<Self> {
        match (topic, app) {
            (Some(_), Some(_)) | (None, None) => Err(DomainError::AmbiguousSubscriptionLookup),
            (Some(topic), None) => {
                let cluster = cluster.ok_or(DomainError::MissingClusterForTopic)?;
                Ok(SubscriptionLookup::ByTopic {
                    cluster: ClusterId::parse(cluster)?,
                    topic: validate_topic_name(topic)?,
                })
            }
            (None, Some(app)) => Ok(SubscriptionLookup::ByApp {
                app: validate_path_name(app)?,
            }),
        }
    }
}

/// Which partitions a seek applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartitionSelection {
    Explicit(Vec<u32>),
    All,
}

/// Where a seek repositions the consumer group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekPosition {
    Beginning,
    End,
}

impl SeekPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeekPosition::Beginning => "beginning",
            SeekPosition::End => "end",
        }
    }
}

/// Parse a comma-separated list of partition numbers.
pub fn parse_partitions(raw: &str) -> DomainResult<Vec<u32>> {
    raw.split(',')
        .map(|item| {
            item.trim()
                .parse::<u32>()
                .map_err(|_| DomainError::InvalidPartitions(raw.to_string()))
        })
        .collect()
}

/// Exactly one of explicit partitions or all partitions.
pub fn validate_partition_selection(
    partitions: Option<&str>,
    all_partitions: bool,
) -> DomainResult<PartitionSelection> {
    match (partitions, all_partitions) {
        (Some(raw), false) => Ok(PartitionSelection::Explicit(parse_partitions(raw)?)),
        (None, true) => Ok(PartitionSelection::All),
        _ => Err(DomainError::AmbiguousPartitions),
    }
}

/// Exactly one of seek-to-beginning or seek-to-end.
pub fn validate_seek_position(to_beginning: bool, to_end: bool) -> DomainResult<SeekPosition> {
    match (to_beginning, to_end) {
        (true, false) => Ok(SeekPosition::Beginning),
        (false, true) => Ok(SeekPosition::End),
        _ => Err(DomainError::AmbiguousSeekPosition),
    }
}
