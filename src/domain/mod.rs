//! Domain layer: records, argument validation and their errors
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod validation;

pub use entities::*;
pub use error::{DomainError, DomainResult};
pub use validation::{
    ClusterId, KeyType, PartitionSelection, Role, SeekPosition, SubscriptionLookup,
};
