//! CLI argument definitions using clap
//!
//! Every `kafka:*` subcommand and its flags, alias for alias.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

/// Manage Kafka clusters, topics, subscriptions and consumer groups
#[derive(Parser, Debug)]
#[command(name = "kafka-admin")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Config file (default: ~/.config/kafka-admin/kafka-admin.toml)
    #[arg(long, global = true, env = "KAFKA_ADMIN_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// list available Kafka clusters
    #[command(name = "kafka:clusters")]
    Clusters,

    /// list available Kafka topics
    #[command(name = "kafka:topics")]
    Topics(ClusterArgs),

    /// show info for a Kafka topic
    #[command(name = "kafka:topics:info")]
    TopicInfo(TopicArgs),

    /// list available Kafka topic configuration types
    #[command(name = "kafka:topics:types")]
    TopicTypes(ClusterArgs),

    /// create a Kafka topic
    #[command(name = "kafka:topics:create")]
    TopicCreate(TopicSpecArgs),

    /// delete and create a Kafka topic again, discarding its messages
    #[command(name = "kafka:topics:recreate")]
    TopicRecreate(TopicSpecArgs),

    /// delete a Kafka topic
    #[command(name = "kafka:topics:delete")]
    TopicDelete(TopicNameArgs),

    /// designate the key type for a topic
    #[command(name = "kafka:topics:assign-key")]
    AssignKey(AssignKeyArgs),

    /// assign an Avro schema as a valid value type for a topic
    #[command(name = "kafka:topics:assign-value")]
    AssignValue(AssignValueArgs),

    /// preview the latest messages on a Kafka topic
    #[command(name = "kafka:topics:preview")]
    TopicPreview(TopicArgs),

    /// list app/topic subscriptions
    #[command(name = "kafka:subscriptions")]
    Subscriptions(SubscriptionsArgs),

    /// subscribe an app to a Kafka topic
    #[command(name = "kafka:subscribe")]
    Subscribe(SubscriptionArgs),

    /// unsubscribe an app from a Kafka topic
    #[command(name = "kafka:unsubscribe")]
    Unsubscribe(SubscriptionArgs),

    /// list the Avro schemas available in a cluster
    #[command(name = "kafka:schemas")]
    Schemas(ClusterArgs),

    /// list the consumer groups of a cluster
    #[command(name = "kafka:consumer-groups")]
    ConsumerGroups(ClusterArgs),

    /// show committed offsets and lag of a consumer group
    #[command(name = "kafka:consumer-groups:offsets")]
    ConsumerGroupOffsets(ConsumerGroupArgs),

    /// show the members of a consumer group
    #[command(name = "kafka:consumer-groups:members")]
    ConsumerGroupMembers(ConsumerGroupArgs),

    /// move a consumer group to the beginning or end of a topic
    #[command(name = "kafka:consumer-groups:seek")]
    ConsumerGroupSeek(SeekArgs),

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ClusterArgs {
    /// The Kafka cluster and region, e.g. "nonprod-us-seattle".
    #[arg(short, long)]
    pub cluster: String,
}

#[derive(Args, Debug, Clone)]
pub struct TopicArgs {
    /// The Kafka cluster and region, e.g. "nonprod-us-seattle".
    #[arg(short, long)]
    pub cluster: String,

    /// an existing topic
    #[arg(short, long)]
    pub topic: String,
}

/// Arguments shared by create and recreate.
#[derive(Args, Debug, Clone)]
pub struct TopicSpecArgs {
    /// Name of the topic
    #[arg(value_name = "NAME")]
    pub name: String,

    /// The Kafka cluster and region, e.g. "nonprod-us-seattle".
    #[arg(short, long)]
    pub cluster: String,

    /// The type of topic (state, ledger or event).
    #[arg(short = 't', long = "type")]
    pub topic_type: String,

    /// The organization the topic will belong to.
    #[arg(short, long)]
    pub organization: String,

    /// A description of the topic.
    #[arg(short, long)]
    pub description: Option<String>,

    /// The number of partitions (default: from the topic type).
    #[arg(short = 'p', long)]
    pub numpartitions: Option<u32>,

    /// The retention time in milliseconds, -1 for infinite (default: from the topic type).
    #[arg(short = 'r', long, allow_negative_numbers = true)]
    pub retentionms: Option<i64>,
}

#[derive(Args, Debug, Clone)]
pub struct TopicNameArgs {
    /// Name of the topic
    #[arg(value_name = "NAME")]
    pub name: String,

    /// The Kafka cluster and region, e.g. "nonprod-us-seattle".
    #[arg(short, long)]
    pub cluster: String,
}

#[derive(Args, Debug, Clone)]
pub struct AssignKeyArgs {
    /// The Kafka cluster and region, e.g. "nonprod-us-seattle".
    #[arg(short, long)]
    pub cluster: String,

    /// an existing topic
    #[arg(short, long)]
    pub topic: String,

    /// the key type ("string", "none", or "avro")
    #[arg(short, long)]
    pub keytype: String,

    /// if the key type is "avro", an existing Avro schema name
    #[arg(short, long)]
    pub schema: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct AssignValueArgs {
    /// The Kafka cluster and region, e.g. "nonprod-us-seattle".
    #[arg(short, long)]
    pub cluster: String,

    /// an existing topic
    #[arg(short, long)]
    pub topic: String,

    /// an existing Avro schema name
    #[arg(short, long)]
    pub schema: String,
}

/// Search by topic (needs cluster) or by app, not both.
#[derive(Args, Debug, Clone)]
pub struct SubscriptionsArgs {
    /// The Kafka cluster and region, e.g. "nonprod-us-seattle".
    #[arg(short, long)]
    pub cluster: Option<String>,

    /// an existing topic
    #[arg(short, long)]
    pub topic: Option<String>,

    /// an existing app that already has a Kafka addon
    #[arg(short, long)]
    pub app: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct SubscriptionArgs {
    /// The Kafka cluster and region, e.g. "nonprod-us-seattle".
    #[arg(short, long)]
    pub cluster: String,

    /// an existing topic
    #[arg(short, long)]
    pub topic: String,

    /// an existing app that already has a Kafka addon
    #[arg(short, long)]
    pub app: String,

    /// "consumer" or "producer"
    #[arg(short, long)]
    pub role: String,

    /// consumer group name, for consumers
    #[arg(short = 'g', long)]
    pub consumergroupname: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ConsumerGroupArgs {
    /// The Kafka cluster and region, e.g. "nonprod-us-seattle".
    #[arg(short, long)]
    pub cluster: String,

    /// an existing consumer group
    #[arg(short = 'g', long)]
    pub consumergroup: String,
}

#[derive(Args, Debug, Clone)]
pub struct SeekArgs {
    /// The Kafka cluster and region, e.g. "nonprod-us-seattle".
    #[arg(short, long)]
    pub cluster: String,

    /// an existing consumer group
    #[arg(short = 'g', long)]
    pub consumergroup: String,

    /// an existing topic
    #[arg(short, long)]
    pub topic: String,

    /// comma-separated partitions to seek, e.g. "0,1,2"
    #[arg(short, long)]
    pub partitions: Option<String>,

    /// seek all partitions of the topic
    #[arg(long)]
    pub allpartitions: bool,

    /// seek to the earliest offset
    #[arg(long)]
    pub seektobeginning: bool,

    /// seek to the latest offset
    #[arg(long)]
    pub seektoend: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init,

    /// Show config path
    Path,
}
