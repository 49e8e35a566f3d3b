//! Command dispatch
//!
//! Each handler validates its arguments, calls one service and prints the
//! formatted result. Validation runs before any request is built; mutating
//! commands are wrapped in a `Task` indicator.

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::format;
use crate::application::services::Subscriptions;
use crate::application::ApplicationResult;
use crate::cli::args::{
    AssignKeyArgs, AssignValueArgs, Cli, ClusterArgs, Commands, ConfigCommands,
    ConsumerGroupArgs, SeekArgs, SubscriptionArgs, SubscriptionsArgs, TopicArgs, TopicNameArgs,
    TopicSpecArgs,
};
use crate::cli::output::{self, em, Task};
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::validation::{
    validate_key_mapping, validate_partition_selection, validate_path_name,
    validate_seek_position, validate_topic_name, validate_value_schema,
};
use crate::domain::{
    ClusterId, KeyMapping, KeyType, NewTopic, Role, SeekOrder, SubscriptionChange,
    SubscriptionLookup, ValueMapping,
};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

/// Entry point: load settings, wire the container, run the command.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        Cli::command()
            .print_help()
            .map_err(|e| InfraError::io("print help", e))?;
        return Ok(());
    };

    match command {
        Commands::Completion { shell } => {
            print_completions(*shell);
            Ok(())
        }
        Commands::Config { command } => config_command(command, cli.config.as_deref()),
        kafka => {
            let settings = Settings::load(cli.config.as_deref())?;
            debug!("api_url: {}", settings.api_url);
            let container = ServiceContainer::new(&settings)?;
            run(kafka, &container)
        }
    }
}

/// Run a `kafka:*` command against the container's API client.
pub fn run(command: &Commands, container: &ServiceContainer) -> CliResult<()> {
    match command {
        Commands::Clusters => list_clusters(container),
        Commands::Topics(args) => list_topics(container, args),
        Commands::TopicInfo(args) => topic_info(container, args),
        Commands::TopicTypes(args) => list_topic_types(container, args),
        Commands::TopicCreate(args) => create_topic(container, args, false),
        Commands::TopicRecreate(args) => create_topic(container, args, true),
        Commands::TopicDelete(args) => delete_topic(container, args),
        Commands::AssignKey(args) => assign_key(container, args),
        Commands::AssignValue(args) => assign_value(container, args),
        Commands::TopicPreview(args) => preview_topic(container, args),
        Commands::Subscriptions(args) => list_subscriptions(container, args),
        Commands::Subscribe(args) => subscribe(container, args),
        Commands::Unsubscribe(args) => unsubscribe(container, args),
        Commands::Schemas(args) => list_schemas(container, args),
        Commands::ConsumerGroups(args) => list_consumer_groups(container, args),
        Commands::ConsumerGroupOffsets(args) => consumer_group_offsets(container, args),
        Commands::ConsumerGroupMembers(args) => consumer_group_members(container, args),
        Commands::ConsumerGroupSeek(args) => seek_consumer_group(container, args),
        Commands::Config { .. } | Commands::Completion { .. } => Err(CliError::InvalidArgs(
            "not a kafka command".to_string(),
        )),
    }
}

/// Run a mutation inside a pending/ok/failed indicator.
fn task(message: String, op: impl FnOnce() -> ApplicationResult<()>) -> CliResult<()> {
    let task = Task::start(&message);
    match op() {
        Ok(()) => {
            task.ok();
            Ok(())
        }
        Err(e) => {
            task.fail();
            Err(e.into())
        }
    }
}

// ============================================================
// VALIDATION (args -> domain inputs)
// ============================================================

fn new_topic(args: &TopicSpecArgs) -> CliResult<NewTopic> {
    Ok(NewTopic {
        name: validate_topic_name(&args.name)?,
        cluster: ClusterId::parse(&args.cluster)?,
        config: args.topic_type.to_lowercase(),
        organization: args.organization.clone(),
        partitions: args.numpartitions,
        retention_ms: args.retentionms,
        description: args.description.clone(),
    })
}

fn subscription_change(args: &SubscriptionArgs) -> CliResult<SubscriptionChange> {
    Ok(SubscriptionChange {
        cluster: ClusterId::parse(&args.cluster)?,
        topic: validate_topic_name(&args.topic)?,
        app: validate_path_name(&args.app)?,
        role: args.role.parse::<Role>()?,
        consumer_group_name: args
            .consumergroupname
            .as_deref()
            .map(validate_path_name)
            .transpose()?,
    })
}

fn seek_order(args: &SeekArgs) -> CliResult<SeekOrder> {
    Ok(SeekOrder {
        cluster: ClusterId::parse(&args.cluster)?,
        consumer_group: validate_path_name(&args.consumergroup)?,
        topic: validate_topic_name(&args.topic)?,
        partitions: validate_partition_selection(args.partitions.as_deref(), args.allpartitions)?,
        position: validate_seek_position(args.seektobeginning, args.seektoend)?,
    })
}

// ============================================================
// HANDLERS
// ============================================================

#[instrument(skip(c))]
fn list_clusters(c: &ServiceContainer) -> CliResult<()> {
    let clusters = c.clusters().list()?;
    output::info(&format::clusters(&clusters));
    Ok(())
}

#[instrument(skip(c))]
fn list_topics(c: &ServiceContainer, args: &ClusterArgs) -> CliResult<()> {
    let cluster = ClusterId::parse(&args.cluster)?;
    let topics = c.topics().list(&cluster)?;
    output::info(&format::topics(&topics));
    Ok(())
}

#[instrument(skip(c))]
fn topic_info(c: &ServiceContainer, args: &TopicArgs) -> CliResult<()> {
    let cluster = ClusterId::parse(&args.cluster)?;
    let topic = validate_topic_name(&args.topic)?;
    let detail = c.topics().get(&cluster, &topic)?;
    output::info(&format::topic_detail(&detail));
    Ok(())
}

#[instrument(skip(c))]
fn list_topic_types(c: &ServiceContainer, args: &ClusterArgs) -> CliResult<()> {
    let cluster = ClusterId::parse(&args.cluster)?;
    let types = c.topics().types(&cluster)?;
    output::info(&format::topic_types(&types));
    Ok(())
}

#[instrument(skip(c))]
fn create_topic(c: &ServiceContainer, args: &TopicSpecArgs, recreate: bool) -> CliResult<()> {
    let topic = new_topic(args)?;
    let service = c.topics();
    if recreate {
        task(
            format!(
                "Recreating {} topic {} in cluster {}",
                em(&topic.config),
                em(&topic.name),
                em(&topic.cluster.to_string())
            ),
            || service.recreate(&topic),
        )
    } else {
        task(
            format!(
                "Creating {} topic {} in cluster {}",
                em(&topic.config),
                em(&topic.name),
                em(&topic.cluster.to_string())
            ),
            || service.create(&topic),
        )
    }
}

#[instrument(skip(c))]
fn delete_topic(c: &ServiceContainer, args: &TopicNameArgs) -> CliResult<()> {
    let cluster = ClusterId::parse(&args.cluster)?;
    let topic = validate_topic_name(&args.name)?;
    let service = c.topics();
    task(
        format!(
            "Deleting topic {} in cluster {}",
            em(&topic),
            em(&cluster.to_string())
        ),
        || service.delete(&cluster, &topic),
    )
}

#[instrument(skip(c))]
fn assign_key(c: &ServiceContainer, args: &AssignKeyArgs) -> CliResult<()> {
    let cluster = ClusterId::parse(&args.cluster)?;
    let topic = validate_topic_name(&args.topic)?;
    let (keytype, schema) = validate_key_mapping(&args.keytype, args.schema.as_deref())?;
    let mapping = KeyMapping {
        cluster,
        topic,
        keytype,
        schema,
    };

    let message = match (&mapping.keytype, &mapping.schema) {
        (KeyType::Avro, Some(schema)) => format!(
            "Setting key type of topic {} to {} with schema {}",
            em(&mapping.topic),
            em(mapping.keytype.as_str()),
            em(schema)
        ),
        _ => format!(
            "Setting key type of topic {} to {}",
            em(&mapping.topic),
            em(mapping.keytype.as_str())
        ),
    };
    let service = c.topics();
    task(message, || service.assign_key(&mapping))
}

#[instrument(skip(c))]
fn assign_value(c: &ServiceContainer, args: &AssignValueArgs) -> CliResult<()> {
    let mapping = ValueMapping {
        cluster: ClusterId::parse(&args.cluster)?,
        topic: validate_topic_name(&args.topic)?,
        schema: validate_value_schema(Some(&args.schema))?,
    };
    let service = c.topics();
    task(
        format!(
            "Adding value schema {} to topic {}",
            em(&mapping.schema),
            em(&mapping.topic)
        ),
        || service.assign_value(&mapping),
    )
}

#[instrument(skip(c))]
fn preview_topic(c: &ServiceContainer, args: &TopicArgs) -> CliResult<()> {
    let cluster = ClusterId::parse(&args.cluster)?;
    let topic = validate_topic_name(&args.topic)?;
    let preview = c.topics().preview(&cluster, &topic)?;
    output::info(&format::topic_preview(&preview));
    Ok(())
}

#[instrument(skip(c))]
fn list_subscriptions(c: &ServiceContainer, args: &SubscriptionsArgs) -> CliResult<()> {
    let lookup = SubscriptionLookup::from_args(
        args.cluster.as_deref(),
        args.topic.as_deref(),
        args.app.as_deref(),
    )?;
    let text = match c.subscriptions().list(&lookup)? {
        Subscriptions::ByTopic(subs) => format::topic_subscriptions(&subs),
        Subscriptions::ByApp(subs) => format::app_subscriptions(&subs),
    };
    output::info(&text);
    Ok(())
}

#[instrument(skip(c))]
fn subscribe(c: &ServiceContainer, args: &SubscriptionArgs) -> CliResult<()> {
    let change = subscription_change(args)?;
    let service = c.subscriptions();
    task(
        format!(
            "Subscribing {} to topic {} as {}",
            em(&change.app),
            em(&change.topic),
            em(change.role.as_str())
        ),
        || service.subscribe(&change),
    )
}

#[instrument(skip(c))]
fn unsubscribe(c: &ServiceContainer, args: &SubscriptionArgs) -> CliResult<()> {
    let change = subscription_change(args)?;
    let service = c.subscriptions();
    task(
        format!(
            "Unsubscribing {} from topic {}",
            em(&change.app),
            em(&change.topic)
        ),
        || service.unsubscribe(&change),
    )
}

#[instrument(skip(c))]
fn list_schemas(c: &ServiceContainer, args: &ClusterArgs) -> CliResult<()> {
    let cluster = ClusterId::parse(&args.cluster)?;
    let schemas = c.schemas().list(&cluster)?;
    output::info(&format::schemas(&schemas));
    Ok(())
}

#[instrument(skip(c))]
fn list_consumer_groups(c: &ServiceContainer, args: &ClusterArgs) -> CliResult<()> {
    let cluster = ClusterId::parse(&args.cluster)?;
    let groups = c.consumer_groups().list(&cluster)?;
    output::info(&format::consumer_groups(&groups));
    Ok(())
}

#[instrument(skip(c))]
fn consumer_group_offsets(c: &ServiceContainer, args: &ConsumerGroupArgs) -> CliResult<()> {
    let cluster = ClusterId::parse(&args.cluster)?;
    let group = validate_path_name(&args.consumergroup)?;
    let rows = c.consumer_groups().offsets(&cluster, &group)?;
    output::info(&format!("{}\n", format::consumer_group_offsets(&rows)));
    Ok(())
}

#[instrument(skip(c))]
fn consumer_group_members(c: &ServiceContainer, args: &ConsumerGroupArgs) -> CliResult<()> {
    let cluster = ClusterId::parse(&args.cluster)?;
    let group = validate_path_name(&args.consumergroup)?;
    let rows = c.consumer_groups().members(&cluster, &group)?;
    output::info(&format!("{}\n", format::consumer_group_members(&rows)));
    Ok(())
}

#[instrument(skip(c))]
fn seek_consumer_group(c: &ServiceContainer, args: &SeekArgs) -> CliResult<()> {
    let order = seek_order(args)?;
    let service = c.consumer_groups();
    task(
        format!(
            "Seeking consumer group {} on topic {} to {}",
            em(&order.consumer_group),
            em(&order.topic),
            em(order.position.as_str())
        ),
        || service.seek(&order),
    )
}

// ============================================================
// LOCAL COMMANDS
// ============================================================

fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

fn config_command(command: &ConfigCommands, config_file: Option<&Path>) -> CliResult<()> {
    let path = config_file
        .map(Path::to_path_buf)
        .or_else(global_config_path);

    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(config_file)?;
            output::info(&settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Path => {
            match path {
                Some(p) => output::info(&format!("{}\n", p.display())),
                None => output::info("no config directory available\n"),
            }
            Ok(())
        }
        ConfigCommands::Init => {
            let path = path.ok_or_else(|| {
                CliError::InvalidArgs("no config directory available, use --config".to_string())
            })?;
            if path.exists() {
                return Err(CliError::InvalidArgs(format!(
                    "config file already exists: {}",
                    path.display()
                )));
            }
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| InfraError::io(format!("create {}", parent.display()), e))?;
            }
            std::fs::write(&path, Settings::template())
                .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
            output::success(&format!("created {}", path.display()));
            Ok(())
        }
    }
}
