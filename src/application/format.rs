//! Response formatters
//!
//! Pure functions from decoded API records to display text. Nothing here
//! emits color; `cli::output` decides how text reaches the terminal.

use chrono::{DateTime, Local};
use comfy_table::{ContentArrangement, Table};
use itertools::Itertools;
use serde::Serialize;
use serde_json::Value;

use crate::domain::{
    AppSubscription, Cluster, ConsumerGroup, ConsumerGroupMember, ConsumerGroupOffset, Named,
    PreviewMessage, Subscription, Topic, TopicConfigType, TopicPreview,
};

/// Placeholder for a missing field.
pub const MISSING: &str = "-";

const MS_PER_HOUR: f64 = 3_600_000.0;
const MS_PER_DAY: i64 = 86_400_000;

/// Raw field name → table header.
pub type Columns = [(&'static str, &'static str)];

pub const OFFSET_COLUMNS: &Columns = &[
    ("topic", "Topic"),
    ("partition", "Partition"),
    ("currentOffset", "Current Offset"),
    ("logEndOffset", "Log End Offset"),
    ("lag", "Lag"),
    ("consumerId", "Consumer ID"),
    ("host", "Host"),
    ("clientId", "Client ID"),
];

pub const MEMBER_COLUMNS: &Columns = &[
    ("consumerId", "Consumer ID"),
    ("host", "Host"),
    ("clientId", "Client ID"),
    ("partitions", "Partitions"),
];

pub const END_OFFSET_COLUMNS: &Columns = &[
    ("topic", "Topic"),
    ("partition", "Partition"),
    ("offset", "End Offset"),
];

pub const MESSAGE_COLUMNS: &Columns = &[
    ("topic", "Topic"),
    ("partition", "Partition"),
    ("offset", "Offset"),
    ("schemaName", "Schema"),
    ("key", "Key"),
    ("value", "Value"),
];

// ============================================================
// FIELD HELPERS
// ============================================================

/// Sort by `name`: case-sensitive, ascending, ties keep their order.
pub fn sorted_by_name<T: Named>(items: &[T]) -> Vec<&T> {
    items
        .iter()
        .sorted_by(|a, b| a.name().cmp(b.name()))
        .collect()
}

/// Retention of a topic config type, rounded to whole hours.
pub fn type_retention(retention_ms: Option<i64>) -> String {
    match retention_ms {
        None => MISSING.to_string(),
        Some(ms) if ms <= 0 => "infinite".to_string(),
        Some(ms) => format!("{} hours", (ms as f64 / MS_PER_HOUR).round() as i64),
    }
}

/// Retention of a topic, floored to whole days.
pub fn topic_retention(retention_ms: Option<i64>) -> String {
    match retention_ms {
        None => MISSING.to_string(),
        Some(ms) if ms <= 0 => "infinite".to_string(),
        Some(ms) => format!("{} days", ms / MS_PER_DAY),
    }
}

/// RFC 3339 timestamp in local time; anything else is shown verbatim.
pub fn timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| {
            t.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|_| raw.to_string())
}

/// Loose JSON value as text: arrays are comma-joined, null is the placeholder.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => MISSING.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(value_text).join(", "),
        other => other.to_string(),
    }
}

/// Preview payload re-encoded as pretty JSON.
///
/// A string holding JSON is decoded first; a string that is not JSON is kept as is.
pub fn pretty_payload(value: &Value) -> String {
    let decoded = match value {
        Value::String(s) => match serde_json::from_str::<Value>(s) {
            Ok(inner) => inner,
            Err(_) => return s.clone(),
        },
        other => other.clone(),
    };
    serde_json::to_string_pretty(&decoded).unwrap_or_else(|_| decoded.to_string())
}

fn opt<T: ToString>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| MISSING.to_string())
}

fn opt_value(value: &Option<Value>) -> String {
    value.as_ref().map(value_text).unwrap_or_else(|| MISSING.to_string())
}

/// Labelled block, one `  Label: value` line per field, followed by a blank line.
fn record(fields: &[(&str, String)]) -> String {
    let mut out = String::new();
    for (label, value) in fields {
        out.push_str(&format!("  {label}: {value}\n"));
    }
    out.push('\n');
    out
}

fn empty(things: &str) -> String {
    format!("No {things} found.\n")
}

/// Render rows as a table; absent fields show as `-`, numbers are stringified.
pub fn table<T: Serialize>(rows: &[T], columns: &Columns) -> String {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(columns.iter().map(|(_, header)| *header));

    for row in rows {
        let value = serde_json::to_value(row).unwrap_or(Value::Null);
        table.add_row(columns.iter().map(|(field, _)| cell(value.get(*field))));
    }
    table.to_string()
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => MISSING.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
    }
}

// ============================================================
// RESOURCE FORMATTERS
// ============================================================

pub fn clusters(items: &[Cluster]) -> String {
    if items.is_empty() {
        return empty("clusters");
    }
    sorted_by_name(items)
        .into_iter()
        .map(|c| {
            record(&[
                ("Name", c.name.clone()),
                ("Region", opt(&c.region_name)),
                ("Tags", opt_value(&c.tags)),
            ])
        })
        .collect()
}

pub fn topic_types(items: &[TopicConfigType]) -> String {
    if items.is_empty() {
        return empty("topic types");
    }
    sorted_by_name(items)
        .into_iter()
        .map(|t| {
            record(&[
                ("Name", t.name.clone()),
                (
                    "Description",
                    t.description.clone().unwrap_or_else(|| "none".to_string()),
                ),
                ("Partitions", opt(&t.partitions)),
                ("Replicas", opt(&t.replicas)),
                ("Cleanup policy", opt(&t.cleanup_policy)),
                ("Retention time", type_retention(t.retention_ms)),
            ])
        })
        .collect()
}

fn topic_fields(t: &Topic) -> Vec<(&'static str, String)> {
    vec![
        ("Name", t.name.clone()),
        (
            "Created",
            t.created
                .as_deref()
                .map(timestamp)
                .unwrap_or_else(|| MISSING.to_string()),
        ),
        ("Cluster", opt(&t.cluster)),
        ("Region", opt(&t.region)),
        ("Organization", opt(&t.organization)),
        ("Type", opt(&t.config)),
        ("Partitions", opt(&t.partitions)),
        ("Replicas", opt(&t.replicas)),
        ("Retention time", topic_retention(t.retention_ms)),
        ("Cleanup policy", opt(&t.cleanup_policy)),
    ]
}

pub fn topics(items: &[Topic]) -> String {
    if items.is_empty() {
        return empty("topics");
    }
    sorted_by_name(items)
        .into_iter()
        .map(|t| {
            let mut fields = topic_fields(t);
            if let Some(description) = &t.description {
                fields.push(("Description", description.clone()));
            }
            record(&fields)
        })
        .collect()
}

/// Full detail of one topic, including its schema mappings and subscriptions.
pub fn topic_detail(t: &Topic) -> String {
    let mut fields = topic_fields(t);
    fields.push(("Key type", opt_value(&t.key_mapping)));
    fields.push(("Allowed schemas", opt_value(&t.schemas)));
    if let Some(description) = &t.description {
        fields.push(("Description", description.clone()));
    }
    let mut out = record(&fields);

    if !t.subscriptions.is_empty() {
        out.push_str("  Subscriptions:\n");
        for sub in t
            .subscriptions
            .iter()
            .sorted_by(|a, b| a.app_display().cmp(&b.app_display()))
        {
            let mut line = format!("    {} ({})", sub.app_display(), opt(&sub.role));
            if let Some(group) = &sub.consumer_group_name {
                line.push_str(&format!(", consumer group: {group}"));
            }
            out.push_str(&line);
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

pub fn topic_subscriptions(items: &[Subscription]) -> String {
    if items.is_empty() {
        return empty("subscriptions");
    }
    items
        .iter()
        .sorted_by(|a, b| a.app_display().cmp(&b.app_display()))
        .map(|s| {
            let mut fields = vec![
                ("ID", opt(&s.id)),
                ("App", s.app_display()),
                ("Role", opt(&s.role)),
            ];
            if let Some(group) = &s.consumer_group_name {
                fields.push(("Consumer group", group.clone()));
            }
            fields.push((
                "Created",
                s.created
                    .as_deref()
                    .map(timestamp)
                    .unwrap_or_else(|| MISSING.to_string()),
            ));
            record(&fields)
        })
        .collect()
}

pub fn app_subscriptions(items: &[AppSubscription]) -> String {
    if items.is_empty() {
        return empty("subscriptions");
    }
    items
        .iter()
        .sorted_by(|a, b| a.topic_name.cmp(&b.topic_name))
        .map(|s| {
            let mut fields = vec![("Topic", opt(&s.topic_name))];
            if let Some(cluster) = &s.cluster_name {
                fields.push(("Cluster", cluster.clone()));
            }
            fields.push(("Role", opt(&s.role)));
            if let Some(group) = &s.consumer_group_name {
                fields.push(("Consumer group", group.clone()));
            }
            record(&fields)
        })
        .collect()
}

pub fn schemas(names: &[String]) -> String {
    if names.is_empty() {
        return empty("schemas");
    }
    names.iter().sorted().map(|n| format!("{n}\n")).collect()
}

pub fn consumer_groups(items: &[ConsumerGroup]) -> String {
    if items.is_empty() {
        return empty("consumer groups");
    }
    sorted_by_name(items)
        .into_iter()
        .map(|g| format!("{}\n", g.name))
        .collect()
}

pub fn consumer_group_offsets(rows: &[ConsumerGroupOffset]) -> String {
    if rows.is_empty() {
        return empty("offsets");
    }
    table(rows, OFFSET_COLUMNS)
}

pub fn consumer_group_members(rows: &[ConsumerGroupMember]) -> String {
    if rows.is_empty() {
        return empty("members");
    }
    table(rows, MEMBER_COLUMNS)
}

/// Messages ordered by partition, then offset, with pretty-printed values.
pub fn preview_rows(messages: &[PreviewMessage]) -> Vec<PreviewMessage> {
    messages
        .iter()
        .sorted_by_key(|m| (m.partition, m.offset))
        .map(|m| PreviewMessage {
            value: m.value.as_ref().map(|v| Value::String(pretty_payload(v))),
            ..m.clone()
        })
        .collect()
}

/// End offsets table followed by the preview messages table.
pub fn topic_preview(preview: &TopicPreview) -> String {
    let mut out = String::from("End offsets\n");
    if preview.end_offsets.is_empty() {
        out.push_str(&empty("end offsets"));
    } else {
        out.push_str(&table(&preview.end_offsets, END_OFFSET_COLUMNS));
        out.push('\n');
    }
    out.push_str("\nMessages\n");
    if preview.preview_messages.is_empty() {
        out.push_str(&empty("messages"));
    } else {
        out.push_str(&table(&preview_rows(&preview.preview_messages), MESSAGE_COLUMNS));
        out.push('\n');
    }
    out
}
