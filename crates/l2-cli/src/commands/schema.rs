use l2_core::entities::{MetricsSnapshot, Milestone, ProjectEntry, ProjectRecord};
use schemars::{Schema, schema_for};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaKind};

/// Handle `l2s schema`. Always prints JSON.
pub fn handle(args: &SchemaArgs, _flags: &GlobalFlags) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&schema(args.kind))?);
    Ok(())
}

fn schema(kind: SchemaKind) -> Schema {
    match kind {
        SchemaKind::Record => schema_for!(ProjectRecord),
        SchemaKind::Metrics => schema_for!(MetricsSnapshot),
        SchemaKind::Entry => schema_for!(ProjectEntry),
        SchemaKind::Milestone => schema_for!(Milestone),
    }
}
