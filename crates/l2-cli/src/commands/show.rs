use std::path::Path;

use anyhow::Context;
use l2_core::entities::{MetricsSnapshot, ProjectEntry};
use l2_core::enums::{LifecycleStatus, ProjectCategory};
use l2_render::{RenderContext, render_project};
use l2_view::{build_entry, format_currency, format_percentage_change};
use serde::Serialize;

use crate::cli::root_commands::ShowArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

/// Flat view of an entry for table output.
#[derive(Debug, Serialize)]
struct EntrySummary<'a> {
    id: &'a str,
    name: &'a str,
    slug: &'a str,
    category: ProjectCategory,
    upcoming: bool,
    tvl: String,
    tvl_change: Option<String>,
    destination: &'a str,
    validated_by: &'a str,
    lifecycle: Option<LifecycleStatus>,
}

impl<'a> EntrySummary<'a> {
    fn new(entry: &'a ProjectEntry, render: &'a RenderContext) -> Self {
        let no_data = render.labels.no_data_label.as_str();
        let tvl = entry.displayable_tvl();

        Self {
            id: &entry.id,
            name: &entry.header.name,
            slug: &entry.header.slug,
            category: entry.header.category,
            upcoming: entry.is_upcoming,
            tvl: tvl.map_or_else(
                || no_data.to_string(),
                |tvl| format_currency(tvl.tvl_breakdown.total, &render.format),
            ),
            tvl_change: tvl.map(|tvl| format_percentage_change(tvl.tvl_breakdown.total_change)),
            destination: &entry.header.destination.value,
            validated_by: entry
                .header
                .validated_by
                .as_ref()
                .map_or(no_data, |validated_by| validated_by.value.as_str()),
            lifecycle: entry.header.lifecycle.as_ref().map(|lifecycle| lifecycle.status),
        }
    }
}

/// Handle `l2s show`.
pub fn handle(args: &ShowArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let record = ctx.store.resolve(&args.key).into_result()?;
    let metrics = args.metrics.as_deref().map(read_metrics).transpose()?;
    let entry = build_entry(record, metrics.as_ref());

    match flags.format {
        OutputFormat::Html => {
            println!("{}", render_project(&ctx.render, &entry));
            Ok(())
        }
        OutputFormat::Json => output(&entry, flags.format),
        OutputFormat::Table => output(&EntrySummary::new(&entry, &ctx.render), flags.format),
    }
}

fn read_metrics(path: &Path) -> anyhow::Result<MetricsSnapshot> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read metrics file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse metrics file {}", path.display()))
}
