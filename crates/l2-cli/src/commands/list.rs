use std::collections::HashSet;

use anyhow::bail;
use l2_catalog::ProjectStore;
use l2_core::entities::ProjectRecord;
use l2_core::enums::{LifecycleStatus, ProjectCategory, ProjectKind};
use l2_render::Html;
use l2_render::components::project_header;
use l2_view::build_entry;
use serde::Serialize;

use crate::cli::root_commands::ListArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ProjectRow<'a> {
    id: &'a str,
    slug: &'a str,
    name: &'a str,
    kind: ProjectKind,
    category: ProjectCategory,
    upcoming: bool,
    lifecycle: Option<LifecycleStatus>,
    created_at: String,
}

impl<'a> From<&'a ProjectRecord> for ProjectRow<'a> {
    fn from(record: &'a ProjectRecord) -> Self {
        Self {
            id: &record.id,
            slug: record.slug(),
            name: record.name(),
            kind: record.kind,
            category: record.display.category,
            upcoming: record.is_upcoming,
            lifecycle: record.lifecycle.as_ref().map(|lifecycle| lifecycle.status),
            created_at: record.created_at.to_string(),
        }
    }
}

/// Handle `l2s list`.
pub fn handle(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let category = args.category.as_deref().map(parse_category).transpose()?;
    let records = select(&ctx.store, category, args.purpose.as_deref());

    if flags.format == OutputFormat::Html {
        let headers = records
            .iter()
            .map(|record| project_header(&build_entry(record, None)));
        println!("{}", Html::concat(headers));
        return Ok(());
    }

    let rows = records.into_iter().map(ProjectRow::from).collect::<Vec<_>>();
    output(&rows, flags.format)
}

fn parse_category(value: &str) -> anyhow::Result<ProjectCategory> {
    match ProjectCategory::parse(value) {
        Some(category) => Ok(category),
        None => bail!("unknown category '{value}'"),
    }
}

fn select<'a>(
    store: &'a ProjectStore,
    category: Option<ProjectCategory>,
    purpose: Option<&str>,
) -> Vec<&'a ProjectRecord> {
    let mut records: Vec<&ProjectRecord> = match category {
        Some(category) => store.filter_by_category(category).collect(),
        None => store.iter().collect(),
    };

    if let Some(purpose) = purpose {
        let tagged: HashSet<&str> = store
            .filter_by_purpose(purpose)
            .map(|record| record.id.as_str())
            .collect();
        records.retain(|record| tagged.contains(record.id.as_str()));
    }

    records
}
