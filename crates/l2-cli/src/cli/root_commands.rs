use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::cli::subcommands::StoriesCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List catalog projects.
    List(ListArgs),
    /// Show one project by id or slug.
    Show(ShowArgs),
    /// Component stories.
    Stories {
        #[command(subcommand)]
        action: StoriesCommands,
    },
    /// Print the JSON Schema of an input type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Only projects of this category (e.g. "ZK Rollup").
    #[arg(long)]
    pub category: Option<String>,
    /// Only projects tagged with this purpose.
    #[arg(long)]
    pub purpose: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    /// Project id or slug.
    pub key: String,
    /// JSON metrics snapshot to merge into the entry.
    #[arg(long)]
    pub metrics: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum)]
    pub kind: SchemaKind,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaKind {
    Record,
    Metrics,
    Entry,
    Milestone,
}
