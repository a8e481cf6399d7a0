use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `l2s` binary.
#[derive(Debug, Parser)]
#[command(name = "l2s", version, about = "Layer 2 project catalog and presentation toolbox")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, html, table
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra config file layered above the user and project config
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::{CommandFactory, Parser};

    use super::subcommands::StoriesCommands;
    use super::{Cli, Commands, GlobalFlags, OutputFormat};
    use crate::cli::root_commands::SchemaKind;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["l2s", "--format", "table", "--verbose", "list"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["l2s", "show", "frame", "--format", "html", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Html);
        assert!(cli.quiet);
        let Commands::Show(args) = cli.command else {
            panic!("expected show");
        };
        assert_eq!(args.key, "frame");
        assert!(args.metrics.is_none());
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["l2s", "--format", "xml", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn output_format_accepts_all_supported_values() {
        for value in ["json", "html", "table"] {
            let cli = Cli::try_parse_from(["l2s", "--format", value, "list"])
                .expect("cli should parse");
            assert!(matches!(cli.command, Commands::List(_)));
        }
    }

    #[test]
    fn list_filters_parse() {
        let cli = Cli::try_parse_from([
            "l2s",
            "list",
            "--category",
            "Optimistic Rollup",
            "--purpose",
            "NFT",
        ])
        .expect("cli should parse");
        let Commands::List(args) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.category.as_deref(), Some("Optimistic Rollup"));
        assert_eq!(args.purpose.as_deref(), Some("NFT"));
    }

    #[test]
    fn stories_render_takes_component_and_story() {
        let cli = Cli::try_parse_from(["l2s", "stories", "render", "project-stats", "Upcoming"])
            .expect("cli should parse");
        let Commands::Stories {
            action: StoriesCommands::Render { component, story },
        } = cli.command
        else {
            panic!("expected stories render");
        };
        assert_eq!(component, "project-stats");
        assert_eq!(story, "Upcoming");
    }

    #[test]
    fn schema_rejects_unknown_kind() {
        assert!(Cli::try_parse_from(["l2s", "schema", "widget"]).is_err());
        let cli = Cli::try_parse_from(["l2s", "schema", "metrics"]).expect("cli should parse");
        let Commands::Schema(args) = cli.command else {
            panic!("expected schema");
        };
        assert_eq!(args.kind, SchemaKind::Metrics);
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["l2s", "--config", "/tmp/l2s.toml", "list"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.config.as_deref(), Some(Path::new("/tmp/l2s.toml")));
        assert_eq!(flags.format, OutputFormat::Json);
    }
}
