use clap::Subcommand;

/// Component stories.
#[derive(Clone, Debug, Subcommand)]
pub enum StoriesCommands {
    /// List components and their stories.
    List,
    /// Render one story.
    Render {
        /// Component name, e.g. project-stats.
        component: String,
        /// Story name, e.g. Default.
        story: String,
    },
}
