use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::List(args) => commands::list::handle(args, ctx, flags),
        Commands::Show(args) => commands::show::handle(args, ctx, flags),
        Commands::Stories { .. } | Commands::Schema(_) => {
            unreachable!("stories/schema are pre-dispatched in main")
        }
    }
}
