use l2_config::L2Config;
use l2_render::RenderContext;
use l2_stories::StoryBook;
use serde::Serialize;

use crate::cli::subcommands::StoriesCommands;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

#[derive(Debug, Serialize)]
struct StorySetRow {
    component: &'static str,
    stories: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
struct RenderedStory<'a> {
    component: &'a str,
    story: &'static str,
    html: String,
}

/// Handle `l2s stories`.
pub fn handle(
    action: &StoriesCommands,
    config: &L2Config,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let book = StoryBook::new();

    match action {
        StoriesCommands::List => output(&rows(&book), flags.format),
        StoriesCommands::Render { component, story } => {
            let ctx = RenderContext::from_config(config);
            let html = book.render_with(&ctx, component, story)?;

            if flags.format == OutputFormat::Json {
                let story = book.story(component, story)?.name;
                return output(
                    &RenderedStory {
                        component,
                        story,
                        html: html.into_string(),
                    },
                    flags.format,
                );
            }

            println!("{html}");
            Ok(())
        }
    }
}

fn rows(book: &StoryBook) -> Vec<StorySetRow> {
    book.sets()
        .iter()
        .map(|set| StorySetRow {
            component: set.meta.component,
            stories: set.names().collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use l2_stories::StoryBook;

    use super::rows;

    #[test]
    fn rows_list_every_story() {
        let rows = rows(&StoryBook::new());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].component, "token-breakdown");
        assert_eq!(rows[1].stories, vec!["Default", "Empty"]);
    }
}
