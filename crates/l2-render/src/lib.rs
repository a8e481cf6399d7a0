//! # l2-render
//!
//! Stateless presentation components that turn view-models into escaped
//! HTML fragments.
//!
//! Every component is a pure function: no I/O and no shared state. The same
//! inputs always yield byte-identical output. Styling is expressed only as
//! class names; stylesheets live elsewhere.
//!
//! Sentiment → visuals:
//! - `bad`: warning icon, red text
//! - `warning`: caution icon, yellow text
//! - `good` / `neutral`: default text

pub mod components;
mod context;
pub mod markup;

pub use context::RenderContext;
pub use markup::Html;

use l2_core::entities::ProjectEntry;

/// Title of the timeline section on project pages.
pub const MILESTONES_TITLE: &str = "Milestones & Incidents";

/// Header, stats panel, and milestones for one project.
#[must_use]
pub fn render_project(ctx: &RenderContext, entry: &ProjectEntry) -> Html {
    markup::el("article")
        .class("project")
        .attr("data-slug", &entry.header.slug)
        .child(components::project_header(entry))
        .child(components::project_stats(ctx, entry))
        .child(components::milestones_section(
            ctx,
            "milestones-and-incidents",
            MILESTONES_TITLE,
            1,
            &entry.milestones,
        ))
        .build()
}
