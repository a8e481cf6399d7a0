use crate::context::RenderContext;
use crate::markup::{Html, el};

/// Placeholder shown wherever a value is unavailable.
#[must_use]
pub fn no_data_badge(ctx: &RenderContext) -> Html {
    el("span")
        .class("no-data-badge rounded bg-gray-200 px-1.5 py-px text-xs font-medium uppercase")
        .attr("data-role", "no-data")
        .text(&ctx.labels.no_data_label)
        .build()
}
