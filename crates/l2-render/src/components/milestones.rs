use l2_core::entities::Milestone;
use l2_core::enums::MilestoneType;

use crate::context::RenderContext;
use crate::markup::{Html, cn, el};

/// Timeline of milestones and incidents.
///
/// Entries after `ctx.labels.collapse_milestones_after` are folded into a
/// `<details>` element; a threshold of 0 folds every entry. An empty list
/// renders nothing.
#[must_use]
pub fn milestones_section(
    ctx: &RenderContext,
    id: &str,
    title: &str,
    section_order: u32,
    milestones: &[Milestone],
) -> Html {
    if milestones.is_empty() {
        return Html::empty();
    }

    let visible = ctx.labels.collapse_milestones_after.min(milestones.len());
    let (shown, folded) = milestones.split_at(visible);
    let shown = if shown.is_empty() {
        Html::empty()
    } else {
        timeline(shown)
    };

    let folded = if folded.is_empty() {
        Html::empty()
    } else {
        el("details")
            .class("milestones-more")
            .child(
                el("summary")
                    .text(&format!("Show {} more", folded.len()))
                    .build(),
            )
            .child(timeline(folded))
            .build()
    };

    el("section")
        .class("milestones-section")
        .attr("id", id)
        .child(
            el("h2")
                .class("text-2xl font-bold")
                .child(
                    el("span")
                        .class("section-order")
                        .text(&format!("{section_order}. "))
                        .build(),
                )
                .text(title)
                .build(),
        )
        .child(shown)
        .child(folded)
        .build()
}

fn timeline(milestones: &[Milestone]) -> Html {
    el("ol")
        .class("timeline flex flex-col gap-4")
        .children(milestones.iter().map(milestone_item))
        .build()
}

fn milestone_item(milestone: &Milestone) -> Html {
    let kind_class = match milestone.kind {
        MilestoneType::General => "milestone-general",
        MilestoneType::Incident => "milestone-incident text-red-550",
    };
    let description = milestone.description.as_deref().map_or_else(Html::empty, |text| {
        el("p").class("text-sm").text(text).build()
    });

    el("li")
        .class(&cn(&["milestone", kind_class]))
        .attr("data-type", milestone.kind.as_str())
        .child(
            el("time")
                .attr("datetime", &milestone.date.format("%Y-%m-%d").to_string())
                .text(&milestone.date.format("%Y %b %-d").to_string())
                .build(),
        )
        .child(el("h3").class("font-bold").text(&milestone.name).build())
        .child(description)
        .child(
            el("a")
                .class("text-blue-700 underline")
                .attr("href", &milestone.link)
                .text("Learn more")
                .build(),
        )
        .build()
}
