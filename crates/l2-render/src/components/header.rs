use l2_core::entities::{Lifecycle, ProjectEntry, ProjectLinks};
use l2_core::enums::{LifecycleStatus, Sentiment};

use crate::components::icons::rounded_warning_icon;
use crate::markup::{Html, el};

/// Name, description, lifecycle notice, and external links.
#[must_use]
pub fn project_header(entry: &ProjectEntry) -> Html {
    let header = &entry.header;
    let upcoming = if entry.is_upcoming {
        el("span")
            .class("upcoming-badge rounded bg-purple-100 px-1.5 text-xs font-medium text-purple-800")
            .text("Upcoming")
            .build()
    } else {
        Html::empty()
    };

    el("header")
        .class("project-header flex flex-col gap-4")
        .child(
            el("div")
                .class("flex items-center gap-2")
                .child(el("h1").class("text-3xl font-bold").text(&header.name).build())
                .child(upcoming)
                .build(),
        )
        .child(
            header
                .lifecycle
                .as_ref()
                .map_or_else(Html::empty, lifecycle_notice),
        )
        .child(el("p").class("text-base").text(&header.description).build())
        .child(links_list(&header.links))
        .build()
}

fn lifecycle_notice(lifecycle: &Lifecycle) -> Html {
    if lifecycle.status == LifecycleStatus::Active {
        return Html::empty();
    }
    let sentiment = match lifecycle.status {
        LifecycleStatus::Defunct => Sentiment::Bad,
        _ => Sentiment::Warning,
    };
    let mut message = lifecycle.status.label().to_string();
    if let Some(note) = &lifecycle.note {
        message.push_str(": ");
        message.push_str(note);
    }
    let successor = lifecycle.successor.as_deref().map_or_else(Html::empty, |id| {
        el("a")
            .class("underline")
            .attr("href", &format!("/projects/{id}"))
            .text("See successor")
            .build()
    });

    el("div")
        .class("lifecycle-notice flex items-center gap-2 rounded-md p-2")
        .attr("data-lifecycle", lifecycle.status.as_str())
        .child(rounded_warning_icon(sentiment, "size-5"))
        .child(el("span").text(&message).build())
        .child(successor)
        .build()
}

fn links_list(links: &ProjectLinks) -> Html {
    if links.is_empty() {
        return Html::empty();
    }
    let items = links.iter().flat_map(|(kind, urls)| {
        urls.iter().map(move |url| {
            el("li")
                .child(
                    el("a")
                        .class("project-link")
                        .attr("href", url)
                        .attr("rel", "noopener noreferrer")
                        .attr("target", "_blank")
                        .attr("data-kind", kind.as_str())
                        .text(kind.label())
                        .build(),
                )
                .build()
        })
    });
    el("ul")
        .class("project-links flex flex-wrap gap-2")
        .children(items)
        .build()
}
