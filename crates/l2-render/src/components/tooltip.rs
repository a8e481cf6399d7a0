use crate::markup::{Html, el};

/// Trigger with hover content. Visibility is left to the stylesheet.
#[must_use]
pub fn tooltip(trigger: Html, content: Html) -> Html {
    el("span")
        .class("tooltip group relative")
        .child(
            el("span")
                .class("tooltip-trigger")
                .attr("tabindex", "0")
                .child(trigger)
                .build(),
        )
        .child(
            el("span")
                .class("tooltip-content hidden group-hover:block")
                .attr("role", "tooltip")
                .child(content)
                .build(),
        )
        .build()
}
