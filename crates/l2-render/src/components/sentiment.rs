use l2_core::enums::Sentiment;

use crate::components::icons::rounded_warning_icon;
use crate::markup::{Html, cn, el};

/// Text color for a sentiment. `good` and `neutral` use default styling.
#[must_use]
pub const fn sentiment_color(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Bad => "text-red-550 dark:text-red-300",
        Sentiment::Warning => "text-yellow-700 dark:text-yellow-300",
        Sentiment::Good | Sentiment::Neutral => "",
    }
}

/// Value colored by its sentiment, with a leading icon for `warning` and
/// `bad`.
#[must_use]
pub fn sentiment_text(sentiment: Sentiment, class: &str, content: Html) -> Html {
    let icon = if sentiment.needs_icon() {
        rounded_warning_icon(sentiment, "inline size-4")
    } else {
        Html::empty()
    };
    el("span")
        .class(&cn(&["flex items-center gap-1", sentiment_color(sentiment), class]))
        .attr("data-sentiment", sentiment.as_str())
        .child(icon)
        .child(content)
        .build()
}
