use l2_core::enums::Sentiment;

use crate::markup::{Element, Html, el, void_el};

const WARNING_PATH: &str = "M8 1a7 7 0 1 0 0 14A7 7 0 0 0 8 1Zm-.75 3.5h1.5v5h-1.5v-5Zm0 6.25h1.5v1.5h-1.5v-1.5Z";
const INFO_PATH: &str = "M8 1a7 7 0 1 0 0 14A7 7 0 0 0 8 1Zm-.75 6h1.5v5h-1.5V7Zm0-2.75h1.5v1.5h-1.5v-1.5Z";

/// Fill class for an icon of the given sentiment.
const fn icon_fill(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Bad => "fill-red-300",
        Sentiment::Warning => "fill-yellow-700 dark:fill-yellow-300",
        Sentiment::Good | Sentiment::Neutral => "fill-gray-500",
    }
}

/// Circular warning glyph colored by sentiment.
#[must_use]
pub fn rounded_warning_icon(sentiment: Sentiment, class: &str) -> Html {
    let label = match sentiment {
        Sentiment::Bad => "Warning",
        Sentiment::Warning => "Caution",
        Sentiment::Good | Sentiment::Neutral => "Note",
    };
    svg(&format!("{} {class}", icon_fill(sentiment)), label, WARNING_PATH)
        .attr("data-sentiment", sentiment.as_str())
        .build()
}

/// Gray info glyph used as a tooltip trigger.
#[must_use]
pub fn info_icon(class: &str) -> Html {
    svg(&format!("fill-gray-500 {class}"), "Info", INFO_PATH).build()
}

fn svg(class: &str, label: &str, path: &str) -> Element {
    el("svg")
        .class(class)
        .attr("viewBox", "0 0 16 16")
        .attr("width", "16")
        .attr("height", "16")
        .attr("role", "img")
        .attr("aria-label", label)
        .child(void_el("path").attr("d", path).build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_icon_carries_sentiment() {
        let bad = rounded_warning_icon(Sentiment::Bad, "size-4");
        assert!(bad.as_str().contains(r#"class="fill-red-300 size-4""#));
        assert!(bad.as_str().contains(r#"data-sentiment="bad""#));

        let warning = rounded_warning_icon(Sentiment::Warning, "");
        assert!(warning.as_str().contains(r#"aria-label="Caution""#));
    }
}
