use l2_core::enums::Sentiment;

use crate::components::sentiment::sentiment_color;
use crate::markup::{Html, cn, el};

/// A formatted value followed by its signed percentage change.
///
/// Up is drawn green with `▲`, down red with `▼`, no change without arrow.
#[must_use]
pub fn value_with_percentage_change(
    value: &str,
    change: f64,
    class: &str,
    change_class: &str,
) -> Html {
    let sentiment = Sentiment::from_change(change);
    let (arrow, direction, color) = match sentiment {
        Sentiment::Good => ("▲ ", "positive", "text-green-300 dark:text-green-450"),
        Sentiment::Bad => ("▼ ", "negative", sentiment_color(Sentiment::Bad)),
        Sentiment::Neutral | Sentiment::Warning => ("", "none", ""),
    };
    let change_text = format!("{arrow}{}", l2_view::format_percentage_change(change));

    el("span")
        .class(&cn(&["flex items-baseline gap-1.5", class]))
        .child(el("span").class("value").text(value).build())
        .child(
            el("span")
                .class(&cn(&[change_class, color]))
                .attr("data-change", direction)
                .text(&change_text)
                .build(),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_change_has_up_indicator() {
        let html = value_with_percentage_change("$1,000,000", 0.05, "font-bold", "");
        let out = html.as_str();
        assert!(out.contains(r#"<span class="value">$1,000,000</span>"#));
        assert!(out.contains(r#"data-change="positive""#));
        assert!(out.contains("▲ +5.00%"));
    }

    #[test]
    fn negative_change_has_down_indicator() {
        let html = value_with_percentage_change("$10", -0.1, "", "text-base");
        assert!(html.as_str().contains(r#"data-change="negative""#));
        assert!(html.as_str().contains("▼ -10.00%"));
    }

    #[test]
    fn zero_change_has_no_arrow() {
        let html = value_with_percentage_change("$10", 0.0, "", "");
        assert!(html.as_str().contains(r#"data-change="none""#));
        assert!(html.as_str().contains(">0.00%</span>"));
    }
}
