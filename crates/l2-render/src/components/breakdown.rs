use l2_core::entities::{TokenValues, TokenWarning};
use l2_core::enums::Sentiment;
use l2_view::{TokenShares, format_percentage, token_shares};

use crate::components::icons::rounded_warning_icon;
use crate::components::sentiment::sentiment_color;
use crate::markup::{Html, cn, el};

const SEGMENT_CLASSES: [&str; 4] = [
    "bg-associated",
    "bg-ether",
    "bg-stablecoin",
    "bg-other",
];

/// Thin horizontal bar split by asset bucket.
#[must_use]
pub fn token_breakdown(values: &TokenValues, class: &str) -> Html {
    let shares = token_shares(values);
    let segments = shares
        .labelled()
        .into_iter()
        .zip(SEGMENT_CLASSES)
        .filter(|((_, share), _)| *share > 0.0)
        .map(|((label, share), segment_class)| {
            el("div")
                .class(&cn(&["h-full", segment_class]))
                .attr("style", &format!("width: {}", format_percentage(share)))
                .attr("title", label)
                .build()
        });

    el("div")
        .class(&cn(&["token-breakdown flex overflow-hidden rounded-full bg-gray-200", class]))
        .attr("role", "img")
        .attr("aria-label", "Token breakdown")
        .children(segments)
        .build()
}

/// Hover content for the tvl cell: share per bucket, associated token
/// symbols, then each warning with its icon.
#[must_use]
pub fn token_breakdown_tooltip_content(
    values: &TokenValues,
    associated_token_symbols: &[String],
    tvl_warnings: &[TokenWarning],
) -> Html {
    let shares: TokenShares = token_shares(values);

    let rows = shares
        .labelled()
        .into_iter()
        .zip(SEGMENT_CLASSES)
        .map(|((label, share), swatch)| {
            let label = if label == "Associated tokens" && !associated_token_symbols.is_empty() {
                format!("{label} ({})", associated_token_symbols.join(", "))
            } else {
                label.to_string()
            };
            el("li")
                .class("flex items-center justify-between gap-4")
                .child(
                    el("span")
                        .class("flex items-center gap-1")
                        .child(el("span").class(&cn(&["size-3 rounded-sm", swatch])).build())
                        .text(&label)
                        .build(),
                )
                .child(el("span").class("font-bold").text(&format_percentage(share)).build())
                .build()
        });

    let warnings = tvl_warnings.iter().map(|warning| {
        el("div")
            .class(&cn(&[
                "mt-2 flex gap-2 rounded-md p-2 text-md",
                warning_box(warning.sentiment),
            ]))
            .attr("data-sentiment", warning.sentiment.as_str())
            .child(rounded_warning_icon(warning.sentiment, "size-5 shrink-0"))
            .child(
                el("span")
                    .class(sentiment_color(warning.sentiment))
                    .text(&warning.message)
                    .build(),
            )
            .build()
    });

    el("div")
        .class("token-breakdown-tooltip")
        .child(el("ul").class("flex flex-col gap-1").children(rows).build())
        .children(warnings)
        .build()
}

const fn warning_box(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Bad => "bg-red-300/20",
        Sentiment::Warning => "bg-yellow-700/20",
        Sentiment::Good | Sentiment::Neutral => "bg-gray-100",
    }
}
