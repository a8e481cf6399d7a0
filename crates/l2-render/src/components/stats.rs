use l2_core::entities::{ProjectEntry, SentimentValue, TvlHeader};
use l2_view::{format_currency, warning_icon_sentiment};

use crate::components::badge::no_data_badge;
use crate::components::breakdown::{token_breakdown, token_breakdown_tooltip_content};
use crate::components::icons::{info_icon, rounded_warning_icon};
use crate::components::sentiment::sentiment_text;
use crate::components::tooltip::tooltip;
use crate::components::value::value_with_percentage_change;
use crate::context::RenderContext;
use crate::markup::{Html, cn, el};

const VALUE_CLASS: &str = "text-lg font-medium !leading-none md:text-xl md:font-bold";

/// One labelled cell of the stats panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectStat {
    pub title: String,
    pub value: Html,
    pub tooltip: Option<String>,
    pub class: String,
}

impl ProjectStat {
    #[must_use]
    pub fn new(title: impl Into<String>, value: Html) -> Self {
        Self {
            title: title.into(),
            value,
            tooltip: None,
            class: String::new(),
        }
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }
}

/// Lay out title, optional info tooltip, and value.
#[must_use]
pub fn project_stat(stat: &ProjectStat) -> Html {
    let info = stat.tooltip.as_deref().map_or_else(Html::empty, |text| {
        tooltip(
            info_icon("mt-0.5 md:size-3.5"),
            Html::text(text),
        )
    });

    el("li")
        .class(&cn(&[
            "flex items-center justify-between md:flex-col md:items-start md:justify-start md:gap-3",
            &stat.class,
        ]))
        .child(
            el("div")
                .class("flex flex-row gap-1.5")
                .child(
                    el("span")
                        .class("text-xs text-gray-500 dark:text-gray-600")
                        .text(&stat.title)
                        .build(),
                )
                .child(info)
                .build(),
        )
        .child(el("span").class(VALUE_CLASS).child(stat.value.clone()).build())
        .build()
}

/// The four-cell panel: total value locked, destination, validator, type.
#[must_use]
pub fn project_stats(ctx: &RenderContext, entry: &ProjectEntry) -> Html {
    let header = &entry.header;

    let tvl_value = entry
        .displayable_tvl()
        .map_or_else(|| no_data_badge(ctx), |tvl| tvl_cell(ctx, tvl));

    let validated_by = header
        .validated_by
        .as_ref()
        .map_or_else(|| no_data_badge(ctx), sentiment_value);

    let stats = [
        ProjectStat::new("Total value locked", tvl_value).with_tooltip(&ctx.labels.tvl_tooltip),
        ProjectStat::new("Destination", sentiment_value(&header.destination)),
        ProjectStat::new("Validated by", validated_by),
        ProjectStat::new("Type", Html::text(header.category.as_str())),
    ];

    el("ul")
        .class("project-stats grid grid-cols-1 gap-3 rounded-lg bg-gray-100 dark:bg-zinc-900 md:grid-cols-4 md:px-6 md:py-5")
        .attr("data-project", &entry.id)
        .children(stats.iter().map(project_stat))
        .build()
}

fn sentiment_value(value: &SentimentValue) -> Html {
    sentiment_text(value.sentiment, VALUE_CLASS, Html::text(&value.value))
}

fn tvl_cell(ctx: &RenderContext, tvl: &TvlHeader) -> Html {
    let breakdown = &tvl.token_breakdown;
    let icon = warning_icon_sentiment(breakdown)
        .map_or_else(Html::empty, |sentiment| rounded_warning_icon(sentiment, "size-4"));

    let trigger = el("div")
        .child(
            el("span")
                .class("flex items-center gap-2")
                .child(icon)
                .child(value_with_percentage_change(
                    &format_currency(tvl.tvl_breakdown.total, &ctx.format),
                    tvl.tvl_breakdown.total_change,
                    "font-bold",
                    "text-base font-medium",
                ))
                .build(),
        )
        .child(token_breakdown(&breakdown.values, "h-[3px] w-full"))
        .build();

    tooltip(
        trigger,
        token_breakdown_tooltip_content(
            &breakdown.values,
            &breakdown.associated_tokens,
            &breakdown.warnings,
        ),
    )
}
