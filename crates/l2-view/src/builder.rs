//! Record + metrics → `ProjectEntry`.

use l2_core::entities::{
    MetricsSnapshot, ProjectEntry, ProjectHeader, ProjectRecord, SentimentValue, TokenBreakdown,
    TokenWarning, TvlBreakdown, TvlHeader, TvlMetrics,
};
use l2_core::enums::Sentiment;

/// Destination shown when a record names none.
pub const DEFAULT_DESTINATION: &str = "Ethereum";

/// Build the per-render view-model for `record`.
///
/// `metrics` is whatever the metrics collaborator supplied, if anything.
/// Upcoming projects never carry tvl, and tvl figures that cannot be shown
/// (negative or non-finite) are dropped rather than reported.
#[must_use]
pub fn build_entry(record: &ProjectRecord, metrics: Option<&MetricsSnapshot>) -> ProjectEntry {
    let tvl = if record.is_upcoming {
        None
    } else {
        metrics
            .and_then(|snapshot| snapshot.tvl.as_ref())
            .and_then(|tvl| tvl_header(&record.id, tvl))
    };

    let destination = metrics
        .and_then(|snapshot| snapshot.destination.clone())
        .unwrap_or_else(|| static_destination(record));

    let validated_by = metrics
        .and_then(|snapshot| snapshot.validated_by.clone())
        .or_else(|| record.technology.validated_by.clone());

    tracing::debug!(
        id = %record.id,
        has_metrics = metrics.is_some(),
        has_tvl = tvl.is_some(),
        "built project entry"
    );

    ProjectEntry {
        id: record.id.clone(),
        is_upcoming: record.is_upcoming,
        header: ProjectHeader {
            name: record.display.name.clone(),
            slug: record.display.slug.clone(),
            description: record.display.description.clone(),
            tvl,
            destination,
            validated_by,
            category: record.display.category,
            lifecycle: record.lifecycle.clone(),
            links: record.display.links.clone(),
        },
        milestones: record.milestones.clone(),
    }
}

/// True iff at least one warning is `bad`.
#[must_use]
pub fn is_any_token_warning_bad(warnings: &[TokenWarning]) -> bool {
    warnings
        .iter()
        .any(|warning| warning.sentiment == Sentiment::Bad)
}

/// Icon variant for the tvl cell: `None` without warnings, `Bad` if any
/// warning is bad, otherwise `Warning`.
#[must_use]
pub fn warning_icon_sentiment(breakdown: &TokenBreakdown) -> Option<Sentiment> {
    if breakdown.warnings.is_empty() {
        None
    } else if is_any_token_warning_bad(&breakdown.warnings) {
        Some(Sentiment::Bad)
    } else {
        Some(Sentiment::Warning)
    }
}

fn tvl_header(id: &str, tvl: &TvlMetrics) -> Option<TvlHeader> {
    if !tvl.total.is_finite() || tvl.total < 0.0 || !tvl.total_change.is_finite() {
        tracing::warn!(
            id,
            total = tvl.total,
            total_change = tvl.total_change,
            "unusable tvl metrics; showing no data"
        );
        return None;
    }

    Some(TvlHeader {
        tvl_breakdown: TvlBreakdown {
            total: tvl.total,
            total_change: tvl.total_change,
        },
        token_breakdown: TokenBreakdown {
            values: tvl.breakdown,
            associated_tokens: tvl.associated_tokens.clone(),
            warnings: tvl.warnings.clone(),
        },
    })
}

fn static_destination(record: &ProjectRecord) -> SentimentValue {
    let destination = &record.technology.destination;
    if destination.is_empty() {
        SentimentValue::new(DEFAULT_DESTINATION, Sentiment::Neutral)
    } else {
        SentimentValue::new(destination.join(", "), Sentiment::Neutral)
    }
}
