//! Header and milestones rendering.

use l2_catalog::ProjectStore;
use l2_render::components::{milestones_section, project_header};
use l2_render::{MILESTONES_TITLE, RenderContext, render_project};
use l2_view::build_entry;

#[test]
fn defunct_project_shows_lifecycle_notice() {
    let store = ProjectStore::builtin().unwrap();
    let entry = build_entry(store.get_by_id("frame").unwrap(), None);

    let html = project_header(&entry);
    let out = html.as_str();
    assert!(out.contains(r#"data-lifecycle="defunct""#));
    assert!(out.contains("Defunct: Frame team bought by Igloo Inc."));
    assert!(out.contains(">Upcoming</span>"));
    assert!(out.contains(r#"href="https://frame.xyz/""#));
    assert!(out.contains(r#"data-kind="social_media""#));
}

#[test]
fn active_project_has_no_notice() {
    let store = ProjectStore::builtin().unwrap();
    let entry = build_entry(store.get_by_id("arbitrum").unwrap(), None);
    let html = project_header(&entry);
    assert!(!html.as_str().contains("lifecycle-notice"));
    assert!(!html.as_str().contains("Upcoming"));
}

#[test]
fn milestones_collapse_after_configured_count() {
    let store = ProjectStore::builtin().unwrap();
    let entry = build_entry(store.get_by_id("arbitrum").unwrap(), None);
    let ctx = RenderContext::default();

    let html = milestones_section(&ctx, "milestones", MILESTONES_TITLE, 1, &entry.milestones);
    let out = html.as_str();
    let details = out.find("<details").expect("folded entries");
    assert!(out[..details].contains("Creation of Arbitrum One"));
    assert!(out[..details].contains("Arbitrum Odyssey begins"));
    assert!(out[details..].contains("Nitro upgrade is activated"));
    assert!(out.contains("Show 1 more"));
    assert!(out.contains(r#"datetime="2019-11-14""#));
    assert!(out.contains("Milestones &amp; Incidents"));
}

#[test]
fn milestones_expand_when_limit_is_high() {
    let store = ProjectStore::builtin().unwrap();
    let entry = build_entry(store.get_by_id("arbitrum").unwrap(), None);
    let mut ctx = RenderContext::default();
    ctx.labels.collapse_milestones_after = 10;

    let html = milestones_section(&ctx, "milestones", MILESTONES_TITLE, 1, &entry.milestones);
    assert!(!html.as_str().contains("<details"));
}

#[test]
fn zero_limit_folds_every_milestone() {
    let store = ProjectStore::builtin().unwrap();
    let entry = build_entry(store.get_by_id("arbitrum").unwrap(), None);
    let mut ctx = RenderContext::default();
    ctx.labels.collapse_milestones_after = 0;

    let html = milestones_section(&ctx, "milestones", MILESTONES_TITLE, 1, &entry.milestones);
    let out = html.as_str();
    let details = out.find("<details").expect("folded entries");
    assert!(!out[..details].contains("<ol"));
    assert!(out[details..].contains("Creation of Arbitrum One"));
    assert!(out.contains("Show 3 more"));
}

#[test]
fn empty_milestones_render_nothing() {
    let html = milestones_section(&RenderContext::default(), "m", "T", 1, &[]);
    assert!(html.is_empty());
}

#[test]
fn full_page_contains_every_section() {
    let store = ProjectStore::builtin().unwrap();
    let entry = build_entry(store.get_by_id("arbitrum").unwrap(), None);
    let html = render_project(&RenderContext::default(), &entry);
    let out = html.as_str();
    assert!(out.starts_with(r#"<article class="project" data-slug="arbitrum">"#));
    assert!(out.contains("project-header"));
    assert!(out.contains("project-stats"));
    assert!(out.contains("milestones-section"));
}

#[test]
fn render_inputs_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ProjectStore>();
    assert_send_sync::<l2_core::entities::ProjectEntry>();
    assert_send_sync::<RenderContext>();
    assert_send_sync::<l2_render::Html>();
}
