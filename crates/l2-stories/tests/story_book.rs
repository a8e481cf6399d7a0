use l2_core::enums::Sentiment;
use l2_render::RenderContext;
use l2_stories::{StoryArgs, StoryBook, StoryError};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn components_are_listed_in_declaration_order() {
    let book = StoryBook::new();
    let components: Vec<_> = book.components().collect();
    assert_eq!(components, vec!["project-stats", "token-breakdown", "milestones"]);
}

#[test]
fn project_stats_story_names() {
    let book = StoryBook::new();
    let names: Vec<_> = book.set("project-stats").unwrap().names().collect();
    assert_eq!(
        names,
        vec!["Default", "Upcoming", "NoValidator", "BadWarning", "NoWarnings"]
    );
}

#[rstest]
#[case("project-stats", "Default")]
#[case("project-stats", "Upcoming")]
#[case("project-stats", "NoValidator")]
#[case("project-stats", "BadWarning")]
#[case("project-stats", "NoWarnings")]
#[case("token-breakdown", "Default")]
#[case("token-breakdown", "Empty")]
#[case("milestones", "Collapsed")]
#[case("milestones", "Expanded")]
fn every_story_renders_deterministically(#[case] component: &str, #[case] story: &str) {
    let book = StoryBook::new();
    let first = book.render(component, story).unwrap();
    let second = book.render(component, story).unwrap();
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn story_names_ignore_case() {
    let book = StoryBook::new();
    assert_eq!(
        book.story("project-stats", "novalidator").unwrap().name,
        "NoValidator"
    );
}

#[test]
fn unknown_component_is_reported() {
    let book = StoryBook::new();
    let err = book.render("pie-chart", "Default").unwrap_err();
    assert_eq!(err, StoryError::UnknownComponent("pie-chart".into()));
    assert_eq!(err.to_string(), "unknown component: pie-chart");
}

#[test]
fn unknown_story_is_reported() {
    let book = StoryBook::new();
    let err = book.render("milestones", "Sideways").unwrap_err();
    assert_eq!(
        err,
        StoryError::UnknownStory {
            component: "milestones".into(),
            story: "Sideways".into(),
        }
    );
}

#[test]
fn default_stats_show_formatted_tvl() {
    let html = StoryBook::new().render("project-stats", "Default").unwrap();
    assert!(html.as_str().contains("$1,000,000"));
    assert!(html.as_str().contains(r#"data-change="positive""#));
    assert!(html.as_str().contains(r#"aria-label="Caution""#));
}

#[test]
fn upcoming_story_shows_no_data_for_tvl() {
    let html = StoryBook::new().render("project-stats", "Upcoming").unwrap();
    assert!(html.as_str().contains(r#"data-role="no-data""#));
    assert!(!html.as_str().contains("$1,000,000"));
}

#[test]
fn no_validator_story_shows_no_data() {
    let html = StoryBook::new()
        .render("project-stats", "NoValidator")
        .unwrap();
    assert!(html.as_str().contains(r#"data-role="no-data""#));
}

#[test]
fn bad_warning_story_uses_warning_icon() {
    let book = StoryBook::new();
    let html = book.render("project-stats", "BadWarning").unwrap();
    assert!(html.as_str().contains(r#"aria-label="Warning""#));

    let StoryArgs::ProjectStats { project } = book.args("project-stats", "BadWarning").unwrap()
    else {
        panic!("project-stats story carries a project");
    };
    let warnings = &project.header.tvl.as_ref().unwrap().token_breakdown.warnings;
    assert!(warnings.iter().any(|w| w.sentiment == Sentiment::Bad));
}

#[test]
fn no_warnings_story_has_no_icons() {
    let html = StoryBook::new()
        .render("project-stats", "NoWarnings")
        .unwrap();
    assert!(!html.as_str().contains(r#"aria-label="Caution""#));
    assert!(!html.as_str().contains(r#"aria-label="Warning""#));
}

#[test]
fn token_breakdown_default_lists_shares() {
    let html = StoryBook::new()
        .render("token-breakdown", "Default")
        .unwrap();
    // 1200 / 6000 and 3000 / 6000
    assert!(html.as_str().contains("Associated tokens (OP)"));
    assert!(html.as_str().contains("20.00%"));
    assert!(html.as_str().contains("50.00%"));
}

#[test]
fn empty_token_breakdown_is_all_zero() {
    let html = StoryBook::new().render("token-breakdown", "Empty").unwrap();
    assert!(html.as_str().contains("0.00%"));
    assert!(!html.as_str().contains("style=\"width"));
}

#[test]
fn collapsed_milestones_fold_the_tail() {
    let html = StoryBook::new().render("milestones", "Collapsed").unwrap();
    assert!(html.as_str().contains("Creation of Arbitrum One"));
    assert!(html.as_str().contains("Nitro upgrade is activated"));
    assert!(html.as_str().contains("Show 1 more"));
    assert!(html.as_str().contains(r#"id="milestones-and-incidents""#));
}

#[test]
fn expanded_milestones_show_everything() {
    let book = StoryBook::new();
    let html = book.render("milestones", "Expanded").unwrap();
    assert!(!html.as_str().contains("<details"));
    assert!(html.as_str().contains("Arbitrum Odyssey begins"));
    assert!(html.as_str().contains("Nitro upgrade is activated"));

    let StoryArgs::Milestones { milestones, .. } = book.args("milestones", "Expanded").unwrap()
    else {
        panic!("milestones story carries milestones");
    };
    assert_eq!(milestones.len(), 3);
}

#[test]
fn stories_inherit_section_heading_from_meta() {
    let book = StoryBook::new();
    let set = book.set("milestones").unwrap();
    let story = set.story("Collapsed").unwrap();
    let json = serde_json::to_value(&story.overrides).unwrap();
    assert!(json.get("title").is_none());
    assert!(json.get("section_order").is_none());

    let StoryArgs::Milestones {
        id,
        title,
        section_order,
        ..
    } = set.args(story)
    else {
        panic!("milestones story carries milestones");
    };
    assert_eq!(id, "milestones-and-incidents");
    assert_eq!(title, "Milestones & Incidents");
    assert_eq!(section_order, 1);

    let html = book.render("milestones", "Collapsed").unwrap();
    assert!(html.as_str().contains("1. "));
    assert!(html.as_str().contains("Milestones &amp; Incidents"));
}

#[test]
fn default_story_renders_meta_args_unchanged() {
    let book = StoryBook::new();
    let set = book.set("token-breakdown").unwrap();
    let story = set.story("Default").unwrap();
    assert_eq!(set.args(story), set.meta.args);
}

#[test]
fn render_context_is_respected() {
    let mut ctx = RenderContext::default();
    ctx.labels.collapse_milestones_after = 5;
    let html = StoryBook::new()
        .render_with(&ctx, "milestones", "Collapsed")
        .unwrap();
    assert!(!html.as_str().contains("<details"));
}

#[test]
fn meta_args_are_serializable() {
    let book = StoryBook::new();
    let set = book.set("milestones").unwrap();
    let json = serde_json::to_value(&set.meta).unwrap();
    assert_eq!(json["component"], "milestones");
    assert_eq!(json["args"]["title"], "Milestones & Incidents");
    assert_eq!(json["args"]["section_order"], 1);
}
