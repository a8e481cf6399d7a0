use l2_core::entities::{Milestone, ProjectEntry, TokenValues, TokenWarning};
use l2_render::components::{
    milestones_section, project_stats, token_breakdown, token_breakdown_tooltip_content,
};
use l2_render::markup::el;
use l2_render::{Html, RenderContext};
use serde::Serialize;

/// Inputs for one component, exactly as the component receives them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "component", rename_all = "snake_case")]
pub enum StoryArgs {
    ProjectStats {
        project: ProjectEntry,
    },
    TokenBreakdown {
        values: TokenValues,
        associated_tokens: Vec<String>,
        warnings: Vec<TokenWarning>,
    },
    Milestones {
        id: String,
        title: String,
        section_order: u32,
        milestones: Vec<Milestone>,
        /// Replaces the configured fold threshold for this story only.
        #[serde(skip_serializing_if = "Option::is_none")]
        collapse_after: Option<usize>,
    },
}

/// Fields a story changes on top of its meta args. `None` keeps the meta
/// value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "component", rename_all = "snake_case")]
pub enum ArgOverrides {
    ProjectStats {
        #[serde(skip_serializing_if = "Option::is_none")]
        project: Option<ProjectEntry>,
    },
    TokenBreakdown {
        #[serde(skip_serializing_if = "Option::is_none")]
        values: Option<TokenValues>,
        #[serde(skip_serializing_if = "Option::is_none")]
        associated_tokens: Option<Vec<String>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        warnings: Option<Vec<TokenWarning>>,
    },
    Milestones {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        section_order: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        milestones: Option<Vec<Milestone>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        collapse_after: Option<usize>,
    },
}

fn pick<T: Clone>(replacement: Option<&T>, base: &T) -> T {
    replacement.unwrap_or(base).clone()
}

impl StoryArgs {
    /// Component name the args belong to, as used in overrides.
    const fn kind(&self) -> &'static str {
        match self {
            Self::ProjectStats { .. } => "project_stats",
            Self::TokenBreakdown { .. } => "token_breakdown",
            Self::Milestones { .. } => "milestones",
        }
    }

    /// These args with `overrides` applied on top.
    ///
    /// Overrides written for another component are ignored.
    #[must_use]
    pub fn merged(&self, overrides: &ArgOverrides) -> Self {
        match (self, overrides) {
            (
                Self::ProjectStats { project },
                ArgOverrides::ProjectStats {
                    project: replacement,
                },
            ) => Self::ProjectStats {
                project: pick(replacement.as_ref(), project),
            },
            (
                Self::TokenBreakdown {
                    values,
                    associated_tokens,
                    warnings,
                },
                ArgOverrides::TokenBreakdown {
                    values: new_values,
                    associated_tokens: new_tokens,
                    warnings: new_warnings,
                },
            ) => Self::TokenBreakdown {
                values: pick(new_values.as_ref(), values),
                associated_tokens: pick(new_tokens.as_ref(), associated_tokens),
                warnings: pick(new_warnings.as_ref(), warnings),
            },
            (
                Self::Milestones {
                    id,
                    title,
                    section_order,
                    milestones,
                    collapse_after,
                },
                ArgOverrides::Milestones {
                    id: new_id,
                    title: new_title,
                    section_order: new_order,
                    milestones: new_milestones,
                    collapse_after: new_collapse,
                },
            ) => Self::Milestones {
                id: pick(new_id.as_ref(), id),
                title: pick(new_title.as_ref(), title),
                section_order: new_order.unwrap_or(*section_order),
                milestones: pick(new_milestones.as_ref(), milestones),
                collapse_after: new_collapse.or(*collapse_after),
            },
            (base, _) => {
                tracing::warn!(component = base.kind(), "overrides target another component");
                base.clone()
            }
        }
    }

    /// Render the component these args belong to.
    #[must_use]
    pub fn render(&self, ctx: &RenderContext) -> Html {
        match self {
            Self::ProjectStats { project } => project_stats(ctx, project),
            Self::TokenBreakdown {
                values,
                associated_tokens,
                warnings,
            } => el("div")
                .class("story-token-breakdown")
                .child(token_breakdown(values, "h-[3px] w-full"))
                .child(token_breakdown_tooltip_content(
                    values,
                    associated_tokens,
                    warnings,
                ))
                .build(),
            Self::Milestones {
                id,
                title,
                section_order,
                milestones,
                collapse_after,
            } => match collapse_after {
                Some(after) => {
                    let mut ctx = ctx.clone();
                    ctx.labels.collapse_milestones_after = *after;
                    milestones_section(&ctx, id, title, *section_order, milestones)
                }
                None => milestones_section(ctx, id, title, *section_order, milestones),
            },
        }
    }
}

/// Component name plus the args every story of it starts from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meta {
    pub component: &'static str,
    pub args: StoryArgs,
}

/// A named variant: the meta args with some fields replaced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Story {
    pub name: &'static str,
    pub overrides: ArgOverrides,
}

impl Story {
    #[must_use]
    pub const fn new(name: &'static str, overrides: ArgOverrides) -> Self {
        Self { name, overrides }
    }
}

/// A component's meta with its stories, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorySet {
    pub meta: Meta,
    pub stories: Vec<Story>,
}

impl StorySet {
    /// Story by name, ignoring ASCII case.
    #[must_use]
    pub fn story(&self, name: &str) -> Option<&Story> {
        self.stories
            .iter()
            .find(|story| story.name.eq_ignore_ascii_case(name))
    }

    /// Full args of `story`: the meta args merged with its overrides.
    #[must_use]
    pub fn args(&self, story: &Story) -> StoryArgs {
        self.meta.args.merged(&story.overrides)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stories.iter().map(|story| story.name)
    }
}
