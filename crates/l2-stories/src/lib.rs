//! # l2-stories
//!
//! Example inputs that drive presentation components directly, without a
//! catalog or metrics. Each component has a [`Meta`] with base args and a
//! set of named [`Story`] variants that override some of those args.
//!
//! ```text
//! project-stats    Default, Upcoming, NoValidator, BadWarning, NoWarnings
//! token-breakdown  Default, Empty
//! milestones       Collapsed, Expanded
//! ```

mod error;
pub mod fixtures;
mod story;

pub use error::StoryError;
pub use story::{ArgOverrides, Meta, Story, StoryArgs, StorySet};

use l2_render::{Html, RenderContext};
use tracing::debug;

/// Every story set, addressable by component and story name.
#[derive(Debug, Clone)]
pub struct StoryBook {
    sets: Vec<StorySet>,
}

impl Default for StoryBook {
    fn default() -> Self {
        Self::new()
    }
}

impl StoryBook {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sets: fixtures::all(),
        }
    }

    /// Component names in declaration order.
    pub fn components(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sets.iter().map(|set| set.meta.component)
    }

    #[must_use]
    pub fn sets(&self) -> &[StorySet] {
        &self.sets
    }

    /// # Errors
    ///
    /// [`StoryError::UnknownComponent`] when no set is registered under
    /// `component`.
    pub fn set(&self, component: &str) -> Result<&StorySet, StoryError> {
        self.sets
            .iter()
            .find(|set| set.meta.component == component)
            .ok_or_else(|| StoryError::UnknownComponent(component.to_string()))
    }

    /// # Errors
    ///
    /// [`StoryError::UnknownComponent`] or [`StoryError::UnknownStory`].
    pub fn story(&self, component: &str, story: &str) -> Result<&Story, StoryError> {
        self.set(component)?
            .story(story)
            .ok_or_else(|| StoryError::UnknownStory {
                component: component.to_string(),
                story: story.to_string(),
            })
    }

    /// Full args of one story, after merging its overrides over the meta.
    ///
    /// # Errors
    ///
    /// Same as [`StoryBook::story`].
    pub fn args(&self, component: &str, story: &str) -> Result<StoryArgs, StoryError> {
        let set = self.set(component)?;
        let found = set.story(story).ok_or_else(|| StoryError::UnknownStory {
            component: component.to_string(),
            story: story.to_string(),
        })?;
        Ok(set.args(found))
    }

    /// Render one story with the default context.
    ///
    /// # Errors
    ///
    /// Same as [`StoryBook::story`].
    pub fn render(&self, component: &str, story: &str) -> Result<Html, StoryError> {
        self.render_with(&RenderContext::default(), component, story)
    }

    /// # Errors
    ///
    /// Same as [`StoryBook::story`].
    pub fn render_with(
        &self,
        ctx: &RenderContext,
        component: &str,
        story: &str,
    ) -> Result<Html, StoryError> {
        let args = self.args(component, story)?;
        debug!(component, story, "rendering story");
        Ok(args.render(ctx))
    }
}
