//! Story lookup errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoryError {
    #[error("unknown component: {0}")]
    UnknownComponent(String),

    #[error("unknown story '{story}' for component '{component}'")]
    UnknownStory { component: String, story: String },
}
