use l2_core::entities::Milestone;
use l2_core::enums::MilestoneType;

use super::midnight;
use crate::story::{ArgOverrides, Meta, Story, StoryArgs, StorySet};

pub const COMPONENT: &str = "milestones";

const SECTION_ID: &str = "milestones-and-incidents";
const SECTION_TITLE: &str = "Milestones & Incidents";
const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed iaculis dui \
                     eu odio aliquam, in sodales dolor lacinia. Aliquam pharetra malesuada urna \
                     turpis.";

#[must_use]
pub fn set() -> StorySet {
    StorySet {
        meta: Meta {
            component: COMPONENT,
            args: StoryArgs::Milestones {
                id: SECTION_ID.into(),
                title: SECTION_TITLE.into(),
                section_order: 1,
                milestones: Vec::new(),
                collapse_after: None,
            },
        },
        stories: vec![
            Story::new("Collapsed", with(timeline(), None)),
            Story::new("Expanded", with(timeline(), Some(timeline().len()))),
        ],
    }
}

/// Only the milestones and the fold threshold vary; the section heading
/// comes from the meta.
const fn with(milestones: Vec<Milestone>, collapse_after: Option<usize>) -> ArgOverrides {
    ArgOverrides::Milestones {
        id: None,
        title: None,
        section_order: None,
        milestones: Some(milestones),
        collapse_after,
    }
}

fn milestone(name: &str, date: (i32, u32, u32), description: Option<&str>) -> Milestone {
    Milestone {
        name: name.into(),
        link: "https://l2beat.com".into(),
        date: midnight(date.0, date.1, date.2),
        description: description.map(Into::into),
        kind: MilestoneType::General,
    }
}

fn timeline() -> Vec<Milestone> {
    vec![
        milestone("Creation of Arbitrum One", (2019, 11, 14), None),
        milestone("Arbitrum Odyssey begins", (2022, 6, 25), Some(LOREM)),
        milestone("Nitro upgrade is activated", (2022, 8, 31), Some(LOREM)),
    ]
}
