use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Milestone, SentimentValue};
use crate::enums::{LifecycleStatus, LinkKind, ProjectCategory, ProjectKind};
use crate::time::UnixTime;

/// An immutable project descriptor, built once at configuration time.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectRecord {
    /// Globally unique identifier.
    pub id: String,
    pub created_at: UnixTime,
    #[serde(default)]
    pub kind: ProjectKind,
    /// Not yet live; no metrics are expected.
    #[serde(default)]
    pub is_upcoming: bool,
    pub display: ProjectDisplay,
    #[serde(default)]
    pub technology: ProjectTechnology,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<Lifecycle>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub milestones: Vec<Milestone>,
}

impl ProjectRecord {
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.display.slug
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.display.name
    }

    /// Whether the record carries a non-active lifecycle annotation.
    #[must_use]
    pub fn is_retired(&self) -> bool {
        self.lifecycle
            .as_ref()
            .is_some_and(|lifecycle| lifecycle.status != LifecycleStatus::Active)
    }
}

/// Display metadata for a project.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectDisplay {
    pub name: String,
    /// URL-safe, unique across the catalog.
    pub slug: String,
    pub description: String,
    /// Category tags such as `Universal` or `NFT`.
    #[serde(default)]
    pub purposes: BTreeSet<String>,
    pub category: ProjectCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default)]
    pub links: ProjectLinks,
}

/// External links grouped by kind. Order within a kind is preserved.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectLinks {
    #[serde(default)]
    pub websites: Vec<String>,
    #[serde(default)]
    pub apps: Vec<String>,
    #[serde(default)]
    pub documentation: Vec<String>,
    #[serde(default)]
    pub explorers: Vec<String>,
    #[serde(default)]
    pub repositories: Vec<String>,
    #[serde(default)]
    pub social_media: Vec<String>,
}

impl ProjectLinks {
    #[must_use]
    pub fn get(&self, kind: LinkKind) -> &[String] {
        match kind {
            LinkKind::Websites => &self.websites,
            LinkKind::Apps => &self.apps,
            LinkKind::Documentation => &self.documentation,
            LinkKind::Explorers => &self.explorers,
            LinkKind::Repositories => &self.repositories,
            LinkKind::SocialMedia => &self.social_media,
        }
    }

    /// Non-empty kinds in display order.
    pub fn iter(&self) -> impl Iterator<Item = (LinkKind, &[String])> {
        LinkKind::ALL
            .into_iter()
            .map(|kind| (kind, self.get(kind)))
            .filter(|(_, urls)| !urls.is_empty())
    }

    /// Every URL across all kinds.
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        LinkKind::ALL
            .into_iter()
            .flat_map(|kind| self.get(kind).iter().map(String::as_str))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.urls().next().is_none()
    }
}

/// Static technology facts that do not come from live metrics.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectTechnology {
    /// Chains the project delivers assets to.
    #[serde(default)]
    pub destination: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validated_by: Option<SentimentValue>,
}

/// Structured lifecycle annotation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Lifecycle {
    pub status: LifecycleStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Id of the project that replaced this one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub successor: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_iterate_non_empty_kinds_in_order() {
        let links = ProjectLinks {
            websites: vec!["https://frame.xyz/".into()],
            social_media: vec![
                "https://twitter.com/frame_xyz".into(),
                "https://discord.gg/framexyz".into(),
            ],
            ..ProjectLinks::default()
        };

        let kinds: Vec<LinkKind> = links.iter().map(|(kind, _)| kind).collect();
        assert_eq!(kinds, vec![LinkKind::Websites, LinkKind::SocialMedia]);
        assert_eq!(links.urls().count(), 3);
        assert!(!links.is_empty());
        assert!(ProjectLinks::default().is_empty());
    }

    #[test]
    fn record_fields_default_when_omitted() {
        let json = r#"{
            "id": "frame",
            "created_at": 1695904849,
            "display": {
                "name": "Frame",
                "slug": "frame",
                "description": "NFT L2",
                "category": "Optimistic Rollup"
            }
        }"#;
        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.kind, ProjectKind::Layer2);
        assert!(!record.is_upcoming);
        assert!(record.display.purposes.is_empty());
        assert!(record.display.links.is_empty());
        assert!(record.lifecycle.is_none());
        assert!(!record.is_retired());
    }
}
