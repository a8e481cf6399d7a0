//! The project record store.
//!
//! Records are assembled once through [`StoreBuilder`] and are immutable
//! afterwards. The store is `Send + Sync` and can be shared across renders.

use std::collections::HashMap;
use std::path::Path;

use l2_config::CatalogConfig;
use l2_core::CoreError;
use l2_core::entities::ProjectRecord;
use l2_core::enums::ProjectCategory;
use l2_core::ids::{is_http_url, validate_slug};

use crate::builtin;
use crate::error::CatalogError;
use crate::loader;

/// Outcome of resolving an id or slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Found(&'a ProjectRecord),
    NotFound { key: &'a str },
}

impl<'a> Lookup<'a> {
    #[must_use]
    pub const fn found(self) -> Option<&'a ProjectRecord> {
        match self {
            Self::Found(record) => Some(record),
            Self::NotFound { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_found(self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Convert into a `Result` for callers that treat absence as an error.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] carrying the requested key.
    pub fn into_result(self) -> Result<&'a ProjectRecord, CoreError> {
        match self {
            Self::Found(record) => Ok(record),
            Self::NotFound { key } => Err(CoreError::NotFound {
                key: key.to_string(),
            }),
        }
    }
}

/// Immutable collection of project records indexed by id and slug.
#[derive(Debug, Clone, Default)]
pub struct ProjectStore {
    /// Sorted by id.
    records: Vec<ProjectRecord>,
    by_id: HashMap<String, usize>,
    by_slug: HashMap<String, usize>,
}

impl ProjectStore {
    #[must_use]
    pub fn builder() -> StoreBuilder {
        StoreBuilder::default()
    }

    /// Store holding only the built-in records.
    ///
    /// # Errors
    ///
    /// Fails only if the built-in records violate catalog invariants.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::builder().with_builtin().build()
    }

    /// Assemble the store described by the catalog configuration.
    ///
    /// # Errors
    ///
    /// Propagates file and validation errors from [`StoreBuilder`].
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let mut builder = Self::builder();
        if config.include_builtin {
            builder = builder.with_builtin();
        }
        if config.has_external_sources() {
            tracing::debug!(files = config.paths.len(), "loading external record files");
        }
        for path in &config.paths {
            builder = builder.load_file(path)?;
        }
        builder.build()
    }

    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<&ProjectRecord> {
        self.by_id.get(id).map(|&index| &self.records[index])
    }

    #[must_use]
    pub fn get_by_slug(&self, slug: &str) -> Option<&ProjectRecord> {
        self.by_slug.get(slug).map(|&index| &self.records[index])
    }

    /// Resolve a key that may be either an id or a slug. Ids win.
    #[must_use]
    pub fn resolve<'a>(&'a self, key: &'a str) -> Lookup<'a> {
        let found = self.get_by_id(key).or_else(|| self.get_by_slug(key));
        tracing::debug!(key, found = found.is_some(), "resolve project");
        found.map_or(Lookup::NotFound { key }, Lookup::Found)
    }

    /// Records in id order.
    pub fn iter(&self) -> impl Iterator<Item = &ProjectRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn filter_by_category(
        &self,
        category: ProjectCategory,
    ) -> impl Iterator<Item = &ProjectRecord> {
        self.iter()
            .filter(move |record| record.display.category == category)
    }

    /// Records tagged with `purpose`, compared case-insensitively.
    pub fn filter_by_purpose<'a>(
        &'a self,
        purpose: &'a str,
    ) -> impl Iterator<Item = &'a ProjectRecord> {
        self.iter().filter(move |record| {
            record
                .display
                .purposes
                .iter()
                .any(|tag| tag.eq_ignore_ascii_case(purpose))
        })
    }

    pub fn upcoming(&self) -> impl Iterator<Item = &ProjectRecord> {
        self.iter().filter(|record| record.is_upcoming)
    }
}

/// Collects records and validates them into a [`ProjectStore`].
#[derive(Debug, Default)]
pub struct StoreBuilder {
    records: Vec<ProjectRecord>,
}

impl StoreBuilder {
    #[must_use]
    pub fn with_builtin(mut self) -> Self {
        self.records.extend(builtin::records());
        self
    }

    #[must_use]
    pub fn insert(mut self, record: ProjectRecord) -> Self {
        self.records.push(record);
        self
    }

    #[must_use]
    pub fn extend(mut self, records: impl IntoIterator<Item = ProjectRecord>) -> Self {
        self.records.extend(records);
        self
    }

    /// Append every record from a TOML or JSON file.
    ///
    /// # Errors
    ///
    /// See [`loader::load_records`].
    pub fn load_file(self, path: &Path) -> Result<Self, CatalogError> {
        let records = loader::load_records(path)?;
        Ok(self.extend(records))
    }

    /// Validate and index the collected records.
    ///
    /// # Errors
    ///
    /// Returns the first violation found: an invalid slug or link, a
    /// duplicate id, or a duplicate slug.
    pub fn build(self) -> Result<ProjectStore, CatalogError> {
        let mut records = self.records;
        for record in &records {
            validate_record(record)?;
        }
        records.sort_by(|a, b| a.id.cmp(&b.id));

        let mut by_id = HashMap::with_capacity(records.len());
        let mut by_slug: HashMap<String, usize> = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if by_id.insert(record.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateId(record.id.clone()));
            }
            if let Some(&existing) = by_slug.get(record.slug()) {
                return Err(CatalogError::DuplicateSlug {
                    slug: record.slug().to_string(),
                    first: records[existing].id.clone(),
                    second: record.id.clone(),
                });
            }
            by_slug.insert(record.slug().to_string(), index);
        }

        tracing::info!(projects = records.len(), "project store built");
        Ok(ProjectStore {
            records,
            by_id,
            by_slug,
        })
    }
}

fn validate_record(record: &ProjectRecord) -> Result<(), CatalogError> {
    let invalid = |source: CoreError| CatalogError::InvalidRecord {
        id: record.id.clone(),
        source,
    };

    if record.id.trim().is_empty() {
        return Err(invalid(CoreError::Validation("empty id".into())));
    }
    validate_slug(record.slug()).map_err(invalid)?;
    if let Some(url) = record.display.links.urls().find(|url| !is_http_url(url)) {
        return Err(invalid(CoreError::InvalidLink {
            project: record.id.clone(),
            url: url.to_string(),
        }));
    }
    if let Some(milestone) = record
        .milestones
        .iter()
        .find(|milestone| !is_http_url(&milestone.link))
    {
        return Err(invalid(CoreError::InvalidLink {
            project: record.id.clone(),
            url: milestone.link.clone(),
        }));
    }
    Ok(())
}
