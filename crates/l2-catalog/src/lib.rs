//! # l2-catalog
//!
//! The project record store: a validated, immutable collection of
//! [`ProjectRecord`](l2_core::entities::ProjectRecord)s with lookup by id and
//! by slug.
//!
//! Records come from two sources:
//! - built-in declarations compiled into the crate ([`builtin`]), declared
//!   through the [`templates`] helpers
//! - TOML or JSON record files ([`loader`])
//!
//! The store enforces:
//! - ids are unique
//! - slugs are URL-safe and unique
//! - every link is an absolute http(s) URL

pub mod builtin;
mod error;
pub mod loader;
mod store;
pub mod templates;

pub use error::CatalogError;
pub use store::{Lookup, ProjectStore, StoreBuilder};
