//! # l2-core
//!
//! Core types and error types for the L2 project catalog.
//!
//! This crate provides the foundational types shared across all catalog crates:
//! - Immutable project records (display metadata, links, lifecycle)
//! - The metrics snapshot shape supplied by the metrics collaborator
//! - The per-render `ProjectEntry` view-model
//! - Milestone and incident records
//! - Sentiment, category, and link-kind enums
//! - Slug helpers and cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod time;

pub use errors::CoreError;
