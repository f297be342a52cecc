//! Domain model for the agency dashboard.
//!
//! # Responsibility
//! - Define the typed records held by the entity store.
//! - Provide record-level validation used when a store snapshot is built.
//!
//! # Invariants
//! - Every record is identified by a non-blank string id, unique per kind.
//! - Enumerated fields only take their listed values; unknown wire strings
//!   fail to parse instead of falling back to a default.

pub mod activity;
pub mod client;
pub mod finance;
pub mod project;
pub mod validation;

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Record kinds held by the entity store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    Client,
    Project,
    Task,
    Invoice,
    Retainer,
    Proposal,
    Activity,
    Credential,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Project => "project",
            Self::Task => "task",
            Self::Invoice => "invoice",
            Self::Retainer => "retainer",
            Self::Proposal => "proposal",
            Self::Activity => "activity",
            Self::Credential => "credential",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common shape of every record addressable by id.
pub trait Entity {
    /// Kind tag used in lookup and validation errors.
    const KIND: EntityKind;

    /// Stable id, unique within the record's collection.
    fn id(&self) -> &str;
}

/// Returns the first record whose id equals `id`.
///
/// Blank or malformed ids never match; they are not treated as errors.
pub fn find_by_id<'a, T: Entity>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}
