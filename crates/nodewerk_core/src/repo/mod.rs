//! Entity store and sample dataset.
//!
//! # Responsibility
//! - Own every entity collection in one immutable, validated snapshot.
//! - Provide id and relation lookups for services and views.
//! - Expose explicit update operations that return a new snapshot.
//!
//! # Invariants
//! - A snapshot is only observable after all reference and record checks
//!   pass.
//! - Failed lookups are `None`/empty results, never errors. `require_*`
//!   variants exist for callers that propagate with `?`.

pub mod entity_store;
pub mod sample;
