//! Derivation services over the entity store.
//!
//! # Responsibility
//! - Compute dashboard and finance aggregates from repository collections.
//! - Keep views decoupled from how collections are held.
//!
//! # Invariants
//! - Every aggregate is recomputed on each call; nothing is cached.
//! - Services never mutate repository data.

pub mod dashboard_service;
pub mod finance_service;
