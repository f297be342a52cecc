//! View-local state reducers.
//!
//! # Responsibility
//! - Model the small interactive state of individual views (Kanban drag and
//!   drop, task checklist, invoice multi-select, credential reveal).
//!
//! # Invariants
//! - Each reducer owns a local copy of the records it changes.
//! - Nothing here writes back to the entity store; state is lost when the
//!   reducer is dropped.

pub mod checklist;
pub mod credential;
pub mod kanban;
pub mod selection;
