//! Filter, search, sort and group operators over entity slices.
//!
//! # Responsibility
//! - Slice store collections into list views without copying records.
//! - Keep ordering rules in one place so every view sorts the same way.
//!
//! # Invariants
//! - Filters return a stable subsequence of their input.
//! - Sorts are stable; equal keys keep input order.

pub mod filter;
pub mod sort;
