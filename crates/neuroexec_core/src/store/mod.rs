//! In-memory state stores owned by the application coordinator.
//!
//! # Responsibility
//! - Keep session-scoped task, routine and habit collections in insertion
//!   order.
//! - Expose the narrow mutation surface the coordinator builds on.
//!
//! # Invariants
//! - Blank-text creation attempts are silent no-ops, not errors.
//! - Operations on unknown ids are silent no-ops and corrupt nothing.

pub mod task_store;
pub mod tracker;
