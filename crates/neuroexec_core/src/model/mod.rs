//! Domain model for the productivity core.
//!
//! # Responsibility
//! - Define the canonical records for tasks, routines, habits and assist
//!   payloads.
//! - Keep entity shapes free of behavior beyond constructors and small
//!   helpers.
//!
//! # Invariants
//! - Every entity carries a stable UUID that is never reused in a session.
//! - A task's `day` never changes after creation.

pub mod assist;
pub mod day;
pub mod habit;
pub mod recurring;
pub mod task;
