//! Assist gateway contracts.
//!
//! The gateway fronts an external text-generation collaborator. It is an
//! enrichment layer only: points, tasks and streaks must stay correct no
//! matter how a request here ends.
//!
//! # Responsibility
//! - Define the four assist operations and their typed payloads.
//! - Keep every failure recoverable at the call boundary.
//!
//! # Invariants
//! - Gateway errors never mutate or roll back core state.
//! - Decomposition yields at most `MAX_DECOMPOSE_STEPS` steps.

pub mod http;

use crate::model::assist::{CategorySuggestion, PanicSolution};
use crate::model::task::TaskId;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Upper bound on decomposition steps kept from a response.
pub const MAX_DECOMPOSE_STEPS: usize = 5;

pub type AssistResult<T> = Result<T, AssistError>;

/// Recoverable gateway failure.
#[derive(Debug)]
pub enum AssistError {
    /// The request never produced an HTTP response.
    Transport(String),
    /// The endpoint answered with a non-success status.
    Status(u16),
    /// The response body did not match the expected JSON shape.
    Schema(String),
}

impl Display for AssistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(message) => write!(f, "assist transport failure: {message}"),
            Self::Status(code) => write!(f, "assist endpoint returned status {code}"),
            Self::Schema(message) => write!(f, "assist response violated schema: {message}"),
        }
    }
}

impl Error for AssistError {}

/// Task reference sent to batch categorization.
#[derive(Debug, Clone, Serialize)]
pub struct CategorizeItem {
    pub id: TaskId,
    pub text: String,
}

/// Contract with the external text-generation collaborator.
///
/// Implementations run on worker threads, so they must be shareable.
pub trait AssistGateway: Send + Sync {
    /// Suggests quadrant and energy for a batch of open tasks. Best effort;
    /// not on any critical path.
    fn categorize(&self, items: &[CategorizeItem]) -> AssistResult<Vec<CategorySuggestion>>;

    /// Breaks a task into at most `MAX_DECOMPOSE_STEPS` small ordered steps.
    fn decompose(&self, task_text: &str) -> AssistResult<Vec<String>>;

    /// Diagnoses the described obstacle and returns an unblocking protocol.
    fn rescue(&self, task_text: &str, obstacle: &str) -> AssistResult<PanicSolution>;

    /// Generates a short congratulatory line for a completed task.
    fn identity_boost(&self, task_text: &str) -> AssistResult<String>;
}
