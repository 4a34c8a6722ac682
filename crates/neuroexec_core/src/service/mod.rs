//! Use-case services over the repository layer.
//!
//! # Responsibility
//! - Orchestrate repository calls into shell-facing APIs.
//! - Keep callers decoupled from storage details.

pub mod theme_service;
