//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `neuroexec_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use neuroexec_core::{level_for, FocusTimer};

fn main() {
    println!("neuroexec_core version={}", neuroexec_core::core_version());
    println!("neuroexec_core start_level={}", level_for(0).title);
    println!("neuroexec_core focus_cycle={}", FocusTimer::new().display());
}
