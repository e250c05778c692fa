//! Command-line interface for dossier.
//!
//! This module provides CLI commands for acquiring records, classifying
//! charge text, inspecting registry query plans and managing the config
//! file.

mod commands;

pub use commands::{Cli, Commands, run_command};
