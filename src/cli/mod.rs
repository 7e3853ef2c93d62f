// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! CLI module for classifying recorded frame streams.
//!
//! This module contains the command-line interface logic, including argument
//! parsing and the `classify` command implementation.

// Modules
/// CLI arguments.
pub mod args;

/// Classification logic.
pub mod classify;

/// Logging macros.
pub mod logging;
