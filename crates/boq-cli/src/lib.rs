//! CLI library components for the BOQ audit tool.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
