//! CLI library components for `vernum`.

pub mod commands;
pub mod logging;
pub mod report;
