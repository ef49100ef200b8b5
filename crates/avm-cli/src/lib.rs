//! CLI library components for the AVM subject category tool.

pub mod logging;
pub mod pipeline;
pub mod types;
