//! Shared library modules providing error types, path helpers, output sinks, prompts, and telemetry.

pub mod errors;
pub mod output;
pub mod paths;
pub mod prompt;
pub mod telemetry;
