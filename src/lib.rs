//! Library crate root re-exporting validation, CLI, and runtime modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod runtime;
pub mod settings;
pub mod validate;
