// Infrastructure implementations for gclint: loading units from disk,
// rendering diagnostics, configuration, logging and the worker pool.

pub mod concurrency;
pub mod config_loader;
pub mod json_loader;
pub mod logging;
pub mod reporter;
pub mod unit_files;

pub use json_loader::JsonUnitLoader;
pub use reporter::{JsonReporter, TextReporter};
