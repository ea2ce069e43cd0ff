// Main library entry point for gclint.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;
