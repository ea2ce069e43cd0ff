// Domain layer: the syntax and type model of a unit and the checks over it.

pub mod ast;
pub mod classify;
pub mod config;
pub mod context;
pub mod detectors;
pub mod diagnostic;
pub mod error;
pub mod inspector;
pub mod types;
pub mod unit;
