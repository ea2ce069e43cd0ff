//! Configuration file loading.
//!
//! An optional TOML file overrides the defaults; command-line flags are
//! applied on top by the caller.
//!
//! ```toml
//! assign = true
//!
//! [package]
//! path = "cmd/compile/internal/ir"
//! interface = "Node"
//! ```

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::domain::config::AnalyzerConfig;

pub fn load_config(path: Option<&Path>) -> Result<AnalyzerConfig> {
    let Some(path) = path else {
        return Ok(AnalyzerConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    parse_config(&text).with_context(|| format!("Invalid config {}", path.display()))
}

pub fn parse_config(text: &str) -> Result<AnalyzerConfig> {
    Ok(toml::from_str(text)?)
}
