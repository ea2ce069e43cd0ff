// Analyzer configuration. Built once before any unit is analyzed and shared
// read-only by every analysis.

use serde::Deserialize;

use crate::domain::classify::TargetPackage;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Report `*Name` values flowing into `Node`-typed destinations.
    /// Off by default: many false positives.
    pub assign: bool,
    pub package: TargetPackage,
}

impl AnalyzerConfig {
    pub fn with_assign(assign: bool) -> Self {
        Self {
            assign,
            ..Self::default()
        }
    }
}
