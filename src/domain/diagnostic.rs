// Lint findings.

use serde::Serialize;
use std::fmt;

use crate::domain::ast::Pos;

/// Which check produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Map type keyed by the node interface.
    MapType,
    /// `==`/`!=` between interface values.
    Compare,
    /// Concrete name pointer stored into an interface-typed destination.
    Assign,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::MapType => "maptype",
            Category::Compare => "compare",
            Category::Assign => "assign",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub pos: Pos,
    pub category: Category,
    pub message: String,
}

impl Diagnostic {
    pub fn new(pos: Pos, category: Category, message: String) -> Self {
        Self { pos, category, message }
    }
}

/// All findings of one unit, in traversal order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitReport {
    pub file: String,
    pub diagnostics: Vec<Diagnostic>,
}
