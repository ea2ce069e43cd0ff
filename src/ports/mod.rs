use std::io::Write;
use std::path::Path;

use crate::domain::diagnostic::UnitReport;
use crate::domain::unit::Unit;

/// Front end: produces a parsed and type-checked unit.
pub trait UnitLoader: Send + Sync {
    fn load(&self, path: &Path) -> anyhow::Result<Unit>;
}

/// Back end: renders the findings of a run.
pub trait DiagnosticSink {
    fn report(&self, reports: &[UnitReport], out: &mut dyn Write) -> std::io::Result<()>;
}
