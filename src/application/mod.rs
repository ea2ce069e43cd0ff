// Application layer: the traversal adapter and the per-run use case.

use rayon::prelude::*;
use std::path::{Path, PathBuf};

use crate::domain::ast::NodeId;
use crate::domain::config::AnalyzerConfig;
use crate::domain::detectors::{check_assignment, check_comparison, check_map_key};
use crate::domain::diagnostic::{Diagnostic, UnitReport};
use crate::domain::error::AnalysisError;
use crate::domain::inspector::{walk_with_stack, Event};
use crate::domain::unit::Unit;
use crate::ports::UnitLoader;

/// Runs the checks over one unit's traversal.
///
/// Holds only the configuration, so one analyzer can serve any number of
/// units, including from several threads at once.
#[derive(Debug, Clone, Copy)]
pub struct Analyzer<'c> {
    config: &'c AnalyzerConfig,
}

impl<'c> Analyzer<'c> {
    pub fn new(config: &'c AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Traversal callback. Checks run on `Push` in a fixed order: map key,
    /// comparison, then (when enabled) assignment flow. Always descends.
    pub fn visit(
        &self,
        unit: &Unit,
        id: NodeId,
        event: Event,
        stack: &[NodeId],
        out: &mut Vec<Diagnostic>,
    ) -> Result<bool, AnalysisError> {
        if event == Event::Pop {
            return Ok(true);
        }

        let pkg = &self.config.package;
        out.extend(check_map_key(unit, pkg, id));
        out.extend(check_comparison(unit, pkg, id));
        if self.config.assign {
            out.extend(check_assignment(unit, pkg, stack)?);
        }
        Ok(true)
    }

    /// All findings for `unit` in preorder, or the first invariant violation.
    pub fn analyze(&self, unit: &Unit) -> Result<Vec<Diagnostic>, AnalysisError> {
        let mut diagnostics = Vec::new();
        walk_with_stack(&unit.tree, |id, event, stack| {
            self.visit(unit, id, event, stack, &mut diagnostics)
        })?;
        Ok(diagnostics)
    }
}

/// Result of checking one input file.
#[derive(Debug)]
pub enum UnitOutcome {
    Checked(UnitReport),
    Failed { path: PathBuf, error: anyhow::Error },
}

impl UnitOutcome {
    pub fn diagnostic_count(&self) -> usize {
        match self {
            UnitOutcome::Checked(report) => report.diagnostics.len(),
            UnitOutcome::Failed { .. } => 0,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, UnitOutcome::Failed { .. })
    }
}

/// Process status when every unit loaded and nothing was reported.
pub const EXIT_CLEAN: u8 = 0;
/// A unit failed to load or its analysis aborted.
pub const EXIT_FAILED: u8 = 1;
/// At least one finding was reported.
pub const EXIT_DIAGNOSTICS: u8 = 3;

/// Exit status for a run. A failed unit outranks findings elsewhere.
pub fn exit_status(outcomes: &[UnitOutcome]) -> u8 {
    if outcomes.iter().any(UnitOutcome::is_failed) {
        EXIT_FAILED
    } else if outcomes.iter().any(|o| o.diagnostic_count() > 0) {
        EXIT_DIAGNOSTICS
    } else {
        EXIT_CLEAN
    }
}

pub struct AnalyzeUsecase<'a> {
    pub loader: &'a dyn UnitLoader,
    pub config: &'a AnalyzerConfig,
}

impl<'a> AnalyzeUsecase<'a> {
    /// Loads and checks every unit. Units are independent and run in
    /// parallel on the current rayon pool; outcomes keep the input order.
    pub fn run(&self, paths: &[PathBuf]) -> Vec<UnitOutcome> {
        let analyzer = Analyzer::new(self.config);
        paths
            .par_iter()
            .map(|path| self.check_one(&analyzer, path))
            .collect()
    }

    fn check_one(&self, analyzer: &Analyzer<'_>, path: &Path) -> UnitOutcome {
        let unit = match self.loader.load(path) {
            Ok(unit) => unit,
            Err(error) => {
                tracing::warn!(path = %path.display(), error = %error, "failed to load unit");
                return UnitOutcome::Failed { path: path.to_path_buf(), error };
            }
        };

        tracing::debug!(file = unit.file(), nodes = unit.tree.len(), "analyzing unit");
        match analyzer.analyze(&unit) {
            Ok(diagnostics) => {
                tracing::debug!(file = unit.file(), count = diagnostics.len(), "unit done");
                UnitOutcome::Checked(UnitReport {
                    file: unit.file().to_string(),
                    diagnostics,
                })
            }
            Err(violation) => {
                tracing::error!(file = unit.file(), error = %violation, "analysis aborted");
                UnitOutcome::Failed {
                    path: path.to_path_buf(),
                    error: anyhow::Error::new(violation)
                        .context(format!("analysis of {} aborted", unit.file())),
                }
            }
        }
    }
}
