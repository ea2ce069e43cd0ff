//! Error kinds raised by the checker core.
//!
//! Lint findings are not errors; they are `Diagnostic`s. The types here
//! describe a broken contract between the front end and the checker.

use crate::domain::ast::{NodeId, Pos};

/// The tree handed to the checker is not a proper tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeShapeError {
    #[error("node {id} does not exist (referenced from {parent:?})")]
    MissingNode { id: NodeId, parent: Option<NodeId> },
    #[error("node {id} has more than one parent (second parent {parent})")]
    SharedNode { id: NodeId, parent: NodeId },
    #[error("node {id} is not reachable from the root")]
    Unreachable { id: NodeId },
}

/// Aborts the analysis of a unit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// The ancestor stack does not match the shape the resolver was asked
    /// about: a bug in the traversal or an unsupported syntax form.
    #[error("internal error at {pos}: {detail}")]
    InvariantViolation { pos: Pos, detail: String },
}

impl AnalysisError {
    pub fn invariant(pos: Pos, detail: impl Into<String>) -> Self {
        AnalysisError::InvariantViolation {
            pos,
            detail: detail.into(),
        }
    }
}
