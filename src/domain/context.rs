//! Ancestor context resolution.
//!
//! Given the ancestor stack of an expression, work out the declared type of
//! the slot its value flows into: the matching assignment destination, the
//! call parameter, or the enclosing function's result.

use crate::domain::ast::{NodeId, NodeKind, Pos};
use crate::domain::classify::TargetPackage;
use crate::domain::error::AnalysisError;
use crate::domain::types::{Signature, Type};
use crate::domain::unit::Unit;

/// Parent shapes that carry a value into a typed slot.
pub fn is_flow_parent(kind: &NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::AssignStmt { .. } | NodeKind::CallExpr { .. } | NodeKind::ReturnStmt { .. }
    )
}

/// Whether the slot receiving the value of the top of `stack` is declared
/// with the node interface type.
///
/// The second-from-top entry must be an assignment, call or return that
/// holds the top entry directly. Anything else means the traversal handed
/// us a stack we cannot interpret and is reported as an invariant violation.
pub fn required_type_is_interface(
    unit: &Unit,
    pkg: &TargetPackage,
    stack: &[NodeId],
) -> Result<bool, AnalysisError> {
    let (parent, expr) = match stack {
        [.., parent, expr] => (*parent, *expr),
        _ => {
            let pos = stack.last().map(|id| unit.pos(*id)).unwrap_or_default();
            return Err(AnalysisError::invariant(pos, "expression has no parent"));
        }
    };
    let pos = unit.pos(expr);

    match unit.kind(parent) {
        NodeKind::AssignStmt { lhs, rhs, .. } => {
            let Some(index) = position_of(rhs, expr) else {
                if lhs.contains(&expr) {
                    // Destination, not a source.
                    return Ok(false);
                }
                return Err(not_found(pos, expr, "assignment", parent));
            };
            let Some(&target) = lhs.get(index) else {
                return Err(AnalysisError::invariant(
                    pos,
                    format!("no destination for right-hand side {} of assignment {}", index, parent),
                ));
            };
            if is_backlink_destination(unit, pkg, target) {
                return Ok(false);
            }
            Ok(pkg.is_interface_type(unit.type_of(target).map(|tv| &tv.ty)))
        }

        NodeKind::CallExpr { fun, args, ellipsis } => {
            if *fun == expr {
                return Ok(false);
            }
            let Some(index) = position_of(args, expr) else {
                return Err(not_found(pos, expr, "call", parent));
            };
            // Conversions and builtins have no signature to match against.
            let Some(callee) = unit.type_of(*fun).filter(|tv| tv.is_value()) else {
                return Ok(false);
            };
            let Some(sig) = callee.ty.as_signature() else {
                return Err(AnalysisError::invariant(
                    pos,
                    format!("callee of call {} is not a function", parent),
                ));
            };
            let required = parameter_type(sig, index, ellipsis.is_some())
                .ok_or_else(|| {
                    AnalysisError::invariant(
                        pos,
                        format!("argument {} of call {} has no parameter", index, parent),
                    )
                })?;
            Ok(pkg.is_interface_type(Some(required)))
        }

        NodeKind::ReturnStmt { results } => {
            let Some(index) = position_of(results, expr) else {
                return Err(not_found(pos, expr, "return", parent));
            };
            let sig = enclosing_signature(unit, stack)?;
            let required = sig.results.get(index).ok_or_else(|| {
                AnalysisError::invariant(
                    pos,
                    format!("result {} of return {} has no slot in the signature", index, parent),
                )
            })?;
            Ok(pkg.is_interface_type(Some(required)))
        }

        other => Err(AnalysisError::invariant(
            pos,
            format!("{} is not a value destination for {}", other.name(), expr),
        )),
    }
}

fn position_of(list: &[NodeId], id: NodeId) -> Option<usize> {
    list.iter().position(|&candidate| candidate == id)
}

fn not_found(pos: Pos, expr: NodeId, what: &str, parent: NodeId) -> AnalysisError {
    AnalysisError::invariant(pos, format!("didn't find {} in {} {}", expr, what, parent))
}

/// `x.Defn = ...`: closure variables are linked to their outer context this way.
fn is_backlink_destination(unit: &Unit, pkg: &TargetPackage, target: NodeId) -> bool {
    match unit.kind(target) {
        NodeKind::SelectorExpr { sel, .. } => pkg.is_backlink_field(unit.info.use_of(*sel)),
        _ => false,
    }
}

/// Declared type of parameter slot `index`. Without an explicit `...`, any
/// argument at or past the variadic parameter takes its element type.
fn parameter_type(sig: &Signature, index: usize, spread: bool) -> Option<&Type> {
    let nparams = sig.params.len();
    if sig.variadic && !spread && index + 1 >= nparams {
        return match sig.params.last() {
            Some(Type::Slice { elem }) => Some(elem.as_ref()),
            _ => None,
        };
    }
    sig.params.get(index)
}

/// Signature of the innermost function literal or declaration on the stack.
fn enclosing_signature<'u>(unit: &'u Unit, stack: &[NodeId]) -> Result<&'u Signature, AnalysisError> {
    for i in (0..stack.len()).rev() {
        let id = stack[i];
        let sig = match unit.kind(id) {
            NodeKind::FuncLit { .. } => unit.type_of(id).map(|tv| &tv.ty),
            NodeKind::FuncDecl { name, .. } => unit.info.def_of(*name).and_then(|obj| obj.ty.as_ref()),
            _ => continue,
        };
        return sig.and_then(Type::as_signature).ok_or_else(|| {
            AnalysisError::invariant(unit.pos(id), format!("function {} has no resolved signature", id))
        });
    }

    let pos = stack.last().map(|id| unit.pos(*id)).unwrap_or_default();
    Err(AnalysisError::invariant(pos, "no enclosing function declaration or literal"))
}
