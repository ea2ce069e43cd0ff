//! The three checks run on every visited node.

use crate::domain::ast::{NodeId, NodeKind};
use crate::domain::classify::TargetPackage;
use crate::domain::context::{is_flow_parent, required_type_is_interface};
use crate::domain::diagnostic::{Category, Diagnostic};
use crate::domain::error::AnalysisError;
use crate::domain::unit::Unit;

/// `map[ir.Node]V`: the key should be `*ir.Name`.
pub fn check_map_key(unit: &Unit, pkg: &TargetPackage, id: NodeId) -> Option<Diagnostic> {
    let NodeKind::MapType { key, .. } = unit.kind(id) else {
        return None;
    };
    if !pkg.is_interface_type(unit.type_of(*key).map(|tv| &tv.ty)) {
        return None;
    }
    let q = pkg.qualifier();
    Some(Diagnostic::new(
        unit.pos(id),
        Category::MapType,
        format!(
            "map with {q}.{} key (likely change key type to *{q}.{})",
            pkg.interface, pkg.name_type
        ),
    ))
}

/// `x == y` / `x != y` between node interface values.
pub fn check_comparison(unit: &Unit, pkg: &TargetPackage, id: NodeId) -> Option<Diagnostic> {
    let NodeKind::BinaryExpr { op, x, y } = unit.kind(id) else {
        return None;
    };
    if !op.is_equality() {
        return None;
    }

    let xtv = unit.type_of(*x);
    let ytv = unit.type_of(*y);

    // Comparison with nil is always safe.
    if xtv.is_some_and(|tv| tv.is_nil()) || ytv.is_some_and(|tv| tv.is_nil()) {
        return None;
    }

    let xty = xtv.map(|tv| &tv.ty);
    let yty = ytv.map(|tv| &tv.ty);

    // Stand-in for "the name pointer type is not assignable to either
    // operand": function pointers are the common case.
    if pkg.is_ptr_to_func(xty) || pkg.is_ptr_to_func(yty) {
        return None;
    }

    if !pkg.is_interface_type(xty) {
        return None;
    }
    let q = pkg.qualifier();
    Some(Diagnostic::new(
        unit.pos(id),
        Category::Compare,
        format!(
            "comparison of {q}.{} values (replace with {q}.Uses or {q}.SameSource)",
            pkg.interface
        ),
    ))
}

/// A `*ir.Name` value flowing into an `ir.Node` destination.
///
/// `stack` ends with the expression under inspection.
pub fn check_assignment(
    unit: &Unit,
    pkg: &TargetPackage,
    stack: &[NodeId],
) -> Result<Option<Diagnostic>, AnalysisError> {
    let (parent, id) = match stack {
        [.., parent, id] => (*parent, *id),
        _ => return Ok(None),
    };
    if !unit.kind(id).is_expr() || !is_flow_parent(unit.kind(parent)) {
        return Ok(None);
    }
    let Some(tv) = unit.type_of(id) else {
        return Ok(None);
    };
    if !tv.is_value() || !pkg.is_ptr_to_name(Some(&tv.ty)) {
        return Ok(None);
    }
    if !required_type_is_interface(unit, pkg, stack)? {
        return Ok(None);
    }

    let q = pkg.qualifier();
    Ok(Some(Diagnostic::new(
        unit.pos(id),
        Category::Assign,
        format!(
            "*{q}.{name} assigned to {q}.{} (maybe change destination to *{q}.{name} too)",
            pkg.interface,
            name = pkg.name_type
        ),
    )))
}
