//! Type classifiers.
//!
//! Exact nominal matches against the IR package: no assignability or
//! subtyping is considered. Unresolved or unrelated types never match.

use serde::Deserialize;

use crate::domain::types::{Object, ObjectKind, Type};

pub const IR_PKG_PATH: &str = "cmd/compile/internal/ir";

/// The package whose node interface is checked, and the names of the
/// interface, its concrete implementers, and the closure backlink field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TargetPackage {
    pub path: String,
    pub interface: String,
    pub name_type: String,
    pub func_type: String,
    pub defn_field: String,
}

impl Default for TargetPackage {
    fn default() -> Self {
        Self {
            path: IR_PKG_PATH.to_string(),
            interface: "Node".to_string(),
            name_type: "Name".to_string(),
            func_type: "Func".to_string(),
            defn_field: "Defn".to_string(),
        }
    }
}

impl TargetPackage {
    /// Last path segment, as code in other packages writes it (`ir`).
    pub fn qualifier(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// `ir.Node` exactly.
    pub fn is_interface_type(&self, ty: Option<&Type>) -> bool {
        self.is_named_type(ty, &self.interface)
    }

    /// `*ir.<name>` exactly.
    pub fn is_pointer_to(&self, ty: Option<&Type>, name: &str) -> bool {
        match ty {
            Some(Type::Pointer { elem }) => self.is_named_type(Some(elem.as_ref()), name),
            _ => false,
        }
    }

    pub fn is_ptr_to_name(&self, ty: Option<&Type>) -> bool {
        self.is_pointer_to(ty, &self.name_type)
    }

    pub fn is_ptr_to_func(&self, ty: Option<&Type>) -> bool {
        self.is_pointer_to(ty, &self.func_type)
    }

    /// A field object named like the backlink field, declared in the package.
    // TODO: also require the field's receiver to be the Name type once
    // field objects carry their parent struct.
    pub fn is_backlink_field(&self, obj: Option<&Object>) -> bool {
        match obj {
            Some(obj) => obj.kind == ObjectKind::Field && self.is_member(obj.pkg.as_deref(), &obj.name, &self.defn_field),
            None => false,
        }
    }

    fn is_named_type(&self, ty: Option<&Type>, name: &str) -> bool {
        match ty {
            Some(Type::Named { pkg, name: type_name }) => self.is_member(pkg.as_deref(), type_name, name),
            _ => false,
        }
    }

    fn is_member(&self, pkg: Option<&str>, actual: &str, expected: &str) -> bool {
        pkg == Some(self.path.as_str()) && actual == expected
    }
}
