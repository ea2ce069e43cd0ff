// Resolved type information for a compilation unit.
// Produced by the type checker of the front end; read-only here.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::ast::NodeId;

/// A statically resolved type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Type {
    Basic { name: String },
    /// A declared type. `pkg` is the declaring package path, absent for
    /// universe types such as `error`.
    Named { pkg: Option<String>, name: String },
    Pointer { elem: Box<Type> },
    Slice { elem: Box<Type> },
    Map { key: Box<Type>, value: Box<Type> },
    Signature(Signature),
    Tuple { elems: Vec<Type> },
    Interface,
    /// The type of the predeclared `nil`.
    UntypedNil,
}

impl Type {
    pub fn basic(name: &str) -> Self {
        Type::Basic { name: name.to_string() }
    }

    pub fn named(pkg: &str, name: &str) -> Self {
        Type::Named {
            pkg: Some(pkg.to_string()),
            name: name.to_string(),
        }
    }

    pub fn pointer(elem: Type) -> Self {
        Type::Pointer { elem: Box::new(elem) }
    }

    pub fn slice(elem: Type) -> Self {
        Type::Slice { elem: Box::new(elem) }
    }

    pub fn map(key: Type, value: Type) -> Self {
        Type::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn as_signature(&self) -> Option<&Signature> {
        match self {
            Type::Signature(sig) => Some(sig),
            _ => None,
        }
    }
}

/// A function signature. When `variadic` is set the last parameter has a
/// slice type standing for the `...T` parameter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Signature {
    #[serde(default)]
    pub params: Vec<Type>,
    #[serde(default)]
    pub results: Vec<Type>,
    #[serde(default)]
    pub variadic: bool,
}

impl Signature {
    pub fn new(params: Vec<Type>, results: Vec<Type>) -> Self {
        Self {
            params,
            results,
            variadic: false,
        }
    }

    pub fn variadic(params: Vec<Type>, results: Vec<Type>) -> Self {
        Self {
            params,
            results,
            variadic: true,
        }
    }
}

/// How an expression denotes something.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// A value: variable, constant or computed.
    Value,
    /// A type expression, e.g. the callee of a conversion.
    Type,
    /// A builtin function such as `append` or `len`.
    Builtin,
    /// A call without results.
    NoValue,
}

/// Mode and type of an expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeAndValue {
    pub mode: Mode,
    #[serde(rename = "type")]
    pub ty: Type,
}

impl TypeAndValue {
    pub fn value(ty: Type) -> Self {
        Self { mode: Mode::Value, ty }
    }

    pub fn type_expr(ty: Type) -> Self {
        Self { mode: Mode::Type, ty }
    }

    pub fn nil() -> Self {
        Self::value(Type::UntypedNil)
    }

    pub fn is_value(&self) -> bool {
        self.mode == Mode::Value
    }

    /// The expression is the predeclared `nil`.
    pub fn is_nil(&self) -> bool {
        self.is_value() && self.ty == Type::UntypedNil
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    Var,
    Field,
    Func,
    Const,
    TypeName,
    PkgName,
}

/// A named language entity an identifier defines or refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Object {
    pub name: String,
    pub pkg: Option<String>,
    pub kind: ObjectKind,
    #[serde(rename = "type")]
    pub ty: Option<Type>,
}

impl Object {
    pub fn new(kind: ObjectKind, pkg: Option<&str>, name: &str, ty: Option<Type>) -> Self {
        Self {
            name: name.to_string(),
            pkg: pkg.map(str::to_string),
            kind,
            ty,
        }
    }
}

/// Type-checker results for one unit, keyed by node id.
#[derive(Debug, Clone, Default)]
pub struct TypeInfo {
    /// Types of expressions.
    types: HashMap<NodeId, TypeAndValue>,
    /// Objects defined by identifiers.
    defs: HashMap<NodeId, Object>,
    /// Objects referred to by identifiers.
    uses: HashMap<NodeId, Object>,
}

impl TypeInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_type(&mut self, id: NodeId, tv: TypeAndValue) {
        self.types.insert(id, tv);
    }

    pub fn record_def(&mut self, id: NodeId, obj: Object) {
        self.defs.insert(id, obj);
    }

    pub fn record_use(&mut self, id: NodeId, obj: Object) {
        self.uses.insert(id, obj);
    }

    pub fn type_of(&self, id: NodeId) -> Option<&TypeAndValue> {
        self.types.get(&id)
    }

    pub fn def_of(&self, id: NodeId) -> Option<&Object> {
        self.defs.get(&id)
    }

    pub fn use_of(&self, id: NodeId) -> Option<&Object> {
        self.uses.get(&id)
    }
}
