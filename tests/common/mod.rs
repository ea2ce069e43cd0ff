#![allow(dead_code)]

use gclint::domain::ast::{BinaryOp, NodeId, NodeKind};
use gclint::domain::classify::IR_PKG_PATH;
use gclint::domain::types::{Object, ObjectKind, Signature, Type, TypeAndValue};
use gclint::domain::unit::{Unit, UnitBuilder};

pub fn ir(name: &str) -> Type {
    Type::named(IR_PKG_PATH, name)
}

pub fn node_t() -> Type {
    ir("Node")
}

pub fn name_ptr() -> Type {
    Type::pointer(ir("Name"))
}

pub fn func_ptr() -> Type {
    Type::pointer(ir("Func"))
}

/// Small helper for building typed Go-shaped trees bottom-up.
pub struct GoUnit {
    pub b: UnitBuilder,
}

impl GoUnit {
    pub fn new(file: &str) -> Self {
        Self { b: UnitBuilder::new(file) }
    }

    /// An identifier denoting a value of type `ty`.
    pub fn var(&mut self, name: &str, ty: Type) -> NodeId {
        self.b.push_typed(
            NodeKind::Ident { name: name.to_string() },
            TypeAndValue::value(ty),
        )
    }

    /// An identifier denoting the type `ty`.
    pub fn type_name(&mut self, ty: Type) -> NodeId {
        let name = match &ty {
            Type::Named { name, .. } | Type::Basic { name } => name.clone(),
            _ => "T".to_string(),
        };
        self.b.push_typed(NodeKind::Ident { name }, TypeAndValue::type_expr(ty))
    }

    pub fn nil(&mut self) -> NodeId {
        self.b.push_typed(NodeKind::Ident { name: "nil".to_string() }, TypeAndValue::nil())
    }

    pub fn map_type(&mut self, key: Type, value: Type) -> NodeId {
        let map_ty = Type::map(key.clone(), value.clone());
        let key = self.type_name(key);
        let value = self.type_name(value);
        self.b.push_typed(NodeKind::MapType { key, value }, TypeAndValue::type_expr(map_ty))
    }

    pub fn binary(&mut self, op: BinaryOp, x: NodeId, y: NodeId) -> NodeId {
        self.b.push_typed(
            NodeKind::BinaryExpr { op, x, y },
            TypeAndValue::value(Type::basic("bool")),
        )
    }

    pub fn expr_stmt(&mut self, x: NodeId) -> NodeId {
        self.b.push(NodeKind::ExprStmt { x })
    }

    pub fn assign(&mut self, lhs: Vec<NodeId>, rhs: Vec<NodeId>) -> NodeId {
        self.b.push(NodeKind::AssignStmt { lhs, define: false, rhs })
    }

    /// `x.Defn`, resolved to the backlink field of the IR package.
    pub fn defn_selector(&mut self, x: NodeId) -> NodeId {
        let sel = self.b.push(NodeKind::Ident { name: "Defn".to_string() });
        self.b.set_use(
            sel,
            Object::new(ObjectKind::Field, Some(IR_PKG_PATH), "Defn", Some(node_t())),
        );
        self.b.push_typed(NodeKind::SelectorExpr { x, sel }, TypeAndValue::value(node_t()))
    }

    pub fn func_value(&mut self, name: &str, sig: Signature) -> NodeId {
        self.var(name, Type::Signature(sig))
    }

    pub fn call(&mut self, fun: NodeId, args: Vec<NodeId>, spread: bool) -> NodeId {
        let ellipsis = if spread { Some(gclint::domain::ast::Pos::new(999, 1)) } else { None };
        self.b.push(NodeKind::CallExpr { fun, args, ellipsis })
    }

    pub fn ret(&mut self, results: Vec<NodeId>) -> NodeId {
        self.b.push(NodeKind::ReturnStmt { results })
    }

    pub fn block(&mut self, stmts: Vec<NodeId>) -> NodeId {
        self.b.push(NodeKind::BlockStmt { stmts })
    }

    /// `func name(...) results { stmts }`
    pub fn func_decl(&mut self, name: &str, sig: Signature, stmts: Vec<NodeId>) -> NodeId {
        let body = self.block(stmts);
        let ident = self.b.push(NodeKind::Ident { name: name.to_string() });
        self.b.set_def(
            ident,
            Object::new(ObjectKind::Func, Some("cmd/compile/internal/walk"), name, Some(Type::Signature(sig))),
        );
        let ty = self.b.push(NodeKind::FuncType { params: vec![], results: vec![] });
        self.b.push(NodeKind::FuncDecl { recv: None, name: ident, ty, body: Some(body) })
    }

    /// `func(...) results { stmts }` as an expression.
    pub fn func_lit(&mut self, sig: Signature, stmts: Vec<NodeId>) -> NodeId {
        let body = self.block(stmts);
        let ty = self.b.push(NodeKind::FuncType { params: vec![], results: vec![] });
        self.b.push_typed(NodeKind::FuncLit { ty, body }, TypeAndValue::value(Type::Signature(sig)))
    }

    /// `var name T`, typed by a type expression node.
    pub fn var_decl(&mut self, name: &str, ty: NodeId) -> NodeId {
        let ident = self.b.push(NodeKind::Ident { name: name.to_string() });
        let spec = self.b.push(NodeKind::ValueSpec { names: vec![ident], ty: Some(ty), values: vec![] });
        self.b.push(NodeKind::GenDecl { specs: vec![spec] })
    }

    pub fn file(mut self, decls: Vec<NodeId>) -> Unit {
        let root = self.b.push(NodeKind::File { decls });
        self.b.finish(root).expect("well-formed test tree")
    }
}
