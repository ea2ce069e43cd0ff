// Syntax tree structures for gclint.
// A compilation unit arrives already parsed; nodes live in a flat arena and
// refer to their children by index.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::error::TreeShapeError;

/// Index of a node inside its unit's arena. Two nodes are the same node
/// exactly when their ids are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Source position (1-based line and column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Pos {
    pub line: u32,
    pub column: u32,
}

impl Pos {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
    Eql,
    Neq,
    Lss,
    Leq,
    Gtr,
    Geq,
    Add,
    Sub,
    Mul,
    Quo,
    Rem,
    And,
    Or,
    Xor,
    Shl,
    Shr,
    AndNot,
    LAnd,
    LOr,
}

impl BinaryOp {
    /// `==` or `!=`.
    pub fn is_equality(self) -> bool {
        matches!(self, BinaryOp::Eql | BinaryOp::Neq)
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnaryOp {
    Not,
    Neg,
    Addr,
    Xor,
    Recv,
}

/// Closed set of syntax shapes the checker understands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum NodeKind {
    // Declarations
    File {
        #[serde(default)]
        decls: Vec<NodeId>,
    },
    FuncDecl {
        recv: Option<NodeId>,
        name: NodeId,
        ty: NodeId,
        body: Option<NodeId>,
    },
    GenDecl {
        #[serde(default)]
        specs: Vec<NodeId>,
    },
    ValueSpec {
        names: Vec<NodeId>,
        ty: Option<NodeId>,
        #[serde(default)]
        values: Vec<NodeId>,
    },
    TypeSpec {
        name: NodeId,
        ty: NodeId,
    },
    Field {
        #[serde(default)]
        names: Vec<NodeId>,
        ty: NodeId,
    },

    // Statements
    BlockStmt {
        #[serde(default)]
        stmts: Vec<NodeId>,
    },
    ExprStmt {
        x: NodeId,
    },
    AssignStmt {
        lhs: Vec<NodeId>,
        #[serde(default)]
        define: bool,
        rhs: Vec<NodeId>,
    },
    ReturnStmt {
        #[serde(default)]
        results: Vec<NodeId>,
    },
    IfStmt {
        init: Option<NodeId>,
        cond: NodeId,
        body: NodeId,
        els: Option<NodeId>,
    },
    ForStmt {
        init: Option<NodeId>,
        cond: Option<NodeId>,
        post: Option<NodeId>,
        body: NodeId,
    },
    RangeStmt {
        key: Option<NodeId>,
        value: Option<NodeId>,
        x: NodeId,
        body: NodeId,
    },
    IncDecStmt {
        x: NodeId,
        inc: bool,
    },
    DeclStmt {
        decl: NodeId,
    },

    // Expressions
    Ident {
        name: String,
    },
    BasicLit {
        value: String,
    },
    SelectorExpr {
        x: NodeId,
        sel: NodeId,
    },
    CallExpr {
        fun: NodeId,
        #[serde(default)]
        args: Vec<NodeId>,
        /// Position of a trailing `...`, when the last argument is spread.
        ellipsis: Option<Pos>,
    },
    BinaryExpr {
        op: BinaryOp,
        x: NodeId,
        y: NodeId,
    },
    UnaryExpr {
        op: UnaryOp,
        x: NodeId,
    },
    StarExpr {
        x: NodeId,
    },
    ParenExpr {
        x: NodeId,
    },
    IndexExpr {
        x: NodeId,
        index: NodeId,
    },
    CompositeLit {
        ty: Option<NodeId>,
        #[serde(default)]
        elts: Vec<NodeId>,
    },
    KeyValueExpr {
        key: NodeId,
        value: NodeId,
    },
    FuncLit {
        ty: NodeId,
        body: NodeId,
    },

    // Type expressions
    FuncType {
        #[serde(default)]
        params: Vec<NodeId>,
        #[serde(default)]
        results: Vec<NodeId>,
    },
    MapType {
        key: NodeId,
        value: NodeId,
    },
    ArrayType {
        len: Option<NodeId>,
        elt: NodeId,
    },
}

impl NodeKind {
    /// Short name of the syntax shape, used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::File { .. } => "File",
            NodeKind::FuncDecl { .. } => "FuncDecl",
            NodeKind::GenDecl { .. } => "GenDecl",
            NodeKind::ValueSpec { .. } => "ValueSpec",
            NodeKind::TypeSpec { .. } => "TypeSpec",
            NodeKind::Field { .. } => "Field",
            NodeKind::BlockStmt { .. } => "BlockStmt",
            NodeKind::ExprStmt { .. } => "ExprStmt",
            NodeKind::AssignStmt { .. } => "AssignStmt",
            NodeKind::ReturnStmt { .. } => "ReturnStmt",
            NodeKind::IfStmt { .. } => "IfStmt",
            NodeKind::ForStmt { .. } => "ForStmt",
            NodeKind::RangeStmt { .. } => "RangeStmt",
            NodeKind::IncDecStmt { .. } => "IncDecStmt",
            NodeKind::DeclStmt { .. } => "DeclStmt",
            NodeKind::Ident { .. } => "Ident",
            NodeKind::BasicLit { .. } => "BasicLit",
            NodeKind::SelectorExpr { .. } => "SelectorExpr",
            NodeKind::CallExpr { .. } => "CallExpr",
            NodeKind::BinaryExpr { .. } => "BinaryExpr",
            NodeKind::UnaryExpr { .. } => "UnaryExpr",
            NodeKind::StarExpr { .. } => "StarExpr",
            NodeKind::ParenExpr { .. } => "ParenExpr",
            NodeKind::IndexExpr { .. } => "IndexExpr",
            NodeKind::CompositeLit { .. } => "CompositeLit",
            NodeKind::KeyValueExpr { .. } => "KeyValueExpr",
            NodeKind::FuncLit { .. } => "FuncLit",
            NodeKind::FuncType { .. } => "FuncType",
            NodeKind::MapType { .. } => "MapType",
            NodeKind::ArrayType { .. } => "ArrayType",
        }
    }

    /// Whether the node is an expression (type expressions included).
    pub fn is_expr(&self) -> bool {
        matches!(
            self,
            NodeKind::Ident { .. }
                | NodeKind::BasicLit { .. }
                | NodeKind::SelectorExpr { .. }
                | NodeKind::CallExpr { .. }
                | NodeKind::BinaryExpr { .. }
                | NodeKind::UnaryExpr { .. }
                | NodeKind::StarExpr { .. }
                | NodeKind::ParenExpr { .. }
                | NodeKind::IndexExpr { .. }
                | NodeKind::CompositeLit { .. }
                | NodeKind::KeyValueExpr { .. }
                | NodeKind::FuncLit { .. }
                | NodeKind::FuncType { .. }
                | NodeKind::MapType { .. }
                | NodeKind::ArrayType { .. }
        )
    }

    /// Direct children in source order.
    pub fn children(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        match self {
            NodeKind::File { decls } => out.extend(decls),
            NodeKind::FuncDecl { recv, name, ty, body } => {
                out.extend(recv);
                out.push(*name);
                out.push(*ty);
                out.extend(body);
            }
            NodeKind::GenDecl { specs } => out.extend(specs),
            NodeKind::ValueSpec { names, ty, values } => {
                out.extend(names);
                out.extend(ty);
                out.extend(values);
            }
            NodeKind::TypeSpec { name, ty } => out.extend([*name, *ty]),
            NodeKind::Field { names, ty } => {
                out.extend(names);
                out.push(*ty);
            }
            NodeKind::BlockStmt { stmts } => out.extend(stmts),
            NodeKind::ExprStmt { x } => out.push(*x),
            NodeKind::AssignStmt { lhs, rhs, .. } => {
                out.extend(lhs);
                out.extend(rhs);
            }
            NodeKind::ReturnStmt { results } => out.extend(results),
            NodeKind::IfStmt { init, cond, body, els } => {
                out.extend(init);
                out.push(*cond);
                out.push(*body);
                out.extend(els);
            }
            NodeKind::ForStmt { init, cond, post, body } => {
                out.extend(init);
                out.extend(cond);
                out.extend(post);
                out.push(*body);
            }
            NodeKind::RangeStmt { key, value, x, body } => {
                out.extend(key);
                out.extend(value);
                out.push(*x);
                out.push(*body);
            }
            NodeKind::IncDecStmt { x, .. } => out.push(*x),
            NodeKind::DeclStmt { decl } => out.push(*decl),
            NodeKind::Ident { .. } | NodeKind::BasicLit { .. } => {}
            NodeKind::SelectorExpr { x, sel } => out.extend([*x, *sel]),
            NodeKind::CallExpr { fun, args, .. } => {
                out.push(*fun);
                out.extend(args);
            }
            NodeKind::BinaryExpr { x, y, .. } => out.extend([*x, *y]),
            NodeKind::UnaryExpr { x, .. } | NodeKind::StarExpr { x } | NodeKind::ParenExpr { x } => {
                out.push(*x)
            }
            NodeKind::IndexExpr { x, index } => out.extend([*x, *index]),
            NodeKind::CompositeLit { ty, elts } => {
                out.extend(ty);
                out.extend(elts);
            }
            NodeKind::KeyValueExpr { key, value } => out.extend([*key, *value]),
            NodeKind::FuncLit { ty, body } => out.extend([*ty, *body]),
            NodeKind::FuncType { params, results } => {
                out.extend(params);
                out.extend(results);
            }
            NodeKind::MapType { key, value } => out.extend([*key, *value]),
            NodeKind::ArrayType { len, elt } => {
                out.extend(len);
                out.push(*elt);
            }
        }
        out
    }
}

/// A node of the syntax tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub pos: Pos,
    #[serde(flatten)]
    pub kind: NodeKind,
}

/// The syntax tree of one compilation unit.
///
/// Construction checks the arena forms a proper tree rooted at `root`:
/// every child id exists, every node except the root has exactly one
/// parent, and every node is reachable. The traversal relies on this.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    file: String,
    nodes: Vec<Node>,
    root: NodeId,
}

impl SyntaxTree {
    pub fn new(file: impl Into<String>, nodes: Vec<Node>, root: NodeId) -> Result<Self, TreeShapeError> {
        let tree = Self {
            file: file.into(),
            nodes,
            root,
        };
        tree.validate()?;
        Ok(tree)
    }

    fn validate(&self) -> Result<(), TreeShapeError> {
        let len = self.nodes.len();
        if self.root.index() >= len {
            return Err(TreeShapeError::MissingNode { id: self.root, parent: None });
        }

        let mut seen = vec![false; len];
        let mut pending = vec![self.root];
        seen[self.root.index()] = true;

        while let Some(id) = pending.pop() {
            for child in self.nodes[id.index()].kind.children() {
                if child.index() >= len {
                    return Err(TreeShapeError::MissingNode { id: child, parent: Some(id) });
                }
                if seen[child.index()] {
                    return Err(TreeShapeError::SharedNode { id: child, parent: id });
                }
                seen[child.index()] = true;
                pending.push(child);
            }
        }

        match seen.iter().position(|reached| !reached) {
            Some(index) => Err(TreeShapeError::Unreachable { id: NodeId(index as u32) }),
            None => Ok(()),
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Ids are only minted by the tree's own arena, so indexing is in bounds.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.node(id).kind
    }

    pub fn pos(&self, id: NodeId) -> Pos {
        self.node(id).pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(line: u32, name: &str) -> Node {
        Node {
            pos: Pos::new(line, 1),
            kind: NodeKind::Ident { name: name.to_string() },
        }
    }

    #[test]
    fn test_children_in_source_order() {
        let kind = NodeKind::CallExpr {
            fun: NodeId(3),
            args: vec![NodeId(1), NodeId(2)],
            ellipsis: None,
        };
        assert_eq!(kind.children(), vec![NodeId(3), NodeId(1), NodeId(2)]);
    }

    #[test]
    fn test_valid_tree() {
        let nodes = vec![
            ident(1, "a"),
            ident(1, "b"),
            Node {
                pos: Pos::new(1, 1),
                kind: NodeKind::BinaryExpr { op: BinaryOp::Eql, x: NodeId(0), y: NodeId(1) },
            },
        ];
        let tree = SyntaxTree::new("a.go", nodes, NodeId(2)).unwrap();
        assert_eq!(tree.len(), 3);
        assert!(tree.kind(tree.root()).is_expr());
    }

    #[test]
    fn test_rejects_shared_child() {
        let nodes = vec![
            ident(1, "a"),
            Node {
                pos: Pos::new(1, 1),
                kind: NodeKind::BinaryExpr { op: BinaryOp::Eql, x: NodeId(0), y: NodeId(0) },
            },
        ];
        let err = SyntaxTree::new("a.go", nodes, NodeId(1)).unwrap_err();
        assert!(matches!(err, TreeShapeError::SharedNode { id: NodeId(0), .. }));
    }

    #[test]
    fn test_rejects_missing_and_unreachable() {
        let dangling = vec![Node {
            pos: Pos::new(1, 1),
            kind: NodeKind::ParenExpr { x: NodeId(7) },
        }];
        assert!(matches!(
            SyntaxTree::new("a.go", dangling, NodeId(0)),
            Err(TreeShapeError::MissingNode { id: NodeId(7), .. })
        ));

        let orphan = vec![ident(1, "a"), ident(2, "b")];
        assert!(matches!(
            SyntaxTree::new("a.go", orphan, NodeId(0)),
            Err(TreeShapeError::Unreachable { id: NodeId(1) })
        ));
    }

    #[test]
    fn test_node_json_shape() {
        let json = r#"{"pos":{"line":3,"column":7},"kind":"MapType","key":1,"value":2}"#;
        let node: Node = serde_json::from_str(json).unwrap();
        assert_eq!(node.pos, Pos::new(3, 7));
        assert_eq!(node.kind, NodeKind::MapType { key: NodeId(1), value: NodeId(2) });
    }
}
