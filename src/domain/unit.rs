// A compilation unit: syntax tree plus the type checker's results.

use crate::domain::ast::{Node, NodeId, NodeKind, Pos, SyntaxTree};
use crate::domain::error::TreeShapeError;
use crate::domain::types::{Object, TypeAndValue, TypeInfo};

#[derive(Debug, Clone)]
pub struct Unit {
    pub tree: SyntaxTree,
    pub info: TypeInfo,
}

impl Unit {
    pub fn file(&self) -> &str {
        self.tree.file()
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        self.tree.kind(id)
    }

    pub fn pos(&self, id: NodeId) -> Pos {
        self.tree.pos(id)
    }

    pub fn type_of(&self, id: NodeId) -> Option<&TypeAndValue> {
        self.info.type_of(id)
    }
}

/// Assembles a unit bottom-up: children are pushed before their parents and
/// the root is named last.
#[derive(Debug, Default)]
pub struct UnitBuilder {
    file: String,
    nodes: Vec<Node>,
    info: TypeInfo,
}

impl UnitBuilder {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            ..Self::default()
        }
    }

    /// Adds a node positioned on its own line (line = id + 1).
    pub fn push(&mut self, kind: NodeKind) -> NodeId {
        let line = self.nodes.len() as u32 + 1;
        self.push_at(Pos::new(line, 1), kind)
    }

    pub fn push_at(&mut self, pos: Pos, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node { pos, kind });
        id
    }

    /// Adds a node together with its resolved type.
    pub fn push_typed(&mut self, kind: NodeKind, tv: TypeAndValue) -> NodeId {
        let id = self.push(kind);
        self.info.record_type(id, tv);
        id
    }

    pub fn set_type(&mut self, id: NodeId, tv: TypeAndValue) {
        self.info.record_type(id, tv);
    }

    pub fn set_def(&mut self, id: NodeId, obj: Object) {
        self.info.record_def(id, obj);
    }

    pub fn set_use(&mut self, id: NodeId, obj: Object) {
        self.info.record_use(id, obj);
    }

    pub fn finish(self, root: NodeId) -> Result<Unit, TreeShapeError> {
        let tree = SyntaxTree::new(self.file, self.nodes, root)?;
        Ok(Unit { tree, info: self.info })
    }
}
