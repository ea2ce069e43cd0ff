//! JSON unit loader.
//!
//! Reads a compilation unit exported by the front end: the node arena, the
//! root id, and per-node type-checker facts.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::domain::ast::{Node, NodeId};
use crate::domain::types::{Object, TypeAndValue};
use crate::domain::unit::{Unit, UnitBuilder};
use crate::ports::UnitLoader;

#[derive(Debug, Deserialize)]
struct UnitFile {
    file: String,
    root: NodeId,
    nodes: Vec<serde_json::Value>,
}

/// One arena slot; its id is its index in `nodes`.
#[derive(Debug, Deserialize)]
struct NodeRecord {
    #[serde(flatten)]
    node: Node,
    #[serde(rename = "type")]
    ty: Option<TypeAndValue>,
    def: Option<Object>,
    #[serde(rename = "use")]
    used: Option<Object>,
}

/// Keys a record may carry besides the node's own fields.
const FACT_KEYS: &[&str] = &["type", "def", "use"];

/// Decode one record, rejecting keys that are neither a field of its syntax
/// kind nor a type-checker fact. A misspelled fact would otherwise drop out
/// silently and the unit would check clean.
fn parse_record(index: usize, value: &serde_json::Value) -> Result<NodeRecord> {
    let record =
        NodeRecord::deserialize(value).with_context(|| format!("malformed node {}", index))?;

    let shape = serde_json::to_value(&record.node)?;
    if let (Some(given), Some(known)) = (value.as_object(), shape.as_object()) {
        let unknown = given
            .keys()
            .find(|key| !known.contains_key(*key) && !FACT_KEYS.contains(&key.as_str()));
        if let Some(key) = unknown {
            anyhow::bail!("node {}: unknown key `{}` for {}", index, key, record.node.kind.name());
        }
    }
    Ok(record)
}

pub struct JsonUnitLoader;

impl JsonUnitLoader {
    /// Parse a unit from its JSON text.
    pub fn parse(src: &str) -> Result<Unit> {
        let raw: UnitFile = serde_json::from_str(src).context("malformed unit JSON")?;

        let mut builder = UnitBuilder::new(raw.file.clone());
        for (index, value) in raw.nodes.iter().enumerate() {
            let record = parse_record(index, value)?;
            let id = builder.push_at(record.node.pos, record.node.kind);
            if let Some(tv) = record.ty {
                builder.set_type(id, tv);
            }
            if let Some(obj) = record.def {
                builder.set_def(id, obj);
            }
            if let Some(obj) = record.used {
                builder.set_use(id, obj);
            }
        }

        builder
            .finish(raw.root)
            .with_context(|| format!("invalid syntax tree for {}", raw.file))
    }
}

impl UnitLoader for JsonUnitLoader {
    fn load(&self, path: &Path) -> Result<Unit> {
        let src = fs::read_to_string(path)
            .with_context(|| format!("Failed to read unit {}", path.display()))?;
        Self::parse(&src).with_context(|| format!("Failed to load unit {}", path.display()))
    }
}
