//! The runtime node wrapper.

use crate::IdentifierSlot;
use arbor_types::{NodeId, TypeKind};
use serde_json::Value;
use std::collections::BTreeMap;

/// Dependency-injection channel threaded through instantiation.
///
/// The tree core does not interpret the environment; it hands it through
/// to child instantiations unchanged and parks it on root nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment(serde_json::Map<String, Value>);

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value under `key`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    /// Looks up a value by `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether the environment carries no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A runtime node in the state tree.
///
/// Wraps one piece of stored state: the snapshot value, the name and
/// kind of the type that produced it, the node's path from the root, and
/// (for model nodes) named children plus the identifier slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Unique identity of this runtime node.
    pub id: NodeId,
    /// Name of the type that instantiated this node.
    pub type_name: String,
    /// Kind of the type that instantiated this node.
    pub kind: TypeKind,
    /// JSON-pointer-style path from the root (`""` for the root itself).
    pub path: String,
    /// The stored snapshot value.
    pub value: Value,
    /// Which property, if any, is this node's identifier.
    pub identifier: IdentifierSlot,
    /// Named children (model nodes only).
    pub children: BTreeMap<String, Node>,
    /// Environment parked here when this node is a root.
    pub environment: Environment,
}

impl Node {
    /// Whether this node was produced by a model (composite) type.
    #[must_use]
    pub fn is_model(&self) -> bool {
        self.kind.is_model()
    }

    /// The property registered as this node's identifier, if any.
    #[must_use]
    pub fn identifier_property(&self) -> Option<&str> {
        self.identifier.get()
    }

    /// Extract a string from the stored value using a JSON pointer (e.g. "/title").
    #[must_use]
    pub fn get_str(&self, pointer: &str) -> Option<&str> {
        self.value.pointer(pointer).and_then(|v| v.as_str())
    }

    /// Extract a boolean from the stored value using a JSON pointer.
    #[must_use]
    pub fn get_bool(&self, pointer: &str) -> Option<bool> {
        self.value.pointer(pointer).and_then(|v| v.as_bool())
    }

    /// Extract a number from the stored value using a JSON pointer.
    #[must_use]
    pub fn get_number(&self, pointer: &str) -> Option<f64> {
        self.value.pointer(pointer).and_then(|v| v.as_f64())
    }

    /// Looks up a child node by property name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.get(name)
    }

    /// Looks up a child node by property name, mutably.
    pub fn child_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.children.get_mut(name)
    }

    /// Attaches a child node under `name`, replacing any previous child.
    pub fn insert_child(&mut self, name: impl Into<String>, node: Node) {
        self.children.insert(name.into(), node);
    }
}

/// Whether `node` is backed by a model node — i.e. a value that can own
/// identifier-bearing properties.
#[must_use]
pub fn is_tree_backed(node: &Node) -> bool {
    node.is_model()
}
