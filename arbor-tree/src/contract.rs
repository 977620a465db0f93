//! The structural-type contract and the node-construction primitive.

use crate::{Environment, IdentifierSlot, Node};
use arbor_types::{NodeId, TreeResult, TypeKind, ValidationContext, ValidationReport};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// The contract every structural type implements.
///
/// Types are the static half of the tree: they describe shapes, validate
/// snapshots, and drive node construction and reconciliation. A type
/// instance is shared (`Arc<dyn NodeType>`) and never mutated after
/// construction.
pub trait NodeType {
    /// Display name of the type.
    fn name(&self) -> &str;

    /// Classification of the type.
    fn kind(&self) -> TypeKind;

    /// Diagnostic description of the type's shape.
    fn describe(&self) -> String;

    /// Checks a snapshot against this type, accumulating violations with
    /// the context's path.
    fn validate(&self, value: &Value, context: &ValidationContext) -> ValidationReport;

    /// Produces a node wrapping `snapshot`, attached under `parent` at
    /// `subpath`. `parent` is `None` when instantiating a root.
    fn instantiate(
        &self,
        parent: Option<&mut Node>,
        subpath: &str,
        environment: &Environment,
        snapshot: Value,
    ) -> TreeResult<Node>;

    /// Updates `current`'s stored state in place to match `new_value`.
    ///
    /// A rejected reconciliation must leave `current` unchanged.
    fn reconcile(&self, current: &mut Node, new_value: Value) -> TreeResult<()>;
}

/// Generic node-construction primitive.
///
/// Assigns a fresh [`NodeId`], derives the child path from the parent's
/// path and `subpath`, stamps the type's name and kind, and stores the
/// snapshot. Performs no validation; types validate before calling this.
#[must_use]
pub fn create_node(
    ty: &dyn NodeType,
    parent: Option<&Node>,
    subpath: &str,
    environment: &Environment,
    snapshot: Value,
) -> Node {
    let path = match parent {
        Some(p) => format!("{}/{subpath}", p.path),
        None if subpath.is_empty() => String::new(),
        None => format!("/{subpath}"),
    };

    // Roots own the environment; children reach it through the tree.
    let environment = if parent.is_none() {
        environment.clone()
    } else {
        Environment::default()
    };

    let node = Node {
        id: NodeId::new(),
        type_name: ty.name().to_string(),
        kind: ty.kind(),
        path,
        value: snapshot,
        identifier: IdentifierSlot::new(),
        children: BTreeMap::new(),
        environment,
    };
    debug!("Created node {} (type={}, path='{}')", node.id, node.type_name, node.path);
    node
}
