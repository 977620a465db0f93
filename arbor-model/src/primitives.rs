//! Primitive leaf types.

use arbor_tree::{Environment, Node, NodeType, create_node};
use arbor_types::{TreeResult, TypeKind, UpdateError, ValidationContext, ValidationReport};
use serde_json::Value;
use std::sync::Arc;

/// A leaf type accepting exactly one JSON primitive kind.
#[derive(Debug)]
pub struct PrimitiveType {
    kind: TypeKind,
    name: &'static str,
}

impl PrimitiveType {
    /// The string primitive.
    #[must_use]
    pub fn string() -> Arc<Self> {
        Arc::new(Self { kind: TypeKind::String, name: "string" })
    }

    /// The number primitive.
    #[must_use]
    pub fn number() -> Arc<Self> {
        Arc::new(Self { kind: TypeKind::Number, name: "number" })
    }

    /// The boolean primitive.
    #[must_use]
    pub fn boolean() -> Arc<Self> {
        Arc::new(Self { kind: TypeKind::Boolean, name: "boolean" })
    }

    fn accepts(&self, value: &Value) -> bool {
        match self.kind {
            TypeKind::String => value.is_string(),
            TypeKind::Number => value.is_number(),
            TypeKind::Boolean => value.is_boolean(),
            _ => false,
        }
    }
}

impl NodeType for PrimitiveType {
    fn name(&self) -> &str {
        self.name
    }

    fn kind(&self) -> TypeKind {
        self.kind
    }

    fn describe(&self) -> String {
        self.name.to_string()
    }

    fn validate(&self, value: &Value, context: &ValidationContext) -> ValidationReport {
        if self.accepts(value) {
            ValidationReport::ok()
        } else {
            ValidationReport::failure(context, format!("value is not a {}", self.name))
        }
    }

    fn instantiate(
        &self,
        parent: Option<&mut Node>,
        subpath: &str,
        environment: &Environment,
        snapshot: Value,
    ) -> TreeResult<Node> {
        let context = if subpath.is_empty() {
            ValidationContext::root()
        } else {
            ValidationContext::root().enter(subpath, self.name)
        };
        let report = self.validate(&snapshot, &context);
        if !report.is_ok() {
            return Err(UpdateError::SnapshotRejected {
                type_name: self.name.to_string(),
                report,
            }
            .into());
        }
        Ok(create_node(self, parent.map(|p| &*p), subpath, environment, snapshot))
    }

    fn reconcile(&self, current: &mut Node, new_value: Value) -> TreeResult<()> {
        let report = self.validate(&new_value, &ValidationContext::root());
        if !report.is_ok() {
            return Err(UpdateError::SnapshotRejected {
                type_name: self.name.to_string(),
                report,
            }
            .into());
        }
        current.value = new_value;
        Ok(())
    }
}
