//! The composite model type.

use arbor_tree::{Environment, Node, NodeType, create_node};
use arbor_types::{TreeResult, TypeKind, UpdateError, ValidationContext, ValidationReport};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// A composite type with named, typed properties.
///
/// Models are the only nodes that can own an identifier property: an
/// identifier type instantiated anywhere else is rejected. Property
/// order is declaration order and is preserved through validation,
/// instantiation, and reconciliation.
pub struct ModelType {
    name: String,
    properties: Vec<(String, Arc<dyn NodeType>)>,
}

impl ModelType {
    /// Creates a model type with no properties.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    /// Declares a property. Builder-style; declaration order is kept.
    #[must_use]
    pub fn prop(mut self, key: impl Into<String>, ty: Arc<dyn NodeType>) -> Self {
        self.properties.push((key.into(), ty));
        self
    }

    /// The declared properties, in declaration order.
    #[must_use]
    pub fn properties(&self) -> &[(String, Arc<dyn NodeType>)] {
        &self.properties
    }
}

impl NodeType for ModelType {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> TypeKind {
        TypeKind::Model
    }

    fn describe(&self) -> String {
        let props: Vec<String> = self
            .properties
            .iter()
            .map(|(key, ty)| format!("{key}: {}", ty.describe()))
            .collect();
        format!("{{ {} }}", props.join("; "))
    }

    fn validate(&self, value: &Value, context: &ValidationContext) -> ValidationReport {
        const NULL: Value = Value::Null;
        let Some(object) = value.as_object() else {
            return ValidationReport::failure(context, "value is not an object");
        };

        let mut report = ValidationReport::ok();
        for (key, ty) in &self.properties {
            let child = object.get(key).unwrap_or(&NULL);
            let child_context = context.enter(key, ty.name());
            report.merge(ty.validate(child, &child_context));
        }
        report
    }

    fn instantiate(
        &self,
        parent: Option<&mut Node>,
        subpath: &str,
        environment: &Environment,
        snapshot: Value,
    ) -> TreeResult<Node> {
        let report = self.validate(&snapshot, &ValidationContext::root());
        if !report.is_ok() {
            return Err(UpdateError::SnapshotRejected {
                type_name: self.name.clone(),
                report,
            }
            .into());
        }

        // Accepted snapshots are objects; validate() rejects the rest.
        let values = snapshot.as_object().cloned().unwrap_or_default();
        let mut node = create_node(self, parent.map(|p| &*p), subpath, environment, snapshot);

        for (key, ty) in &self.properties {
            let child_snapshot = values.get(key).cloned().unwrap_or(Value::Null);
            let child = ty.instantiate(Some(&mut node), key, environment, child_snapshot)?;
            node.insert_child(key.clone(), child);
        }

        debug!(
            "Instantiated model '{}' with {} properties at '{}'",
            self.name,
            self.properties.len(),
            node.path
        );
        Ok(node)
    }

    fn reconcile(&self, current: &mut Node, new_value: Value) -> TreeResult<()> {
        let report = self.validate(&new_value, &ValidationContext::root());
        if !report.is_ok() {
            return Err(UpdateError::SnapshotRejected {
                type_name: self.name.clone(),
                report,
            }
            .into());
        }

        let values = new_value.as_object().cloned().unwrap_or_default();
        for (key, ty) in &self.properties {
            let incoming = values.get(key).cloned().unwrap_or(Value::Null);
            if let Some(mut child) = current.children.remove(key.as_str()) {
                let outcome = ty.reconcile(&mut child, incoming);
                // Reattach before propagating so a rejected property does
                // not detach the child.
                current.insert_child(key.clone(), child);
                outcome?;
            } else {
                let child = ty.instantiate(Some(current), key, &Environment::new(), incoming)?;
                current.insert_child(key.clone(), child);
            }
        }
        current.value = new_value;
        Ok(())
    }
}
