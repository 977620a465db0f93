//! The identifier role.
//!
//! One property of a model node may be designated as that node's unique,
//! immutable identifier. The designation is enforced twice: at attach
//! time (at most one identifier property per node, and only directly
//! under a model node) and at reconciliation time (a stored identifier
//! value never changes).

use crate::PrimitiveType;
use arbor_tree::{Environment, Node, NodeType, create_node, is_tree_backed};
use arbor_types::{
    DefinitionError, TreeResult, TypeKind, UpdateError, ValidationContext, ValidationReport,
};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// An identifier value, restricted to the permitted primitive kinds.
///
/// Diagnostic wrapper: renders as `identifier(<value>)`.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierValue(Value);

impl IdentifierValue {
    /// Wraps a JSON value, rejecting anything that is not a string or
    /// number.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        if value.is_string() || value.is_number() {
            Some(Self(value.clone()))
        } else {
            None
        }
    }

    /// The underlying JSON value.
    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl fmt::Display for IdentifierValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => write!(f, "identifier({s})"),
            other => write!(f, "identifier({other})"),
        }
    }
}

/// A structural type marking its property as the parent node's identifier.
///
/// Wraps a primitive base type and delegates all value-shape validation
/// to it; identifier-ness is a structural role, not a value constraint.
/// Construct through [`identifier`] or [`identifier_of`]; the factory
/// enforces the string/number base restriction.
pub struct IdentifierType {
    name: String,
    base: Arc<dyn NodeType>,
}

impl fmt::Debug for IdentifierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentifierType")
            .field("name", &self.name)
            .field("base", &self.base.name())
            .finish()
    }
}

impl IdentifierType {
    pub(crate) fn new(base: Arc<dyn NodeType>) -> Self {
        let name = format!("identifier({})", base.name());
        Self { name, base }
    }

    /// The wrapped base type.
    #[must_use]
    pub fn base(&self) -> &Arc<dyn NodeType> {
        &self.base
    }
}

impl NodeType for IdentifierType {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> TypeKind {
        TypeKind::Identifier
    }

    fn describe(&self) -> String {
        format!("identifier({})", self.base.describe())
    }

    fn validate(&self, value: &Value, context: &ValidationContext) -> ValidationReport {
        self.base.validate(value, context)
    }

    fn instantiate(
        &self,
        parent: Option<&mut Node>,
        subpath: &str,
        environment: &Environment,
        snapshot: Value,
    ) -> TreeResult<Node> {
        let parent = match parent {
            Some(p) if is_tree_backed(p) => p,
            _ => {
                return Err(DefinitionError::DetachedIdentifier {
                    property: subpath.to_string(),
                }
                .into());
            }
        };

        // The one stateful side effect in this component. The claim is
        // durable: it is not rolled back if construction fails below.
        parent.identifier.claim(subpath)?;
        debug!(
            "Registered property '{subpath}' as identifier of node {} ({})",
            parent.id,
            IdentifierValue::from_value(&snapshot)
                .map_or_else(|| snapshot.to_string(), |v| v.to_string()),
        );

        let context = ValidationContext::root().enter(subpath, self.name.as_str());
        let report = self.base.validate(&snapshot, &context);
        if !report.is_ok() {
            return Err(UpdateError::SnapshotRejected {
                type_name: self.name.clone(),
                report,
            }
            .into());
        }

        Ok(create_node(self, Some(&*parent), subpath, environment, snapshot))
    }

    fn reconcile(&self, current: &mut Node, new_value: Value) -> TreeResult<()> {
        if current.value != new_value {
            warn!(
                "Rejected identifier change at '{}': {} -> {}",
                current.path, current.value, new_value
            );
            return Err(UpdateError::IdentifierChanged {
                path: current.path.clone(),
                old: current.value.clone(),
                new: new_value,
            }
            .into());
        }
        // Identifiers are fixed once stored; a successful reconciliation
        // has nothing to update.
        Ok(())
    }
}

/// Declares an identifier property over the string primitive.
#[must_use]
pub fn identifier() -> Arc<IdentifierType> {
    Arc::new(IdentifierType::new(PrimitiveType::string()))
}

/// Declares an identifier property over an explicit base type.
///
/// Only the string and number primitives are acceptable bases. Anything
/// else (unions, refinements, custom types, lazy wrappers) is rejected
/// at definition time with [`DefinitionError::UnsupportedIdentifierBase`].
pub fn identifier_of(base: Arc<dyn NodeType>) -> Result<Arc<IdentifierType>, DefinitionError> {
    if !base.kind().is_valid_identifier_base() {
        return Err(DefinitionError::UnsupportedIdentifierBase {
            type_name: base.name().to_string(),
        });
    }
    Ok(Arc::new(IdentifierType::new(base)))
}

/// Whether `ty` is an identifier type.
///
/// A late wrapper answers `false` even if it would resolve to an
/// identifier type: its kind is `Lazy`, and classification never forces
/// resolution.
#[must_use]
pub fn is_identifier_type(ty: &dyn NodeType) -> bool {
    ty.kind().is_identifier()
}
