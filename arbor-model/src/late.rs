//! Deferred type references for forward/recursive declarations.

use arbor_tree::{Environment, Node, NodeType};
use arbor_types::{TreeResult, TypeKind, ValidationContext, ValidationReport};
use serde_json::Value;
use std::sync::{Arc, OnceLock};

/// A wrapper that defers resolution of its underlying type.
///
/// Used for forward and recursive type declarations: the resolver runs at
/// most once, on first use, and the result is memoized. Classification
/// never resolves: a late type's kind is [`TypeKind::Lazy`] regardless of
/// what it would resolve to, so kind checks on a recursive type graph stay
/// cheap and cycle-free.
pub struct LateType {
    name: String,
    resolver: Box<dyn Fn() -> Arc<dyn NodeType> + Send + Sync>,
    resolved: OnceLock<Arc<dyn NodeType>>,
}

impl LateType {
    /// Creates a late type that resolves through `resolver` on first use.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        resolver: impl Fn() -> Arc<dyn NodeType> + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            resolver: Box::new(resolver),
            resolved: OnceLock::new(),
        })
    }

    /// Whether the underlying type has been resolved yet.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }

    fn resolve(&self) -> &Arc<dyn NodeType> {
        self.resolved.get_or_init(|| (self.resolver)())
    }
}

impl NodeType for LateType {
    fn name(&self) -> &str {
        &self.name
    }

    // Deliberately not the resolved kind: classification must not force
    // resolution of a forward/recursive graph.
    fn kind(&self) -> TypeKind {
        TypeKind::Lazy
    }

    fn describe(&self) -> String {
        format!("late({})", self.resolve().describe())
    }

    fn validate(&self, value: &Value, context: &ValidationContext) -> ValidationReport {
        self.resolve().validate(value, context)
    }

    fn instantiate(
        &self,
        parent: Option<&mut Node>,
        subpath: &str,
        environment: &Environment,
        snapshot: Value,
    ) -> TreeResult<Node> {
        self.resolve().instantiate(parent, subpath, environment, snapshot)
    }

    fn reconcile(&self, current: &mut Node, new_value: Value) -> TreeResult<()> {
        self.resolve().reconcile(current, new_value)
    }
}
