use arbor_model::{LateType, ModelType, PrimitiveType};
use arbor_tree::{Environment, NodeType};
use arbor_types::{TypeKind, ValidationContext};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

// ── Deferred resolution ───────────────────────────────────────────

#[test]
fn name_and_kind_do_not_resolve() {
    let late = LateType::new("LateTodo", || {
        Arc::new(ModelType::new("Todo").prop("title", PrimitiveType::string()))
    });
    assert_eq!(late.name(), "LateTodo");
    assert_eq!(late.kind(), TypeKind::Lazy);
    assert!(!late.is_resolved());
}

#[test]
fn describe_resolves_and_delegates() {
    let late = LateType::new("LateTodo", || {
        Arc::new(ModelType::new("Todo").prop("title", PrimitiveType::string()))
    });
    assert_eq!(late.describe(), "late({ title: string })");
    assert!(late.is_resolved());
}

#[test]
fn resolver_runs_at_most_once() {
    static CALLS: AtomicUsize = AtomicUsize::new(0);
    let late = LateType::new("LateString", || {
        CALLS.fetch_add(1, Ordering::SeqCst);
        PrimitiveType::string() as Arc<dyn NodeType>
    });

    let ctx = ValidationContext::root();
    assert!(late.validate(&json!("a"), &ctx).is_ok());
    assert!(late.validate(&json!("b"), &ctx).is_ok());
    let _ = late.describe();
    assert_eq!(CALLS.load(Ordering::SeqCst), 1);
}

// ── Delegation ────────────────────────────────────────────────────

#[test]
fn validate_delegates_to_the_resolved_type() {
    let late = LateType::new("LateString", || PrimitiveType::string() as Arc<dyn NodeType>);
    let ctx = ValidationContext::root();
    assert!(late.validate(&json!("ok"), &ctx).is_ok());
    assert!(!late.validate(&json!(1), &ctx).is_ok());
}

#[test]
fn instantiate_and_reconcile_delegate() {
    let late = LateType::new("LateString", || PrimitiveType::string() as Arc<dyn NodeType>);
    let mut node = late
        .instantiate(None, "title", &Environment::new(), json!("hello"))
        .unwrap();
    assert_eq!(node.value, json!("hello"));
    assert_eq!(node.type_name, "string");

    late.reconcile(&mut node, json!("goodbye")).unwrap();
    assert_eq!(node.value, json!("goodbye"));
}
