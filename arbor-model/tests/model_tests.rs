use arbor_model::{ModelType, PrimitiveType};
use arbor_tree::{Environment, NodeType};
use arbor_types::{TypeKind, ValidationContext};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

fn todo_type() -> ModelType {
    ModelType::new("Todo")
        .prop("title", PrimitiveType::string())
        .prop("done", PrimitiveType::boolean())
}

// ── Shape ─────────────────────────────────────────────────────────

#[test]
fn model_name_and_kind() {
    let ty = todo_type();
    assert_eq!(ty.name(), "Todo");
    assert_eq!(ty.kind(), TypeKind::Model);
    assert_eq!(ty.properties().len(), 2);
}

#[test]
fn describe_lists_properties_in_declaration_order() {
    let ty = todo_type();
    assert_eq!(ty.describe(), "{ title: string; done: boolean }");
}

// ── Validation ────────────────────────────────────────────────────

#[test]
fn validate_accepts_a_conforming_object() {
    let ty = todo_type();
    let report = ty.validate(
        &json!({"title": "write tests", "done": false}),
        &ValidationContext::root(),
    );
    assert!(report.is_ok());
}

#[test]
fn validate_rejects_non_objects() {
    let ty = todo_type();
    let report = ty.validate(&json!("nope"), &ValidationContext::root());
    assert!(!report.is_ok());
    assert_eq!(report.failures()[0].message, "value is not an object");
}

#[test]
fn validate_reports_each_violation_with_its_path() {
    let ty = todo_type();
    let report = ty.validate(&json!({"title": 7, "done": "x"}), &ValidationContext::root());
    assert_eq!(report.failures().len(), 2);
    assert_eq!(report.failures()[0].path, "/title");
    assert_eq!(report.failures()[1].path, "/done");
}

#[test]
fn missing_properties_validate_as_null() {
    let ty = todo_type();
    let report = ty.validate(&json!({"title": "x"}), &ValidationContext::root());
    assert_eq!(report.failures().len(), 1);
    assert_eq!(report.failures()[0].path, "/done");
}

#[test]
fn nested_model_paths_accumulate() {
    let inner = ModelType::new("Inner").prop("leaf", PrimitiveType::number());
    let outer = ModelType::new("Outer").prop("inner", Arc::new(inner));
    let report = outer.validate(&json!({"inner": {"leaf": "not a number"}}), &ValidationContext::root());
    assert_eq!(report.failures().len(), 1);
    assert_eq!(report.failures()[0].path, "/inner/leaf");
}

// ── Instantiation ─────────────────────────────────────────────────

#[test]
fn instantiate_builds_children_for_each_property() {
    let ty = todo_type();
    let node = ty
        .instantiate(
            None,
            "",
            &Environment::new(),
            json!({"title": "write tests", "done": false}),
        )
        .unwrap();

    assert!(node.is_model());
    assert_eq!(node.children.len(), 2);
    assert_eq!(node.child("title").unwrap().value, json!("write tests"));
    assert_eq!(node.child("title").unwrap().path, "/title");
    assert_eq!(node.child("done").unwrap().value, json!(false));
}

#[test]
fn instantiate_rejects_a_bad_snapshot() {
    let ty = todo_type();
    let result = ty.instantiate(None, "", &Environment::new(), json!({"title": 1, "done": false}));
    assert!(result.is_err());
}

#[test]
fn nested_instantiate_extends_paths() {
    let inner = ModelType::new("Inner").prop("leaf", PrimitiveType::number());
    let outer = ModelType::new("Outer").prop("inner", Arc::new(inner));
    let node = outer
        .instantiate(None, "", &Environment::new(), json!({"inner": {"leaf": 1}}))
        .unwrap();
    let leaf = node.child("inner").unwrap().child("leaf").unwrap();
    assert_eq!(leaf.path, "/inner/leaf");
    assert_eq!(leaf.value, json!(1));
}

// ── Reconciliation ────────────────────────────────────────────────

#[test]
fn reconcile_updates_children_and_stored_value() {
    let ty = todo_type();
    let mut node = ty
        .instantiate(
            None,
            "",
            &Environment::new(),
            json!({"title": "old", "done": false}),
        )
        .unwrap();

    ty.reconcile(&mut node, json!({"title": "new", "done": true}))
        .unwrap();

    assert_eq!(node.value, json!({"title": "new", "done": true}));
    assert_eq!(node.child("title").unwrap().value, json!("new"));
    assert_eq!(node.child("done").unwrap().value, json!(true));
}

#[test]
fn reconcile_keeps_node_identity_of_children() {
    let ty = todo_type();
    let mut node = ty
        .instantiate(
            None,
            "",
            &Environment::new(),
            json!({"title": "old", "done": false}),
        )
        .unwrap();
    let title_id = node.child("title").unwrap().id;

    ty.reconcile(&mut node, json!({"title": "new", "done": false}))
        .unwrap();

    assert_eq!(node.child("title").unwrap().id, title_id);
}

#[test]
fn reconcile_rejects_a_bad_snapshot_before_touching_children() {
    let ty = todo_type();
    let mut node = ty
        .instantiate(
            None,
            "",
            &Environment::new(),
            json!({"title": "old", "done": false}),
        )
        .unwrap();

    assert!(ty.reconcile(&mut node, json!({"title": 3, "done": false})).is_err());
    assert_eq!(node.child("title").unwrap().value, json!("old"));
    assert_eq!(node.value, json!({"title": "old", "done": false}));
}
