//! Unit tests for the context and outcome types
//!
//! Exercises the accessors the way predicates and actions use them

use dtree_core::{get_context_value, Context, CoreError, Outcome, Value};

// =============================================================================
// Accessor Tests
// =============================================================================

#[test]
fn test_loan_context_accessors() {
    let ctx = Context::new()
        .with("amount", 50000)
        .with("income", 75000)
        .with("credit_score", 700);

    assert_eq!(get_context_value(&ctx, "amount", 0i64), 50000);
    assert_eq!(get_context_value(&ctx, "income", 0i64), 75000);
    assert_eq!(get_context_value(&ctx, "credit_score", 0i64), 700);
}

#[test]
fn test_text_amount_reads_as_default() {
    let ctx = Context::new().with("amount", "50000");
    assert_eq!(get_context_value(&ctx, "amount", 0i64), 0);
}

#[test]
fn test_distinguishable_default_detects_missing_key() {
    let ctx = Context::new().with("credit_score", 700);
    assert_eq!(ctx.get_or("income", -1i64), -1);
    assert_eq!(ctx.get_or("credit_score", -1i64), 700);
}

#[test]
fn test_require_reports_cause() -> anyhow::Result<()> {
    let ctx = Context::new().with("debt_ratio", 0.6).with("flag", true);

    assert_eq!(ctx.require::<f64>("debt_ratio")?, 0.6);
    assert!(ctx.require::<bool>("flag")?);

    match ctx.require::<i64>("debt_ratio") {
        Err(CoreError::TypeError { expected, found, .. }) => {
            assert_eq!(expected, "integer");
            assert_eq!(found, "real");
        }
        other => panic!("Expected type error, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_insert_replaces_value() {
    let mut ctx = Context::new();
    ctx.insert("amount", 1);
    ctx.insert("amount", "changed");
    assert_eq!(ctx.get("amount"), Some(&Value::Text("changed".to_string())));
    assert_eq!(ctx.len(), 1);
}

#[test]
fn test_empty_context() {
    let ctx = Context::new();
    assert!(ctx.is_empty());
    assert_eq!(ctx.get_or("anything", false), false);
}

// =============================================================================
// Outcome Tests
// =============================================================================

#[test]
fn test_outcome_from_conversions() {
    assert_eq!(Outcome::from("APPROVED"), Outcome::Text("APPROVED".to_string()));
    assert_eq!(Outcome::from(3i64), Outcome::Integer(3));
    assert_eq!(Outcome::from(true), Outcome::Boolean(true));
    assert_eq!(Outcome::from(1.5), Outcome::Real(1.5));
}

#[test]
fn test_outcome_serde_json() {
    let json = serde_json::to_string(&Outcome::text("HIGH RISK")).unwrap();
    assert_eq!(json, "\"HIGH RISK\"");
}
