//! Loan approval decision tree
//!
//! This example demonstrates:
//! - Chaining decision nodes into a binary tree
//! - Attaching an action to an outcome node
//! - Dumping the tree structure and evaluating several applicants

use dtree_sdk::{Context, DecisionNode, DecisionTreeEngine, OutcomeNode};
use tracing::info;

fn main() -> anyhow::Result<()> {
    dtree_examples::init_tracing()?;

    println!("=== Loan Approval Decision Tree ===\n");

    let approved = OutcomeNode::new("APPROVED")
        .with_action(|ctx: &Context| {
            let amount = ctx.get_or("amount", 0i64);
            println!("  -> Loan approved for ${}", amount);
        })
        .into_ref();
    let denied_income = OutcomeNode::new("DENIED - Insufficient Income").into_ref();
    let denied_credit = OutcomeNode::new("DENIED - Low Credit Score").into_ref();
    let manual_review = OutcomeNode::new("MANUAL REVIEW REQUIRED").into_ref();

    let credit_check = DecisionNode::new("Credit Score Check", |ctx| {
        ctx.get_or("credit_score", 0i64) >= 650
    })
    .on_true(approved)
    .on_false(denied_credit)
    .into_ref();

    let income_check = DecisionNode::new("Income Check", |ctx| {
        ctx.get_or("income", 0i64) >= 50000
    })
    .on_true(credit_check)
    .on_false(denied_income)
    .into_ref();

    let amount_check = DecisionNode::new("Loan Amount Check", |ctx| {
        ctx.get_or("amount", 0i64) <= 100000
    })
    .on_true(income_check)
    .on_false(manual_review)
    .into_ref();

    let mut engine = DecisionTreeEngine::new(amount_check);

    println!("=== Tree Structure (JSON) ===");
    engine.print_tree()?;
    println!();

    let test_cases = [
        (50000, 75000, 700),
        (50000, 40000, 700),
        (50000, 75000, 600),
        (150000, 75000, 700),
    ];

    println!("=== Test Results ===");
    for (num, (amount, income, credit_score)) in test_cases.into_iter().enumerate() {
        let context = Context::new()
            .with("amount", amount)
            .with("income", income)
            .with("credit_score", credit_score);

        println!("Test Case {}:", num + 1);
        println!(
            "  Amount: {}, Income: {}, Credit: {}",
            context.get_or("amount", 0i64),
            context.get_or("income", 0i64),
            context.get_or("credit_score", 0i64)
        );

        let result = engine.evaluate(&context);
        println!("  Result: {}\n", result);
    }

    info!("loan approval demo finished");
    Ok(())
}
