//! Risk tiering with a multi-branch node
//!
//! This example demonstrates:
//! - First-match-wins branch ordering
//! - A default outcome when no tier applies
//! - Diagnostics via `evaluate_detailed`

use dtree_sdk::{Context, DecisionTreeEngine, MultiBranchNode, OutcomeNode};
use tracing::info;

fn main() -> anyhow::Result<()> {
    dtree_examples::init_tracing()?;

    println!("\n=== Risk Assessment (Multi-Branch) ===\n");

    let risk_assessment = MultiBranchNode::new("Risk Level")
        .add_branch(
            |ctx| ctx.get_or("credit_score", 0i64) >= 750 && ctx.get_or("debt_ratio", 1.0) < 0.3,
            OutcomeNode::new("LOW RISK").into_ref(),
        )
        .add_branch(
            |ctx| ctx.get_or("credit_score", 0i64) >= 650 && ctx.get_or("debt_ratio", 1.0) < 0.5,
            OutcomeNode::new("MEDIUM RISK").into_ref(),
        )
        .add_branch(
            |ctx| ctx.get_or("credit_score", 0i64) >= 550,
            OutcomeNode::new("HIGH RISK").into_ref(),
        )
        .set_default(OutcomeNode::new("CRITICAL RISK").into_ref())
        .into_ref();

    let engine = DecisionTreeEngine::new(risk_assessment);

    println!("=== Tree Structure (JSON) ===");
    engine.print_tree()?;
    println!();

    let risk_cases = [(780, 0.25), (680, 0.4), (600, 0.6), (500, 0.8)];

    println!("=== Test Results ===");
    for (credit_score, debt_ratio) in risk_cases {
        let context = Context::new()
            .with("credit_score", credit_score)
            .with("debt_ratio", debt_ratio);

        println!(
            "Case: Credit={}, Debt Ratio={}",
            context.get_or("credit_score", 0i64),
            context.get_or("debt_ratio", 0.0)
        );

        let detailed = engine.evaluate_detailed(&context);
        info!(reached = detailed.is_reached(), "risk case evaluated");
        println!("Risk: {}\n", detailed.into_outcome());
    }

    Ok(())
}
