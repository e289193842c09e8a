//! Common test utilities for SDK integration tests
//!
//! Builds the loan approval and risk tiering trees used as acceptance
//! scenarios.

#![allow(dead_code)]

use dtree_sdk::{Context, DecisionNode, DecisionTreeEngine, MultiBranchNode, OutcomeNode};
use std::sync::{Arc, Mutex};

/// Loan approval engine plus the amounts its approval action has seen
pub struct LoanFixture {
    pub engine: DecisionTreeEngine,
    pub approved_amounts: Arc<Mutex<Vec<i64>>>,
}

/// amount <= 100000 -> income >= 50000 -> credit_score >= 650 -> APPROVED
pub fn loan_engine() -> LoanFixture {
    let approved_amounts = Arc::new(Mutex::new(Vec::new()));
    let sink = approved_amounts.clone();

    let approved = OutcomeNode::new("APPROVED")
        .with_action(move |ctx: &Context| {
            sink.lock().unwrap().push(ctx.get_or("amount", 0i64));
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

    LoanFixture {
        engine: DecisionTreeEngine::new(amount_check),
        approved_amounts,
    }
}

/// First-match risk tiers with CRITICAL RISK as the default
pub fn risk_engine() -> DecisionTreeEngine {
    let root = MultiBranchNode::new("Risk Level")
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

    DecisionTreeEngine::new(root)
}

pub fn loan_context(amount: i64, income: i64, credit_score: i64) -> Context {
    Context::new()
        .with("amount", amount)
        .with("income", income)
        .with("credit_score", credit_score)
}

pub fn risk_context(credit_score: i64, debt_ratio: f64) -> Context {
    Context::new()
        .with("credit_score", credit_score)
        .with("debt_ratio", debt_ratio)
}
