use rust_decimal_macros::dec;

use crate::engine::InvestmentInput;
use crate::ledger::MonthlyCashFlow;
use crate::scenario::ScenarioSet;

/// Evaluate the risk-alert rule set over the computed aggregates.
///
/// Rules fire independently and in a fixed order; callers may localize
/// the wording. Boundary conditions are strict: leverage of exactly 70%
/// and a base ROI of exactly 10% raise nothing.
pub fn evaluate_alerts(
    input: &InvestmentInput,
    ledger: &[MonthlyCashFlow],
    scenarios: &ScenarioSet,
) -> Vec<String> {
    let mut alerts = Vec::new();

    if let Some(first) = ledger.first() {
        if first.rental_income < first.loan_payment {
            alerts.push("Warning: Rental income does not cover the monthly debt service.".into());
        }
    }

    if input.loan_pct > dec!(70) {
        alerts.push("Warning: High leverage (>70%) could increase financial risk.".into());
    }

    if scenarios.base.roi < dec!(10) {
        alerts.push("Warning: Projected ROI is low (<10% per year).".into());
    }

    alerts
}
