use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::engine::InvestmentInput;
use crate::ledger::MonthlyCashFlow;
use crate::time_value::{solve_irr, DEFAULT_IRR_GUESS};
use crate::types::{Money, Rate};

/// Annual appreciation assumptions. Policy constants, not user inputs.
pub const PESSIMISTIC_GROWTH: Rate = dec!(0.03);
pub const BASE_GROWTH: Rate = dec!(0.05);
pub const OPTIMISTIC_GROWTH: Rate = dec!(0.07);

/// Terminal outcome under one appreciation assumption.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Projected property value at the end of the horizon
    pub property_value: Money,
    /// Terminal equity: property value less outstanding loan balance
    pub total_equity: Money,
    /// Annualized return on initial equity, as a percentage
    pub roi: Decimal,
    /// Internal rate of return on the monthly equity cash flows, as a percentage
    pub irr: Decimal,
}

/// The three standard scenarios produced for every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSet {
    pub pessimistic: ScenarioResult,
    pub base: ScenarioResult,
    pub optimistic: ScenarioResult,
}

/// Run all three appreciation scenarios over a shared ledger.
pub fn run_scenarios(
    input: &InvestmentInput,
    ledger: &[MonthlyCashFlow],
    warnings: &mut Vec<String>,
) -> ScenarioSet {
    ScenarioSet {
        pessimistic: valuate_scenario(input, ledger, PESSIMISTIC_GROWTH, warnings),
        base: valuate_scenario(input, ledger, BASE_GROWTH, warnings),
        optimistic: valuate_scenario(input, ledger, OPTIMISTIC_GROWTH, warnings),
    }
}

/// Project terminal value, equity, annualized ROI and IRR for a single
/// appreciation scenario.
pub fn valuate_scenario(
    input: &InvestmentInput,
    ledger: &[MonthlyCashFlow],
    annual_growth: Rate,
    warnings: &mut Vec<String>,
) -> ScenarioResult {
    let property_price = input.property_price();
    let loan_amount = input.loan_amount();
    let initial_equity = property_price - loan_amount;
    let horizon_years = input.invest_horizon_years;

    let property_value = property_price * compound_annual(annual_growth, horizon_years);

    let final_loan_balance = ledger
        .last()
        .map(|entry| entry.loan_balance)
        .unwrap_or(Decimal::ZERO);

    let total_equity = property_value - final_loan_balance;

    let total_cashflow: Money = ledger.iter().map(|entry| entry.net_cashflow).sum();
    let capital_gain = property_value - property_price;

    // Principal repaid over the horizon converts debt into equity and is
    // already reflected in total_equity, so it is excluded from returns.
    let principal_repaid = loan_amount - final_loan_balance;
    let total_returns = total_cashflow + capital_gain - principal_repaid;

    let roi = if initial_equity.is_zero() {
        warnings.push("ROI undefined for fully-financed purchase (zero initial equity)".into());
        Decimal::ZERO
    } else {
        (total_returns / initial_equity) * dec!(100) / Decimal::from(horizon_years)
    };

    // Equity cash-flow series: outlay, monthly nets, sale proceeds
    // folded into the final month.
    let mut cash_flows = Vec::with_capacity(ledger.len() + 1);
    cash_flows.push(-initial_equity);
    for entry in ledger {
        cash_flows.push(entry.net_cashflow);
    }
    if let Some(last) = cash_flows.last_mut() {
        *last += total_equity;
    }

    let irr = solve_irr(&cash_flows, DEFAULT_IRR_GUESS, warnings) * dec!(100);

    ScenarioResult {
        property_value,
        total_equity,
        roi,
        irr,
    }
}

/// (1 + g)^years via iterative multiplication
fn compound_annual(annual_growth: Rate, years: u32) -> Decimal {
    let mut factor = Decimal::ONE;
    for _ in 0..years {
        factor *= Decimal::ONE + annual_growth;
    }
    factor
}
