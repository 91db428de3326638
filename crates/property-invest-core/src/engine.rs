use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::alerts::evaluate_alerts;
use crate::error::PropertyInvestError;
use crate::ledger::{build_ledger, MonthlyCashFlow};
use crate::scenario::{run_scenarios, ScenarioSet};
use crate::types::{with_metadata, ComputationOutput, Money, Pct};
use crate::PropertyInvestResult;

/// Acquisition cost rates applied to the property price.
const TRANSFER_TAX_RATE: Decimal = dec!(0.005);
const NOTARY_FEE_RATE: Decimal = dec!(0.001);
const BROKERAGE_FEE_RATE: Decimal = dec!(0.015);

const MAX_HORIZON_YEARS: u32 = 50;
const MAX_LOAN_TERM_YEARS: u32 = 100;

/// Input parameters for an investment projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentInput {
    /// Equity capital available for the purchase
    pub equity_capital: Money,
    /// Loan-to-value percentage (0–100)
    pub loan_pct: Pct,
    /// Floor area in square metres
    pub property_size_m2: Decimal,
    /// Purchase price per square metre
    pub price_per_m2: Money,
    /// Average annual rental yield percentage of the property price
    pub avg_yield_pct: Pct,
    /// Annual management fee percentage of the property price
    pub mgmt_fee_pct: Pct,
    /// Annual loan interest rate percentage
    pub interest_rate_pct: Pct,
    /// Loan term in years
    pub loan_term_years: u32,
    /// Investment horizon in years; need not equal the loan term
    pub invest_horizon_years: u32,
}

impl InvestmentInput {
    pub fn property_price(&self) -> Money {
        self.property_size_m2 * self.price_per_m2
    }

    pub fn loan_amount(&self) -> Money {
        self.property_price() * self.loan_pct / dec!(100)
    }

    pub fn required_equity(&self) -> Money {
        self.property_price() - self.loan_amount()
    }
}

/// One-off acquisition costs, each a fixed fraction of the price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitialCosts {
    pub transfer_tax: Money,
    pub notary_fee: Money,
    pub brokerage_fee: Money,
    pub total: Money,
}

/// Complete investment projection result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentOutput {
    pub property_price: Money,
    pub loan_amount: Money,
    pub required_equity: Money,
    pub initial_costs: InitialCosts,
    pub monthly_data: Vec<MonthlyCashFlow>,
    pub scenarios: ScenarioSet,
    /// Risk alerts in evaluation order; possibly empty
    pub alerts: Vec<String>,
}

/// Run the full projection pipeline: validate the request, build the
/// monthly cash-flow ledger, valuate the three appreciation scenarios,
/// and evaluate the risk-alert rules.
///
/// The computation is pure and allocation-per-call; identical inputs
/// produce identical outputs.
pub fn compute_investment(
    input: &InvestmentInput,
) -> PropertyInvestResult<ComputationOutput<InvestmentOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    let property_price = input.property_price();
    let loan_amount = input.loan_amount();
    let required_equity = input.required_equity();

    if input.equity_capital < required_equity {
        return Err(PropertyInvestError::InsufficientEquity {
            property_price,
            loan_amount,
            required_equity,
            shortfall: required_equity - input.equity_capital,
        });
    }

    let transfer_tax = property_price * TRANSFER_TAX_RATE;
    let notary_fee = property_price * NOTARY_FEE_RATE;
    let brokerage_fee = property_price * BROKERAGE_FEE_RATE;
    let initial_costs = InitialCosts {
        transfer_tax,
        notary_fee,
        brokerage_fee,
        total: transfer_tax + notary_fee + brokerage_fee,
    };

    let monthly_data = build_ledger(input)?;
    let scenarios = run_scenarios(input, &monthly_data, &mut warnings);
    let alerts = evaluate_alerts(input, &monthly_data, &scenarios);

    let output = InvestmentOutput {
        property_price,
        loan_amount,
        required_equity,
        initial_costs,
        monthly_data,
        scenarios,
        alerts,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Leveraged Property Investment Projection (3-Scenario)",
        input,
        warnings,
        elapsed,
        output,
    ))
}

fn validate_input(input: &InvestmentInput) -> PropertyInvestResult<()> {
    if input.equity_capital < Decimal::ZERO {
        return Err(PropertyInvestError::InvalidInput {
            field: "equity_capital".into(),
            reason: "Equity capital must not be negative".into(),
        });
    }

    if input.loan_pct < Decimal::ZERO || input.loan_pct > dec!(100) {
        return Err(PropertyInvestError::InvalidInput {
            field: "loan_pct".into(),
            reason: "Loan percentage must be between 0 and 100".into(),
        });
    }

    if input.property_size_m2 <= Decimal::ZERO {
        return Err(PropertyInvestError::InvalidInput {
            field: "property_size_m2".into(),
            reason: "Floor area must be positive".into(),
        });
    }

    if input.price_per_m2 <= Decimal::ZERO {
        return Err(PropertyInvestError::InvalidInput {
            field: "price_per_m2".into(),
            reason: "Price per square metre must be positive".into(),
        });
    }

    if input.avg_yield_pct < Decimal::ZERO {
        return Err(PropertyInvestError::InvalidInput {
            field: "avg_yield_pct".into(),
            reason: "Rental yield must not be negative".into(),
        });
    }

    if input.mgmt_fee_pct < Decimal::ZERO {
        return Err(PropertyInvestError::InvalidInput {
            field: "mgmt_fee_pct".into(),
            reason: "Management fee must not be negative".into(),
        });
    }

    if input.interest_rate_pct < Decimal::ZERO {
        return Err(PropertyInvestError::InvalidInput {
            field: "interest_rate_pct".into(),
            reason: "Interest rate must not be negative".into(),
        });
    }

    if input.loan_term_years == 0 || input.loan_term_years > MAX_LOAN_TERM_YEARS {
        return Err(PropertyInvestError::InvalidInput {
            field: "loan_term_years".into(),
            reason: format!("Loan term must be between 1 and {MAX_LOAN_TERM_YEARS} years"),
        });
    }

    if input.invest_horizon_years == 0 || input.invest_horizon_years > MAX_HORIZON_YEARS {
        return Err(PropertyInvestError::InvalidInput {
            field: "invest_horizon_years".into(),
            reason: format!("Investment horizon must be between 1 and {MAX_HORIZON_YEARS} years"),
        });
    }

    Ok(())
}
