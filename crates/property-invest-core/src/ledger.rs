use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::amortization;
use crate::engine::InvestmentInput;
use crate::types::Money;
use crate::PropertyInvestResult;

/// One month of the cash-flow ledger. Months are 1-indexed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyCashFlow {
    pub month: u32,
    pub loan_payment: Money,
    pub rental_income: Money,
    pub mgmt_fee: Money,
    pub net_cashflow: Money,
    /// Outstanding loan balance after this month's payment, clamped at 0.
    pub loan_balance: Money,
}

/// Build the monthly cash-flow ledger over the investment horizon.
///
/// Rental income and management fee are flat monthly figures derived
/// from the property price (no inflation modelling); the loan payment
/// is the fixed annuity payment. The ledger is built once per request
/// and shared by all scenarios — scenarios differ only in terminal
/// appreciation, never in operating cash flow.
pub fn build_ledger(input: &InvestmentInput) -> PropertyInvestResult<Vec<MonthlyCashFlow>> {
    let property_price = input.property_price();
    let loan_amount = input.loan_amount();

    let loan_payment = if loan_amount > Decimal::ZERO {
        amortization::monthly_payment(loan_amount, input.interest_rate_pct, input.loan_term_years)?
    } else {
        Decimal::ZERO
    };

    let rental_income = property_price * input.avg_yield_pct / Decimal::from(1200);
    let mgmt_fee = property_price * input.mgmt_fee_pct / Decimal::from(1200);
    let net_cashflow = rental_income - loan_payment - mgmt_fee;

    let total_months = input.invest_horizon_years * 12;
    let mut ledger = Vec::with_capacity(total_months as usize);

    for month in 1..=total_months {
        let loan_balance = if loan_amount > Decimal::ZERO {
            amortization::remaining_balance(
                loan_amount,
                input.interest_rate_pct,
                input.loan_term_years,
                month,
            )?
            .max(Decimal::ZERO)
        } else {
            Decimal::ZERO
        };

        ledger.push(MonthlyCashFlow {
            month,
            loan_payment,
            rental_income,
            mgmt_fee,
            net_cashflow,
            loan_balance,
        });
    }

    Ok(ledger)
}
