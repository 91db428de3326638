use rust_decimal::Decimal;

use crate::error::PropertyInvestError;
use crate::types::{Money, Pct};
use crate::PropertyInvestResult;

/// Standard fixed-rate loan payment: P * r(1+r)^n / ((1+r)^n - 1)
/// where r is the monthly rate and n the total number of payments.
pub fn monthly_payment(
    principal: Money,
    annual_rate_pct: Pct,
    years: u32,
) -> PropertyInvestResult<Money> {
    if years == 0 {
        return Err(PropertyInvestError::InvalidInput {
            field: "years".into(),
            reason: "Loan term must be at least 1 year".into(),
        });
    }

    if principal.is_zero() {
        return Ok(Decimal::ZERO);
    }

    let total_months = years * 12;
    let monthly_rate = annual_rate_pct / Decimal::from(1200);

    if monthly_rate.is_zero() {
        // Interest-free: straight-line amortisation
        return Ok(principal / Decimal::from(total_months));
    }

    let compound = compound_factor(monthly_rate, total_months);
    let numerator = principal * monthly_rate * compound;
    let denominator = compound - Decimal::ONE;

    if denominator.is_zero() {
        return Err(PropertyInvestError::DivisionByZero {
            context: "loan payment denominator".into(),
        });
    }

    Ok(numerator / denominator)
}

/// Outstanding balance after `months_elapsed` payments, closed form:
/// P(1+r)^m - pmt * ((1+r)^m - 1) / r.
///
/// Floating drift near full amortisation can leave the result a hair
/// negative; callers clamp at zero.
pub fn remaining_balance(
    principal: Money,
    annual_rate_pct: Pct,
    years: u32,
    months_elapsed: u32,
) -> PropertyInvestResult<Money> {
    if years == 0 {
        return Err(PropertyInvestError::InvalidInput {
            field: "years".into(),
            reason: "Loan term must be at least 1 year".into(),
        });
    }

    if principal.is_zero() {
        return Ok(Decimal::ZERO);
    }

    let total_months = years * 12;
    let monthly_rate = annual_rate_pct / Decimal::from(1200);

    if monthly_rate.is_zero() {
        let paid = principal * Decimal::from(months_elapsed) / Decimal::from(total_months);
        return Ok(principal - paid);
    }

    let payment = monthly_payment(principal, annual_rate_pct, years)?;
    let grown = compound_factor(monthly_rate, months_elapsed);

    Ok(principal * grown - payment * ((grown - Decimal::ONE) / monthly_rate))
}

/// (1 + r)^n via iterative multiplication
fn compound_factor(monthly_rate: Decimal, months: u32) -> Decimal {
    let mut compound = Decimal::ONE;
    for _ in 0..months {
        compound *= Decimal::ONE + monthly_rate;
    }
    compound
}
