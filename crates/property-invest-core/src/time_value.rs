use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::PropertyInvestError;
use crate::types::{Money, Rate};
use crate::PropertyInvestResult;

const CONVERGENCE_THRESHOLD: Decimal = dec!(0.000001);
const MAX_IRR_ITERATIONS: u32 = 100;

/// Default Newton-Raphson starting point (10% per period).
pub const DEFAULT_IRR_GUESS: Decimal = dec!(0.10);

/// Net Present Value of a series of cash flows
pub fn npv(rate: Rate, cash_flows: &[Money]) -> PropertyInvestResult<Money> {
    if rate <= dec!(-1) {
        return Err(PropertyInvestError::InvalidInput {
            field: "rate".into(),
            reason: "Discount rate must be greater than -100%".into(),
        });
    }

    let mut result = Decimal::ZERO;
    let one_plus_r = Decimal::ONE + rate;
    let mut discount = Decimal::ONE;

    for (t, cf) in cash_flows.iter().enumerate() {
        if t > 0 {
            discount *= one_plus_r;
        }
        if discount.is_zero() {
            return Err(PropertyInvestError::DivisionByZero {
                context: format!("NPV discount factor at period {t}"),
            });
        }
        result += cf / discount;
    }

    Ok(result)
}

/// Internal Rate of Return via Newton-Raphson. `cash_flows[0]` is the
/// initial outlay (typically negative); subsequent entries are one per
/// period, with sale proceeds already folded into the last entry.
///
/// The solver is best-effort by contract: a run that hits the iteration
/// cap or a flat derivative pushes a warning and returns its current
/// rate estimate rather than failing. IRR is a secondary metric and a
/// degraded estimate beats a hard error.
pub fn solve_irr(cash_flows: &[Money], guess: Rate, warnings: &mut Vec<String>) -> Rate {
    if cash_flows.len() < 2 {
        warnings.push("IRR requires at least 2 cash flows — returning 0".into());
        return Decimal::ZERO;
    }

    let mut rate = guess;

    for _ in 0..MAX_IRR_ITERATIONS {
        let (npv_val, dnpv) = npv_and_derivative(cash_flows, rate);

        if npv_val.abs() < CONVERGENCE_THRESHOLD {
            return rate;
        }

        if dnpv.abs() < CONVERGENCE_THRESHOLD {
            warnings.push("IRR: derivative near zero — result may be imprecise".into());
            return rate;
        }

        let step = match npv_val.checked_div(dnpv) {
            Some(s) => s,
            None => {
                warnings.push("IRR: Newton step out of range — result may be imprecise".into());
                return rate;
            }
        };
        rate -= step;

        // Keep the iterate inside Decimal-safe territory. Unlike IEEE
        // floats, Decimal panics rather than saturating to infinity.
        if rate < dec!(-0.99) {
            rate = dec!(-0.99);
        } else if rate > dec!(100.0) {
            rate = dec!(100.0);
        }
    }

    warnings.push(format!(
        "IRR did not converge after {MAX_IRR_ITERATIONS} iterations — returning last estimate"
    ));
    rate
}

/// NPV(r) = sum CF_t / (1+r)^t and its derivative d(NPV)/dr.
///
/// Accumulates with a running discount factor instead of pow, so deep
/// monthly series neither overflow (factor underflows to zero and the
/// tail is dropped) nor pay for repeated exponentiation.
fn npv_and_derivative(cash_flows: &[Money], rate: Decimal) -> (Decimal, Decimal) {
    let one_plus_r = Decimal::ONE + rate;
    let mut npv = Decimal::ZERO;
    let mut dnpv = Decimal::ZERO;
    let mut discount = Decimal::ONE; // (1+r)^0 = 1

    for (t, cf) in cash_flows.iter().enumerate() {
        let term = match cf.checked_mul(discount) {
            Some(v) => v,
            // Term magnitude beyond Decimal range; the partial sums are
            // already far from the root, which is all Newton needs.
            None => break,
        };
        npv = npv.saturating_add(term);
        if t > 0 {
            // d/dr of CF_t / (1+r)^t = -t * CF_t / (1+r)^(t+1)
            let slope = Decimal::from(t as i64)
                .checked_mul(term)
                .and_then(|v| v.checked_div(one_plus_r))
                .unwrap_or(Decimal::ZERO);
            dnpv = dnpv.saturating_sub(slope);
        }
        if discount.is_zero() {
            break;
        }
        discount = match discount.checked_div(one_plus_r) {
            Some(d) => d,
            None => break,
        };
    }

    (npv, dnpv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_npv_basic() {
        let cfs = vec![dec!(-1000), dec!(300), dec!(400), dec!(500)];
        let result = npv(dec!(0.10), &cfs).unwrap();
        // NPV at 10%: -1000 + 300/1.1 + 400/1.21 + 500/1.331 ≈ -21.04
        assert!((result - dec!(-21.04)).abs() < dec!(1.0));
    }

    #[test]
    fn test_npv_zero_rate() {
        let cfs = vec![dec!(-100), dec!(50), dec!(50), dec!(50)];
        let result = npv(dec!(0.0), &cfs).unwrap();
        assert_eq!(result, dec!(50));
    }

    #[test]
    fn test_irr_known_answer() {
        let cfs = vec![dec!(-1000), dec!(400), dec!(400), dec!(400)];
        let mut warnings = Vec::new();
        let rate = solve_irr(&cfs, DEFAULT_IRR_GUESS, &mut warnings);
        // IRR should be ~9.7%
        assert!((rate - dec!(0.097)).abs() < dec!(0.01), "got {rate}");
    }

    #[test]
    fn test_irr_zeroes_npv() {
        let cfs = vec![dec!(-500), dec!(0), dec!(0), dec!(0), dec!(0), dec!(1000)];
        let mut warnings = Vec::new();
        let rate = solve_irr(&cfs, DEFAULT_IRR_GUESS, &mut warnings);
        let residual = npv(rate, &cfs).unwrap();
        assert!(residual.abs() < dec!(0.01), "NPV at IRR was {residual}");
    }

    #[test]
    fn test_irr_too_few_flows_is_soft() {
        let mut warnings = Vec::new();
        let rate = solve_irr(&[dec!(-100)], DEFAULT_IRR_GUESS, &mut warnings);
        assert_eq!(rate, Decimal::ZERO);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_irr_all_positive_flows_degrades_with_warning() {
        // No sign change: NPV has no root, solver must still return.
        let cfs = vec![dec!(100), dec!(100), dec!(100)];
        let mut warnings = Vec::new();
        let _rate = solve_irr(&cfs, DEFAULT_IRR_GUESS, &mut warnings);
        assert!(!warnings.is_empty());
    }
}
