use pretty_assertions::assert_eq;
use property_invest_core::engine::{compute_investment, InvestmentInput};
use property_invest_core::PropertyInvestError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// End-to-end projection tests — worked example from a HCMC apartment deal
// ===========================================================================

/// 80 m² apartment at 45m/m² (price 3.6bn), 70% LTV at 8.5% over 20
/// years, held for 10 years against 2bn of equity.
fn hcmc_apartment() -> InvestmentInput {
    InvestmentInput {
        equity_capital: dec!(2000000000),
        loan_pct: dec!(70),
        property_size_m2: dec!(80),
        price_per_m2: dec!(45000000),
        avg_yield_pct: dec!(4.5),
        mgmt_fee_pct: dec!(0.5),
        interest_rate_pct: dec!(8.5),
        loan_term_years: 20,
        invest_horizon_years: 10,
    }
}

#[test]
fn test_worked_example_headline_numbers() {
    let output = compute_investment(&hcmc_apartment()).unwrap().result;

    assert_eq!(output.property_price, dec!(3600000000));
    assert_eq!(output.loan_amount, dec!(2520000000));
    assert_eq!(output.required_equity, dec!(1080000000));

    let month1 = &output.monthly_data[0];
    assert_eq!(month1.rental_income, dec!(13500000));
    assert_eq!(month1.mgmt_fee, dec!(1500000));

    // Annuity payment on 2.52bn at 8.5%/12 over 240 months ≈ 21.87m
    assert!(
        month1.loan_payment > dec!(21800000) && month1.loan_payment < dec!(21950000),
        "payment was {}",
        month1.loan_payment
    );

    // Month-1 net ≈ 13.5m - 21.87m - 1.5m ≈ -9.87m
    assert!(month1.net_cashflow < Decimal::ZERO);
    assert!(
        output
            .alerts
            .iter()
            .any(|a| a.contains("debt service")),
        "negative carry must raise the debt-service alert: {:?}",
        output.alerts
    );
}

#[test]
fn test_ledger_spans_horizon_not_loan_term() {
    let output = compute_investment(&hcmc_apartment()).unwrap().result;

    // 10-year horizon over a 20-year loan: 120 entries, loan still open.
    assert_eq!(output.monthly_data.len(), 120);
    let final_balance = output.monthly_data.last().unwrap().loan_balance;
    assert!(final_balance > Decimal::ZERO);
    assert!(final_balance < dec!(2520000000));
}

#[test]
fn test_scenario_set_is_ordered_and_complete() {
    let output = compute_investment(&hcmc_apartment()).unwrap().result;
    let s = &output.scenarios;

    // Fixed growth policy: 3% / 5% / 7% annually over 10 years.
    assert!(s.pessimistic.property_value < s.base.property_value);
    assert!(s.base.property_value < s.optimistic.property_value);

    // 3.6bn * 1.05^10 ≈ 5.864bn
    assert!((s.base.property_value - dec!(5864020657)).abs() < dec!(1000000));

    // Terminal equity nets the outstanding balance off every scenario
    // against the same ledger.
    let final_balance = output.monthly_data.last().unwrap().loan_balance;
    assert_eq!(s.base.total_equity, s.base.property_value - final_balance);
    assert_eq!(
        s.optimistic.total_equity,
        s.optimistic.property_value - final_balance
    );
}

#[test]
fn test_irr_brackets_roi_ordering() {
    let output = compute_investment(&hcmc_apartment()).unwrap().result;
    let s = &output.scenarios;

    assert!(s.pessimistic.irr <= s.base.irr);
    assert!(s.base.irr <= s.optimistic.irr);
}

#[test]
fn test_compute_is_idempotent() {
    let first = compute_investment(&hcmc_apartment()).unwrap().result;
    let second = compute_investment(&hcmc_apartment()).unwrap().result;

    let a = serde_json::to_string(&first).unwrap();
    let b = serde_json::to_string(&second).unwrap();
    assert_eq!(a, b);
}

// ===========================================================================
// Validation tests
// ===========================================================================

#[test]
fn test_equity_boundary_is_inclusive() {
    let mut input = hcmc_apartment();
    input.equity_capital = dec!(1080000000);
    assert!(compute_investment(&input).is_ok());

    input.equity_capital = dec!(1079999999);
    assert!(matches!(
        compute_investment(&input),
        Err(PropertyInvestError::InsufficientEquity { .. })
    ));
}

#[test]
fn test_insufficient_equity_reports_shortfall() {
    let mut input = hcmc_apartment();
    input.equity_capital = dec!(500000000);
    match compute_investment(&input).unwrap_err() {
        PropertyInvestError::InsufficientEquity {
            property_price,
            loan_amount,
            required_equity,
            shortfall,
        } => {
            assert_eq!(property_price, dec!(3600000000));
            assert_eq!(loan_amount, dec!(2520000000));
            assert_eq!(required_equity, dec!(1080000000));
            assert_eq!(shortfall, dec!(580000000));
        }
        other => panic!("expected InsufficientEquity, got {other:?}"),
    }
}

#[test]
fn test_negative_equity_rejected() {
    let mut input = hcmc_apartment();
    input.equity_capital = dec!(-1);
    assert!(matches!(
        compute_investment(&input),
        Err(PropertyInvestError::InvalidInput { ref field, .. }) if field == "equity_capital"
    ));
}

#[test]
fn test_zero_size_rejected() {
    let mut input = hcmc_apartment();
    input.property_size_m2 = dec!(0);
    assert!(compute_investment(&input).is_err());
}

// ===========================================================================
// Degenerate financing shapes
// ===========================================================================

#[test]
fn test_all_cash_purchase() {
    let mut input = hcmc_apartment();
    input.loan_pct = dec!(0);
    input.equity_capital = dec!(3600000000);

    let output = compute_investment(&input).unwrap().result;
    assert_eq!(output.loan_amount, Decimal::ZERO);
    for entry in &output.monthly_data {
        assert_eq!(entry.loan_payment, Decimal::ZERO);
        assert_eq!(entry.loan_balance, Decimal::ZERO);
    }
    assert!(!output.alerts.iter().any(|a| a.contains("debt service")));
}

#[test]
fn test_interest_free_loan() {
    let mut input = hcmc_apartment();
    input.interest_rate_pct = dec!(0);

    let output = compute_investment(&input).unwrap().result;
    // 2.52bn over 240 months straight-line = 10.5m/month
    assert_eq!(output.monthly_data[0].loan_payment, dec!(10500000));

    // Balance declines linearly: month 120 of 240 leaves half.
    let mid = &output.monthly_data[119];
    assert_eq!(mid.loan_balance, dec!(1260000000));
}

#[test]
fn test_fully_financed_purchase_degrades_roi_softly() {
    let mut input = hcmc_apartment();
    input.loan_pct = dec!(100);
    input.equity_capital = dec!(0);

    let wrapped = compute_investment(&input).unwrap();
    assert_eq!(wrapped.result.scenarios.base.roi, Decimal::ZERO);
    assert!(wrapped
        .warnings
        .iter()
        .any(|w| w.contains("zero initial equity")));
}

#[test]
fn test_horizon_beyond_loan_payoff_clamps_balance() {
    let mut input = hcmc_apartment();
    input.loan_term_years = 5;
    input.invest_horizon_years = 10;

    let output = compute_investment(&input).unwrap().result;
    for entry in output.monthly_data.iter().filter(|e| e.month > 60) {
        assert_eq!(entry.loan_balance, Decimal::ZERO, "month {}", entry.month);
    }
}
