use napi::Result as NapiResult;
use napi_derive::napi;
use serde::Serialize;

use property_invest_core::engine::{self, InvestmentInput};
use property_invest_core::types::Money;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Run the full investment projection. Takes the `InvestmentInput`
/// shape as a JSON string and returns the computation envelope
/// (result, warnings, metadata) as JSON.
#[napi]
pub fn compute_investment(input_json: String) -> NapiResult<String> {
    let input: InvestmentInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = engine::compute_investment(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[derive(Serialize)]
struct EquityCheck {
    property_price: Money,
    loan_amount: Money,
    required_equity: Money,
    sufficient: bool,
}

/// Derived purchase amounts for form-side validation, without running
/// the full projection.
#[napi]
pub fn check_equity(input_json: String) -> NapiResult<String> {
    let input: InvestmentInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let check = EquityCheck {
        property_price: input.property_price(),
        loan_amount: input.loan_amount(),
        required_equity: input.required_equity(),
        sufficient: input.equity_capital >= input.required_equity(),
    };
    serde_json::to_string(&check).map_err(to_napi_error)
}
