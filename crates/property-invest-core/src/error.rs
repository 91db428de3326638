use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PropertyInvestError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Insufficient equity: {required_equity} required against {property_price} purchase (shortfall: {shortfall})")]
    InsufficientEquity {
        property_price: Decimal,
        loan_amount: Decimal,
        required_equity: Decimal,
        shortfall: Decimal,
    },

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for PropertyInvestError {
    fn from(e: serde_json::Error) -> Self {
        PropertyInvestError::SerializationError(e.to_string())
    }
}
