pub mod alerts;
pub mod amortization;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod scenario;
pub mod time_value;
pub mod types;

pub use error::PropertyInvestError;
pub use types::*;

/// Standard result type for all property-invest operations
pub type PropertyInvestResult<T> = Result<T, PropertyInvestError>;
