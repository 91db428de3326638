use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use property_invest_core::engine::{self, InvestmentInput};

use crate::input;

/// Arguments for a full investment projection
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Path to JSON input file (flags below are ignored when present)
    #[arg(long)]
    pub input: Option<String>,

    /// Equity capital available for the purchase
    #[arg(long)]
    pub equity: Option<Decimal>,

    /// Loan-to-value percentage (0-100)
    #[arg(long)]
    pub loan_pct: Option<Decimal>,

    /// Floor area in square metres
    #[arg(long)]
    pub size_m2: Option<Decimal>,

    /// Purchase price per square metre
    #[arg(long)]
    pub price_per_m2: Option<Decimal>,

    /// Average annual rental yield percentage
    #[arg(long)]
    pub yield_pct: Option<Decimal>,

    /// Annual management fee percentage
    #[arg(long, default_value = "0")]
    pub mgmt_fee_pct: Decimal,

    /// Annual loan interest rate percentage
    #[arg(long)]
    pub interest_rate: Option<Decimal>,

    /// Loan term in years
    #[arg(long)]
    pub loan_term_years: Option<u32>,

    /// Investment horizon in years
    #[arg(long)]
    pub horizon_years: Option<u32>,
}

pub fn run_analyze(args: AnalyzeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let invest_input: InvestmentInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        input_from_flags(&args)?
    };

    let result = engine::compute_investment(&invest_input)?;
    Ok(serde_json::to_value(result)?)
}

/// Assemble an input from individual flags when no file/stdin is given.
fn input_from_flags(args: &AnalyzeArgs) -> Result<InvestmentInput, Box<dyn std::error::Error>> {
    fn require<T: Copy>(opt: Option<T>, flag: &str) -> Result<T, Box<dyn std::error::Error>> {
        opt.ok_or_else(|| format!("{flag} is required (or provide --input/stdin JSON)").into())
    }

    Ok(InvestmentInput {
        equity_capital: require(args.equity, "--equity")?,
        loan_pct: require(args.loan_pct, "--loan-pct")?,
        property_size_m2: require(args.size_m2, "--size-m2")?,
        price_per_m2: require(args.price_per_m2, "--price-per-m2")?,
        avg_yield_pct: require(args.yield_pct, "--yield-pct")?,
        mgmt_fee_pct: args.mgmt_fee_pct,
        interest_rate_pct: require(args.interest_rate, "--interest-rate")?,
        loan_term_years: require(args.loan_term_years, "--loan-term-years")?,
        invest_horizon_years: require(args.horizon_years, "--horizon-years")?,
    })
}
