use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use naija_tax_core::thresholds;

/// Arguments for turnover classification (VAT and CIT)
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct TurnoverArgs {
    /// Annual turnover in Naira
    #[arg(long)]
    pub turnover: Decimal,
}

pub fn run_vat(args: TurnoverArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let result = thresholds::check_vat_threshold(args.turnover)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_cit(args: TurnoverArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let result = thresholds::determine_cit_rate(args.turnover)?;
    Ok(serde_json::to_value(result)?)
}
