use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use naija_tax_core::format::format_naira;

/// Arguments for Naira formatting
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct FormatArgs {
    /// Amount to render
    #[arg(long)]
    pub amount: Decimal,
}

pub fn run_format(args: FormatArgs) -> Result<Value, Box<dyn std::error::Error>> {
    Ok(json!({
        "result": {
            "amount": args.amount.to_string(),
            "formatted": format_naira(args.amount),
        }
    }))
}
