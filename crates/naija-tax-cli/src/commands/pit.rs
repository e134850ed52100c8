use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use naija_tax_core::pit::{self, PitInput, TaxBand, PIT_BANDS};

use crate::input;

/// Declared annual figures, shared by `pit` and `validate`
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct PitFigures {
    /// Annual gross income in Naira
    #[arg(long, alias = "gross")]
    pub gross_income: Option<Decimal>,

    /// Annual rent paid
    #[arg(long)]
    pub rent: Option<Decimal>,

    /// Annual pension contributions
    #[arg(long)]
    pub pension: Option<Decimal>,

    /// Declared NHF contributions (omit to use the statutory 2.5%)
    #[arg(long)]
    pub nhf: Option<Decimal>,

    /// NHIS contributions
    #[arg(long)]
    pub nhis: Option<Decimal>,

    /// Life insurance premiums
    #[arg(long)]
    pub life_insurance: Option<Decimal>,

    /// Interest on a loan for an owner-occupied home
    #[arg(long)]
    pub housing_loan_interest: Option<Decimal>,

    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

impl PitFigures {
    fn into_input(self) -> Result<PitInput, Box<dyn std::error::Error>> {
        if let Some(loaded) = input::load::<PitInput>(self.input.as_deref())? {
            return Ok(loaded);
        }
        Ok(PitInput {
            annual_gross_income: self.gross_income,
            annual_rent: self.rent,
            pension_contributions: self.pension,
            nhf_contributions: self.nhf,
            nhis_contributions: self.nhis,
            life_insurance: self.life_insurance,
            housing_loan_interest: self.housing_loan_interest,
        })
    }
}

/// Arguments for a PIT estimate
#[derive(Args)]
pub struct PitArgs {
    #[command(flatten)]
    pub figures: PitFigures,

    /// Path to a JSON/YAML band schedule replacing the built-in one
    #[arg(long)]
    pub bands: Option<String>,
}

/// Arguments for PIT input validation
#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub figures: PitFigures,
}

pub fn run_pit(args: PitArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let pit_input = args.figures.into_input()?;
    if pit_input.annual_gross_income.is_none() {
        return Err("--gross-income is required (or provide --input)".into());
    }

    let result = match args.bands {
        Some(ref path) => {
            let bands: Vec<TaxBand> = input::file::read_input(path)?;
            log::info!("Using {} custom bands from {}", bands.len(), path);
            pit::calculate_pit_with_bands(&pit_input, &bands)?
        }
        None => pit::calculate_pit(&pit_input)?,
    };
    log::info!(
        "Chargeable income {}, estimated tax {}",
        result.result.chargeable_income,
        result.result.estimated_tax
    );
    Ok(serde_json::to_value(result)?)
}

pub fn run_validate(args: ValidateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let pit_input = args.figures.into_input()?;
    let errors = pit::validate_pit_inputs(&pit_input);
    Ok(json!({
        "result": {
            "valid": errors.is_empty(),
            "errors": errors,
        }
    }))
}

pub fn run_bands() -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::to_value(PIT_BANDS)?)
}
