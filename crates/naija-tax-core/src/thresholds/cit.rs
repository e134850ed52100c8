use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::require_turnover;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::TaxEngineResult;

/// Turnover up to and including this amount is a small company
pub const SMALL_COMPANY_CEILING: Money = dec!(50_000_000);
/// Turnover up to and including this amount is a medium company
pub const MEDIUM_COMPANY_CEILING: Money = dec!(100_000_000);

pub const MEDIUM_COMPANY_RATE: Rate = dec!(0.20);
pub const LARGE_COMPANY_RATE: Rate = dec!(0.30);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CitCategory {
    Small,
    Medium,
    Large,
}

impl CitCategory {
    pub fn from_turnover(turnover: Money) -> Self {
        if turnover <= SMALL_COMPANY_CEILING {
            CitCategory::Small
        } else if turnover <= MEDIUM_COMPANY_CEILING {
            CitCategory::Medium
        } else {
            CitCategory::Large
        }
    }

    pub fn rate(&self) -> Rate {
        match self {
            CitCategory::Small => Decimal::ZERO,
            CitCategory::Medium => MEDIUM_COMPANY_RATE,
            CitCategory::Large => LARGE_COMPANY_RATE,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CitCategory::Small => "Small company (turnover up to ₦50,000,000): exempt from CIT",
            CitCategory::Medium => "Medium company (turnover up to ₦100,000,000): CIT at 20%",
            CitCategory::Large => "Large company (turnover above ₦100,000,000): CIT at 30%",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitCheckResult {
    pub turnover: Money,
    pub rate: Rate,
    pub category: CitCategory,
    pub description: String,
}

/// Place annual turnover in the three-tier CIT schedule.
pub fn determine_cit_rate(turnover: Money) -> TaxEngineResult<ComputationOutput<CitCheckResult>> {
    let start = Instant::now();
    require_turnover(turnover)?;

    let category = CitCategory::from_turnover(turnover);
    let output = CitCheckResult {
        turnover,
        rate: category.rate(),
        category,
        description: category.description().to_string(),
    };

    Ok(with_metadata(
        "CIT rate tier by annual turnover",
        &serde_json::json!({
            "turnover": turnover.to_string(),
            "small_ceiling": SMALL_COMPANY_CEILING.to_string(),
            "medium_ceiling": MEDIUM_COMPANY_CEILING.to_string(),
        }),
        Vec::new(),
        start,
        output,
    ))
}
