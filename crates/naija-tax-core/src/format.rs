use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::Money;

pub const NAIRA_SYMBOL: &str = "₦";

/// Render an amount as Naira with thousands grouping and exactly two decimals.
///
/// Midpoints round away from zero and negatives carry a leading minus before
/// the symbol: `1234567.5` renders as `₦1,234,567.50`, `-42` as `-₦42.00`.
pub fn format_naira(amount: Money) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let body = format!("{:.2}", rounded.abs());
    let (whole, fraction) = body.split_once('.').unwrap_or((body.as_str(), "00"));

    format!(
        "{}{NAIRA_SYMBOL}{}.{fraction}",
        sign_prefix(rounded),
        group_thousands(whole)
    )
}

/// Render an amount with thousands grouping, no currency symbol and no
/// trailing zero decimals (`20000000` renders as `20,000,000`).
pub fn format_grouped(amount: Money) -> String {
    let normalized = amount.normalize();
    let body = normalized.abs().to_string();
    match body.split_once('.') {
        Some((whole, fraction)) => format!(
            "{}{}.{fraction}",
            sign_prefix(normalized),
            group_thousands(whole)
        ),
        None => format!("{}{}", sign_prefix(normalized), group_thousands(&body)),
    }
}

fn sign_prefix(amount: Decimal) -> &'static str {
    if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
