//! Grid bot form validation
//!
//! Runs in four passes: presence of every required field, numeric parsing,
//! the single- and cross-field rules, and finally the ladder capacity check.
//! A field that fails to parse only disables the rules that need it.

use super::parse::{field_label, is_blank, parse_float};
use super::ValidationResult;
use crate::config::ValidationRules;
use crate::ladder::{LadderError, PriceLadder};
use crate::types::GridBotRequest;
use tracing::debug;

/// Parsed numeric fields; `None` marks a blank or non-numeric value
#[derive(Debug, Clone, Copy, PartialEq)]
struct GridNumbers {
    lower: Option<f64>,
    upper: Option<f64>,
    investment: Option<f64>,
    small_grid: Option<f64>,
    large_grid: Option<f64>,
}

/// Check the grid bot form against `rules`.
pub fn validate(request: &GridBotRequest, rules: &ValidationRules) -> ValidationResult {
    let mut result = ValidationResult::new();

    let required = [
        ("tradingPair", &request.trading_pair),
        ("gridStrategy", &request.grid_strategy),
        ("lowerPriceLimit", &request.lower_price_limit),
        ("upperPriceLimit", &request.upper_price_limit),
        ("totalInvestment", &request.total_investment),
        ("smallGridSize", &request.small_grid_size),
        ("largeGridSize", &request.large_grid_size),
    ];

    for (field, value) in required {
        if is_blank(value) {
            result.add_error(format!("{} cannot be blank", field_label(field)), &[field]);
        }
    }

    let numbers = GridNumbers {
        lower: numeric_field(&mut result, "lowerPriceLimit", &request.lower_price_limit),
        upper: numeric_field(&mut result, "upperPriceLimit", &request.upper_price_limit),
        investment: numeric_field(&mut result, "totalInvestment", &request.total_investment),
        small_grid: numeric_field(&mut result, "smallGridSize", &request.small_grid_size),
        large_grid: numeric_field(&mut result, "largeGridSize", &request.large_grid_size),
    };

    // Optional and otherwise unchecked
    let dip_percentage = match request.dip_percentage.as_deref() {
        Some(value) if !value.is_empty() => parse_float(value),
        _ => Some(0.0),
    };
    debug!("Grid form numbers: {:?}, dip percentage: {:?}", numbers, dip_percentage);

    check_rules(&mut result, &numbers, rules);

    if let (Some(lower), Some(upper), Some(small_grid), Some(large_grid)) =
        (numbers.lower, numbers.upper, numbers.small_grid, numbers.large_grid)
    {
        check_capacity(&mut result, lower, upper, small_grid, large_grid, numbers.investment, rules);
    }

    result
}

/// Parse a required numeric field, flagging text that is present but not a number
fn numeric_field(result: &mut ValidationResult, field: &str, value: &str) -> Option<f64> {
    let parsed = parse_float(value);
    if parsed.is_none() && !is_blank(value) {
        result.add_error(format!("{} must be a valid number", field_label(field)), &[field]);
    }
    parsed
}

fn check_rules(result: &mut ValidationResult, numbers: &GridNumbers, rules: &ValidationRules) {
    if let Some(small_grid) = numbers.small_grid {
        if small_grid < rules.min_small_grid_percent {
            result.add_error(
                format!(
                    "Small Grid must be at least {}% to ensure profitability.",
                    rules.min_small_grid_percent
                ),
                &["smallGridSize"],
            );
        }
    }

    if let Some(large_grid) = numbers.large_grid {
        if large_grid.fract() != 0.0 || large_grid <= 0.0 {
            result.add_error("Large Grid must be a positive integer", &["largeGridSize"]);
        }
    }

    if let (Some(small_grid), Some(large_grid)) = (numbers.small_grid, numbers.large_grid) {
        if small_grid > large_grid {
            result.add_error(
                "Small Grid cannot be greater than Large Grid",
                &["smallGridSize", "largeGridSize"],
            );
        }
    }

    if let (Some(lower), Some(upper)) = (numbers.lower, numbers.upper) {
        if lower >= upper {
            result.add_error(
                "Lower Limit must be less than Upper Limit",
                &["lowerPriceLimit", "upperPriceLimit"],
            );
        }
    }

    if let Some(lower) = numbers.lower {
        if lower <= 0.0 {
            result.add_error("Lower Limit must be greater than 0", &["lowerPriceLimit"]);
        }
    }
}

/// Build the price ladder and check the requested grid against it
fn check_capacity(
    result: &mut ValidationResult,
    lower: f64,
    upper: f64,
    small_grid: f64,
    large_grid: f64,
    investment: Option<f64>,
    rules: &ValidationRules,
) {
    let ladder = match PriceLadder::generate(lower, upper, small_grid, rules.max_price_levels) {
        Ok(ladder) => ladder,
        Err(LadderError::TooManyLevels(max)) => {
            result.add_error(
                format!(
                    "Small Grid is too small for this price range. It would generate more than {} price levels.",
                    max
                ),
                &["smallGridSize"],
            );
            return;
        }
        Err(e) => {
            // Range or step already reported by the rule checks
            debug!("Skipping grid capacity check: {}", e);
            return;
        }
    };

    let max_levels = ladder.level_count();
    if large_grid > max_levels as f64 {
        result.add_error(
            format!(
                "Large Grid must be less than or equal to {}. Maximum allowed is {}.",
                max_levels, max_levels
            ),
            &["largeGridSize"],
        );
    }

    let per_interval = investment.and_then(|total| ladder.investment_per_interval(total));
    if let Some(per_interval) = per_interval {
        if per_interval < rules.min_investment_per_interval {
            result.add_error(
                format!(
                    "Investment per small grid must be at least ${}. Current value: ${}",
                    rules.min_investment_per_interval,
                    to_fixed_2(per_interval)
                ),
                &["totalInvestment", "smallGridSize", "lowerPriceLimit", "upperPriceLimit"],
            );
        }
    }
}

/// Two-decimal currency text from the exact binary value; exact half-cent
/// ties (odd multiples of 1/8) round away from zero
fn to_fixed_2(value: f64) -> String {
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        format!("{:.2}", (value * 100.0).round() / 100.0)
    } else {
        format!("{:.2}", value)
    }
}
