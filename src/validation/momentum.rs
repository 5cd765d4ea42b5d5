// Momentum bot form validation

use super::parse::parse_int;
use super::ValidationResult;
use crate::types::MomentumBotRequest;

/// Check the momentum bot form. There are no cross-field rules.
pub fn validate(request: &MomentumBotRequest) -> ValidationResult {
    let mut result = ValidationResult::new();

    if request.base_symbol.is_empty() {
        result.add_error("Base Trading Symbol is required", &["baseSymbol"]);
    }

    if request.trading_symbols.is_empty() {
        result.add_error("At least one trading symbol must be selected", &["tradingSymbols"]);
    }

    if request.time_interval.is_empty() {
        result.add_error("Time Interval is required", &["timeInterval"]);
    }

    if request.analysis_period.is_empty() {
        result.add_error("Analysis Period is required", &["analysisPeriod"]);
    } else if !matches!(parse_int(&request.analysis_period), Some(days) if days > 0) {
        result.add_error("Analysis Period must be a positive number", &["analysisPeriod"]);
    }

    result
}
