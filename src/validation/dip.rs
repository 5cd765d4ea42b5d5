// Dip bot form validation

use super::parse::parse_float;
use super::ValidationResult;
use crate::types::DipBotRequest;

/// Check the dip bot form. Every check runs; failures accumulate in order.
pub fn validate(request: &DipBotRequest) -> ValidationResult {
    let mut result = ValidationResult::new();

    let required = [
        (&request.symbol, "Trading Symbol is required", "symbol"),
        (&request.exchange, "Exchange is required", "exchange"),
        (&request.trading_side, "Trading Side is required", "tradingSide"),
        (&request.time_frame, "Time Frame is required", "timeFrame"),
        (&request.dip_percentage, "Dip Percentage is required", "dipPercentage"),
    ];

    for (value, message, field) in required {
        if value.is_empty() {
            result.add_error(message, &[field]);
        }
    }

    if request.investment_amount.is_empty() {
        result.add_error("Investment Amount is required", &["investmentAmount"]);
    } else if !matches!(parse_float(&request.investment_amount), Some(amount) if amount > 0.0) {
        result.add_error("Investment Amount must be a positive number", &["investmentAmount"]);
    }

    result
}
