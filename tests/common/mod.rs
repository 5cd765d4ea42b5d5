// Common test utilities and helpers

use bot_form_validator::{DipBotRequest, GridBotRequest, MomentumBotRequest};
use std::path::PathBuf;
use tempfile::TempDir;

/// Dip bot form that passes every check
pub fn valid_dip_request() -> DipBotRequest {
    DipBotRequest {
        symbol: "BTC/USDT".to_string(),
        exchange: "Bybit".to_string(),
        trading_side: "Buy".to_string(),
        time_frame: "1 minute".to_string(),
        dip_percentage: "1%".to_string(),
        investment_amount: "5000".to_string(),
    }
}

/// Grid bot form that passes every check: 100 → 110 at 1% gives 11 levels
pub fn valid_grid_request() -> GridBotRequest {
    grid_request("100", "110", "100", "1", "11")
}

pub fn grid_request(lower: &str, upper: &str, investment: &str, small: &str, large: &str) -> GridBotRequest {
    GridBotRequest {
        trading_pair: "BTC/USDT".to_string(),
        grid_strategy: "Geometric Grid".to_string(),
        lower_price_limit: lower.to_string(),
        upper_price_limit: upper.to_string(),
        total_investment: investment.to_string(),
        small_grid_size: small.to_string(),
        large_grid_size: large.to_string(),
        dip_percentage: None,
    }
}

/// Momentum bot form that passes every check
pub fn valid_momentum_request() -> MomentumBotRequest {
    MomentumBotRequest {
        base_symbol: "ADA/USDC".to_string(),
        trading_symbols: vec!["BTC/USDC".to_string(), "ETH/USDC".to_string()],
        time_interval: "1 minute".to_string(),
        analysis_period: "10".to_string(),
    }
}

/// Write `content` into a fresh temporary directory
pub fn write_temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (temp_dir, path)
}

/// Random (lower, upper, small grid %) triples with 0 < lower < upper and a
/// step between 0.2% and 10%
pub fn random_grid_inputs(count: usize) -> Vec<(f64, f64, f64)> {
    use rand::Rng;
    let mut rng = rand::thread_rng();

    (0..count)
        .map(|_| {
            let lower = rng.gen_range(0.01..50_000.0);
            let upper = lower * rng.gen_range(1.001..3.0);
            let step = rng.gen_range(0.2..10.0);
            (lower, upper, step)
        })
        .collect()
}
