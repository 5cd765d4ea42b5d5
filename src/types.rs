// Form records submitted by the bot configuration pages

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dip bot form. Every field is raw form text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DipBotRequest {
    pub symbol: String,
    pub exchange: String,
    pub trading_side: String,  // "Buy" or "Sell" by convention
    pub time_frame: String,
    pub dip_percentage: String,
    pub investment_amount: String,
}

/// Grid bot form. Numeric fields stay string-encoded until validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridBotRequest {
    pub trading_pair: String,
    pub grid_strategy: String,
    pub lower_price_limit: String,
    pub upper_price_limit: String,
    pub total_investment: String,
    pub small_grid_size: String,   // percent step between levels
    pub large_grid_size: String,   // requested number of levels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dip_percentage: Option<String>,
}

/// Momentum bot form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MomentumBotRequest {
    pub base_symbol: String,
    pub trading_symbols: Vec<String>,
    pub time_interval: String,
    pub analysis_period: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotKind {
    Dip,
    Grid,
    Momentum,
}

impl fmt::Display for BotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotKind::Dip => write!(f, "Dip Bot"),
            BotKind::Grid => write!(f, "Grid Bot"),
            BotKind::Momentum => write!(f, "Momentum Bot"),
        }
    }
}

/// A form record tagged with the bot it configures, e.g.
/// `{"bot": "grid", "tradingPair": "BTC/USDT", ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "bot", rename_all = "lowercase")]
pub enum BotForm {
    Dip(DipBotRequest),
    Grid(GridBotRequest),
    Momentum(MomentumBotRequest),
}

impl BotForm {
    pub fn kind(&self) -> BotKind {
        match self {
            BotForm::Dip(_) => BotKind::Dip,
            BotForm::Grid(_) => BotKind::Grid,
            BotForm::Momentum(_) => BotKind::Momentum,
        }
    }
}

impl From<DipBotRequest> for BotForm {
    fn from(request: DipBotRequest) -> Self {
        BotForm::Dip(request)
    }
}

impl From<GridBotRequest> for BotForm {
    fn from(request: GridBotRequest) -> Self {
        BotForm::Grid(request)
    }
}

impl From<MomentumBotRequest> for BotForm {
    fn from(request: MomentumBotRequest) -> Self {
        BotForm::Momentum(request)
    }
}
