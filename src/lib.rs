// Bot Form Validator Library
//
// Validation for the dip, grid and momentum trading-bot configuration forms,
// with geometric grid ladder generation and simulated submission

pub mod types;
pub mod config;      // TOML configuration
pub mod error;       // Unified error handling
pub mod validation;  // Per-bot form validators
pub mod ladder;      // Geometric price ladder
pub mod submission;  // Simulated submission of valid forms
pub mod progress;    // Batch progress reporting

// Re-export form types
pub use types::{BotForm, BotKind, DipBotRequest, GridBotRequest, MomentumBotRequest};

// Re-export error types
pub use error::{FormError, FormResult};

// Re-export validation types
pub use validation::{FormValidator, ValidationResult};

// Re-export configuration
pub use config::{Config, ConfigError, LoggingConfig, ValidationRules};

pub use ladder::{LadderError, PriceLadder};
pub use submission::{simulate, SimulatedSubmission};
pub use progress::BatchProgress;
