//! Client-side validation for the bot configuration forms
//!
//! Each bot has its own validator. All of them collect every failing check
//! instead of stopping at the first one, and return the same verdict shape.

pub mod dip;
pub mod grid;
pub mod momentum;
pub mod parse;

use crate::config::ValidationRules;
use crate::types::{BotForm, DipBotRequest, GridBotRequest, MomentumBotRequest};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Verdict for one form submission.
///
/// `errors` holds display-ready messages in check order. `error_fields` names
/// the fields to highlight; a field appears once per rule that flagged it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub error_fields: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        ValidationResult {
            is_valid: true,
            errors: Vec::new(),
            error_fields: Vec::new(),
        }
    }

    /// Record a failed check and the fields it flags
    pub fn add_error(&mut self, message: impl Into<String>, fields: &[&str]) {
        self.is_valid = false;
        self.errors.push(message.into());
        self.error_fields
            .extend(fields.iter().map(|field| field.to_string()));
    }

    /// True if any rule flagged `field`
    pub fn has_field(&self, field: &str) -> bool {
        self.error_fields.iter().any(|f| f == field)
    }

    /// Distinct flagged fields, in first-flagged order
    pub fn flagged_fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for field in &self.error_fields {
            if !fields.contains(&field.as_str()) {
                fields.push(field);
            }
        }
        fields
    }

    pub fn display(&self, form_name: &str) {
        if self.is_valid {
            info!("✅ {} form is valid", form_name);
            return;
        }

        error!("❌ {} form has {} error(s)", form_name, self.errors.len());
        for message in &self.errors {
            error!("   • {}", message);
        }
        error!("   Fields: {}", self.flagged_fields().join(", "));
    }
}

/// Validates any bot form against a set of rules
#[derive(Debug, Clone, Default)]
pub struct FormValidator {
    rules: ValidationRules,
}

impl FormValidator {
    pub fn new(rules: ValidationRules) -> Self {
        FormValidator { rules }
    }

    /// Dispatch on the form's bot kind
    pub fn validate(&self, form: &BotForm) -> ValidationResult {
        match form {
            BotForm::Dip(request) => self.validate_dip(request),
            BotForm::Grid(request) => self.validate_grid(request),
            BotForm::Momentum(request) => self.validate_momentum(request),
        }
    }

    pub fn validate_dip(&self, request: &DipBotRequest) -> ValidationResult {
        dip::validate(request)
    }

    pub fn validate_grid(&self, request: &GridBotRequest) -> ValidationResult {
        grid::validate(request, &self.rules)
    }

    pub fn validate_momentum(&self, request: &MomentumBotRequest) -> ValidationResult {
        momentum::validate(request)
    }
}
