//! Simulated submission of validated bot forms
//!
//! A valid form is acknowledged with a receipt and logged. Nothing is stored
//! and no exchange is contacted.

use crate::error::{FormError, FormResult};
use crate::types::{BotForm, BotKind};
use crate::validation::ValidationResult;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

/// Receipt for a simulated submission
#[derive(Debug, Clone, Serialize)]
pub struct SimulatedSubmission {
    pub id: Uuid,
    pub bot: BotKind,
    pub submitted_at: DateTime<Utc>,
    pub payload: serde_json::Value,
}

/// Accept `form` if `result` is valid, otherwise refuse with `ValidationFailed`.
pub fn simulate(
    form: &BotForm,
    result: &ValidationResult,
    log_submission: bool,
) -> FormResult<SimulatedSubmission> {
    if !result.is_valid {
        warn!("🚫 {} submission blocked by {} validation error(s)", form.kind(), result.errors.len());
        return Err(FormError::ValidationFailed(result.errors.len()));
    }

    let submission = SimulatedSubmission {
        id: Uuid::new_v4(),
        bot: form.kind(),
        submitted_at: Utc::now(),
        payload: serde_json::to_value(form)?,
    };

    if log_submission {
        info!("📨 {} submitted (simulated)", submission.bot);
        info!("   Id: {}", submission.id);
        info!("   At: {}", submission.submitted_at.to_rfc3339());
        info!("   Payload: {}", submission.payload);
    }

    Ok(submission)
}
