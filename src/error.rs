//! Error handling for the bot form validator
//!
//! Validation verdicts are plain data (`ValidationResult`) and never errors.
//! `FormError` covers everything around them: loading configuration, reading
//! form files, and refusing to submit a form that did not validate.

use std::fmt;
use std::io;

/// Main error type for the form tooling
#[derive(Debug)]
pub enum FormError {
    // Configuration errors
    ConfigNotFound(String),
    ConfigParse(String),
    ConfigValidation(String),

    // Form input errors
    FormParse(String),
    UnsupportedForm(String),

    // Validation errors
    ValidationFailed(usize), // number of failed checks
    InvalidParameter(String, String), // (parameter_name, reason)

    // IO errors
    FileNotFound(String),
    FileRead(String),
    FileWrite(String),

    // General errors
    Internal(String),
}

impl FormError {
    /// Get a user-friendly error message with helpful context
    pub fn user_message(&self) -> String {
        match self {
            FormError::ConfigNotFound(path) => {
                format!(
                    "Configuration file not found: {}\n\n\
                    💡 Quick fix:\n\
                    1. Run: bot-forms init\n\
                    2. Adjust the validation thresholds if needed\n\
                    3. Try again",
                    path
                )
            }
            FormError::ConfigValidation(msg) => {
                format!(
                    "Configuration validation error: {}\n\n\
                    💡 Check config.toml for:\n\
                    - Positive grid step and investment thresholds\n\
                    - A supported logging level",
                    msg
                )
            }
            FormError::FormParse(msg) => {
                format!(
                    "Could not read form record: {}\n\n\
                    💡 A form file is a JSON object with a \"bot\" field\n\
                    (\"dip\", \"grid\" or \"momentum\") and the form's fields in camelCase",
                    msg
                )
            }
            FormError::ValidationFailed(count) => {
                format!(
                    "Form was not submitted: {} check(s) failed\n\n\
                    💡 Fix the flagged fields and submit again",
                    count
                )
            }
            _ => self.to_string(),
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            FormError::ConfigNotFound(_)
            | FormError::ConfigParse(_)
            | FormError::ConfigValidation(_) => "config",

            FormError::FormParse(_) | FormError::UnsupportedForm(_) => "form",

            FormError::ValidationFailed(_) | FormError::InvalidParameter(_, _) => "validation",

            FormError::FileNotFound(_)
            | FormError::FileRead(_)
            | FormError::FileWrite(_) => "io",

            FormError::Internal(_) => "internal",
        }
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::ConfigNotFound(path) => {
                write!(f, "Configuration file not found: {}", path)
            }
            FormError::ConfigParse(msg) => {
                write!(f, "Configuration parse error: {}", msg)
            }
            FormError::ConfigValidation(msg) => {
                write!(f, "Configuration validation error: {}", msg)
            }

            FormError::FormParse(msg) => {
                write!(f, "Form parse error: {}", msg)
            }
            FormError::UnsupportedForm(msg) => {
                write!(f, "Unsupported form: {}", msg)
            }

            FormError::ValidationFailed(count) => {
                write!(f, "Validation failed: {} error(s)", count)
            }
            FormError::InvalidParameter(param, reason) => {
                write!(f, "Invalid parameter '{}': {}", param, reason)
            }

            FormError::FileNotFound(path) => {
                write!(f, "File not found: {}", path)
            }
            FormError::FileRead(msg) => {
                write!(f, "File read error: {}", msg)
            }
            FormError::FileWrite(msg) => {
                write!(f, "File write error: {}", msg)
            }

            FormError::Internal(msg) => {
                write!(f, "Internal error: {}", msg)
            }
        }
    }
}

impl std::error::Error for FormError {}

// Conversion implementations for common error types

impl From<io::Error> for FormError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => FormError::FileNotFound(err.to_string()),
            io::ErrorKind::PermissionDenied => FormError::FileRead(err.to_string()),
            _ => FormError::Internal(format!("IO error: {}", err)),
        }
    }
}

impl From<serde_json::Error> for FormError {
    fn from(err: serde_json::Error) -> Self {
        FormError::FormParse(format!("JSON parse error: {}", err))
    }
}

impl From<toml::de::Error> for FormError {
    fn from(err: toml::de::Error) -> Self {
        FormError::ConfigParse(format!("TOML parse error: {}", err))
    }
}

impl From<crate::config::ConfigError> for FormError {
    fn from(err: crate::config::ConfigError) -> Self {
        use crate::config::ConfigError;
        match err {
            ConfigError::FileNotFound(path) => FormError::ConfigNotFound(path),
            ConfigError::FileRead(msg) => FormError::FileRead(msg),
            ConfigError::FileWrite(msg) => FormError::FileWrite(msg),
            ConfigError::Parse(msg) => FormError::ConfigParse(msg),
            ConfigError::Serialize(msg) => FormError::Internal(msg),
            ConfigError::Validation(msg) => FormError::ConfigValidation(msg),
        }
    }
}

/// Result type alias using FormError
pub type FormResult<T> = Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;

    #[test]
    fn test_error_display() {
        let err = FormError::ConfigNotFound("config.toml".to_string());
        assert!(err.to_string().contains("config.toml"));

        let err = FormError::ValidationFailed(3);
        assert_eq!(err.to_string(), "Validation failed: 3 error(s)");
    }

    #[test]
    fn test_error_category() {
        assert_eq!(FormError::ConfigParse("x".to_string()).category(), "config");
        assert_eq!(FormError::FormParse("x".to_string()).category(), "form");
        assert_eq!(FormError::ValidationFailed(1).category(), "validation");
        assert_eq!(FormError::FileWrite("x".to_string()).category(), "io");
    }

    #[test]
    fn test_user_message() {
        let msg = FormError::ValidationFailed(2).user_message();
        assert!(msg.contains("2 check(s) failed"));
        assert!(msg.contains("💡"));

        let err = FormError::InvalidParameter("lower".to_string(), "must be positive".to_string());
        assert_eq!(err.user_message(), err.to_string());
    }

    #[test]
    fn test_conversions() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing.json");
        assert!(matches!(FormError::from(io_err), FormError::FileNotFound(_)));

        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(matches!(FormError::from(json_err), FormError::FormParse(_)));

        let toml_err = toml::from_str::<crate::Config>("[validation\n").unwrap_err();
        let err = FormError::from(toml_err);
        assert!(matches!(err, FormError::ConfigParse(_)));
        assert_eq!(err.category(), "config");

        let config_err = ConfigError::Validation("bad".to_string());
        assert!(matches!(FormError::from(config_err), FormError::ConfigValidation(_)));
    }
}
