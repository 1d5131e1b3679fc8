//! Error types for scree validation.
//!
//! This module defines [`ScreeError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Rule severity/options violations are always *aggregated*: a single
//!   [`ScreeError::InvalidRuleConfig`] carries the full rendered report for
//!   one validate call.
//! - Environment section failures are fatal and immediate; they never flow
//!   through the rule report.
//! - Use `anyhow::Error` (via `ScreeError::Other`) for unexpected errors.

use thiserror::Error;

/// Core error type for scree validation.
#[derive(Debug, Error)]
pub enum ScreeError {
    /// One or more rule settings failed validation. The message is the full
    /// rendered report, one tab-indented line per violation.
    #[error("{report}")]
    InvalidRuleConfig { report: String },

    /// The environment section is an array.
    #[error("Environment must not be an array")]
    EnvironmentIsArray,

    /// The environment section is a non-object primitive.
    #[error("Environment must be an object")]
    EnvironmentNotObject,

    /// The environment section names environments missing from the registry.
    /// The message is the rendered unknown-key report.
    #[error("{report}")]
    UnknownEnvironment { report: String },

    /// A registered rule declared an options schema the structural validator
    /// cannot compile.
    #[error("Invalid options schema for rule \"{rule_id}\": {reason}")]
    RuleSchemaInvalid { rule_id: String, reason: String },

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for scree operations.
pub type Result<T> = std::result::Result<T, ScreeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_rule_config_displays_report_verbatim() {
        let err = ScreeError::InvalidRuleConfig {
            report: "\tConfiguration for rule \"quotes\" is invalid:\n".into(),
        };
        assert_eq!(
            err.to_string(),
            "\tConfiguration for rule \"quotes\" is invalid:\n"
        );
    }

    #[test]
    fn environment_type_errors_use_fixed_messages() {
        assert_eq!(
            ScreeError::EnvironmentIsArray.to_string(),
            "Environment must not be an array"
        );
        assert_eq!(
            ScreeError::EnvironmentNotObject.to_string(),
            "Environment must be an object"
        );
    }

    #[test]
    fn rule_schema_invalid_displays_rule_and_reason() {
        let err = ScreeError::RuleSchemaInvalid {
            rule_id: "quotes".into(),
            reason: "not a valid schema".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("\"quotes\""));
        assert!(msg.contains("not a valid schema"));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(ScreeError::EnvironmentIsArray)
        }
        assert!(returns_error().is_err());
    }
}
