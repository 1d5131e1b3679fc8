//! Scree - configuration validation core for pluggable lint rules.
//!
//! Scree validates the configuration a linting tool consumes before any
//! analysis runs: each rule's severity and options are checked against the
//! rule's declared schema, the environment section is checked against a
//! registry of known environment names, and every violation is reported
//! together in one stable, human-readable error.
//!
//! # Modules
//!
//! - [`error`] - Error types and result alias
//! - [`severity`] - Severity levels and normalization
//! - [`registry`] - Rule registry and registrations
//! - [`environments`] - Environment registry and section checks
//! - [`schema`] - Per-rule options schema resolution
//! - [`structural`] - Structural schema validation
//! - [`options`] - Per-rule setting validation
//! - [`report`] - Violation collection and report rendering
//! - [`render`] - Value rendering for diagnostic messages
//! - [`validator`] - Whole-configuration validation entry point
//!
//! # Example
//!
//! ```
//! use scree::{ConfigValidator, EnvironmentRegistry, RuleRegistration, RuleRegistry};
//! use serde_json::json;
//!
//! let mut rules = RuleRegistry::new();
//! rules.register(
//!     RuleRegistration::new("quotes").with_schema(json!([{"enum": ["single", "double"]}])),
//! );
//! let environments = EnvironmentRegistry::with_builtins();
//! let validator = ConfigValidator::new(&rules, &environments);
//!
//! // A well-formed setting passes silently.
//! validator
//!     .validate_rule_options("quotes", &json!([2, "single"]), None)
//!     .unwrap();
//!
//! // A bad option is reported with the rule it belongs to.
//! let err = validator
//!     .validate_rule_options("quotes", &json!([2, "tripled"]), None)
//!     .unwrap_err();
//! assert!(err.to_string().contains("Value \"tripled\" must be an enum value."));
//! ```

pub mod environments;
pub mod error;
pub mod options;
pub mod registry;
pub mod render;
pub mod report;
pub mod schema;
pub mod severity;
pub mod structural;
pub mod validator;

pub use environments::EnvironmentRegistry;
pub use error::{Result, ScreeError};
pub use registry::{RuleRegistration, RuleRegistry};
pub use report::Violation;
pub use schema::ResolvedSchema;
pub use severity::Severity;
pub use structural::{Constraint, StructuralFailure};
pub use validator::{ConfigValidator, LintConfig};
