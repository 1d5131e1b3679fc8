//! Rule severity levels and normalization.
//!
//! A configured rule setting declares its severity as the integer `0`/`1`/`2`,
//! the string `"off"`/`"warn"`/`"error"` in any letter case, or the numeric
//! string `"0"`/`"1"`/`"2"`. All accepted forms normalize to [`Severity`];
//! everything else is rejected with a diagnostic built by
//! [`invalid_severity_message`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::render;

/// Canonical severity for a configured rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Rule is disabled.
    Off,
    /// Rule reports without failing the run.
    Warn,
    /// Rule reports and fails the run.
    Error,
}

impl Severity {
    /// Numeric code for this severity (0, 1, or 2).
    pub fn code(self) -> u8 {
        match self {
            Severity::Off => 0,
            Severity::Warn => 1,
            Severity::Error => 2,
        }
    }

    /// Normalize a raw configured severity into its canonical level.
    ///
    /// Returns `None` for anything outside the accepted set, including
    /// floats, arrays, objects, and unrecognized strings.
    pub fn normalize(raw: &Value) -> Option<Severity> {
        match raw {
            Value::Number(n) => match n.as_u64() {
                Some(0) => Some(Severity::Off),
                Some(1) => Some(Severity::Warn),
                Some(2) => Some(Severity::Error),
                _ => None,
            },
            Value::String(s) => match s.to_ascii_lowercase().as_str() {
                "off" | "0" => Some(Severity::Off),
                "warn" | "1" => Some(Severity::Warn),
                "error" | "2" => Some(Severity::Error),
                _ => None,
            },
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Off => write!(f, "off"),
            Severity::Warn => write!(f, "warn"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Diagnostic for a severity value outside the accepted set.
///
/// The offending value is rendered with [`render::inspect`] so the message
/// shows exactly what the configuration contained.
pub fn invalid_severity_message(raw: &Value) -> String {
    format!(
        "Severity should be one of the following: 0 = off, 1 = warn, 2 = error (you passed '{}').",
        render::inspect(raw)
    )
}
