//! Violation collection and report rendering.
//!
//! Every complaint found while validating a configuration becomes a
//! [`Violation`]; the renderers here turn a batch of violations into the
//! final multi-line report. The rendered shape (optional `source:` line,
//! tab-indented per-rule header, tab-indented message lines, every line
//! newline-terminated) is a stable contract other tools match against.

use std::fmt::Write as _;

/// A single complaint about a configured rule or section.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The rule id or config section this complaint is scoped to.
    pub scope: String,
    /// Human-readable complaint, without indentation or trailing newline.
    pub message: String,
}

impl Violation {
    /// Create a new violation.
    pub fn new(scope: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            message: message.into(),
        }
    }
}

/// Render rule violations as the composite configuration report.
///
/// Returns `None` when there is nothing to report. Violations are grouped by
/// scope in first-seen order; each group renders a
/// `Configuration for rule "<id>" is invalid:` header followed by one line
/// per message.
pub fn render(source: Option<&str>, violations: &[Violation]) -> Option<String> {
    if violations.is_empty() {
        return None;
    }

    let mut out = String::new();
    if let Some(source) = source {
        let _ = writeln!(out, "{source}:");
    }

    let mut current_scope: Option<&str> = None;
    for violation in violations {
        if current_scope != Some(violation.scope.as_str()) {
            let _ = writeln!(
                out,
                "\tConfiguration for rule \"{}\" is invalid:",
                violation.scope
            );
            current_scope = Some(violation.scope.as_str());
        }
        let _ = writeln!(out, "\t{}", violation.message);
    }

    Some(out)
}

/// Render section violations without per-rule headers.
///
/// Used for environment-section complaints, which carry no rule scope:
/// optional `source:` line, then one tab-indented line per message.
pub fn render_plain(source: Option<&str>, violations: &[Violation]) -> Option<String> {
    if violations.is_empty() {
        return None;
    }

    let mut out = String::new();
    if let Some(source) = source {
        let _ = writeln!(out, "{source}:");
    }
    for violation in violations {
        let _ = writeln!(out, "\t{}", violation.message);
    }

    Some(out)
}
