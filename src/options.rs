//! Per-rule setting validation.
//!
//! A configured rule setting is either a bare severity or an array whose
//! first element is the severity and whose remainder are positional options.
//! Validation collects every violation for the setting rather than stopping
//! at the first: a bad severity never suppresses options checking, so the
//! user can fix both in one pass.

use serde_json::Value;

use crate::error::{Result, ScreeError};
use crate::registry::RuleRegistry;
use crate::render;
use crate::report::Violation;
use crate::schema::{self, ResolvedSchema};
use crate::severity::{invalid_severity_message, Severity};
use crate::structural;

/// Split a raw rule setting into its severity and option values.
///
/// A bare value is all severity; an empty array has no severity at all and
/// normalizes (and fails) as `null`.
fn split_setting(setting: &Value) -> (Value, Vec<Value>) {
    match setting {
        Value::Array(items) => (
            items.first().cloned().unwrap_or(Value::Null),
            items.iter().skip(1).cloned().collect(),
        ),
        other => (other.clone(), Vec::new()),
    }
}

/// Validate one rule's configured setting, returning every violation found.
///
/// The severity violation (if any) comes first, followed by options
/// violations in the order the structural validator reports them. Unknown
/// rule ids are checked for severity only.
///
/// # Errors
///
/// Returns [`ScreeError::RuleSchemaInvalid`] if the rule's declared schema
/// cannot be compiled; user-level problems are violations, not errors.
pub fn validate_rule(
    registry: &RuleRegistry,
    rule_id: &str,
    setting: &Value,
) -> Result<Vec<Violation>> {
    let (severity_raw, options) = split_setting(setting);
    let mut violations = Vec::new();

    if Severity::normalize(&severity_raw).is_none() {
        violations.push(Violation::new(rule_id, invalid_severity_message(&severity_raw)));
    }

    match schema::resolve(registry, rule_id) {
        ResolvedSchema::Unknown => {}
        ResolvedSchema::NoOptions => {
            if !options.is_empty() {
                violations.push(Violation::new(
                    rule_id,
                    format!(
                        "Value \"{}\" has more items than allowed.",
                        render::join(&options)
                    ),
                ));
            }
        }
        resolved => {
            // resolve() only leaves Positional/Opaque here, both of which
            // carry an options schema.
            let Some(options_schema) = resolved.options_schema() else {
                return Ok(violations);
            };
            let options_value = Value::Array(options);
            let failures = structural::check(&options_value, &options_schema).map_err(|e| {
                ScreeError::RuleSchemaInvalid {
                    rule_id: rule_id.to_string(),
                    reason: e.to_string(),
                }
            })?;

            violations.extend(failures.into_iter().map(|failure| {
                Violation::new(
                    rule_id,
                    format!(
                        "Value \"{}\" {}.",
                        render::coerce(&failure.value),
                        failure.constraint.phrase()
                    ),
                )
            }));
        }
    }

    tracing::debug!(
        "validated options for rule '{}': {} violation(s)",
        rule_id,
        violations.len()
    );
    Ok(violations)
}
