//! Structural schema validation.
//!
//! Thin wrapper over the `jsonschema` crate: compile a schema, collect every
//! violation (not just the first), and reduce each one to the offending value
//! plus the constraint kind it broke, which is all the message builders in
//! [`crate::options`] need. Schemas compile against Draft 7, the last draft
//! with tuple-form `items`, which is how positional rule schemas are built.

use jsonschema::error::ValidationErrorKind;
use serde_json::Value;
use thiserror::Error;

/// A schema that the engine refused to compile.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct InvalidSchema(pub String);

/// The constraint a value failed.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// Value is not one of the enumerated candidates.
    Enum,
    /// Array has more items than the schema allows.
    MaxItems,
    /// Array has fewer items than the schema requires.
    MinItems,
    /// Value has the wrong type.
    Type,
    /// Any other constraint; carries the engine's own description.
    Other(String),
}

impl Constraint {
    /// The message fragment describing this constraint, completing the
    /// sentence `Value "<v>" <phrase>.`
    pub fn phrase(&self) -> &str {
        match self {
            Constraint::Enum => "must be an enum value",
            Constraint::MaxItems => "has more items than allowed",
            Constraint::MinItems => "has less items than allowed",
            Constraint::Type => "is the wrong type",
            Constraint::Other(message) => message,
        }
    }
}

/// A single structural complaint from the schema engine.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuralFailure {
    /// The offending value, owned.
    pub value: Value,
    /// The constraint it violated.
    pub constraint: Constraint,
}

/// Validate a value against a schema, returning every structural failure in
/// the order the engine reports them (schema-definition order).
pub fn check(value: &Value, schema: &Value) -> Result<Vec<StructuralFailure>, InvalidSchema> {
    let validator = jsonschema::options()
        .with_draft(jsonschema::Draft::Draft7)
        .build(schema)
        .map_err(|e| InvalidSchema(e.to_string()))?;

    let failures = validator
        .iter_errors(value)
        .map(|err| {
            let constraint = match &err.kind {
                ValidationErrorKind::Enum { .. } => Constraint::Enum,
                ValidationErrorKind::MaxItems { .. } => Constraint::MaxItems,
                ValidationErrorKind::MinItems { .. } => Constraint::MinItems,
                ValidationErrorKind::Type { .. } => Constraint::Type,
                _ => Constraint::Other(err.to_string()),
            };
            StructuralFailure {
                value: err.instance.into_owned(),
                constraint,
            }
        })
        .collect();

    Ok(failures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn valid_value_yields_no_failures() {
        let schema = json!({"type": "array", "items": [{"enum": ["single", "double"]}]});
        let failures = check(&json!(["single"]), &schema).unwrap();
        assert!(failures.is_empty());
    }

    #[test]
    fn enum_mismatch_reports_offending_element() {
        let schema = json!({"type": "array", "items": [{"enum": ["first", "second"]}]});
        let failures = check(&json!(["third"]), &schema).unwrap();

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].value, json!("third"));
        assert_eq!(failures[0].constraint, Constraint::Enum);
    }

    #[test]
    fn max_items_reports_the_whole_array() {
        let schema = json!({"type": "array", "maxItems": 1});
        let failures = check(&json!(["a", "b"]), &schema).unwrap();

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].value, json!(["a", "b"]));
        assert_eq!(failures[0].constraint, Constraint::MaxItems);
    }

    #[test]
    fn min_items_is_detected() {
        let schema = json!({"type": "array", "minItems": 2});
        let failures = check(&json!(["only"]), &schema).unwrap();

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].constraint, Constraint::MinItems);
    }

    #[test]
    fn wrong_type_is_detected() {
        let schema = json!({"type": "array"});
        let failures = check(&json!("not an array"), &schema).unwrap();

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].constraint, Constraint::Type);
    }

    #[test]
    fn multiple_failures_are_all_reported() {
        let schema = json!({
            "type": "array",
            "items": [{"enum": ["first", "second"]}],
            "minItems": 2,
        });
        let failures = check(&json!(["frist"]), &schema).unwrap();

        assert_eq!(failures.len(), 2);
        assert!(failures.iter().any(|f| f.constraint == Constraint::Enum));
        assert!(failures.iter().any(|f| f.constraint == Constraint::MinItems));
    }

    #[test]
    fn uncompilable_schema_is_an_error() {
        let schema = json!({"type": "no-such-type"});
        assert!(check(&json!([]), &schema).is_err());
    }

    #[test]
    fn constraint_phrases() {
        assert_eq!(Constraint::Enum.phrase(), "must be an enum value");
        assert_eq!(Constraint::MaxItems.phrase(), "has more items than allowed");
        assert_eq!(Constraint::MinItems.phrase(), "has less items than allowed");
        assert_eq!(Constraint::Type.phrase(), "is the wrong type");
    }
}
