//! Per-rule options schema resolution.
//!
//! A rule declares its options schema in one of three shapes: an ordered
//! sequence of per-position schemas (tuple form), an empty sequence (no
//! options beyond severity), or a single schema value that describes the
//! whole options list and must be used verbatim. Resolution turns the
//! declared shape into a [`ResolvedSchema`] once per lookup, so the rest of
//! the validator never shape-sniffs raw JSON.

use serde_json::{json, Value};

use crate::registry::RuleRegistry;

/// The resolved options schema for one rule id.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedSchema {
    /// Rule id is not registered: validate severity only, ignore options.
    Unknown,
    /// Rule is registered with no schema (or an empty sequence): any option
    /// beyond severity is an excess item.
    NoOptions,
    /// One schema per option position, in order.
    Positional(Vec<Value>),
    /// A single schema describing the entire options list, used as declared.
    Opaque(Value),
}

impl ResolvedSchema {
    /// The schema the options list must satisfy, when structural validation
    /// applies.
    ///
    /// Positional schemas are wrapped in a tuple-form array schema capped at
    /// the declared position count; opaque schemas pass through untouched.
    pub fn options_schema(&self) -> Option<Value> {
        match self {
            ResolvedSchema::Unknown | ResolvedSchema::NoOptions => None,
            ResolvedSchema::Positional(items) => Some(json!({
                "type": "array",
                "items": items,
                "minItems": 0,
                "maxItems": items.len(),
            })),
            ResolvedSchema::Opaque(schema) => Some(schema.clone()),
        }
    }
}

/// Resolve the options schema for a rule id against the registry.
pub fn resolve(registry: &RuleRegistry, rule_id: &str) -> ResolvedSchema {
    let Some(rule) = registry.lookup(rule_id) else {
        return ResolvedSchema::Unknown;
    };

    match rule.schema() {
        None => ResolvedSchema::NoOptions,
        Some(Value::Array(items)) if items.is_empty() => ResolvedSchema::NoOptions,
        Some(Value::Array(items)) => ResolvedSchema::Positional(items.clone()),
        Some(other) => ResolvedSchema::Opaque(other.clone()),
    }
}
