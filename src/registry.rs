//! Rule registry for managing registered lint rules.
//!
//! The [`RuleRegistry`] stores every rule known to the host tool together
//! with its declared options schema, and provides lookup during validation.
//! The registry is populated by the host's rule-loading machinery and read
//! here as an immutable snapshot.

use std::collections::HashMap;

use serde_json::Value;

/// A rule known to the host tool, as registered by its loader.
///
/// The declared schema is kept exactly as the rule author wrote it:
/// an array declares one schema per option position, an empty array declares
/// that the rule takes no options beyond severity, and any other value is an
/// opaque schema describing the whole options list.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleRegistration {
    id: String,
    schema: Option<Value>,
}

impl RuleRegistration {
    /// Create a registration without a declared options schema.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            schema: None,
        }
    }

    /// Attach a declared options schema.
    pub fn with_schema(mut self, schema: Value) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Unique identifier of this rule.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The declared options schema, exactly as registered.
    pub fn schema(&self) -> Option<&Value> {
        self.schema.as_ref()
    }
}

/// Registry of all rules known to the host tool.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: HashMap<String, RuleRegistration>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Register a rule, replacing any previous registration with the same id.
    pub fn register(&mut self, rule: RuleRegistration) {
        self.rules.insert(rule.id.clone(), rule);
    }

    /// Look up a rule by id.
    pub fn lookup(&self, id: &str) -> Option<&RuleRegistration> {
        self.rules.get(id)
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn registry_new_is_empty() {
        let registry = RuleRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn registry_register_and_lookup() {
        let mut registry = RuleRegistry::new();
        registry.register(RuleRegistration::new("semi"));

        assert!(!registry.is_empty());
        assert!(registry.lookup("semi").is_some());
        assert!(registry.lookup("unknown").is_none());
    }

    #[test]
    fn registration_keeps_declared_schema_verbatim() {
        let schema = json!({"type": "array", "maxItems": 1});
        let rule = RuleRegistration::new("quotes").with_schema(schema.clone());

        assert_eq!(rule.id(), "quotes");
        assert_eq!(rule.schema(), Some(&schema));
    }

    #[test]
    fn registration_without_schema() {
        let rule = RuleRegistration::new("semi");
        assert!(rule.schema().is_none());
    }

    #[test]
    fn re_registration_replaces_previous() {
        let mut registry = RuleRegistry::new();
        registry.register(RuleRegistration::new("semi"));
        registry.register(RuleRegistration::new("semi").with_schema(json!([])));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup("semi").unwrap().schema(), Some(&json!([])));
    }

    #[test]
    fn registry_default_is_empty() {
        let registry = RuleRegistry::default();
        assert!(registry.is_empty());
    }
}
