//! Environment registry and environment-section validation.
//!
//! An environment is a named bundle of predefined global identifiers a
//! configuration may enable (`browser`, `node`, ...). The configuration's
//! environment section maps environment names to boolean enable flags; every
//! key must name a registered environment regardless of its flag value, since
//! disabling an unknown environment is just as much a typo as enabling one.

use std::collections::{BTreeSet, HashMap};

use serde_json::Value;

use crate::error::ScreeError;
use crate::report::Violation;

/// Registry of known environments and the globals each one defines.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentRegistry {
    environments: HashMap<String, BTreeSet<String>>,
}

impl EnvironmentRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            environments: HashMap::new(),
        }
    }

    /// Create a registry with the standard built-in environments.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("browser", ["window", "document", "navigator", "console"]);
        registry.register("node", ["process", "require", "module", "__dirname"]);
        registry.register("commonjs", ["require", "module", "exports"]);
        registry.register("shared-node-browser", ["console"]);
        registry.register("es6", ["Promise", "Symbol", "Map", "Set", "Proxy"]);
        registry.register("worker", ["self", "postMessage", "importScripts"]);
        registry.register("serviceworker", ["self", "caches", "fetch"]);
        registry.register("amd", ["define", "require"]);
        registry.register("mocha", ["describe", "it", "before", "after"]);
        registry.register("jasmine", ["describe", "it", "expect", "spyOn"]);
        registry.register("jest", ["describe", "it", "expect", "jest"]);
        registry.register("qunit", ["QUnit"]);
        registry
    }

    /// Register an environment and the globals it defines, replacing any
    /// previous registration with the same name.
    pub fn register<I, S>(&mut self, name: impl Into<String>, globals: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.environments.insert(
            name.into(),
            globals.into_iter().map(Into::into).collect(),
        );
    }

    /// Whether an environment name is registered.
    pub fn is_known(&self, name: &str) -> bool {
        self.environments.contains_key(name)
    }

    /// The globals a registered environment defines.
    pub fn globals(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.environments.get(name)
    }

    /// Get the number of registered environments.
    pub fn len(&self) -> usize {
        self.environments.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.environments.is_empty()
    }
}

/// Validate a configuration's environment section against the registry.
///
/// An absent section is valid. A section with the wrong shape fails
/// immediately: [`ScreeError::EnvironmentIsArray`] for an array,
/// [`ScreeError::EnvironmentNotObject`] for any other non-object value.
/// Otherwise every key is checked against the registry and each unknown key
/// yields one violation, whatever its boolean value.
pub fn check_section(
    registry: &EnvironmentRegistry,
    section: Option<&Value>,
) -> Result<Vec<Violation>, ScreeError> {
    let Some(section) = section else {
        return Ok(Vec::new());
    };

    match section {
        Value::Array(_) => Err(ScreeError::EnvironmentIsArray),
        Value::Object(map) => Ok(map
            .keys()
            .filter(|key| !registry.is_known(key))
            .map(|key| Violation::new("env", format!("Environment key \"{key}\" is unknown")))
            .collect()),
        _ => Err(ScreeError::EnvironmentNotObject),
    }
}
