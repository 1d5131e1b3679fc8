//! Whole-configuration validation.
//!
//! [`ConfigValidator`] is the entry point the host tool calls before any
//! analysis runs. It borrows read-only snapshots of the rule and environment
//! registries, checks the environment section, validates the setting of every
//! configured rule, and reports all rule violations together in one composite
//! error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::environments::{self, EnvironmentRegistry};
use crate::error::{Result, ScreeError};
use crate::options;
use crate::registry::RuleRegistry;
use crate::report::{self, Violation};

/// The configuration shape this crate validates: rule settings plus an
/// optional environment section.
///
/// Rule settings and the environment section stay untyped because their
/// shapes are exactly what validation is for. `BTreeMap` keeps rule iteration
/// (and therefore report ordering) deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Rule id to configured setting (bare severity or `[severity, ...options]`).
    pub rules: BTreeMap<String, Value>,

    /// Environment name to boolean enable flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<Value>,
}

/// Validates configurations against registered rules and environments.
pub struct ConfigValidator<'a> {
    rules: &'a RuleRegistry,
    environments: &'a EnvironmentRegistry,
}

impl<'a> ConfigValidator<'a> {
    /// Create a validator over registry snapshots.
    ///
    /// The registries are borrowed read-only for the validator's lifetime,
    /// so independent configurations can be validated concurrently.
    pub fn new(rules: &'a RuleRegistry, environments: &'a EnvironmentRegistry) -> Self {
        Self {
            rules,
            environments,
        }
    }

    /// Validate a whole configuration.
    ///
    /// The environment section is checked first and its failures are fatal:
    /// a mis-shaped section or an unknown environment name aborts the call
    /// immediately. Rule violations are then collected across every
    /// configured rule and reported together. An empty rule map is a no-op.
    ///
    /// # Errors
    ///
    /// [`ScreeError::EnvironmentIsArray`] / [`ScreeError::EnvironmentNotObject`]
    /// for a mis-shaped environment section,
    /// [`ScreeError::UnknownEnvironment`] for unregistered environment names,
    /// [`ScreeError::InvalidRuleConfig`] carrying the aggregated report when
    /// any rule setting is invalid, and [`ScreeError::RuleSchemaInvalid`] if
    /// a registered rule declared an uncompilable schema.
    pub fn validate(&self, config: &LintConfig, source: Option<&str>) -> Result<()> {
        tracing::debug!(
            "validating configuration: {} rule(s), source {:?}",
            config.rules.len(),
            source
        );

        let env_violations = environments::check_section(self.environments, config.env.as_ref())?;
        if let Some(report) = report::render_plain(source, &env_violations) {
            return Err(ScreeError::UnknownEnvironment { report });
        }

        let mut violations: Vec<Violation> = Vec::new();
        for (rule_id, setting) in &config.rules {
            violations.extend(options::validate_rule(self.rules, rule_id, setting)?);
        }

        if let Some(report) = report::render(source, &violations) {
            return Err(ScreeError::InvalidRuleConfig { report });
        }
        Ok(())
    }

    /// Validate a single rule's configured setting in isolation.
    ///
    /// Same aggregation and rendering contract as [`Self::validate`], scoped
    /// to one rule.
    ///
    /// # Errors
    ///
    /// [`ScreeError::InvalidRuleConfig`] when the setting is invalid,
    /// [`ScreeError::RuleSchemaInvalid`] for an uncompilable declared schema.
    pub fn validate_rule_options(
        &self,
        rule_id: &str,
        setting: &Value,
        source: Option<&str>,
    ) -> Result<()> {
        let violations = options::validate_rule(self.rules, rule_id, setting)?;
        if let Some(report) = report::render(source, &violations) {
            return Err(ScreeError::InvalidRuleConfig { report });
        }
        Ok(())
    }

    /// The raw declared options schema for a rule, exactly as registered.
    ///
    /// Returns `None` for an unknown rule or a rule without a declared
    /// schema. The value is never wrapped or defaulted, so external tooling
    /// can round-trip it.
    pub fn rule_options_schema(&self, rule_id: &str) -> Option<&Value> {
        self.rules.lookup(rule_id).and_then(|rule| rule.schema())
    }
}
