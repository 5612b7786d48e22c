//! Composable command validation.
//!
//! A [`CommandValidator`] is built from independent, orderable
//! [`ValidationRule`]s and either passes silently or fails with the complete
//! set of violations. Rules never short-circuit each other: a command that
//! breaks several rules reports every violation in a single round trip.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::{CoreError, CoreResult};

/// Open context bag attached to errors, keyed by camelCase attribute name.
pub type Attributes = BTreeMap<String, Value>;

/// A declared, symbolic error code with its fixed default message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleCode {
    pub code: &'static str,
    pub message: &'static str,
}

/// One business-rule violation: a symbolic code plus diagnostic context.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub code: RuleCode,
    pub attributes: Attributes,
}

impl ValidationError {
    pub fn new(code: RuleCode, attributes: Attributes) -> Self {
        Self { code, attributes }
    }
}

/// A single business-rule check over a command.
///
/// Rules are pure apart from read-only lookups through ports; a failed port
/// lookup is not a validation error and is propagated on the unexpected
/// channel instead.
pub trait ValidationRule<C>: Send + Sync {
    /// Whether this rule applies to the command at all.
    fn is_applicable(&self, _command: &C) -> bool {
        true
    }

    /// Run the check. An empty list means the rule passes.
    fn validate(&self, command: &C) -> CoreResult<Vec<ValidationError>>;

    /// Execution priority; lower runs first, ties keep registration order.
    fn order(&self) -> i32 {
        0
    }
}

/// Runs every applicable rule and aggregates all violations.
pub struct CommandValidator<C> {
    rules: Vec<Box<dyn ValidationRule<C>>>,
}

impl<C> CommandValidator<C> {
    pub fn builder() -> CommandValidatorBuilder<C> {
        CommandValidatorBuilder { rules: Vec::new() }
    }

    /// Validate `command` against every applicable rule.
    ///
    /// Fails with [`CoreError::Validation`] carrying the concatenated error
    /// list of all rules, in rule order, iff any rule reported a violation.
    pub fn validate(&self, command: &C) -> CoreResult<()> {
        let mut errors = Vec::new();
        for rule in self.rules.iter().filter(|r| r.is_applicable(command)) {
            errors.extend(rule.validate(command)?);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(errors))
        }
    }
}

/// Collects rules and freezes their execution order at build time.
pub struct CommandValidatorBuilder<C> {
    rules: Vec<Box<dyn ValidationRule<C>>>,
}

impl<C> CommandValidatorBuilder<C> {
    pub fn rule(mut self, rule: impl ValidationRule<C> + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn build(mut self) -> CommandValidator<C> {
        // Stable sort: registration order breaks ties.
        self.rules.sort_by_key(|r| r.order());
        CommandValidator { rules: self.rules }
    }
}
