//! Field validation rules and results

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::traits::ResourceProvider;

/// Resource key of the default required-field message
pub const REQUIRED_MESSAGE_KEY: &str = "RequiredField";

/// Custom rule callback: returns a broken-rule message, or `None` when the value passes.
pub type RuleFn = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// A single validation rule
#[derive(Clone)]
pub enum Rule {
    /// Value must contain non-whitespace text
    Required { message: String },
    /// Value must not exceed `max` characters
    MaxLength { max: usize, message: String },
    /// Value must match the regular expression
    Pattern { regex: Regex, message: String },
    Custom(RuleFn),
}

impl Rule {
    fn check(&self, value: &str) -> Option<String> {
        match self {
            Self::Required { message } => value.trim().is_empty().then(|| message.clone()),
            Self::MaxLength { max, message } => {
                (value.chars().count() > *max).then(|| message.clone())
            }
            Self::Pattern { regex, message } => (!regex.is_match(value)).then(|| message.clone()),
            Self::Custom(check) => check(value),
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { message } => {
                f.debug_struct("Required").field("message", message).finish()
            }
            Self::MaxLength { max, message } => f
                .debug_struct("MaxLength")
                .field("max", max)
                .field("message", message)
                .finish(),
            Self::Pattern { regex, message } => f
                .debug_struct("Pattern")
                .field("regex", &regex.as_str())
                .field("message", message)
                .finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Ordered set of rules attached to a field
#[derive(Debug, Clone, Default)]
pub struct Validator {
    rules: Vec<Rule>,
}

impl Validator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn required(self, message: impl Into<String>) -> Self {
        self.rule(Rule::Required {
            message: message.into(),
        })
    }

    /// Required rule with the localized default message
    #[must_use]
    pub fn required_localized(self, resources: &dyn ResourceProvider) -> Self {
        let message = resources.resource_string_or(REQUIRED_MESSAGE_KEY, "This field is required.");
        self.required(message)
    }

    #[must_use]
    pub fn max_length(self, max: usize, message: impl Into<String>) -> Self {
        self.rule(Rule::MaxLength {
            max,
            message: message.into(),
        })
    }

    #[must_use]
    pub fn pattern(self, regex: Regex, message: impl Into<String>) -> Self {
        self.rule(Rule::Pattern {
            regex,
            message: message.into(),
        })
    }

    #[must_use]
    pub fn custom<F>(self, check: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.rule(Rule::Custom(Arc::new(check)))
    }

    #[must_use]
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Every broken rule for `value`, in rule order
    #[must_use]
    pub fn validate(&self, value: &str) -> Vec<String> {
        self.rules.iter().filter_map(|rule| rule.check(value)).collect()
    }
}

/// Broken rules for one field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    pub broken_rules: Vec<String>,
}

/// Broken rules keyed by field id
pub type ValidationErrors = HashMap<String, FieldErrors>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank() {
        let validator = Validator::new().required("Email is required.");
        assert_eq!(validator.validate("  "), vec!["Email is required."]);
        assert!(validator.validate("a@b.c").is_empty());
    }

    #[test]
    fn rules_report_in_order() {
        let validator = Validator::new()
            .max_length(3, "too long")
            .pattern(Regex::new(r"^\d+$").unwrap(), "digits only");

        assert_eq!(validator.validate("abcd"), vec!["too long", "digits only"]);
        assert!(validator.validate("123").is_empty());
    }

    #[test]
    fn required_message_falls_back_without_resources() {
        let validator = Validator::new().required_localized(&crate::traits::NoResources);
        assert_eq!(validator.validate(""), vec!["This field is required."]);
    }

    #[test]
    fn custom_rule() {
        let validator = Validator::new().custom(|value| {
            (value == "admin").then(|| "reserved name".to_string())
        });
        assert_eq!(validator.validate("admin").len(), 1);
        assert!(validator.validate("guest").is_empty());
    }
}
