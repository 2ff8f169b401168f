use serde::{Deserialize, Serialize};
use std::fmt;

/// Classifies configuration (programmer) errors.
///
/// These are strictly separated from validation failures: a rule that
/// evaluates false is ordinary data recorded in the [`MessageBag`], while a
/// `ConfigError` means the validator itself was set up incorrectly.
///
/// [`MessageBag`]: crate::MessageBag
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigErrorKind {
    /// A rule received fewer parameters than it requires.
    MissingParameters,
    /// A rule parameter could not be interpreted (e.g. non-numeric bound).
    InvalidParameter,
    /// Dispatch found neither a built-in check nor a registered extension.
    UnknownRule,
    /// An extension was registered under a name already taken.
    DuplicateRule,
    /// `unique`/`exists` ran without a configured presence verifier.
    NoPresenceVerifier,
    /// `each` was invoked on a non-array attribute with no `array` rule.
    NotAnArray,
    /// The input record was not structured as expected.
    InvalidInput,
}

/// A fatal configuration error raised during setup or the evaluation pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigError {
    pub kind: ConfigErrorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    pub message: String,
}

impl ConfigError {
    pub(crate) fn missing_parameters(rule: &str, required: usize, got: usize) -> Self {
        ConfigError {
            kind: ConfigErrorKind::MissingParameters,
            rule: Some(rule.to_string()),
            attribute: None,
            message: format!("rule '{rule}' requires {required} parameter(s), got {got}"),
        }
    }

    pub(crate) fn invalid_parameter(rule: &str, detail: &str) -> Self {
        ConfigError {
            kind: ConfigErrorKind::InvalidParameter,
            rule: Some(rule.to_string()),
            attribute: None,
            message: format!("rule '{rule}': {detail}"),
        }
    }

    pub(crate) fn unknown_rule(rule: &str, attribute: &str) -> Self {
        ConfigError {
            kind: ConfigErrorKind::UnknownRule,
            rule: Some(rule.to_string()),
            attribute: Some(attribute.to_string()),
            message: format!("no built-in check or extension registered for rule '{rule}'"),
        }
    }

    pub(crate) fn duplicate_rule(rule: &str) -> Self {
        ConfigError {
            kind: ConfigErrorKind::DuplicateRule,
            rule: Some(rule.to_string()),
            attribute: None,
            message: format!("a check named '{rule}' is already registered"),
        }
    }

    pub(crate) fn no_presence_verifier(rule: &str) -> Self {
        ConfigError {
            kind: ConfigErrorKind::NoPresenceVerifier,
            rule: Some(rule.to_string()),
            attribute: None,
            message: format!("rule '{rule}' requires a presence verifier, none configured"),
        }
    }

    pub(crate) fn not_an_array(attribute: &str) -> Self {
        ConfigError {
            kind: ConfigErrorKind::NotAnArray,
            rule: None,
            attribute: Some(attribute.to_string()),
            message: format!(
                "each() requires attribute '{attribute}' to be an array (or to carry an 'array' rule)"
            ),
        }
    }

    pub(crate) fn invalid_input(detail: &str) -> Self {
        ConfigError {
            kind: ConfigErrorKind::InvalidInput,
            rule: None,
            attribute: None,
            message: detail.to_string(),
        }
    }

    /// Attach the attribute being checked, unless one is already recorded.
    pub(crate) fn for_attribute(mut self, attribute: &str) -> Self {
        if self.attribute.is_none() {
            self.attribute = Some(attribute.to_string());
        }
        self
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.attribute {
            Some(attr) => write!(f, "{} (attribute '{}')", self.message, attr),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ConfigError {}
