//! Declarative data validation: rule expressions, nested attribute paths,
//! and localized, parameterized error messages.
//!
//! Given a structured input record and per-field rule expressions, the
//! engine determines which fields fail which rules and produces
//! human-readable messages:
//!
//! ```text
//! (data, rules) → Validator → passes()/fails() → MessageBag / failed rules
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use gatecheck::Validator;
//! use serde_json::json;
//!
//! let mut v = Validator::from_json(
//!     json!({"username": "ab", "email": "not-an-email"}),
//!     [
//!         ("username", "required|alpha_num|min:3"),
//!         ("email", "required|email"),
//!     ],
//! )
//! .expect("object input");
//!
//! assert!(v.fails().unwrap());
//! let messages = v.messages().unwrap();
//! assert_eq!(
//!     messages.first(Some("username")).as_deref(),
//!     Some("The username must be at least 3 characters."),
//! );
//! assert!(messages.has("email"));
//! ```
//!
//! Validation failures are ordinary data accumulated in a [`MessageBag`];
//! configuration mistakes (missing rule parameters, unknown rule names, a
//! `unique` rule with no [`PresenceVerifier`]) surface as [`ConfigError`]
//! instead and should be treated as setup bugs.

pub mod error;
pub mod input;
pub mod messages;
pub mod registry;
pub mod rules;
pub mod translate;
pub mod validator;
pub mod verify;

pub(crate) mod checks;
pub(crate) mod format;

pub use error::{ConfigError, ConfigErrorKind};
pub use input::{FileUpload, Input, Resolved};
pub use messages::MessageBag;
pub use rules::{Rule, RuleSet, normalize_rule_name, parse_rule_expression, parse_rule_set};
pub use translate::{MemoryTranslator, Translator};
pub use validator::{FailedRules, Validator};
pub use verify::PresenceVerifier;
