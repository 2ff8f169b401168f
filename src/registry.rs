//! The built-in dispatch table.
//!
//! Every rule name maps to exactly one check at dispatch time. Built-ins
//! live in this compile-time table; extensions only fill gaps (collisions
//! are rejected at registration). `sometimes` is absent on purpose: it is
//! a gate handled by the engine, never a check.

use crate::checks;
use crate::error::ConfigError;
use crate::input::Resolved;
use crate::validator::Validator;

/// Shared signature of every built-in check.
pub type RuleCheck = fn(
    &Validator,
    &str,
    Option<Resolved<'_>>,
    &[String],
) -> Result<bool, ConfigError>;

pub static BUILTIN_CHECKS: &[(&str, RuleCheck)] = &[
    ("accepted", checks::accepted),
    ("active_url", checks::active_url),
    ("after", checks::after),
    ("alpha", checks::alpha),
    ("alpha_dash", checks::alpha_dash),
    ("alpha_num", checks::alpha_num),
    ("array", checks::array),
    ("before", checks::before),
    ("between", checks::between),
    ("boolean", checks::boolean),
    ("confirmed", checks::confirmed),
    ("date", checks::date),
    ("date_format", checks::date_format),
    ("different", checks::different),
    ("digits", checks::digits),
    ("digits_between", checks::digits_between),
    ("email", checks::email),
    ("exists", checks::exists),
    ("filled", checks::filled),
    ("image", checks::image),
    ("in", checks::r#in),
    ("integer", checks::integer),
    ("ip", checks::ip),
    ("ip4", checks::ipv4),
    ("ip6", checks::ipv6),
    ("ipv4", checks::ipv4),
    ("ipv6", checks::ipv6),
    ("max", checks::max),
    ("mimes", checks::mimes),
    ("min", checks::min),
    ("not_in", checks::not_in),
    ("numeric", checks::numeric),
    ("regex", checks::regex),
    ("required", checks::required),
    ("required_if", checks::required_if),
    ("required_with", checks::required_with),
    ("required_with_all", checks::required_with_all),
    ("required_without", checks::required_without),
    ("required_without_all", checks::required_without_all),
    ("same", checks::same),
    ("size", checks::size),
    ("timezone", checks::timezone),
    ("unique", checks::unique),
    ("url", checks::url),
];

/// Rules that must run even when their attribute is absent.
pub static IMPLICIT_RULES: &[&str] = &[
    "required",
    "filled",
    "required_with",
    "required_with_all",
    "required_without",
    "required_without_all",
    "required_if",
    "accepted",
];

/// Size-family rules, which resolve type-qualified message keys.
pub static SIZE_RULES: &[&str] = &["size", "between", "min", "max"];

pub fn lookup_check(name: &str) -> Option<RuleCheck> {
    BUILTIN_CHECKS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, check)| *check)
}

pub fn is_builtin(name: &str) -> bool {
    name == "sometimes" || lookup_check(name).is_some()
}

pub fn is_implicit(name: &str) -> bool {
    IMPLICIT_RULES.contains(&name)
}
