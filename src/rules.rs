//! Rule expressions and the parsed rule set.
//!
//! A rule expression is a pipe-delimited string: rules joined by `|`,
//! parameters introduced by the first `:` and comma-separated after that.
//! `"required|between:1,10"` parses to two [`Rule`]s.

use indexmap::IndexMap;
use serde::Serialize;

/// Rules for each attribute path, in declaration order.
pub type RuleSet = IndexMap<String, Vec<Rule>>;

/// A named, parameterized check applied to one attribute. Immutable once
/// parsed; identity is the normalized name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub name: String,
    pub params: Vec<String>,
}

impl Rule {
    /// Build a rule from a pre-split name and parameter list. The name is
    /// normalized the same way string expressions are.
    pub fn new(name: impl AsRef<str>, params: Vec<String>) -> Self {
        Rule {
            name: normalize_rule_name(name.as_ref()),
            params,
        }
    }
}

/// Canonical rule identifier: trimmed, lowercased, dashes to underscores.
/// The same form keys dispatch, message lookup, and the failed-rules export.
pub fn normalize_rule_name(raw: &str) -> String {
    raw.trim().to_ascii_lowercase().replace('-', "_")
}

/// Parse a pipe-delimited rule expression. Empty segments are skipped.
pub fn parse_rule_expression(expression: &str) -> Vec<Rule> {
    expression.split('|').filter_map(parse_rule_segment).collect()
}

/// Parse a single `name[:params]` segment.
///
/// Splits on the first `:` only; remaining colons belong to the parameter
/// blob. Parameters are comma-separated, except for `regex`, whose entire
/// remainder is one parameter (the pattern may contain commas and colons).
fn parse_rule_segment(segment: &str) -> Option<Rule> {
    let segment = segment.trim();
    if segment.is_empty() {
        return None;
    }
    let (raw_name, raw_params) = match segment.split_once(':') {
        Some((name, params)) => (name, Some(params)),
        None => (segment, None),
    };
    let name = normalize_rule_name(raw_name);
    if name.is_empty() {
        return None;
    }
    let params = match raw_params {
        None => Vec::new(),
        Some(blob) if name == "regex" => vec![blob.to_string()],
        Some(blob) => blob.split(',').map(str::to_string).collect(),
    };
    Some(Rule { name, params })
}

/// Parse an attribute → expression mapping into a [`RuleSet`].
pub fn parse_rule_set<I, K, V>(raw: I) -> RuleSet
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: AsRef<str>,
{
    let mut set = RuleSet::new();
    for (attribute, expression) in raw {
        merge_into(&mut set, attribute.into(), parse_rule_expression(expression.as_ref()));
    }
    set
}

/// Append rules for an attribute, preserving declaration order.
pub(crate) fn merge_into(set: &mut RuleSet, attribute: String, rules: Vec<Rule>) {
    set.entry(attribute).or_default().extend(rules);
}
