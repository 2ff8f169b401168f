//! The built-in rule catalog.
//!
//! Every check shares one signature (see [`registry::RuleCheck`]): the
//! validator for cross-field lookups, the attribute path, the resolved
//! value (absent for implicit rules running on missing attributes), and the
//! rule parameters. Checks return `Ok(bool)` for pass/fail and `Err` only
//! for configuration errors such as missing parameters.
//!
//! [`registry::RuleCheck`]: crate::registry::RuleCheck

use crate::error::ConfigError;
use crate::input::Resolved;
use crate::validator::Validator;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use serde_json::Value;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, ToSocketAddrs};
use std::str::FromStr;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .unwrap()
});

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*://[^\s/$.?#][^\s]*$").unwrap());

/// Extensions the `image` rule accepts.
static IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "svg", "webp"];

/// Rules that tag an attribute as numeric for size-type selection.
pub(crate) static NUMERIC_RULES: &[&str] = &["numeric", "integer"];

// ─── Shared helpers ─────────────────────────────────────────────────────────

/// The "required" presence definition: non-null, non-empty string after
/// trim, non-empty collection, and for files a non-empty temporary
/// location. `0`, `false` and `"0"` all count as present.
pub(crate) fn has_presence(value: Option<Resolved<'_>>) -> bool {
    match value {
        None => false,
        Some(Resolved::File(f)) => f.is_uploaded(),
        Some(Resolved::Value(v)) => match v {
            Value::Null => false,
            Value::String(s) => !s.trim().is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::Object(map) => !map.is_empty(),
            _ => true,
        },
    }
}

fn require_params(rule: &str, required: usize, params: &[String]) -> Result<(), ConfigError> {
    if params.len() < required {
        return Err(ConfigError::missing_parameters(rule, required, params.len()));
    }
    Ok(())
}

fn numeric_param(rule: &str, param: &str) -> Result<f64, ConfigError> {
    param
        .trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::invalid_parameter(rule, &format!("'{param}' is not numeric")))
}

/// Stringify a value for loose comparisons (`in`, `required_if`, verifier
/// queries). Booleans follow the original's string casts: `"1"` / `""`.
pub(crate) fn comparable_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) => String::new(),
        Value::Null => String::new(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}

fn as_numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Loose equality: integer 42 equals float 42.0, containers compare
/// structurally.
fn values_loosely_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(fx), Some(fy)) => fx == fy,
            _ => x == y,
        },
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(a, b)| values_loosely_equal(a, b))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(k, v)| y.get(k).is_some_and(|w| values_loosely_equal(v, w)))
        }
        _ => a == b,
    }
}

fn resolved_equal(a: Resolved<'_>, b: Resolved<'_>) -> bool {
    match (a, b) {
        (Resolved::Value(x), Resolved::Value(y)) => values_loosely_equal(x, y),
        (Resolved::File(x), Resolved::File(y)) => x == y,
        _ => false,
    }
}

/// The size of an attribute, per the co-declared-rule policy: numeric
/// value when the attribute is also tagged numeric/integer, element count
/// for arrays (arrays win over string length even untagged), kilobytes for
/// files, character length otherwise.
fn size_of(v: &Validator, attribute: &str, value: Resolved<'_>) -> f64 {
    match value {
        Resolved::File(f) => f.size_kilobytes(),
        Resolved::Value(val) => {
            if v.has_rule(attribute, NUMERIC_RULES)
                && let Some(n) = as_numeric(val)
            {
                return n;
            }
            match val {
                Value::Array(items) => items.len() as f64,
                Value::Object(map) => map.len() as f64,
                other => comparable_string(other).chars().count() as f64,
            }
        }
    }
}

fn string_value<'a>(value: Resolved<'a>) -> Option<&'a str> {
    value.as_value().and_then(Value::as_str)
}

// ─── Presence family ────────────────────────────────────────────────────────

pub(crate) fn required(
    _v: &Validator,
    _attribute: &str,
    value: Option<Resolved<'_>>,
    _params: &[String],
) -> Result<bool, ConfigError> {
    Ok(has_presence(value))
}

/// Like `required`, but only when the attribute key is actually present in
/// the input. An absent key passes; an explicit empty value fails.
pub(crate) fn filled(
    v: &Validator,
    attribute: &str,
    value: Option<Resolved<'_>>,
    _params: &[String],
) -> Result<bool, ConfigError> {
    if v.has_attribute(attribute) {
        Ok(has_presence(value))
    } else {
        Ok(true)
    }
}

fn params_present(v: &Validator, params: &[String]) -> usize {
    params
        .iter()
        .filter(|p| has_presence(v.value_of(p)))
        .count()
}

pub(crate) fn required_with(
    v: &Validator,
    attribute: &str,
    value: Option<Resolved<'_>>,
    params: &[String],
) -> Result<bool, ConfigError> {
    require_params("required_with", 1, params)?;
    if params_present(v, params) > 0 {
        required(v, attribute, value, params)
    } else {
        Ok(true)
    }
}

pub(crate) fn required_with_all(
    v: &Validator,
    attribute: &str,
    value: Option<Resolved<'_>>,
    params: &[String],
) -> Result<bool, ConfigError> {
    require_params("required_with_all", 1, params)?;
    if params_present(v, params) == params.len() {
        required(v, attribute, value, params)
    } else {
        Ok(true)
    }
}

pub(crate) fn required_without(
    v: &Validator,
    attribute: &str,
    value: Option<Resolved<'_>>,
    params: &[String],
) -> Result<bool, ConfigError> {
    require_params("required_without", 1, params)?;
    if params_present(v, params) < params.len() {
        required(v, attribute, value, params)
    } else {
        Ok(true)
    }
}

pub(crate) fn required_without_all(
    v: &Validator,
    attribute: &str,
    value: Option<Resolved<'_>>,
    params: &[String],
) -> Result<bool, ConfigError> {
    require_params("required_without_all", 1, params)?;
    if params_present(v, params) == 0 {
        required(v, attribute, value, params)
    } else {
        Ok(true)
    }
}

pub(crate) fn required_if(
    v: &Validator,
    attribute: &str,
    value: Option<Resolved<'_>>,
    params: &[String],
) -> Result<bool, ConfigError> {
    require_params("required_if", 2, params)?;
    let other = match v.value_of(&params[0]).and_then(|r| r.as_value().cloned()) {
        Some(val) => comparable_string(&val),
        None => return Ok(true),
    };
    if params[1..].iter().any(|candidate| *candidate == other) {
        required(v, attribute, value, params)
    } else {
        Ok(true)
    }
}

pub(crate) fn confirmed(
    v: &Validator,
    attribute: &str,
    value: Option<Resolved<'_>>,
    _params: &[String],
) -> Result<bool, ConfigError> {
    let confirmation = format!("{attribute}_confirmation");
    same(v, attribute, value, &[confirmation])
}

pub(crate) fn same(
    v: &Validator,
    _attribute: &str,
    value: Option<Resolved<'_>>,
    params: &[String],
) -> Result<bool, ConfigError> {
    require_params("same", 1, params)?;
    match (value, v.value_of(&params[0])) {
        (Some(a), Some(b)) => Ok(resolved_equal(a, b)),
        _ => Ok(false),
    }
}

pub(crate) fn different(
    v: &Validator,
    _attribute: &str,
    value: Option<Resolved<'_>>,
    params: &[String],
) -> Result<bool, ConfigError> {
    require_params("different", 1, params)?;
    match (value, v.value_of(&params[0])) {
        (Some(a), Some(b)) => Ok(!resolved_equal(a, b)),
        _ => Ok(false),
    }
}

pub(crate) fn accepted(
    _v: &Validator,
    _attribute: &str,
    value: Option<Resolved<'_>>,
    _params: &[String],
) -> Result<bool, ConfigError> {
    let Some(Resolved::Value(val)) = value else {
        return Ok(false);
    };
    Ok(match val {
        Value::Bool(true) => true,
        Value::Number(n) => n.as_f64() == Some(1.0),
        Value::String(s) => matches!(s.as_str(), "yes" | "on" | "1" | "true"),
        _ => false,
    })
}

pub(crate) fn boolean(
    _v: &Validator,
    _attribute: &str,
    value: Option<Resolved<'_>>,
    _params: &[String],
) -> Result<bool, ConfigError> {
    let Some(Resolved::Value(val)) = value else {
        return Ok(false);
    };
    Ok(match val {
        Value::Bool(_) => true,
        Value::Number(n) => matches!(n.as_f64(), Some(0.0) | Some(1.0)),
        Value::String(s) => matches!(s.as_str(), "0" | "1"),
        _ => false,
    })
}

// ─── Shape family ───────────────────────────────────────────────────────────

pub(crate) fn array(
    _v: &Validator,
    _attribute: &str,
    value: Option<Resolved<'_>>,
    _params: &[String],
) -> Result<bool, ConfigError> {
    Ok(matches!(
        value.and_then(|r| r.as_value()),
        Some(Value::Array(_)) | Some(Value::Object(_))
    ))
}

pub(crate) fn numeric(
    _v: &Validator,
    _attribute: &str,
    value: Option<Resolved<'_>>,
    _params: &[String],
) -> Result<bool, ConfigError> {
    Ok(value
        .and_then(|r| r.as_value())
        .is_some_and(|v| as_numeric(v).is_some()))
}

pub(crate) fn integer(
    _v: &Validator,
    _attribute: &str,
    value: Option<Resolved<'_>>,
    _params: &[String],
) -> Result<bool, ConfigError> {
    let Some(val) = value.and_then(|r| r.as_value()) else {
        return Ok(false);
    };
    Ok(match val {
        Value::Number(n) => n.as_i64().is_some() || n.as_u64().is_some(),
        Value::String(s) => s.trim().parse::<i64>().is_ok(),
        _ => false,
    })
}

fn digit_count(value: Resolved<'_>) -> Option<usize> {
    let text = comparable_string(value.as_value()?);
    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        Some(text.len())
    } else {
        None
    }
}

pub(crate) fn digits(
    _v: &Validator,
    _attribute: &str,
    value: Option<Resolved<'_>>,
    params: &[String],
) -> Result<bool, ConfigError> {
    require_params("digits", 1, params)?;
    let expected = numeric_param("digits", &params[0])? as usize;
    Ok(value.and_then(digit_count) == Some(expected))
}

pub(crate) fn digits_between(
    _v: &Validator,
    _attribute: &str,
    value: Option<Resolved<'_>>,
    params: &[String],
) -> Result<bool, ConfigError> {
    require_params("digits_between", 2, params)?;
    let min = numeric_param("digits_between", &params[0])? as usize;
    let max = numeric_param("digits_between", &params[1])? as usize;
    Ok(value
        .and_then(digit_count)
        .is_some_and(|n| n >= min && n <= max))
}

// ─── Size family ────────────────────────────────────────────────────────────

pub(crate) fn size(
    v: &Validator,
    attribute: &str,
    value: Option<Resolved<'_>>,
    params: &[String],
) -> Result<bool, ConfigError> {
    require_params("size", 1, params)?;
    let expected = numeric_param("size", &params[0])?;
    Ok(value.is_some_and(|r| size_of(v, attribute, r) == expected))
}

pub(crate) fn between(
    v: &Validator,
    attribute: &str,
    value: Option<Resolved<'_>>,
    params: &[String],
) -> Result<bool, ConfigError> {
    require_params("between", 2, params)?;
    let min = numeric_param("between", &params[0])?;
    let max = numeric_param("between", &params[1])?;
    Ok(value.is_some_and(|r| {
        let s = size_of(v, attribute, r);
        s >= min && s <= max
    }))
}

pub(crate) fn min(
    v: &Validator,
    attribute: &str,
    value: Option<Resolved<'_>>,
    params: &[String],
) -> Result<bool, ConfigError> {
    require_params("min", 1, params)?;
    let bound = numeric_param("min", &params[0])?;
    Ok(value.is_some_and(|r| size_of(v, attribute, r) >= bound))
}

pub(crate) fn max(
    v: &Validator,
    attribute: &str,
    value: Option<Resolved<'_>>,
    params: &[String],
) -> Result<bool, ConfigError> {
    require_params("max", 1, params)?;
    let bound = numeric_param("max", &params[0])?;
    Ok(value.is_some_and(|r| size_of(v, attribute, r) <= bound))
}

// ─── Set family ─────────────────────────────────────────────────────────────

pub(crate) fn r#in(
    _v: &Validator,
    _attribute: &str,
    value: Option<Resolved<'_>>,
    params: &[String],
) -> Result<bool, ConfigError> {
    require_params("in", 1, params)?;
    let Some(val) = value.and_then(|r| r.as_value()) else {
        return Ok(false);
    };
    let needle = comparable_string(val);
    Ok(params.iter().any(|p| *p == needle))
}

pub(crate) fn not_in(
    v: &Validator,
    attribute: &str,
    value: Option<Resolved<'_>>,
    params: &[String],
) -> Result<bool, ConfigError> {
    require_params("not_in", 1, params)?;
    Ok(!r#in(v, attribute, value, params)?)
}

// ─── Store-backed family ────────────────────────────────────────────────────

pub(crate) fn unique(
    v: &Validator,
    attribute: &str,
    value: Option<Resolved<'_>>,
    params: &[String],
) -> Result<bool, ConfigError> {
    require_params("unique", 1, params)?;
    let verifier = v
        .presence_verifier()
        .ok_or_else(|| ConfigError::no_presence_verifier("unique"))?;
    let parsed = crate::verify::parse_unique_params(params);
    let column = parsed.column.unwrap_or(attribute);
    let needle = value
        .and_then(|r| r.as_value())
        .map(comparable_string)
        .unwrap_or_default();
    let count = verifier.count(
        parsed.collection,
        column,
        &needle,
        parsed.exclude_id,
        parsed.id_column,
        &parsed.extra,
    );
    Ok(count == 0)
}

pub(crate) fn exists(
    v: &Validator,
    attribute: &str,
    value: Option<Resolved<'_>>,
    params: &[String],
) -> Result<bool, ConfigError> {
    require_params("exists", 1, params)?;
    let verifier = v
        .presence_verifier()
        .ok_or_else(|| ConfigError::no_presence_verifier("exists"))?;
    let parsed = crate::verify::parse_exists_params(params);
    let column = parsed.column.unwrap_or(attribute);
    match value.and_then(|r| r.as_value()) {
        Some(Value::Array(items)) => {
            let values: Vec<String> = items.iter().map(comparable_string).collect();
            let count = verifier.count_many(parsed.collection, column, &values, &parsed.extra);
            Ok(count >= items.len() as u64)
        }
        other => {
            let needle = other.map(comparable_string).unwrap_or_default();
            let count =
                verifier.count(parsed.collection, column, &needle, None, None, &parsed.extra);
            Ok(count >= 1)
        }
    }
}

// ─── Format family ──────────────────────────────────────────────────────────

pub(crate) fn ip(
    _v: &Validator,
    _attribute: &str,
    value: Option<Resolved<'_>>,
    _params: &[String],
) -> Result<bool, ConfigError> {
    Ok(value
        .and_then(string_value)
        .is_some_and(|s| IpAddr::from_str(s).is_ok()))
}

pub(crate) fn ipv4(
    _v: &Validator,
    _attribute: &str,
    value: Option<Resolved<'_>>,
    _params: &[String],
) -> Result<bool, ConfigError> {
    Ok(value
        .and_then(string_value)
        .is_some_and(|s| Ipv4Addr::from_str(s).is_ok()))
}

pub(crate) fn ipv6(
    _v: &Validator,
    _attribute: &str,
    value: Option<Resolved<'_>>,
    _params: &[String],
) -> Result<bool, ConfigError> {
    Ok(value
        .and_then(string_value)
        .is_some_and(|s| Ipv6Addr::from_str(s).is_ok()))
}

pub(crate) fn email(
    _v: &Validator,
    _attribute: &str,
    value: Option<Resolved<'_>>,
    _params: &[String],
) -> Result<bool, ConfigError> {
    Ok(value
        .and_then(string_value)
        .is_some_and(|s| EMAIL_RE.is_match(s)))
}

pub(crate) fn url(
    _v: &Validator,
    _attribute: &str,
    value: Option<Resolved<'_>>,
    _params: &[String],
) -> Result<bool, ConfigError> {
    Ok(value
        .and_then(string_value)
        .is_some_and(|s| URL_RE.is_match(s)))
}

/// Host portion of a URL-ish string: scheme stripped, cut at the first
/// path separator, port removed.
fn url_host(raw: &str) -> Option<&str> {
    let rest = match raw.find("://") {
        Some(pos) => &raw[pos + 3..],
        None => raw,
    };
    let host = rest.split(['/', '?', '#']).next()?;
    let host = host.rsplit_once('@').map_or(host, |(_, h)| h);
    let host = host.split(':').next().unwrap_or(host);
    if host.is_empty() { None } else { Some(host) }
}

/// Blocking DNS resolution of the URL host. Name resolution failure means
/// the rule fails; it is not a configuration error.
pub(crate) fn active_url(
    _v: &Validator,
    _attribute: &str,
    value: Option<Resolved<'_>>,
    _params: &[String],
) -> Result<bool, ConfigError> {
    let Some(host) = value.and_then(string_value).and_then(url_host) else {
        return Ok(false);
    };
    Ok((host, 0u16)
        .to_socket_addrs()
        .map(|mut addrs| addrs.next().is_some())
        .unwrap_or(false))
}

pub(crate) fn alpha(
    _v: &Validator,
    _attribute: &str,
    value: Option<Resolved<'_>>,
    _params: &[String],
) -> Result<bool, ConfigError> {
    Ok(value
        .and_then(string_value)
        .is_some_and(|s| !s.is_empty() && s.chars().all(char::is_alphabetic)))
}

pub(crate) fn alpha_num(
    _v: &Validator,
    _attribute: &str,
    value: Option<Resolved<'_>>,
    _params: &[String],
) -> Result<bool, ConfigError> {
    Ok(value
        .and_then(string_value)
        .is_some_and(|s| !s.is_empty() && s.chars().all(char::is_alphanumeric)))
}

pub(crate) fn alpha_dash(
    _v: &Validator,
    _attribute: &str,
    value: Option<Resolved<'_>>,
    _params: &[String],
) -> Result<bool, ConfigError> {
    Ok(value.and_then(string_value).is_some_and(|s| {
        !s.is_empty()
            && s.chars()
                .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    }))
}

/// Strip PCRE-style delimiters (`/pattern/flags`) and map the `i` flag to
/// an inline `(?i)`. Undelimited patterns pass through unchanged.
fn convert_regex_pattern(raw: &str) -> String {
    if let Some(rest) = raw.strip_prefix('/')
        && let Some(close) = rest.rfind('/')
    {
        let (pattern, flags) = rest.split_at(close);
        let flags = &flags[1..];
        if flags.contains('i') {
            return format!("(?i){pattern}");
        }
        return pattern.to_string();
    }
    raw.to_string()
}

pub(crate) fn regex(
    _v: &Validator,
    _attribute: &str,
    value: Option<Resolved<'_>>,
    params: &[String],
) -> Result<bool, ConfigError> {
    require_params("regex", 1, params)?;
    let pattern = convert_regex_pattern(&params[0]);
    let re = Regex::new(&pattern)
        .map_err(|e| ConfigError::invalid_parameter("regex", &format!("invalid pattern: {e}")))?;
    Ok(value.and_then(string_value).is_some_and(|s| re.is_match(s)))
}

// ─── File family ────────────────────────────────────────────────────────────

fn file_has_extension(value: Option<Resolved<'_>>, allowed: &[impl AsRef<str>]) -> bool {
    let Some(file) = value.and_then(|r| r.as_file()) else {
        return false;
    };
    if !file.is_valid() {
        return false;
    }
    file.extension().is_some_and(|ext| {
        let ext = ext.to_ascii_lowercase();
        allowed.iter().any(|a| a.as_ref().eq_ignore_ascii_case(&ext))
    })
}

pub(crate) fn image(
    _v: &Validator,
    _attribute: &str,
    value: Option<Resolved<'_>>,
    _params: &[String],
) -> Result<bool, ConfigError> {
    Ok(file_has_extension(value, IMAGE_EXTENSIONS))
}

pub(crate) fn mimes(
    _v: &Validator,
    _attribute: &str,
    value: Option<Resolved<'_>>,
    params: &[String],
) -> Result<bool, ConfigError> {
    require_params("mimes", 1, params)?;
    Ok(file_has_extension(value, params))
}

// ─── Date family ────────────────────────────────────────────────────────────

/// Free-form date parsing: RFC 3339 first, then the common layouts.
fn parse_date_freeform(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_utc());
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(dt);
        }
    }
    for fmt in ["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(text, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Parse with an explicit strftime format, trying datetime, date-only, and
/// time-only interpretations of the format.
fn parse_date_with_format(text: &str, format: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
        return Some(dt);
    }
    if let Ok(d) = NaiveDate::parse_from_str(text, format) {
        return d.and_hms_opt(0, 0, 0);
    }
    if let Ok(t) = NaiveTime::parse_from_str(text, format) {
        return NaiveDate::from_ymd_opt(1970, 1, 1).map(|d| d.and_time(t));
    }
    None
}

fn parse_attribute_date(v: &Validator, attribute: &str, text: &str) -> Option<NaiveDateTime> {
    match v.declared_date_format(attribute) {
        Some(format) => parse_date_with_format(text, &format),
        None => parse_date_freeform(text),
    }
}

/// The comparison operand of `before`/`after`: a literal date string, or —
/// when not parseable as a date — another attribute's value.
fn date_operand(v: &Validator, attribute: &str, param: &str) -> Option<NaiveDateTime> {
    if let Some(dt) = parse_attribute_date(v, attribute, param) {
        return Some(dt);
    }
    let other = v.value_of(param)?.as_value()?.as_str()?.to_string();
    parse_attribute_date(v, attribute, &other)
}

pub(crate) fn date(
    _v: &Validator,
    _attribute: &str,
    value: Option<Resolved<'_>>,
    _params: &[String],
) -> Result<bool, ConfigError> {
    Ok(value
        .and_then(string_value)
        .is_some_and(|s| parse_date_freeform(s).is_some()))
}

pub(crate) fn date_format(
    _v: &Validator,
    _attribute: &str,
    value: Option<Resolved<'_>>,
    params: &[String],
) -> Result<bool, ConfigError> {
    require_params("date_format", 1, params)?;
    Ok(value
        .and_then(string_value)
        .is_some_and(|s| parse_date_with_format(s, &params[0]).is_some()))
}

pub(crate) fn before(
    v: &Validator,
    attribute: &str,
    value: Option<Resolved<'_>>,
    params: &[String],
) -> Result<bool, ConfigError> {
    require_params("before", 1, params)?;
    let Some(own) = value
        .and_then(string_value)
        .and_then(|s| parse_attribute_date(v, attribute, s))
    else {
        return Ok(false);
    };
    Ok(date_operand(v, attribute, &params[0]).is_some_and(|operand| own < operand))
}

pub(crate) fn after(
    v: &Validator,
    attribute: &str,
    value: Option<Resolved<'_>>,
    params: &[String],
) -> Result<bool, ConfigError> {
    require_params("after", 1, params)?;
    let Some(own) = value
        .and_then(string_value)
        .and_then(|s| parse_attribute_date(v, attribute, s))
    else {
        return Ok(false);
    };
    Ok(date_operand(v, attribute, &params[0]).is_some_and(|operand| own > operand))
}

pub(crate) fn timezone(
    _v: &Validator,
    _attribute: &str,
    value: Option<Resolved<'_>>,
    _params: &[String],
) -> Result<bool, ConfigError> {
    Ok(value
        .and_then(string_value)
        .is_some_and(|s| s.parse::<chrono_tz::Tz>().is_ok()))
}
