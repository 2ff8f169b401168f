//! Message catalogs.
//!
//! The engine never hard-codes user-facing text; it asks a [`Translator`]
//! for catalog lines by key and falls back along the chain described in
//! `format.rs` when a key is missing. [`MemoryTranslator`] is the shipped
//! implementation; localized catalogs are plain `(key, line)` data loaded
//! into one (or any other `Translator` impl the host application provides).

use std::collections::HashMap;

/// Catalog lookup. `None` means "no translation", which the message
/// resolver treats as a signal to continue down its fallback chain.
pub trait Translator {
    fn get(&self, key: &str) -> Option<String>;
}

/// An in-memory key → line catalog.
#[derive(Clone, Debug, Default)]
pub struct MemoryTranslator {
    lines: HashMap<String, String>,
}

impl MemoryTranslator {
    pub fn new() -> Self {
        MemoryTranslator::default()
    }

    /// A catalog preloaded with the built-in English lines.
    pub fn with_defaults() -> Self {
        let mut translator = MemoryTranslator::new();
        for (key, line) in DEFAULT_LINES {
            translator.lines.insert((*key).to_string(), (*line).to_string());
        }
        translator
    }

    pub fn insert(&mut self, key: impl Into<String>, line: impl Into<String>) -> &mut Self {
        self.lines.insert(key.into(), line.into());
        self
    }

    pub fn extend<I, K, V>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, line) in entries {
            self.lines.insert(key.into(), line.into());
        }
        self
    }
}

impl Translator for MemoryTranslator {
    fn get(&self, key: &str) -> Option<String> {
        self.lines.get(key).cloned()
    }
}

/// The default English catalog. Size-family rules carry one line per
/// attribute type; everything else is a single line.
pub static DEFAULT_LINES: &[(&str, &str)] = &[
    ("validation.accepted", "The :attribute must be accepted."),
    ("validation.active_url", "The :attribute is not a valid URL."),
    ("validation.after", "The :attribute must be a date after :date."),
    ("validation.alpha", "The :attribute may only contain letters."),
    (
        "validation.alpha_dash",
        "The :attribute may only contain letters, numbers, dashes and underscores.",
    ),
    (
        "validation.alpha_num",
        "The :attribute may only contain letters and numbers.",
    ),
    ("validation.array", "The :attribute must be an array."),
    ("validation.before", "The :attribute must be a date before :date."),
    (
        "validation.between.numeric",
        "The :attribute must be between :min and :max.",
    ),
    (
        "validation.between.file",
        "The :attribute must be between :min and :max kilobytes.",
    ),
    (
        "validation.between.string",
        "The :attribute must be between :min and :max characters.",
    ),
    (
        "validation.between.array",
        "The :attribute must have between :min and :max items.",
    ),
    ("validation.boolean", "The :attribute field must be true or false."),
    ("validation.confirmed", "The :attribute confirmation does not match."),
    ("validation.date", "The :attribute is not a valid date."),
    (
        "validation.date_format",
        "The :attribute does not match the format :format.",
    ),
    ("validation.different", "The :attribute and :other must be different."),
    ("validation.digits", "The :attribute must be :digits digits."),
    (
        "validation.digits_between",
        "The :attribute must be between :min and :max digits.",
    ),
    ("validation.email", "The :attribute must be a valid email address."),
    ("validation.exists", "The selected :attribute is invalid."),
    ("validation.filled", "The :attribute field is required."),
    ("validation.image", "The :attribute must be an image."),
    ("validation.in", "The selected :attribute is invalid."),
    ("validation.integer", "The :attribute must be an integer."),
    ("validation.ip", "The :attribute must be a valid IP address."),
    ("validation.ip4", "The :attribute must be a valid IPv4 address."),
    ("validation.ip6", "The :attribute must be a valid IPv6 address."),
    ("validation.ipv4", "The :attribute must be a valid IPv4 address."),
    ("validation.ipv6", "The :attribute must be a valid IPv6 address."),
    (
        "validation.max.numeric",
        "The :attribute may not be greater than :max.",
    ),
    (
        "validation.max.file",
        "The :attribute may not be greater than :max kilobytes.",
    ),
    (
        "validation.max.string",
        "The :attribute may not be greater than :max characters.",
    ),
    (
        "validation.max.array",
        "The :attribute may not have more than :max items.",
    ),
    (
        "validation.mimes",
        "The :attribute must be a file of type: :values.",
    ),
    ("validation.min.numeric", "The :attribute must be at least :min."),
    (
        "validation.min.file",
        "The :attribute must be at least :min kilobytes.",
    ),
    (
        "validation.min.string",
        "The :attribute must be at least :min characters.",
    ),
    (
        "validation.min.array",
        "The :attribute must have at least :min items.",
    ),
    ("validation.not_in", "The selected :attribute is invalid."),
    ("validation.numeric", "The :attribute must be a number."),
    ("validation.regex", "The :attribute format is invalid."),
    ("validation.required", "The :attribute field is required."),
    (
        "validation.required_if",
        "The :attribute field is required when :other is :value.",
    ),
    (
        "validation.required_with",
        "The :attribute field is required when :values is present.",
    ),
    (
        "validation.required_with_all",
        "The :attribute field is required when :values is present.",
    ),
    (
        "validation.required_without",
        "The :attribute field is required when :values is not present.",
    ),
    (
        "validation.required_without_all",
        "The :attribute field is required when none of :values are present.",
    ),
    ("validation.same", "The :attribute and :other must match."),
    ("validation.size.numeric", "The :attribute must be :size."),
    ("validation.size.file", "The :attribute must be :size kilobytes."),
    ("validation.size.string", "The :attribute must be :size characters."),
    ("validation.size.array", "The :attribute must contain :size items."),
    ("validation.timezone", "The :attribute must be a valid zone."),
    ("validation.unique", "The :attribute has already been taken."),
    ("validation.url", "The :attribute format is invalid."),
];
