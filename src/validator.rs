//! The validation engine.
//!
//! A `Validator` is built once per evaluation: construct with data and
//! rules, optionally register extensions, replacers, custom messages and a
//! presence verifier, then read `passes()`/`fails()`/`messages()`. The
//! first result-bearing call runs the full rule pass and memoizes the
//! outcome; later calls replay it without re-running rules.

use crate::checks;
use crate::error::ConfigError;
use crate::input::{self, FileUpload, Input, Resolved};
use crate::messages::MessageBag;
use crate::registry;
use crate::rules::{self, Rule, RuleSet};
use crate::translate::{MemoryTranslator, Translator};
use crate::verify::PresenceVerifier;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// A user-registered check. Same shape as a built-in, but infallible:
/// extensions report pass/fail only.
pub type ExtensionFn = Box<dyn Fn(&Validator, &str, Option<Resolved<'_>>, &[String]) -> bool>;

/// A user-registered placeholder replacer: `(message, attribute, rule,
/// params) -> message`.
pub type ReplacerFn = Box<dyn Fn(&str, &str, &str, &[String]) -> String>;

type AfterHook = Box<dyn Fn(&mut Validator)>;

/// Attribute → rule name → parameters, for every failed check.
pub type FailedRules = IndexMap<String, IndexMap<String, Vec<String>>>;

enum Outcome {
    Pending,
    Done,
    Broken(ConfigError),
}

pub struct Validator {
    data: Map<String, Value>,
    files: IndexMap<String, FileUpload>,
    rules: RuleSet,
    translator: Box<dyn Translator>,
    verifier: Option<Box<dyn PresenceVerifier>>,
    pub(crate) custom_messages: HashMap<String, String>,
    pub(crate) fallback_messages: HashMap<String, String>,
    pub(crate) custom_attributes: HashMap<String, String>,
    pub(crate) custom_values: HashMap<String, HashMap<String, String>>,
    extensions: HashMap<String, ExtensionFn>,
    pub(crate) replacers: HashMap<String, ReplacerFn>,
    after_hooks: Vec<AfterHook>,
    bag: MessageBag,
    failed: FailedRules,
    outcome: Outcome,
}

impl Validator {
    /// Build a validator from an ordered input record and an attribute →
    /// rule-expression mapping. File entries are split out of the data
    /// container during this normalization.
    pub fn new<I, R, K, V>(input: I, rule_spec: R) -> Self
    where
        I: IntoIterator<Item = (String, Input)>,
        R: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let (data, files) = input::split_input(input);
        Validator {
            data,
            files,
            rules: rules::parse_rule_set(rule_spec),
            translator: Box::new(MemoryTranslator::with_defaults()),
            verifier: None,
            custom_messages: HashMap::new(),
            fallback_messages: HashMap::new(),
            custom_attributes: HashMap::new(),
            custom_values: HashMap::new(),
            extensions: HashMap::new(),
            replacers: HashMap::new(),
            after_hooks: Vec::new(),
            bag: MessageBag::new(),
            failed: FailedRules::new(),
            outcome: Outcome::Pending,
        }
    }

    /// Convenience constructor for records with no uploads: the top-level
    /// entries of a JSON object become the input record.
    pub fn from_json<R, K, V>(data: Value, rule_spec: R) -> Result<Self, ConfigError>
    where
        R: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        match data {
            Value::Object(map) => Ok(Validator::new(
                map.into_iter().map(|(k, v)| (k, Input::Value(v))),
                rule_spec,
            )),
            _ => Err(ConfigError::invalid_input(
                "input record must be a JSON object",
            )),
        }
    }

    // ─── Setup ──────────────────────────────────────────────────────────────

    pub fn set_data<I>(&mut self, input: I) -> &mut Self
    where
        I: IntoIterator<Item = (String, Input)>,
    {
        let (data, files) = input::split_input(input);
        self.data = data;
        self.files = files;
        self.reset();
        self
    }

    pub fn set_rules<R, K, V>(&mut self, rule_spec: R) -> &mut Self
    where
        R: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        self.rules = rules::parse_rule_set(rule_spec);
        self.reset();
        self
    }

    /// Append rules for one attribute, parsed from a pipe-delimited
    /// expression.
    pub fn merge_rules(&mut self, attribute: impl Into<String>, expression: &str) -> &mut Self {
        rules::merge_into(
            &mut self.rules,
            attribute.into(),
            rules::parse_rule_expression(expression),
        );
        self.reset();
        self
    }

    /// Append a single pre-built rule for an attribute.
    pub fn merge_rule(&mut self, attribute: impl Into<String>, rule: Rule) -> &mut Self {
        rules::merge_into(&mut self.rules, attribute.into(), vec![rule]);
        self.reset();
        self
    }

    /// Fan a rule expression out to every element of an array attribute:
    /// `each("tags", "min:2")` merges `min:2` under `tags.0`, `tags.1`, …
    ///
    /// The attribute must already hold an array (or map) value. If it does
    /// not but carries an `array` rule, the call is silently accepted — the
    /// `array` rule will report the failure. Otherwise this is a
    /// configuration error.
    pub fn each(&mut self, attribute: &str, expressions: &[&str]) -> Result<(), ConfigError> {
        let element_keys: Option<Vec<String>> = match self.value_of(attribute) {
            Some(Resolved::Value(Value::Array(items))) => {
                Some((0..items.len()).map(|i| i.to_string()).collect())
            }
            Some(Resolved::Value(Value::Object(map))) => {
                Some(map.keys().cloned().collect())
            }
            _ => None,
        };
        let Some(element_keys) = element_keys else {
            if self.has_rule(attribute, &["array"]) {
                return Ok(());
            }
            return Err(ConfigError::not_an_array(attribute));
        };
        for key in &element_keys {
            for expression in expressions {
                self.merge_rules(format!("{attribute}.{key}"), expression);
            }
        }
        Ok(())
    }

    /// Conditionally merge extra rules: the predicate is evaluated once
    /// against the combined data + files view, and the rules are merged
    /// only when it returns true.
    pub fn sometimes<F>(&mut self, attribute: &str, expression: &str, condition: F) -> &mut Self
    where
        F: Fn(&Value) -> bool,
    {
        let payload = self.merged_payload();
        if condition(&payload) {
            self.merge_rules(attribute, expression);
        }
        self
    }

    /// Register a check for a rule name no built-in covers. Colliding with
    /// a built-in or an earlier extension is a configuration error.
    pub fn add_extension<F>(&mut self, name: &str, check: F) -> Result<(), ConfigError>
    where
        F: Fn(&Validator, &str, Option<Resolved<'_>>, &[String]) -> bool + 'static,
    {
        let name = rules::normalize_rule_name(name);
        if registry::is_builtin(&name) || self.extensions.contains_key(&name) {
            return Err(ConfigError::duplicate_rule(&name));
        }
        self.extensions.insert(name, Box::new(check));
        Ok(())
    }

    /// Register a placeholder replacer for a rule. Takes precedence over
    /// the built-in replacer table for that rule.
    pub fn add_replacer<F>(&mut self, rule: &str, replacer: F) -> &mut Self
    where
        F: Fn(&str, &str, &str, &[String]) -> String + 'static,
    {
        self.replacers
            .insert(rules::normalize_rule_name(rule), Box::new(replacer));
        self
    }

    /// Register a hook that runs after the rule pass, whether or not any
    /// rule already failed. Hooks may append further failures via
    /// [`add_failure`](Self::add_failure).
    pub fn after<F>(&mut self, hook: F) -> &mut Self
    where
        F: Fn(&mut Validator) + 'static,
    {
        self.after_hooks.push(Box::new(hook));
        self
    }

    pub fn set_translator(&mut self, translator: impl Translator + 'static) -> &mut Self {
        self.translator = Box::new(translator);
        self
    }

    pub fn set_presence_verifier(
        &mut self,
        verifier: impl PresenceVerifier + 'static,
    ) -> &mut Self {
        self.verifier = Some(Box::new(verifier));
        self
    }

    /// Inline custom messages, keyed `"attribute.rule"` or bare `"rule"`.
    pub fn set_custom_messages<I, K, V>(&mut self, messages: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.custom_messages
            .extend(messages.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Last-resort messages for extension rules, keyed by rule name.
    pub fn set_fallback_messages<I, K, V>(&mut self, messages: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.fallback_messages.extend(
            messages
                .into_iter()
                .map(|(k, v)| (rules::normalize_rule_name(&k.into()), v.into())),
        );
        self
    }

    /// Displayable attribute-name overrides.
    pub fn set_attribute_names<I, K, V>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.custom_attributes
            .extend(names.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Displayable value overrides, per attribute/value pair.
    pub fn set_value_names<I, K, A, B>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, Vec<(A, B)>)>,
        K: Into<String>,
        A: Into<String>,
        B: Into<String>,
    {
        for (attribute, pairs) in names {
            let entry = self.custom_values.entry(attribute.into()).or_default();
            entry.extend(pairs.into_iter().map(|(a, b)| (a.into(), b.into())));
        }
        self
    }

    // ─── Results ────────────────────────────────────────────────────────────

    /// Run the full pass (once) and report whether everything passed.
    pub fn passes(&mut self) -> Result<bool, ConfigError> {
        self.ensure_evaluated()?;
        Ok(self.bag.is_empty())
    }

    pub fn fails(&mut self) -> Result<bool, ConfigError> {
        Ok(!self.passes()?)
    }

    /// The message bag for the (memoized) pass.
    pub fn messages(&mut self) -> Result<&MessageBag, ConfigError> {
        self.ensure_evaluated()?;
        Ok(&self.bag)
    }

    /// Alias of [`messages`](Self::messages).
    pub fn errors(&mut self) -> Result<&MessageBag, ConfigError> {
        self.messages()
    }

    /// Attribute → rule → parameters for every failed check.
    pub fn failed(&mut self) -> Result<&FailedRules, ConfigError> {
        self.ensure_evaluated()?;
        Ok(&self.failed)
    }

    /// Top-level input entries whose attributes carry no failures.
    pub fn valid(&mut self) -> Result<Map<String, Value>, ConfigError> {
        self.ensure_evaluated()?;
        Ok(self.partition_payload(false))
    }

    /// Top-level input entries with at least one failure.
    pub fn invalid(&mut self) -> Result<Map<String, Value>, ConfigError> {
        self.ensure_evaluated()?;
        Ok(self.partition_payload(true))
    }

    /// Clear the memoized outcome so a mutated instance can be re-run.
    pub fn revalidate(&mut self) -> &mut Self {
        self.reset();
        self
    }

    // ─── Introspection ──────────────────────────────────────────────────────

    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    pub fn files(&self) -> &IndexMap<String, FileUpload> {
        &self.files
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Whether the attribute carries any of the named rules.
    pub fn has_rule(&self, attribute: &str, names: &[impl AsRef<str>]) -> bool {
        self.rules
            .get(attribute)
            .is_some_and(|rules| {
                rules
                    .iter()
                    .any(|r| names.iter().any(|n| n.as_ref() == r.name))
            })
    }

    /// Resolve an attribute path: data first, then files.
    pub fn value_of(&self, attribute: &str) -> Option<Resolved<'_>> {
        if let Some(v) = input::resolve_in_data(&self.data, attribute) {
            return Some(Resolved::Value(v));
        }
        self.files.get(attribute).map(Resolved::File)
    }

    /// Whether the attribute key is actually present in the flattened data
    /// or files, as opposed to merely resolvable.
    pub fn has_attribute(&self, attribute: &str) -> bool {
        self.data.contains_key(attribute)
            || self.files.contains_key(attribute)
            || input::dot_flatten(&self.data).iter().any(|k| k == attribute)
    }

    pub(crate) fn presence_verifier(&self) -> Option<&dyn PresenceVerifier> {
        self.verifier.as_deref()
    }

    pub(crate) fn translator(&self) -> &dyn Translator {
        self.translator.as_ref()
    }

    /// The format declared by a `date_format` rule on the attribute, if
    /// any. `before`/`after` comparisons honor it.
    pub(crate) fn declared_date_format(&self, attribute: &str) -> Option<String> {
        self.rules.get(attribute)?.iter().find_map(|r| {
            (r.name == "date_format")
                .then(|| r.params.first().cloned())
                .flatten()
        })
    }

    /// Whether the attribute resolves in the files container.
    pub(crate) fn is_file_attribute(&self, attribute: &str) -> bool {
        input::resolve_in_data(&self.data, attribute).is_none()
            && self.files.contains_key(attribute)
    }

    // ─── Evaluation ─────────────────────────────────────────────────────────

    fn reset(&mut self) {
        self.outcome = Outcome::Pending;
        self.bag = MessageBag::new();
        self.failed = FailedRules::new();
    }

    fn ensure_evaluated(&mut self) -> Result<(), ConfigError> {
        if let Outcome::Pending = self.outcome {
            self.outcome = match self.run_rules() {
                Ok(()) => Outcome::Done,
                Err(e) => Outcome::Broken(e),
            };
        }
        match &self.outcome {
            Outcome::Broken(e) => Err(e.clone()),
            _ => Ok(()),
        }
    }

    fn run_rules(&mut self) -> Result<(), ConfigError> {
        // The rule set is frozen for the pass; a snapshot keeps the borrow
        // checker out of the per-rule mutation path.
        let rule_set = self.rules.clone();
        for (attribute, attribute_rules) in &rule_set {
            for rule in attribute_rules {
                self.check_rule(attribute, rule)?;
            }
        }
        let hooks = std::mem::take(&mut self.after_hooks);
        for hook in &hooks {
            hook(self);
        }
        self.after_hooks = hooks;
        Ok(())
    }

    fn check_rule(&mut self, attribute: &str, rule: &Rule) -> Result<(), ConfigError> {
        // `sometimes` gates other rules; on its own it never fails.
        if rule.name == "sometimes" {
            return Ok(());
        }
        let value = self.value_of(attribute);
        if !self.is_validatable(attribute, &rule.name, value) {
            return Ok(());
        }
        let passed = self
            .dispatch(attribute, rule, value)
            .map_err(|e| e.for_attribute(attribute))?;
        if !passed {
            self.add_failure(attribute, &rule.name, &rule.params);
        }
        Ok(())
    }

    /// A rule runs only when the attribute is present per the `required`
    /// definition or the rule is implicit — and, when the attribute is
    /// declared `sometimes`, only when its key actually appears in the
    /// input.
    fn is_validatable(&self, attribute: &str, rule_name: &str, value: Option<Resolved<'_>>) -> bool {
        (checks::has_presence(value) || registry::is_implicit(rule_name))
            && self.passes_optional_check(attribute)
    }

    fn passes_optional_check(&self, attribute: &str) -> bool {
        if !self.has_rule(attribute, &["sometimes"]) {
            return true;
        }
        self.has_attribute(attribute)
    }

    fn dispatch(
        &self,
        attribute: &str,
        rule: &Rule,
        value: Option<Resolved<'_>>,
    ) -> Result<bool, ConfigError> {
        if let Some(check) = registry::lookup_check(&rule.name) {
            return check(self, attribute, value, &rule.params);
        }
        if let Some(extension) = self.extensions.get(&rule.name) {
            return Ok(extension(self, attribute, value, &rule.params));
        }
        Err(ConfigError::unknown_rule(&rule.name, attribute))
    }

    /// Record a failure: resolve its message into the bag and note the
    /// rule in the failed-rules map. Public so after-hooks can append
    /// their own failures.
    pub fn add_failure(&mut self, attribute: &str, rule_name: &str, params: &[String]) {
        let rule = Rule::new(rule_name, params.to_vec());
        let message = self.resolve_message(attribute, &rule);
        let message = self.make_replacements(message, attribute, &rule);
        self.bag.add(attribute, message);
        self.failed
            .entry(attribute.to_string())
            .or_default()
            .insert(rule.name, rule.params);
    }

    /// The combined data + files view handed to `sometimes` predicates.
    fn merged_payload(&self) -> Value {
        let mut payload = self.data.clone();
        for (key, file) in &self.files {
            payload.insert(
                key.clone(),
                serde_json::to_value(file).unwrap_or(Value::Null),
            );
        }
        Value::Object(payload)
    }

    fn partition_payload(&self, failing: bool) -> Map<String, Value> {
        let mut out = Map::new();
        for (key, value) in &self.data {
            if self.key_has_failures(key) == failing {
                out.insert(key.clone(), value.clone());
            }
        }
        for (key, file) in &self.files {
            if self.key_has_failures(key) == failing {
                out.insert(
                    key.clone(),
                    serde_json::to_value(file).unwrap_or(Value::Null),
                );
            }
        }
        out
    }

    /// A top-level key fails when it — or any nested attribute under it —
    /// has a message.
    fn key_has_failures(&self, key: &str) -> bool {
        let prefix = format!("{key}.");
        self.bag
            .keys()
            .any(|k| k == key || k.starts_with(&prefix))
    }
}
