//! Message resolution and placeholder replacement.
//!
//! Resolution chains inline custom messages, catalog lookups (including
//! the size family's type-qualified keys), and extension fallbacks, then
//! substitutes `:attribute` and rule-specific placeholders. The raw
//! catalog key is the last resort, so a resolved message is never blank.

use crate::registry;
use crate::rules::Rule;
use crate::validator::Validator;

impl Validator {
    /// Select the message template for a failed `(attribute, rule)` pair.
    pub(crate) fn resolve_message(&self, attribute: &str, rule: &Rule) -> String {
        // 1. Inline custom message: exact pair first, then bare rule.
        if let Some(custom) = self
            .custom_messages
            .get(&format!("{attribute}.{}", rule.name))
            .or_else(|| self.custom_messages.get(&rule.name))
        {
            return custom.clone();
        }

        // 2. Catalog custom key for the exact pair.
        let custom_key = format!("validation.custom.{attribute}.{}", rule.name);
        if let Some(line) = self.translator().get(&custom_key) {
            return line;
        }

        // 3. Size family: type-qualified catalog key.
        if registry::SIZE_RULES.contains(&rule.name.as_str()) {
            let qualified = format!(
                "validation.{}.{}",
                rule.name,
                self.attribute_type(attribute)
            );
            if let Some(line) = self.translator().get(&qualified) {
                return line;
            }
        }

        // 4. Generic catalog key.
        let generic = format!("validation.{}", rule.name);
        if let Some(line) = self.translator().get(&generic) {
            return line;
        }

        // 5. Fallback registered alongside the extension.
        if let Some(fallback) = self.fallback_messages.get(&rule.name) {
            return fallback.clone();
        }

        // 6. The raw key itself.
        generic
    }

    /// The message-key qualifier for size-family rules. Co-declared rules
    /// win over value inspection: numeric, then array, then file, then
    /// string.
    fn attribute_type(&self, attribute: &str) -> &'static str {
        if self.has_rule(attribute, crate::checks::NUMERIC_RULES) {
            "numeric"
        } else if self.has_rule(attribute, &["array"]) {
            "array"
        } else if self.is_file_attribute(attribute) {
            "file"
        } else {
            "string"
        }
    }

    /// Substitute placeholders into a resolved template.
    pub(crate) fn make_replacements(
        &self,
        message: String,
        attribute: &str,
        rule: &Rule,
    ) -> String {
        let name = self.displayable_attribute(attribute);
        let message = message
            .replace(":ATTRIBUTE", &name.to_uppercase())
            .replace(":Attribute", &ucfirst(&name))
            .replace(":attribute", &name);

        // A custom replacer registered for the rule shadows the built-in.
        if let Some(replacer) = self.replacers.get(&rule.name) {
            return replacer(&message, attribute, &rule.name, &rule.params);
        }
        self.builtin_replacements(message, attribute, rule)
    }

    fn builtin_replacements(&self, message: String, _attribute: &str, rule: &Rule) -> String {
        let param = |i: usize| rule.params.get(i).map(String::as_str).unwrap_or_default();
        match rule.name.as_str() {
            "between" | "digits_between" => message
                .replace(":min", param(0))
                .replace(":max", param(1)),
            "size" => message.replace(":size", param(0)),
            "min" => message.replace(":min", param(0)),
            "max" => message.replace(":max", param(0)),
            "digits" => message.replace(":digits", param(0)),
            "in" | "not_in" | "mimes" => message.replace(":values", &rule.params.join(", ")),
            "required_with" | "required_with_all" | "required_without"
            | "required_without_all" => {
                let names: Vec<String> = rule
                    .params
                    .iter()
                    .map(|p| self.displayable_attribute(p))
                    .collect();
                message.replace(":values", &names.join(" / "))
            }
            "required_if" => message
                .replace(":other", &self.displayable_attribute(param(0)))
                .replace(":value", &self.displayable_value(param(0), param(1))),
            "same" | "different" => {
                message.replace(":other", &self.displayable_attribute(param(0)))
            }
            "before" | "after" => message.replace(":date", param(0)),
            "date_format" => message.replace(":format", param(0)),
            _ => message,
        }
    }

    /// Human-readable attribute name: caller override, then catalog, then
    /// the path with underscores turned into spaces.
    pub(crate) fn displayable_attribute(&self, attribute: &str) -> String {
        if let Some(name) = self.custom_attributes.get(attribute) {
            return name.clone();
        }
        if let Some(name) = self
            .translator()
            .get(&format!("validation.attributes.{attribute}"))
        {
            return name;
        }
        attribute.replace('_', " ")
    }

    /// Human-readable value: caller override, then catalog, then the raw
    /// value.
    pub(crate) fn displayable_value(&self, attribute: &str, value: &str) -> String {
        if let Some(name) = self
            .custom_values
            .get(attribute)
            .and_then(|values| values.get(value))
        {
            return name.clone();
        }
        if let Some(name) = self
            .translator()
            .get(&format!("validation.values.{attribute}.{value}"))
        {
            return name;
        }
        value.to_string()
    }
}

fn ucfirst(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
