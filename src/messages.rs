//! The message bag: formatted validation failures, per attribute key.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Default output template: the bare message text.
pub const DEFAULT_FORMAT: &str = ":message";

/// An ordered multimap from attribute key to formatted message strings.
///
/// Messages are insertion-ordered and de-duplicated per key by exact string
/// match. Counting is at the leaf-message level, not the key level.
#[derive(Clone, Debug, Serialize)]
pub struct MessageBag {
    #[serde(flatten)]
    messages: IndexMap<String, Vec<String>>,
    #[serde(skip)]
    format: String,
}

impl Default for MessageBag {
    fn default() -> Self {
        MessageBag::new()
    }
}

impl MessageBag {
    pub fn new() -> Self {
        MessageBag {
            messages: IndexMap::new(),
            format: DEFAULT_FORMAT.to_string(),
        }
    }

    /// Append a message under a key, unless that exact string is already
    /// recorded for it.
    pub fn add(&mut self, key: impl Into<String>, message: impl Into<String>) {
        let key = key.into();
        let message = message.into();
        let entry = self.messages.entry(key).or_default();
        if !entry.contains(&message) {
            entry.push(message);
        }
    }

    /// Merge another bag in, combining per-key lists and de-duplicating.
    pub fn merge(&mut self, other: &MessageBag) {
        for (key, messages) in &other.messages {
            for message in messages {
                self.add(key.clone(), message.clone());
            }
        }
    }

    /// Whether any messages exist for the key.
    pub fn has(&self, key: &str) -> bool {
        self.messages.get(key).is_some_and(|m| !m.is_empty())
    }

    /// Whether any messages exist at all.
    pub fn any(&self) -> bool {
        !self.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.values().all(|m| m.is_empty())
    }

    /// Leaf message count across all keys.
    pub fn count(&self) -> usize {
        self.messages.values().map(Vec::len).sum()
    }

    /// First message for the key (or the first message overall when `key`
    /// is `None`), run through the instance format.
    pub fn first(&self, key: Option<&str>) -> Option<String> {
        self.first_with_format(key, &self.format)
    }

    /// As [`first`](Self::first), with a per-call format override.
    pub fn first_with_format(&self, key: Option<&str>, format: &str) -> Option<String> {
        match key {
            Some(key) => self.get_with_format(key, format).into_iter().next(),
            None => {
                let (key, messages) = self.messages.iter().find(|(_, m)| !m.is_empty())?;
                messages.first().map(|m| transform(m, key, format))
            }
        }
    }

    /// All messages for a key, formatted with the instance format.
    pub fn get(&self, key: &str) -> Vec<String> {
        self.get_with_format(key, &self.format)
    }

    pub fn get_with_format(&self, key: &str, format: &str) -> Vec<String> {
        match self.messages.get(key) {
            Some(messages) => messages.iter().map(|m| transform(m, key, format)).collect(),
            None => Vec::new(),
        }
    }

    /// Every message in the bag, formatted with the instance format.
    pub fn all(&self) -> Vec<String> {
        self.all_with_format(&self.format)
    }

    pub fn all_with_format(&self, format: &str) -> Vec<String> {
        self.messages
            .iter()
            .flat_map(|(key, messages)| messages.iter().map(move |m| transform(m, key, format)))
            .collect()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    /// The raw key → messages map, unformatted.
    pub fn messages(&self) -> &IndexMap<String, Vec<String>> {
        &self.messages
    }

    /// Instance default output template, applied by `first`/`get`/`all`.
    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn set_format(&mut self, format: impl Into<String>) {
        self.format = format.into();
    }

    /// Structured export for diagnostics.
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Substitute `:message` and `:key` into an output template.
fn transform(message: &str, key: &str, format: &str) -> String {
    format.replace(":message", message).replace(":key", key)
}
