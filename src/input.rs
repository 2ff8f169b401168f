//! Input record model and attribute resolution.
//!
//! The input record is split at construction into two parallel containers:
//! ordinary `data` (a JSON value tree) and `files` (uploads). Whether an
//! entry is a file is a type check on the [`Input`] variant, never a guess
//! from the value's shape.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An upload-like value carried alongside ordinary data.
///
/// `tmp_path` is the temporary location the transfer landed at; an empty
/// string means nothing was actually uploaded. `error` marks a transfer
/// that started but failed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileUpload {
    /// Client-supplied file name; extension checks read this.
    pub name: String,
    /// Temporary location marker. Empty when no file arrived.
    pub tmp_path: String,
    /// Size in bytes.
    pub size: u64,
    /// True when the transfer failed.
    #[serde(default)]
    pub error: bool,
}

impl FileUpload {
    pub fn new(
        name: impl Into<String>,
        tmp_path: impl Into<String>,
        size: u64,
    ) -> Self {
        FileUpload {
            name: name.into(),
            tmp_path: tmp_path.into(),
            size,
            error: false,
        }
    }

    /// Whether anything was actually transferred.
    pub fn is_uploaded(&self) -> bool {
        !self.tmp_path.is_empty()
    }

    /// Uploaded and error-free.
    pub fn is_valid(&self) -> bool {
        self.is_uploaded() && !self.error
    }

    /// Extension from the client file name, lowercased at the call sites.
    pub fn extension(&self) -> Option<&str> {
        self.name.rsplit_once('.').map(|(_, ext)| ext)
    }

    /// Size in kilobytes, fractional.
    pub fn size_kilobytes(&self) -> f64 {
        self.size as f64 / 1024.0
    }
}

/// One entry of the input record: structured data or an uploaded file.
#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    Value(Value),
    File(FileUpload),
}

impl From<Value> for Input {
    fn from(value: Value) -> Self {
        Input::Value(value)
    }
}

impl From<FileUpload> for Input {
    fn from(file: FileUpload) -> Self {
        Input::File(file)
    }
}

/// A value found by attribute resolution, in either container.
#[derive(Clone, Copy, Debug)]
pub enum Resolved<'a> {
    Value(&'a Value),
    File(&'a FileUpload),
}

impl<'a> Resolved<'a> {
    pub fn as_value(&self) -> Option<&'a Value> {
        match self {
            Resolved::Value(v) => Some(v),
            Resolved::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&'a FileUpload> {
        match self {
            Resolved::File(f) => Some(f),
            Resolved::Value(_) => None,
        }
    }
}

/// Split an input record into its data and file containers.
pub(crate) fn split_input<I>(input: I) -> (Map<String, Value>, IndexMap<String, FileUpload>)
where
    I: IntoIterator<Item = (String, Input)>,
{
    let mut data = Map::new();
    let mut files = IndexMap::new();
    for (key, entry) in input {
        match entry {
            Input::Value(v) => {
                data.insert(key, v);
            }
            Input::File(f) => {
                files.insert(key, f);
            }
        }
    }
    (data, files)
}

/// Resolve a dotted path against the data container.
///
/// A verbatim top-level key wins before any dot splitting, so literal keys
/// containing dots short-circuit. Otherwise descend segment by segment
/// through objects (by key) and arrays (by numeric index). All-or-nothing:
/// any missing segment yields `None`.
pub(crate) fn resolve_in_data<'a>(data: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    if let Some(v) = data.get(path) {
        return Some(v);
    }
    let (head, rest) = path.split_once('.')?;
    let mut current = data.get(head)?;
    for segment in rest.split('.') {
        current = descend(current, segment)?;
    }
    Some(current)
}

fn descend<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

/// Dot-flatten the data container into its leaf keys.
///
/// Empty containers contribute their own key, so `{"a": {}}` yields `["a"]`
/// and `{"a": {"b": 1}}` yields `["a.b"]`.
pub(crate) fn dot_flatten(data: &Map<String, Value>) -> Vec<String> {
    let mut keys = Vec::new();
    for (key, value) in data {
        flatten_into(key, value, &mut keys);
    }
    keys
}

fn flatten_into(prefix: &str, value: &Value, keys: &mut Vec<String>) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (k, v) in map {
                flatten_into(&format!("{prefix}.{k}"), v, keys);
            }
        }
        Value::Array(items) if !items.is_empty() => {
            for (i, v) in items.iter().enumerate() {
                flatten_into(&format!("{prefix}.{i}"), v, keys);
            }
        }
        _ => keys.push(prefix.to_string()),
    }
}
