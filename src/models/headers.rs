//! Response header map
//!
//! Header names are stored lower-cased. Values are either text or a JSON
//! number, since HTTP client layers commonly hand numeric headers through
//! already converted. Other JSON values (booleans, `set-cookie` arrays) are
//! dropped when a header map is deserialized.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::truthy;

/// A single header value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HeaderValue {
    /// Textual value, as sent on the wire
    Text(String),
    /// Numeric value, as pre-converted by a client layer
    Number(serde_json::Number),
}

impl HeaderValue {
    /// Render the value as text (numbers use their decimal form)
    #[must_use]
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text),
            Self::Number(number) => Cow::Owned(number.to_string()),
        }
    }

    /// Non-empty text or a non-zero number
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Text(text) => !text.is_empty(),
            Self::Number(number) => truthy::number_is_truthy(number),
        }
    }

    /// Parse the value as a base-10 integer prefix
    #[must_use]
    pub fn parse_int(&self) -> Option<i64> {
        truthy::parse_int(&self.as_text())
    }

    /// Convert a JSON header value; only strings and numbers are kept
    ///
    /// `null`, booleans, arrays (e.g. `set-cookie`) and objects yield `None`.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) => Some(Self::Text(text.clone())),
            Value::Number(number) => Some(Self::Number(number.clone())),
            _ => None,
        }
    }
}

impl std::fmt::Display for HeaderValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<&str> for HeaderValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for HeaderValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for HeaderValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<i32> for HeaderValue {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<u64> for HeaderValue {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

/// Header map keyed by lower-case header name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Headers(BTreeMap<String, HeaderValue>);

impl Headers {
    /// Create an empty header map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a header, lower-casing its name. Returns the previous value.
    pub fn insert(&mut self, name: &str, value: impl Into<HeaderValue>) -> Option<HeaderValue> {
        self.0.insert(name.to_ascii_lowercase(), value.into())
    }

    /// Look up a header by name (case-insensitive)
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&HeaderValue> {
        self.0.get(&name.to_ascii_lowercase())
    }

    /// Number of headers
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no headers
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(name, value)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HeaderValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<K: AsRef<str>, V: Into<HeaderValue>> FromIterator<(K, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.insert(name.as_ref(), value);
        }
        headers
    }
}

impl<'de> Deserialize<'de> for Headers {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;

        // An exact lower-case name owns its slot, even when its value is unusable
        let exact: BTreeSet<&str> = raw
            .keys()
            .map(String::as_str)
            .filter(|name| !name.bytes().any(|byte| byte.is_ascii_uppercase()))
            .collect();

        let mut headers = Self::new();
        for (name, value) in &raw {
            let lowered = name.to_ascii_lowercase();
            let shadowed = lowered != *name
                && (exact.contains(lowered.as_str()) || headers.0.contains_key(&lowered));
            if shadowed {
                continue;
            }
            if let Some(value) = HeaderValue::from_json(value) {
                headers.0.insert(lowered, value);
            }
        }
        Ok(headers)
    }
}
