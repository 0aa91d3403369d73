//! Ordered query-string codec for the navigable address.
//!
//! # Design
//! - Preserve the order and values of parameters this crate does not own.
//! - Decode leniently: broken escapes keep their raw text instead of failing.

use serde::Serialize;

/// Decoded `(key, value)` pairs in address order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryPairs(Vec<(String, String)>);

impl QueryPairs {
    /// Parse a raw query string, with or without the leading `?`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let pairs = raw
            .split('&')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
                (decode_component(key), decode_component(value))
            })
            .collect();
        Self(pairs)
    }

    /// First value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    /// Replace the first value under `key` in place, or append a new pair.
    ///
    /// Later duplicates of `key` are dropped so reads stay unambiguous.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.0.iter().position(|(existing, _)| existing == key) {
            Some(index) => {
                self.0[index].1 = value;
                let mut seen = 0usize;
                self.0.retain(|(existing, _)| {
                    if existing != key {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.0.push((key.to_string(), value)),
        }
    }

    /// Encode back into `a=b&c=d` form (no leading `?`).
    ///
    /// Uses the form encoding `Navigator::replace_with_query` applies to the same pairs, so
    /// spaces become `+` and bare flags gain a trailing `=`.
    ///
    /// # Errors
    ///
    /// Returns the serializer error; string pairs always encode in practice.
    pub fn to_query_string(&self) -> Result<String, serde_urlencoded::ser::Error> {
        serde_urlencoded::to_string(self)
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    let decoded = urlencoding::decode(&spaced).map(std::borrow::Cow::into_owned);
    decoded.unwrap_or(spaced)
}
