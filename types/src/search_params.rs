//! Query-string parameters as produced by the URL parser.

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// A single query-string value.
///
/// `?q=x` yields `Text`, a repeated key (`?q=a&q=b`) yields `List`, and a
/// bare key with no value (`?draft`) yields `Absent`. `Absent` serializes
/// as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    Text(String),
    List(Vec<String>),
    Absent,
}

impl QueryValue {
    /// Folds another occurrence of the same key into this value.
    ///
    /// A previously bare key contributes an empty string to the list, the
    /// same way Node's `querystring` reports valueless keys.
    #[must_use]
    fn merged_with(self, next: String) -> Self {
        match self {
            Self::Text(prev) => Self::List(vec![prev, next]),
            Self::List(mut items) => {
                items.push(next);
                Self::List(items)
            }
            Self::Absent => Self::List(vec![String::new(), next]),
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::List(_) | Self::Absent => None,
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

/// The query parameters parsed from one request URL.
///
/// Insertion order matches first appearance in the query string. Immutable
/// once handed to the bridge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawSearchParams(IndexMap<String, QueryValue>);

impl RawSearchParams {
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Decodes a percent-encoded query string (with or without a leading
    /// `?`) into ordered search params. Repeated keys collapse into lists;
    /// keys without a value become [`QueryValue::Absent`].
    #[must_use]
    pub fn parse_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut map: IndexMap<String, QueryValue> = IndexMap::new();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let value = value.into_owned();
            match map.entry(key.into_owned()) {
                Entry::Occupied(mut entry) => {
                    let merged = entry.get().clone().merged_with(value);
                    entry.insert(merged);
                }
                Entry::Vacant(entry) => {
                    if value.is_empty() {
                        entry.insert(QueryValue::Absent);
                    } else {
                        entry.insert(QueryValue::Text(value));
                    }
                }
            }
        }
        Self(map)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        self.0.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, QueryValue)> for RawSearchParams {
    fn from_iter<I: IntoIterator<Item = (String, QueryValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::{QueryValue, RawSearchParams};

    #[test]
    fn parses_simple_pairs_in_order() {
        let parsed = RawSearchParams::parse_query("?b=2&a=1");
        let keys: Vec<&str> = parsed.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["b", "a"]);
        assert_eq!(parsed.get("a"), Some(&QueryValue::from("1")));
    }

    #[test]
    fn repeated_keys_collapse_into_lists() {
        let parsed = RawSearchParams::parse_query("q=a&q=b&q=c");
        assert_eq!(
            parsed.get("q"),
            Some(&QueryValue::List(vec![
                "a".to_string(),
                "b".to_string(),
                "c".to_string()
            ]))
        );
    }

    #[test]
    fn bare_keys_are_absent() {
        let parsed = RawSearchParams::parse_query("draft&q=x");
        assert_eq!(parsed.get("draft"), Some(&QueryValue::Absent));
        assert_eq!(parsed.get("q"), Some(&QueryValue::from("x")));
    }

    #[test]
    fn bare_key_then_value_keeps_both_occurrences() {
        let parsed = RawSearchParams::parse_query("a&a=1");
        assert_eq!(
            parsed.get("a"),
            Some(&QueryValue::List(vec![String::new(), "1".to_string()]))
        );
    }

    #[test]
    fn percent_decoding_applies_to_keys_and_values() {
        let parsed = RawSearchParams::parse_query("na%20me=v%26al");
        assert_eq!(parsed.get("na me"), Some(&QueryValue::from("v&al")));
    }

    #[test]
    fn absent_serializes_as_null() {
        let parsed = RawSearchParams::parse_query("draft");
        let json = serde_json::to_value(&parsed).expect("serializable");
        assert_eq!(json, serde_json::json!({ "draft": null }));
    }
}
