//! Route parameter values as produced by the route matcher.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single route parameter value.
///
/// A dynamic segment (`[id]`) captures one piece of text; a catch-all
/// segment (`[...slug]`) captures a sequence of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Segment(String),
    Segments(Vec<String>),
}

impl ParamValue {
    #[must_use]
    pub fn as_segment(&self) -> Option<&str> {
        match self {
            Self::Segment(value) => Some(value),
            Self::Segments(_) => None,
        }
    }

    #[must_use]
    pub fn as_segments(&self) -> Option<&[String]> {
        match self {
            Self::Segment(_) => None,
            Self::Segments(values) => Some(values),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Segment(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Segment(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        Self::Segments(values)
    }
}

/// The route parameters extracted for one matched page.
///
/// Insertion order is the order the route matcher produced, which follows
/// segment order in the route pattern. Immutable once handed to the bridge;
/// the bridge and adapters only ever clone it into deferred wrappers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawParams(IndexMap<String, ParamValue>);

impl RawParams {
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
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

impl FromIterator<(String, ParamValue)> for RawParams {
    fn from_iter<I: IntoIterator<Item = (String, ParamValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::{ParamValue, RawParams};

    #[test]
    fn preserves_insertion_order() {
        let mut params = RawParams::new();
        params.insert("category", "books");
        params.insert("id", "42");
        params.insert("slug", vec!["a".to_string(), "b".to_string()]);

        let names: Vec<&str> = params.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["category", "id", "slug"]);
    }

    #[test]
    fn serializes_as_plain_object() {
        let mut params = RawParams::new();
        params.insert("id", "42");
        params.insert("slug", vec!["a".to_string(), "b".to_string()]);

        let json = serde_json::to_value(&params).expect("serializable");
        assert_eq!(
            json,
            serde_json::json!({ "id": "42", "slug": ["a", "b"] })
        );
    }

    #[test]
    fn segment_accessors_are_exclusive() {
        let single = ParamValue::from("42");
        assert_eq!(single.as_segment(), Some("42"));
        assert!(single.as_segments().is_none());

        let many = ParamValue::from(vec!["a".to_string()]);
        assert!(many.as_segment().is_none());
        assert_eq!(many.as_segments(), Some(&["a".to_string()][..]));
    }
}
