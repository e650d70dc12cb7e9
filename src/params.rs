//! Query-string parameters.

use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Ordered query-string parameters.
///
/// List values are sent as repeated keys (`ids=a&ids=b`), which is how the
/// Zoom API reads multi-valued parameters.
///
/// # Example
///
/// ```
/// use zoomapi::Params;
///
/// let params = Params::new()
///     .with("page_size", 100)
///     .with_list("customize_ids", ["a", "b"]);
///
/// assert_eq!(params.get("page_size"), Some("100"));
/// assert_eq!(params.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    /// Create an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to a single value, replacing any existing values for it.
    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        self.pairs.retain(|(k, _)| *k != key);
        self.pairs.push((key, value.to_string()));
    }

    /// Append one value for `key` without touching existing values.
    pub fn append(&mut self, key: impl Into<String>, value: impl ToString) {
        self.pairs.push((key.into(), value.to_string()));
    }

    /// Builder form of [`Params::set`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.set(key, value);
        self
    }

    /// Replace `key` with every value in `values`, one pair per value.
    #[must_use]
    pub fn with_list<I>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        let key = key.into();
        self.pairs.retain(|(k, _)| *k != key);
        for value in values {
            self.pairs.push((key.clone(), value.to_string()));
        }
        self
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All values for `key`, in insertion order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Number of key/value pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true when no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over the key/value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Params {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.append(k, v);
        }
        params
    }
}

// Serialized as a sequence of pairs so reqwest's urlencoded query encoder
// emits repeated keys.
impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.pairs.len()))?;
        for pair in &self.pairs {
            seq.serialize_element(pair)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_existing_value() {
        let mut params = Params::new().with("next_page_token", "t1");
        params.set("next_page_token", "t2");
        assert_eq!(params.get("next_page_token"), Some("t2"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_with_list_repeats_key() {
        let params = Params::new().with_list("customize_ids", vec!["a", "b", "c"]);
        let values: Vec<_> = params.get_all("customize_ids").collect();
        assert_eq!(values, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_from_iterator_keeps_order() {
        let params: Params = [("b", "2"), ("a", "1")].into_iter().collect();
        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, vec![("b", "2"), ("a", "1")]);
    }

    #[test]
    fn test_serializes_as_pairs() {
        let params = Params::new().with("page_size", 2).with_list("ids", ["x", "y"]);
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(
            json,
            serde_json::json!([["page_size", "2"], ["ids", "x"], ["ids", "y"]])
        );
    }
}
