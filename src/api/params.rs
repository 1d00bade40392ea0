//! Request parameters and their canonical text form.
//!
//! [`Params`] keeps insertion order and may hold `Null` values so that
//! optional arguments can be passed straight through. [`Params::canonicalize`]
//! drops the nulls and renders everything as text; the same text is signed
//! and sent, so the two can never disagree.

use std::fmt;

/// A single parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Absent value, removed during canonicalization.
    Null,
    /// Text value.
    Text(String),
    /// Integer value, rendered in plain decimal.
    Int(i64),
    /// Floating point value, rendered with the shortest text that parses
    /// back to the same `f64`. Whole values have no fractional part
    /// (`3.0` is sent as `3`).
    Float(f64),
    /// List value, flattened to `key[0]`, `key[1]`, ...
    List(Vec<ParamValue>),
}

impl ParamValue {
    /// Whether this value is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, ParamValue::Null)
    }

    /// Push the canonical form of this value under `key`.
    fn flatten_into(&self, key: &str, out: &mut Vec<(String, String)>) {
        match self {
            ParamValue::Null => {}
            ParamValue::Text(text) => out.push((key.to_string(), text.clone())),
            ParamValue::Int(n) => out.push((key.to_string(), n.to_string())),
            ParamValue::Float(x) => out.push((key.to_string(), x.to_string())),
            ParamValue::List(items) => {
                for (index, item) in items.iter().enumerate() {
                    item.flatten_into(&format!("{}[{}]", key, index), out);
                }
            }
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Null => Ok(()),
            ParamValue::Text(text) => f.write_str(text),
            ParamValue::Int(n) => write!(f, "{}", n),
            ParamValue::Float(x) => write!(f, "{}", x),
            ParamValue::List(items) => {
                let rendered: Vec<String> = items.iter().map(|i| i.to_string()).collect();
                f.write_str(&rendered.join(","))
            }
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Text(value.clone())
    }
}

macro_rules! int_param {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ParamValue {
                fn from(value: $t) -> Self {
                    ParamValue::Int(i64::from(value))
                }
            }
        )*
    };
}

int_param!(i8, i16, i32, i64, u8, u16, u32);

// Values above i64::MAX keep their exact decimal text.
impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        i64::try_from(value)
            .map(ParamValue::Int)
            .unwrap_or_else(|_| ParamValue::Text(value.to_string()))
    }
}

impl From<usize> for ParamValue {
    fn from(value: usize) -> Self {
        ParamValue::from(value as u64)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<f32> for ParamValue {
    fn from(value: f32) -> Self {
        ParamValue::Float(f64::from(value))
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(ParamValue::Null)
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        ParamValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// Ordered parameter set for one API call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a parameter, returning the updated set.
    pub fn with<K: Into<String>, V: Into<ParamValue>>(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }

    /// Add or replace a parameter. A replaced key keeps its position.
    pub fn insert<K: Into<String>, V: Into<ParamValue>>(&mut self, key: K, value: V) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Remove a parameter, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Look up a parameter.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Whether the key is present (even with a `Null` value).
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Number of entries, nulls included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Copy every entry of `other` into this set, replacing existing keys.
    pub fn merge(&mut self, other: Params) {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
    }

    /// Drop nulls and render every value as text.
    ///
    /// Ordering is left as inserted; sorting happens in the signer. The
    /// input is not modified and calling this on its own output is a no-op.
    pub fn canonicalize(&self) -> Vec<(String, String)> {
        let mut out = Vec::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            value.flatten_into(key, &mut out);
        }
        out
    }
}

impl IntoIterator for Params {
    type Item = (String, ParamValue);
    type IntoIter = std::vec::IntoIter<(String, ParamValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl<K: Into<String>, V: Into<ParamValue>> Extend<(K, V)> for Params {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_drops_only_nulls() {
        let params = Params::new()
            .with("artist", "Cher")
            .with("mbid", None::<String>)
            .with("limit", 50u32)
            .with("page", ParamValue::Null)
            .with("autocorrect", true);

        let non_null = params.iter().filter(|(_, v)| !v.is_null()).count();
        let canonical = params.canonicalize();
        assert_eq!(canonical.len(), non_null);
        assert_eq!(
            canonical,
            vec![
                ("artist".to_string(), "Cher".to_string()),
                ("limit".to_string(), "50".to_string()),
                ("autocorrect".to_string(), "1".to_string()),
            ]
        );
        // input untouched
        assert_eq!(params.len(), 5);
    }

    #[test]
    fn test_canonicalize_is_idempotent() {
        let params = Params::new().with("a", 1i32).with("b", "x").with("c", ParamValue::Null);
        let once = params.canonicalize();
        let twice: Params = once.clone().into_iter().collect();
        assert_eq!(twice.canonicalize(), once);
    }

    #[test]
    fn test_integers_render_as_plain_decimal() {
        let params = Params::new().with("n", 1i32).with("neg", -42i64).with("zero", 0u8);
        let canonical = params.canonicalize();
        assert_eq!(canonical[0].1, "1");
        assert_eq!(canonical[1].1, "-42");
        assert_eq!(canonical[2].1, "0");
    }

    #[test]
    fn test_floats_render_shortest_decimal() {
        let params = Params::new()
            .with("lat", 51.5f64)
            .with("long", -0.125f64)
            .with("whole", 3.0f64)
            .with("tiny", 0.1f64);
        assert_eq!(
            params.canonicalize(),
            vec![
                ("lat".to_string(), "51.5".to_string()),
                ("long".to_string(), "-0.125".to_string()),
                ("whole".to_string(), "3".to_string()),
                ("tiny".to_string(), "0.1".to_string()),
            ]
        );
    }

    #[test]
    fn test_floats_are_signed_as_sent() {
        let params = Params::new().with("method", "geo.getEvents").with("lat", 51.5f64);
        let canonical = params.canonicalize();
        assert_eq!(
            crate::crypto::signature_base(&canonical, "secret"),
            "lat51.5methodgeo.getEventssecret"
        );
    }

    #[test]
    fn test_wide_unsigned_integers() {
        let params = Params::new()
            .with("timestamp", 1_300_000_000u64)
            .with("count", 7usize)
            .with("max", u64::MAX);
        let canonical = params.canonicalize();
        assert_eq!(canonical[0].1, "1300000000");
        assert_eq!(canonical[1].1, "7");
        assert_eq!(canonical[2].1, "18446744073709551615");
        assert_eq!(params.get("timestamp"), Some(&ParamValue::Int(1_300_000_000)));
    }

    #[test]
    fn test_lists_flatten_elementwise() {
        let params = Params::new().with(
            "tag",
            ParamValue::List(vec!["rock".into(), ParamValue::Null, ParamValue::Int(3)]),
        );
        assert_eq!(
            params.canonicalize(),
            vec![
                ("tag[0]".to_string(), "rock".to_string()),
                ("tag[2]".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut params = Params::new().with("method", "a").with("x", "1");
        params.insert("method", "b");
        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["method", "x"]);
        assert_eq!(params.get("method"), Some(&ParamValue::Text("b".into())));
    }

    #[test]
    fn test_remove_and_merge() {
        let mut params = Params::new().with("a", "1").with("b", "2");
        assert_eq!(params.remove("a"), Some(ParamValue::Text("1".into())));
        assert!(params.remove("a").is_none());
        params.merge(Params::new().with("b", "3").with("c", "4"));
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("b").map(|v| v.to_string()).as_deref(), Some("3"));
    }
}
