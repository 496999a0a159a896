//! Decoded construction arguments.
//!
//! The host channel hands over a string-keyed mapping of loosely typed
//! values. [`ParameterSet`] keeps that mapping as-is; typing against a
//! shape's schema happens later in [`crate::schema`].

use std::collections::BTreeMap;

/// A single decoded argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Number(f64),
    Text(String),
    Numbers(Vec<f64>),
    /// A value of a type no shape accepts. Carries a description of what
    /// was sent so type errors can name it.
    Other(&'static str),
}

impl ParamValue {
    /// Human-readable description of the value's type, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            ParamValue::Number(_) => "a number",
            ParamValue::Text(_) => "a string",
            ParamValue::Numbers(_) => "a sequence of numbers",
            ParamValue::Other(name) => *name,
        }
    }

    /// Convert a decoded JSON value.
    pub fn from_json(value: &serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Number(n) => match n.as_f64() {
                Some(n) => ParamValue::Number(n),
                None => ParamValue::Other("an unrepresentable number"),
            },
            Value::String(s) => ParamValue::Text(s.clone()),
            Value::Array(items) => items
                .iter()
                .map(Value::as_f64)
                .collect::<Option<Vec<f64>>>()
                .map(ParamValue::Numbers)
                .unwrap_or(ParamValue::Other("a mixed array")),
            Value::Bool(_) => ParamValue::Other("a boolean"),
            Value::Null => ParamValue::Other("null"),
            Value::Object(_) => ParamValue::Other("an object"),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(n: f64) -> Self {
        ParamValue::Number(n)
    }
}

impl From<i32> for ParamValue {
    fn from(n: i32) -> Self {
        ParamValue::Number(f64::from(n))
    }
}

impl From<u32> for ParamValue {
    fn from(n: u32) -> Self {
        ParamValue::Number(f64::from(n))
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Text(s)
    }
}

impl From<Vec<f64>> for ParamValue {
    fn from(v: Vec<f64>) -> Self {
        ParamValue::Numbers(v)
    }
}

impl From<[f64; 3]> for ParamValue {
    fn from(v: [f64; 3]) -> Self {
        ParamValue::Numbers(v.to_vec())
    }
}

/// Named arguments for one construction call.
///
/// Ordered by name so iteration, logging and error reporting are stable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterSet {
    values: BTreeMap<String, ParamValue>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a decoded JSON object. Returns `None` if `value` is not an
    /// object.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        let map = value.as_object()?;
        Some(Self::from_json_map(map))
    }

    /// Build from the fields of a decoded JSON object.
    pub fn from_json_map(map: &serde_json::Map<String, serde_json::Value>) -> Self {
        map.iter()
            .map(|(k, v)| (k.clone(), ParamValue::from_json(v)))
            .collect()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<ParamValue> {
        self.values.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = ParameterSet::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_numbers_become_floats() {
        assert_eq!(ParamValue::from_json(&json!(3)), ParamValue::Number(3.0));
        assert_eq!(ParamValue::from_json(&json!(0.25)), ParamValue::Number(0.25));
    }

    #[test]
    fn json_numeric_arrays_become_sequences() {
        assert_eq!(
            ParamValue::from_json(&json!([1, 2.5, -3])),
            ParamValue::Numbers(vec![1.0, 2.5, -3.0])
        );
        assert_eq!(
            ParamValue::from_json(&json!([])),
            ParamValue::Numbers(Vec::new())
        );
    }

    #[test]
    fn unsupported_json_types_are_kept_as_other() {
        assert_eq!(
            ParamValue::from_json(&json!(true)),
            ParamValue::Other("a boolean")
        );
        assert_eq!(ParamValue::from_json(&json!(null)), ParamValue::Other("null"));
        assert_eq!(
            ParamValue::from_json(&json!({"x": 1})),
            ParamValue::Other("an object")
        );
        assert_eq!(
            ParamValue::from_json(&json!([1, "two"])),
            ParamValue::Other("a mixed array")
        );
    }

    #[test]
    fn parameter_set_from_json_object() {
        let set = ParameterSet::from_json(&json!({
            "radius": 0.1,
            "text": "hi",
            "fromVector": [0, 0, 0],
        }))
        .unwrap();

        assert_eq!(set.len(), 3);
        assert_eq!(set.get("radius"), Some(&ParamValue::Number(0.1)));
        assert_eq!(set.get("text"), Some(&ParamValue::Text("hi".into())));
        assert!(set.contains("fromVector"));
    }

    #[test]
    fn parameter_set_rejects_non_objects() {
        assert!(ParameterSet::from_json(&json!([1, 2, 3])).is_none());
        assert!(ParameterSet::from_json(&json!("radius")).is_none());
    }

    #[test]
    fn names_are_sorted() {
        let set = ParameterSet::new()
            .with("width", 1.0)
            .with("height", 2.0)
            .with("chamferRadius", 0.0);
        let names: Vec<_> = set.names().collect();
        assert_eq!(names, vec!["chamferRadius", "height", "width"]);
    }

    #[test]
    fn from_iterator_and_remove() {
        let mut set: ParameterSet = [("a", 1.0), ("b", 2.0)].into_iter().collect();
        assert_eq!(set.remove("a"), Some(ParamValue::Number(1.0)));
        assert!(!set.contains("a"));
        assert_eq!(set.len(), 1);
        assert!(!set.is_empty());
    }

    #[test]
    fn type_names() {
        assert_eq!(ParamValue::from(1).type_name(), "a number");
        assert_eq!(ParamValue::from("x").type_name(), "a string");
        assert_eq!(
            ParamValue::from([0.0, 0.0, 0.0]).type_name(),
            "a sequence of numbers"
        );
        assert_eq!(ParamValue::Other("a boolean").type_name(), "a boolean");
    }
}
