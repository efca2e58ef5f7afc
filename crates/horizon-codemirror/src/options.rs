//! Editor configuration options.
//!
//! Options are an open name → value map handed to the widget verbatim. The
//! adapter never interprets them beyond comparing them: on every update only
//! the options whose value differs (by deep equality) from what the widget
//! currently reports are pushed back into it.
//!
//! # Example
//!
//! ```
//! use horizon_codemirror::options::{names, EditorOptions, OptionValue};
//!
//! let options = EditorOptions::new()
//!     .with(names::MODE, "rust")
//!     .with(names::LINE_NUMBERS, true)
//!     .with(names::TAB_SIZE, 4);
//!
//! assert_eq!(options.get(names::TAB_SIZE), Some(&OptionValue::Integer(4)));
//! assert_eq!(OptionValue::Integer(4), OptionValue::Float(4.0));
//! ```

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};

/// Well-known option names.
///
/// Any other name is passed through untouched.
pub mod names {
    /// Language mode used for highlighting.
    pub const MODE: &str = "mode";
    /// Visual theme name.
    pub const THEME: &str = "theme";
    /// Whether a line-number gutter is shown.
    pub const LINE_NUMBERS: &str = "lineNumbers";
    /// Whether user edits are rejected.
    pub const READ_ONLY: &str = "readOnly";
    /// Width of a tab character in columns.
    pub const TAB_SIZE: &str = "tabSize";
    /// Columns per indentation level.
    pub const INDENT_UNIT: &str = "indentUnit";
    /// Whether long lines wrap instead of scrolling horizontally.
    pub const LINE_WRAPPING: &str = "lineWrapping";
    /// Whether the widget takes focus when created.
    pub const AUTOFOCUS: &str = "autofocus";
    /// Text shown while the document is empty.
    pub const PLACEHOLDER: &str = "placeholder";
}

/// A single option value.
///
/// Mirrors the shapes a configuration object can hold. Equality is
/// structural: integers and floats compare numerically, `NaN` equals `NaN`,
/// and objects compare by key set and values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// A null/empty value.
    #[default]
    Null,
    /// A boolean value.
    Bool(bool),
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit floating point number.
    Float(f64),
    /// A string value.
    String(String),
    /// An array of values.
    Array(Vec<OptionValue>),
    /// A nested object.
    Object(BTreeMap<String, OptionValue>),
}

impl OptionValue {
    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, OptionValue::Null)
    }

    /// Returns this value as a boolean, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns this value as an integer, if it is one.
    ///
    /// Floats with no fractional part are accepted too.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            OptionValue::Integer(v) => Some(*v),
            OptionValue::Float(v) if v.fract() == 0.0 && v.is_finite() => Some(*v as i64),
            _ => None,
        }
    }

    /// Returns this value as a float, if it is numeric.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            OptionValue::Float(v) => Some(*v),
            OptionValue::Integer(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Returns this value as a string, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::String(v) => Some(v),
            _ => None,
        }
    }

    /// Returns this value as an array, if it is one.
    pub fn as_array(&self) -> Option<&[OptionValue]> {
        match self {
            OptionValue::Array(v) => Some(v),
            _ => None,
        }
    }

    /// Returns this value as an object, if it is one.
    pub fn as_object(&self) -> Option<&BTreeMap<String, OptionValue>> {
        match self {
            OptionValue::Object(v) => Some(v),
            _ => None,
        }
    }
}

impl PartialEq for OptionValue {
    fn eq(&self, other: &Self) -> bool {
        use OptionValue::*;

        match (self, other) {
            (Null, Null) => true,
            (Bool(a), Bool(b)) => a == b,
            (Integer(a), Integer(b)) => a == b,
            (String(a), String(b)) => a == b,
            (Array(a), Array(b)) => a == b,
            (Object(a), Object(b)) => a == b,
            (a, b) => match (a.as_float(), b.as_float()) {
                (Some(x), Some(y)) => x == y || (x.is_nan() && y.is_nan()),
                _ => false,
            },
        }
    }
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        OptionValue::Bool(v)
    }
}

impl From<i32> for OptionValue {
    fn from(v: i32) -> Self {
        OptionValue::Integer(v as i64)
    }
}

impl From<i64> for OptionValue {
    fn from(v: i64) -> Self {
        OptionValue::Integer(v)
    }
}

impl From<u32> for OptionValue {
    fn from(v: u32) -> Self {
        OptionValue::Integer(v as i64)
    }
}

impl From<f64> for OptionValue {
    fn from(v: f64) -> Self {
        OptionValue::Float(v)
    }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self {
        OptionValue::String(v)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        OptionValue::String(v.to_string())
    }
}

impl<T: Into<OptionValue>> From<Vec<T>> for OptionValue {
    fn from(v: Vec<T>) -> Self {
        OptionValue::Array(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<OptionValue>> From<Option<T>> for OptionValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(OptionValue::Null, Into::into)
    }
}

impl From<serde_json::Value> for OptionValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => OptionValue::Null,
            serde_json::Value::Bool(b) => OptionValue::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => OptionValue::Integer(i),
                None => OptionValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => OptionValue::String(s),
            serde_json::Value::Array(items) => {
                OptionValue::Array(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(map) => {
                OptionValue::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<OptionValue> for serde_json::Value {
    fn from(v: OptionValue) -> Self {
        match v {
            OptionValue::Null => serde_json::Value::Null,
            OptionValue::Bool(b) => serde_json::Value::Bool(b),
            OptionValue::Integer(i) => serde_json::Value::from(i),
            // Non-finite floats have no JSON form.
            OptionValue::Float(f) => serde_json::Number::from_f64(f)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            OptionValue::String(s) => serde_json::Value::String(s),
            OptionValue::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            OptionValue::Object(map) => {
                serde_json::Value::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

/// The configuration object handed to the widget.
///
/// Entries are kept sorted by name so iteration (and therefore the order in
/// which changed options are pushed into the widget) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditorOptions {
    entries: BTreeMap<String, OptionValue>,
}

impl EditorOptions {
    /// Creates an empty option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an option (builder pattern).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Sets an option, returning the previous value if there was one.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Option<OptionValue> {
        self.entries.insert(name.into(), value.into())
    }

    /// Gets an option by name.
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.entries.get(name)
    }

    /// Removes an option, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<OptionValue> {
        self.entries.remove(name)
    }

    /// Returns true if the option is present.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns true if the option is present and set to `true`.
    pub fn is_enabled(&self, name: &str) -> bool {
        self.get(name).and_then(OptionValue::as_bool).unwrap_or(false)
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, OptionValue> {
        self.entries.iter()
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no options are set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the options whose value differs from what `current` reports.
    ///
    /// `current` looks up the widget's present value for an option name. An
    /// option the widget does not know about (`None`) always counts as
    /// changed, including when the desired value is `Null`.
    pub fn changed_against<F>(&self, mut current: F) -> Vec<(&str, &OptionValue)>
    where
        F: FnMut(&str) -> Option<OptionValue>,
    {
        self.entries
            .iter()
            .filter(|(name, value)| current(name).as_ref() != Some(*value))
            .map(|(name, value)| (name.as_str(), value))
            .collect()
    }
}

impl<K: Into<String>, V: Into<OptionValue>> FromIterator<(K, V)> for EditorOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl<K: Into<String>, V: Into<OptionValue>> Extend<(K, V)> for EditorOptions {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

impl<'a> IntoIterator for &'a EditorOptions {
    type Item = (&'a String, &'a OptionValue);
    type IntoIter = btree_map::Iter<'a, String, OptionValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_equality_crosses_representation() {
        assert_eq!(OptionValue::Integer(2), OptionValue::Float(2.0));
        assert_ne!(OptionValue::Integer(2), OptionValue::Float(2.5));
        assert_eq!(OptionValue::Float(f64::NAN), OptionValue::Float(f64::NAN));
        assert_ne!(OptionValue::Bool(true), OptionValue::Integer(1));
        assert_ne!(OptionValue::Null, OptionValue::String(String::new()));
    }

    #[test]
    fn test_deep_equality_of_nested_values() {
        let a = OptionValue::from(serde_json::json!({
            "extraKeys": { "Ctrl-S": "save", "Tab": "indentMore" },
            "gutters": ["lint", "folds"],
        }));
        let b = OptionValue::from(serde_json::json!({
            "gutters": ["lint", "folds"],
            "extraKeys": { "Tab": "indentMore", "Ctrl-S": "save" },
        }));
        assert_eq!(a, b);

        let c = OptionValue::from(serde_json::json!({
            "gutters": ["folds", "lint"],
            "extraKeys": { "Tab": "indentMore", "Ctrl-S": "save" },
        }));
        assert_ne!(a, c);
    }

    #[test]
    fn test_changed_against_reports_only_differences() {
        let options = EditorOptions::new()
            .with(names::MODE, "rust")
            .with(names::TAB_SIZE, 4)
            .with(names::LINE_NUMBERS, true)
            .with("customGutter", OptionValue::Null);

        let current = EditorOptions::new()
            .with(names::MODE, "rust")
            .with(names::TAB_SIZE, 4.0)
            .with(names::LINE_NUMBERS, false);

        let changed = options.changed_against(|name| current.get(name).cloned());
        let changed_names: Vec<&str> = changed.iter().map(|(name, _)| *name).collect();
        assert_eq!(changed_names, vec!["customGutter", names::LINE_NUMBERS]);
    }

    #[test]
    fn test_options_deserialize_from_json() {
        let options: EditorOptions = serde_json::from_str(
            r#"{ "mode": "javascript", "tabSize": 2, "lineWrapping": true, "theme": null }"#,
        )
        .unwrap();

        assert_eq!(options.len(), 4);
        assert_eq!(options.get(names::TAB_SIZE).and_then(OptionValue::as_integer), Some(2));
        assert!(options.is_enabled(names::LINE_WRAPPING));
        assert!(options.get(names::THEME).is_some_and(OptionValue::is_null));
    }

    #[test]
    fn test_json_conversion_keeps_structure() {
        let value = OptionValue::from(vec!["a", "b"]);
        let json: serde_json::Value = value.clone().into();
        assert_eq!(json, serde_json::json!(["a", "b"]));
        assert_eq!(OptionValue::from(json), value);
    }

    #[test]
    fn test_collect_and_extend() {
        let mut options: EditorOptions = [(names::MODE, "css")].into_iter().collect();
        options.extend([(names::READ_ONLY, true)]);

        assert!(options.contains(names::MODE));
        assert!(options.is_enabled(names::READ_ONLY));
        assert_eq!(options.remove(names::MODE), Some(OptionValue::from("css")));
        assert_eq!(options.len(), 1);
    }
}
