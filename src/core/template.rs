//! Value lookup for `${key}` template substitution.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::hash::BuildHasher;

use serde_json::{Map, Value};

use crate::config::OBJECT_PLACEHOLDER;

/// A source of template values keyed by name.
pub trait TemplateValues {
    /// Return the string form of the value for `key`, if any.
    fn lookup(&self, key: &str) -> Option<String>;
}

impl<K, V, S> TemplateValues for HashMap<K, V, S>
where
    K: std::borrow::Borrow<str> + std::hash::Hash + Eq,
    V: Display,
    S: BuildHasher,
{
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).map(ToString::to_string)
    }
}

impl<K, V> TemplateValues for BTreeMap<K, V>
where
    K: std::borrow::Borrow<str> + Ord,
    V: Display,
{
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).map(ToString::to_string)
    }
}

impl TemplateValues for Map<String, Value> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).map(json_to_text)
    }
}

/// Only JSON objects hold keys; any other value resolves nothing.
impl TemplateValues for Value {
    fn lookup(&self, key: &str) -> Option<String> {
        self.as_object()?.lookup(key)
    }
}

impl<T: TemplateValues + ?Sized> TemplateValues for &T {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

/// Render a JSON value the way it reads when interpolated into text.
fn json_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => json_to_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => OBJECT_PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hash_map_lookup() {
        let mut values = HashMap::new();
        values.insert("count", 3);
        assert_eq!(values.lookup("count"), Some("3".to_string()));
        assert_eq!(values.lookup("missing"), None);
    }

    #[test]
    fn test_btree_map_lookup() {
        let values = BTreeMap::from([("name".to_string(), "World")]);
        assert_eq!(values.lookup("name"), Some("World".to_string()));
    }

    #[test]
    fn test_json_lookup() {
        let values = json!({
            "name": "World",
            "count": 2,
            "ok": true,
            "none": null,
            "list": [1, "a", null],
            "nested": { "x": 1 }
        });
        assert_eq!(values.lookup("name"), Some("World".to_string()));
        assert_eq!(values.lookup("count"), Some("2".to_string()));
        assert_eq!(values.lookup("ok"), Some("true".to_string()));
        assert_eq!(values.lookup("none"), Some("null".to_string()));
        assert_eq!(values.lookup("list"), Some("1,a,".to_string()));
        assert_eq!(values.lookup("nested"), Some("[object Object]".to_string()));
        assert_eq!(values.lookup("missing"), None);
    }

    #[test]
    fn test_json_non_object() {
        assert_eq!(json!([1, 2]).lookup("0"), None);
        assert_eq!(json!("text").lookup("text"), None);
    }
}
