//! Field maps and the merge pipeline used when an error is constructed.
//!
//! Field values are open-ended, so they are kept as `serde_json::Value`.
//! Merge order (low → high):
//! 1. category defaults
//! 2. caller fields
//! 3. identity fields (`name`, and `trace` removed)
//!
//! Identity fields are never part of the general overlay; they are applied
//! last and unconditionally.

use serde_json::{Map, Value};

use super::name::CategoryName;

/// Field name → value mapping.
pub type Fields = Map<String, Value>;

pub const NAME_KEY: &str = "name";
pub const MESSAGE_KEY: &str = "message";
pub const TRACE_KEY: &str = "trace";

/// Overlay `overrides` on a shallow copy of `defaults`.
pub fn overlay(defaults: &Fields, overrides: Option<&Fields>) -> Fields {
    let mut merged = defaults.clone();
    if let Some(overrides) = overrides {
        for (key, value) in overrides {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

/// Force the identity fields of `name` onto `fields`.
pub fn apply_identity(fields: &mut Fields, name: &CategoryName) {
    fields.insert(NAME_KEY.to_string(), Value::String(name.as_str().to_string()));
    fields.remove(TRACE_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Fields {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn overrides_win_over_defaults() {
        let defaults = object(json!({"a": 1, "b": 2}));
        let overrides = object(json!({"b": 3, "c": 4}));

        let merged = overlay(&defaults, Some(&overrides));
        assert_eq!(Value::Object(merged), json!({"a": 1, "b": 3, "c": 4}));
    }

    #[test]
    fn overlay_without_overrides_copies_defaults() {
        let defaults = object(json!({"status": 404}));
        let merged = overlay(&defaults, None);
        assert_eq!(merged, defaults);
    }

    #[test]
    fn overlay_is_shallow() {
        let defaults = object(json!({"meta": {"a": 1, "b": 2}}));
        let overrides = object(json!({"meta": {"c": 3}}));

        let merged = overlay(&defaults, Some(&overrides));
        assert_eq!(merged["meta"], json!({"c": 3}));
    }

    #[test]
    fn identity_fields_are_forced() {
        let name = CategoryName::new("TestError").unwrap();
        let mut fields = object(json!({"name": "FakeName", "trace": "1234", "extra": true}));

        apply_identity(&mut fields, &name);
        assert_eq!(Value::Object(fields), json!({"name": "TestError", "extra": true}));
    }
}
