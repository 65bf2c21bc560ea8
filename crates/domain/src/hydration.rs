//! Defensive JSON-to-model conversion
//!
//! The set of keys present in an API response depends entirely on the filter
//! the caller requested, so any field can be missing, null, or carry an
//! unexpected JSON type. Every field read therefore goes through [`Fields`],
//! which returns `None` for anything that does not match the requested shape
//! instead of failing the item.

use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Map, Value};

/// A decoded JSON object as returned by the API.
pub type JsonObject = Map<String, Value>;

/// Conversion from an untyped API object into a typed model value.
///
/// Implementations read every field through [`Fields`]; a missing or
/// ill-typed leaf leaves that field unset and never fails the item. Variant
/// types hydrate their shared base fields before their own.
pub trait FromApiObject: Sized {
    /// Hydrate a value from a decoded JSON object.
    fn from_object(obj: &JsonObject) -> Self;
}

/// Checked field extraction over a JSON object.
#[derive(Clone, Copy)]
pub struct Fields<'a> {
    obj: &'a JsonObject,
}

impl<'a> Fields<'a> {
    pub fn new(obj: &'a JsonObject) -> Self {
        Self { obj }
    }

    pub fn string(&self, key: &str) -> Option<String> {
        self.obj.get(key)?.as_str().map(str::to_owned)
    }

    pub fn int(&self, key: &str) -> Option<i64> {
        self.obj.get(key)?.as_i64()
    }

    pub fn boolean(&self, key: &str) -> Option<bool> {
        self.obj.get(key)?.as_bool()
    }

    /// Epoch-seconds field converted to an absolute timestamp.
    ///
    /// The conversion happens exactly once, here; models store
    /// `DateTime<Utc>` and never re-interpret the raw number.
    pub fn timestamp(&self, key: &str) -> Option<DateTime<Utc>> {
        let secs = self.int(key)?;
        Utc.timestamp_opt(secs, 0).single()
    }

    /// A homogeneous array of strings; unset if the value is not an array or
    /// any element is not a string.
    pub fn strings(&self, key: &str) -> Option<Vec<String>> {
        self.obj
            .get(key)?
            .as_array()?
            .iter()
            .map(|value| value.as_str().map(str::to_owned))
            .collect()
    }

    pub fn object(&self, key: &str) -> Option<&'a JsonObject> {
        self.obj.get(key)?.as_object()
    }

    /// A nested object hydrated into `T`.
    pub fn model<T: FromApiObject>(&self, key: &str) -> Option<T> {
        self.object(key).map(T::from_object)
    }

    /// An array of nested objects hydrated into `T`. Elements that are not
    /// objects are skipped rather than failing the array.
    pub fn models<T: FromApiObject>(&self, key: &str) -> Option<Vec<T>> {
        Some(
            self.obj
                .get(key)?
                .as_array()?
                .iter()
                .filter_map(Value::as_object)
                .map(T::from_object)
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn object(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn missing_key_is_unset() {
        let obj = object(json!({}));
        let fields = Fields::new(&obj);

        assert_eq!(fields.string("title"), None);
        assert_eq!(fields.int("score"), None);
        assert_eq!(fields.boolean("is_answered"), None);
        assert_eq!(fields.timestamp("creation_date"), None);
        assert_eq!(fields.strings("tags"), None);
    }

    #[test]
    fn null_value_is_unset() {
        let obj = object(json!({ "title": null, "score": null, "tags": null }));
        let fields = Fields::new(&obj);

        assert_eq!(fields.string("title"), None);
        assert_eq!(fields.int("score"), None);
        assert_eq!(fields.strings("tags"), None);
    }

    #[test]
    fn mismatched_type_is_unset() {
        let obj = object(json!({
            "title": 42,
            "score": "high",
            "is_answered": "yes",
            "creation_date": "yesterday",
            "tags": { "a": 1 },
        }));
        let fields = Fields::new(&obj);

        assert_eq!(fields.string("title"), None);
        assert_eq!(fields.int("score"), None);
        assert_eq!(fields.boolean("is_answered"), None);
        assert_eq!(fields.timestamp("creation_date"), None);
        assert_eq!(fields.strings("tags"), None);
    }

    #[test]
    fn well_typed_values_extract() {
        let obj = object(json!({
            "title": "Borrow checker question",
            "score": -3,
            "is_answered": true,
            "tags": ["rust", "borrow-checker"],
        }));
        let fields = Fields::new(&obj);

        assert_eq!(fields.string("title").as_deref(), Some("Borrow checker question"));
        assert_eq!(fields.int("score"), Some(-3));
        assert_eq!(fields.boolean("is_answered"), Some(true));
        assert_eq!(
            fields.strings("tags"),
            Some(vec!["rust".to_string(), "borrow-checker".to_string()])
        );
    }

    #[test]
    fn epoch_seconds_convert_to_utc_instant() {
        let obj = object(json!({ "creation_date": 1_000_000_000 }));
        let fields = Fields::new(&obj);

        let expected = Utc.timestamp_opt(1_000_000_000, 0).single().unwrap();
        assert_eq!(fields.timestamp("creation_date"), Some(expected));
    }

    #[test]
    fn heterogeneous_string_array_is_unset() {
        let obj = object(json!({ "tags": ["rust", 7] }));
        let fields = Fields::new(&obj);

        assert_eq!(fields.strings("tags"), None);
    }

    #[test]
    fn non_object_elements_are_skipped_in_model_arrays() {
        struct Marker;

        impl FromApiObject for Marker {
            fn from_object(_obj: &JsonObject) -> Self {
                Marker
            }
        }

        let obj = object(json!({ "items": [{}, 3, "x", {}] }));
        let fields = Fields::new(&obj);

        let markers: Vec<Marker> = fields.models("items").unwrap();
        assert_eq!(markers.len(), 2);
    }
}
