//! Response envelope decoding and server-error classification

use serde_json::Value;
use stackex_domain::{Fields, FromApiObject, JsonObject};
use tracing::warn;

use crate::errors::Error;

/// The generic paginated wrapper every read endpoint returns.
///
/// Quota fields mirror the server's report; the client never computes or
/// decrements them, and filters may exclude them entirely.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    pub items: Vec<T>,
    pub has_more: bool,
    pub quota_max: Option<i64>,
    pub quota_remaining: Option<i64>,
    /// Server-mandated minimum delay, in seconds, before the next call
    /// sharing this request's throttle signature.
    pub backoff: Option<u64>,
}

/// Recognize a server error payload.
///
/// On failure the server replaces `items` with `error_id`, `error_name` and
/// `error_message`. The id key alone marks the payload as an error; name and
/// message are extracted defensively.
pub(crate) fn classify_error(obj: &JsonObject) -> Option<Error> {
    let id = obj.get("error_id")?;
    Some(Error::Api {
        id: id.as_i64().unwrap_or_default(),
        name: obj
            .get("error_name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned(),
        message: obj
            .get("error_message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned(),
    })
}

/// Decode the paginated wrapper, hydrating each element of `items`.
///
/// A single malformed element never aborts the batch: anything that is not
/// an object hydrates from an empty one, yielding a fully-unset value.
pub(crate) fn decode_envelope<T: FromApiObject>(obj: &JsonObject) -> Envelope<T> {
    let fields = Fields::new(obj);

    let items = obj
        .get("items")
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .map(|value| match value.as_object() {
                    Some(item) => T::from_object(item),
                    None => {
                        warn!("non-object element in items; hydrating as empty");
                        T::from_object(&JsonObject::new())
                    }
                })
                .collect()
        })
        .unwrap_or_default();

    Envelope {
        items,
        has_more: fields.boolean("has_more").unwrap_or(false),
        quota_max: fields.int("quota_max"),
        quota_remaining: fields.int("quota_remaining"),
        backoff: obj.get("backoff").and_then(Value::as_u64),
    }
}
