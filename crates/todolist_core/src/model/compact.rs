//! Compact ("simplified JSON") interchange codec for [`TodoItem`].
//!
//! # Responsibility
//! - Encode items into the external object shape that omits default values.
//! - Decode such objects leniently, returning `None` instead of erroring.
//!
//! # Invariants
//! - `id`, `text`, `isDone`, `creationDate` are always present on encode and
//!   always required on decode.
//! - An `ordinary` importance is omitted on encode and dropped on decode;
//!   it never survives a trip through this codec as an explicit tag.
//! - Unparseable optional dates degrade to an absent field, never to a
//!   failed decode. Only `creationDate` is fatal.
//!
//! The codec is asymmetric by design: decode(encode(x)) loses an explicit
//! `Some(Ordinary)` importance. Bulk persistence uses the full serde form on
//! [`TodoItem`] instead.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use super::todo_item::{Importance, TodoItem};

/// Fixed interchange pattern, UTC: `2024-01-01T00:00:00+0000`.
/// Subsecond precision is not representable and is truncated on encode.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Formats a date-time under the fixed interchange pattern.
pub fn format_date_time(value: DateTime<Utc>) -> String {
    value.format(DATE_TIME_FORMAT).to_string()
}

/// Parses a date-time string under the fixed interchange pattern.
///
/// Offsets other than `+0000` are accepted and normalized to UTC.
pub fn parse_date_time(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_str(value, DATE_TIME_FORMAT)
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}

impl TodoItem {
    /// Encodes this item into the compact JSON object.
    ///
    /// Unconditional keys: `id`, `text`, `isDone`, `creationDate`.
    /// `importance` appears only when set and not `Ordinary`; `deadline`
    /// and `modificationDate` only when set. Every date leaf is a formatted
    /// string, so nothing downstream ever sees a raw timestamp.
    pub fn to_compact_json(&self) -> Value {
        let mut object = Map::new();
        object.insert("id".to_string(), Value::String(self.id.clone()));
        object.insert("text".to_string(), Value::String(self.text.clone()));
        object.insert("isDone".to_string(), Value::Bool(self.is_done));
        object.insert(
            "creationDate".to_string(),
            Value::String(format_date_time(self.creation_date)),
        );

        if let Some(importance) = self.importance {
            if importance != Importance::Ordinary {
                object.insert(
                    "importance".to_string(),
                    Value::String(importance.tag().to_string()),
                );
            }
        }
        if let Some(deadline) = self.deadline {
            object.insert(
                "deadline".to_string(),
                Value::String(format_date_time(deadline)),
            );
        }
        if let Some(modified) = self.modification_date {
            object.insert(
                "modificationDate".to_string(),
                Value::String(format_date_time(modified)),
            );
        }

        Value::Object(object)
    }

    /// Decodes a compact JSON object into an item.
    ///
    /// Returns `None` when the value is not an object, when any required
    /// field is missing or of the wrong type, or when `creationDate` does
    /// not parse. Optional fields are lenient: an unknown importance tag,
    /// the explicit `"ordinary"` tag, or an unparseable optional date all
    /// decode to an absent field rather than failing the item.
    pub fn from_compact_json(value: &Value) -> Option<Self> {
        let object = value.as_object()?;

        let id = object.get("id")?.as_str()?;
        let text = object.get("text")?.as_str()?;
        let is_done = object.get("isDone")?.as_bool()?;
        let creation_date = parse_date_time(object.get("creationDate")?.as_str()?)?;

        let importance = object
            .get("importance")
            .and_then(Value::as_str)
            .and_then(Importance::parse_tag)
            .filter(|importance| *importance != Importance::Ordinary);
        let deadline = object
            .get("deadline")
            .and_then(Value::as_str)
            .and_then(parse_date_time);
        let modification_date = object
            .get("modificationDate")
            .and_then(Value::as_str)
            .and_then(parse_date_time);

        Some(Self {
            id: id.to_string(),
            text: text.to_string(),
            importance,
            deadline,
            is_done,
            creation_date,
            modification_date,
        })
    }

    /// Encodes to a compact JSON document.
    ///
    /// `None` only when the JSON layer rejects the produced structure,
    /// which cannot happen with the fixed key set.
    pub fn to_compact_bytes(&self) -> Option<Vec<u8>> {
        serde_json::to_vec(&self.to_compact_json()).ok()
    }

    /// Decodes arbitrary bytes as a compact JSON document.
    ///
    /// `None` on malformed JSON or failed field validation; never panics.
    pub fn from_compact_bytes(bytes: &[u8]) -> Option<Self> {
        let value: Value = serde_json::from_slice(bytes).ok()?;
        Self::from_compact_json(&value)
    }
}
