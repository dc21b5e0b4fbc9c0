//! To-do item domain model and full persistence codec.
//!
//! # Responsibility
//! - Define the `TodoItem` record shared by the cache and interchange paths.
//! - Provide constructors with explicit id/creation-date defaulting.
//!
//! # Invariants
//! - `id` is stable and never reused for another item.
//! - Two items are equal exactly when their `id` values are equal.
//! - The full serde form carries all seven fields, absent options as `null`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Priority tag for a to-do item.
///
/// `Ordinary` is the semantic default: an item with `importance == None`
/// and one with `Some(Ordinary)` mean the same thing to consumers, and the
/// compact codec canonicalizes both to an omitted key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Unimportant,
    Ordinary,
    Important,
}

impl Importance {
    /// Wire tag used by both codecs.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Unimportant => "unimportant",
            Self::Ordinary => "ordinary",
            Self::Important => "important",
        }
    }

    /// Parses a wire tag; unknown tags map to `None`.
    pub fn parse_tag(value: &str) -> Option<Self> {
        match value {
            "unimportant" => Some(Self::Unimportant),
            "ordinary" => Some(Self::Ordinary),
            "important" => Some(Self::Important),
            _ => None,
        }
    }
}

/// A single to-do entry.
///
/// The serde derive is the full persistence codec: symmetric, all fields,
/// external camelCase key names, chrono RFC 3339 dates. The compact
/// interchange codec lives in [`crate::model::compact`] and is deliberately
/// lossy (see its module docs).
///
/// Items are value types: an edit is a new `TodoItem` with the same `id`,
/// swapped into the cache via upsert.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Opaque unique identifier, a UUIDv4 string when generated here.
    pub id: String,
    /// Human-readable content. Expected non-empty by convention.
    pub text: String,
    /// `None` is semantically equivalent to `Some(Importance::Ordinary)`.
    pub importance: Option<Importance>,
    pub deadline: Option<DateTime<Utc>>,
    pub is_done: bool,
    pub creation_date: DateTime<Utc>,
    /// Time of the last edit, when one happened.
    pub modification_date: Option<DateTime<Utc>>,
}

impl TodoItem {
    /// Creates an item with a generated id and `creation_date` of now.
    ///
    /// Optional fields start as `None`; set them on the value before it is
    /// shared or inserted into a cache.
    pub fn new(text: impl Into<String>, is_done: bool) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), text, is_done)
    }

    /// Creates an item with a caller-provided identifier.
    ///
    /// Used by import paths where identity already exists externally.
    /// `creation_date` still defaults to now; overwrite it directly when
    /// the source carries its own timestamp.
    pub fn with_id(id: impl Into<String>, text: impl Into<String>, is_done: bool) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            importance: None,
            deadline: None,
            is_done,
            creation_date: Utc::now(),
            modification_date: None,
        }
    }
}

// Identity comparison only: two items with the same id are the same item,
// whatever their payload fields say.
impl PartialEq for TodoItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TodoItem {}
