//! Document models for the storage layer.
//!
//! These types map directly to stored documents and are used for driver
//! queries. HTTP-facing response shapes live in the server crate so the
//! wire format can evolve independently of storage.

use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored document in the `categories` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
}

/// Input for creating a category. The store assigns the id.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
}

/// Partial update for a category. Only present fields are written.
#[derive(Debug, Clone, Default)]
pub struct CategoryUpdate {
    pub name: Option<String>,
}

/// Stored document in the `notes` collection.
///
/// Timestamps are BSON datetimes set at creation. `updated_at` keeps its
/// creation value across updates (see `Store::update_note`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub content: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
    /// Reference to a document in the `categories` collection.
    pub category_id: ObjectId,
}

/// Input for creating a note. The store assigns the id and timestamps.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    /// Hex id of the referenced category.
    pub category_id: String,
}

/// Partial update for a note. Only present fields are merged into the
/// stored document; timestamps are left untouched.
#[derive(Debug, Clone, Default)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    /// Hex id of the referenced category.
    pub category_id: Option<String>,
}
