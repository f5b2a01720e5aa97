//! notes-store: MongoDB storage layer for the notes API
//!
//! This crate provides:
//! - Document models for the `notes` and `categories` collections
//! - A `Store` handle exposing CRUD and existence checks per collection
//! - Connection configuration from environment variables
//!
//! # Architecture
//!
//! The store wraps a `mongodb::Database` handle. All shared state lives
//! in the external store; this layer keeps no caches or derived state.
//! "Not found" is reported as an explicit `Option`/`bool` result, kept
//! distinct from `StoreError` (driver failures, malformed identifiers).
//!
//! # Usage
//!
//! ```rust,ignore
//! use notes_store::{NewNote, Store, StoreConfig};
//!
//! let store = Store::connect(StoreConfig::from_env()).await?;
//!
//! let note = store
//!     .insert_note(NewNote {
//!         title: "Groceries".into(),
//!         content: "Milk, eggs".into(),
//!         category_id: category.id.to_hex(),
//!     })
//!     .await?;
//!
//! let all = store.list_notes().await?;
//! ```

pub mod error;
pub mod models;
pub mod store;

pub use bson::oid::ObjectId;
pub use error::{StoreError, StoreResult};
pub use models::{Category, CategoryUpdate, NewCategory, NewNote, Note, NoteUpdate};
pub use store::{Store, StoreConfig, parse_object_id};
