//! Main store implementation for document database operations.
//!
//! The `Store` type provides CRUD and existence checks for the
//! `notes` and `categories` collections.

use bson::{Document, doc, oid::ObjectId};
use futures::stream::TryStreamExt;
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection, Database};

use crate::error::StoreResult;
use crate::models::*;

const NOTES_COLLECTION: &str = "notes";
const CATEGORIES_COLLECTION: &str = "categories";

/// Configuration for connecting to the document store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// MongoDB connection URI.
    pub uri: String,
    /// Database name.
    pub database: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            database: "note-taking-api".to_string(),
        }
    }
}

impl StoreConfig {
    /// Create configuration from environment variables.
    ///
    /// Reads:
    /// - `MONGODB_URI` - Optional, defaults to `mongodb://localhost:27017`
    /// - `MONGODB_DATABASE` - Optional, defaults to `note-taking-api`
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let uri = std::env::var("MONGODB_URI").unwrap_or(defaults.uri);
        let database = std::env::var("MONGODB_DATABASE").unwrap_or(defaults.database);

        Self { uri, database }
    }
}

/// Parse a client-supplied identifier into an `ObjectId`.
///
/// A malformed string is a `StoreError::InvalidId`, which callers treat
/// as a persistence failure rather than a missing record.
pub fn parse_object_id(id: &str) -> StoreResult<ObjectId> {
    Ok(ObjectId::parse_str(id)?)
}

/// Database store for the notes API.
///
/// Cloneable handle over the two collections. Keeps no in-process state
/// beyond the driver's own connection pool.
#[derive(Debug, Clone)]
pub struct Store {
    db: Database,
}

impl Store {
    /// Connect to the store with the given configuration.
    ///
    /// The driver connects lazily, so a `ping` is issued here to surface
    /// connection failures at startup rather than on the first request.
    pub async fn connect(config: StoreConfig) -> StoreResult<Self> {
        tracing::info!(database = %config.database, "Connecting to document store...");

        let client = Client::with_uri_str(&config.uri).await?;
        let db = client.database(&config.database);
        db.run_command(doc! { "ping": 1 }).await?;

        tracing::info!("Connected to document store");

        Ok(Self { db })
    }

    /// Get a reference to the underlying database handle.
    pub fn database(&self) -> &Database {
        &self.db
    }

    fn notes(&self) -> Collection<Note> {
        self.db.collection(NOTES_COLLECTION)
    }

    fn categories(&self) -> Collection<Category> {
        self.db.collection(CATEGORIES_COLLECTION)
    }

    // ==================== Note Operations ====================

    /// List all notes.
    pub async fn list_notes(&self) -> StoreResult<Vec<Note>> {
        Ok(self.notes().find(doc! {}).await?.try_collect().await?)
    }

    /// List all notes referencing the given category.
    pub async fn list_notes_by_category(&self, category_id: &str) -> StoreResult<Vec<Note>> {
        let category_id = parse_object_id(category_id)?;
        Ok(self
            .notes()
            .find(doc! { "categoryId": category_id })
            .await?
            .try_collect()
            .await?)
    }

    /// Get a note by id, or `None` when no note matches.
    pub async fn get_note(&self, id: &str) -> StoreResult<Option<Note>> {
        let id = parse_object_id(id)?;
        Ok(self.notes().find_one(doc! { "_id": id }).await?)
    }

    /// Check whether a note with the given id exists.
    pub async fn note_exists(&self, id: &str) -> StoreResult<bool> {
        let id = parse_object_id(id)?;
        let count = self
            .notes()
            .count_documents(doc! { "_id": id })
            .limit(1)
            .await?;
        Ok(count > 0)
    }

    /// Insert a new note, assigning its id and timestamps.
    ///
    /// `created_at` and `updated_at` are both set to the insertion time;
    /// later updates do not touch either field.
    pub async fn insert_note(&self, new: NewNote) -> StoreResult<Note> {
        let now = bson::DateTime::now().to_chrono();
        let note = Note {
            id: ObjectId::new(),
            title: new.title,
            content: new.content,
            created_at: now,
            updated_at: now,
            category_id: parse_object_id(&new.category_id)?,
        };

        self.notes().insert_one(&note).await?;

        tracing::debug!(note_id = %note.id, "Inserted note");
        Ok(note)
    }

    /// Merge the present fields of `update` into a note and return the
    /// updated document, or `None` when no note matches.
    ///
    /// `updated_at` is not part of the merge; it keeps its creation value.
    pub async fn update_note(&self, id: &str, update: NoteUpdate) -> StoreResult<Option<Note>> {
        let id = parse_object_id(id)?;

        let Some(set) = note_update_document(&update)? else {
            // Nothing to merge; report the current document.
            return Ok(self.notes().find_one(doc! { "_id": id }).await?);
        };

        Ok(self
            .notes()
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await?)
    }

    /// Delete a note by id and return the deleted document, or `None`
    /// when no note matches.
    pub async fn delete_note(&self, id: &str) -> StoreResult<Option<Note>> {
        let id = parse_object_id(id)?;
        Ok(self.notes().find_one_and_delete(doc! { "_id": id }).await?)
    }

    // ==================== Category Operations ====================

    /// List all categories.
    pub async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.categories().find(doc! {}).await?.try_collect().await?)
    }

    /// Get a category by id, or `None` when no category matches.
    pub async fn get_category(&self, id: &str) -> StoreResult<Option<Category>> {
        let id = parse_object_id(id)?;
        Ok(self.categories().find_one(doc! { "_id": id }).await?)
    }

    /// Check whether a category with the given id exists.
    pub async fn category_exists(&self, id: &str) -> StoreResult<bool> {
        let id = parse_object_id(id)?;
        let count = self
            .categories()
            .count_documents(doc! { "_id": id })
            .limit(1)
            .await?;
        Ok(count > 0)
    }

    /// Insert a new category, assigning its id.
    pub async fn insert_category(&self, new: NewCategory) -> StoreResult<Category> {
        let category = Category {
            id: ObjectId::new(),
            name: new.name,
        };

        self.categories().insert_one(&category).await?;

        tracing::debug!(category_id = %category.id, "Inserted category");
        Ok(category)
    }

    /// Merge the present fields of `update` into a category and return
    /// the updated document, or `None` when no category matches.
    pub async fn update_category(
        &self,
        id: &str,
        update: CategoryUpdate,
    ) -> StoreResult<Option<Category>> {
        let id = parse_object_id(id)?;

        let Some(set) = category_update_document(&update) else {
            return Ok(self.categories().find_one(doc! { "_id": id }).await?);
        };

        Ok(self
            .categories()
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await?)
    }

    /// Delete a category by id and return the deleted document, or `None`
    /// when no category matches.
    ///
    /// Notes referencing the category are left in place; their
    /// `categoryId` dangles afterwards.
    pub async fn delete_category(&self, id: &str) -> StoreResult<Option<Category>> {
        let id = parse_object_id(id)?;
        Ok(self
            .categories()
            .find_one_and_delete(doc! { "_id": id })
            .await?)
    }
}

/// Build the `$set` document for a partial note update.
///
/// Returns `None` when no fields are present. The document never carries
/// `updatedAt`; updates leave it at its creation value.
fn note_update_document(update: &NoteUpdate) -> StoreResult<Option<Document>> {
    let mut set = Document::new();
    if let Some(title) = &update.title {
        set.insert("title", title);
    }
    if let Some(content) = &update.content {
        set.insert("content", content);
    }
    if let Some(category_id) = &update.category_id {
        set.insert("categoryId", parse_object_id(category_id)?);
    }
    Ok((!set.is_empty()).then_some(set))
}

/// Build the `$set` document for a partial category update.
fn category_update_document(update: &CategoryUpdate) -> Option<Document> {
    update.name.as_ref().map(|name| doc! { "name": name })
}
