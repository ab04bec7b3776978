//! Note persistence behind a single object-safe interface.
//!
//! The backend is chosen once at startup from [`StorageConfig`] and shared as
//! `Arc<dyn NoteStore>`; handlers never branch on which one is active.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::config::StorageConfig;

use super::model::{Note, NoteInput};

mod file;
mod supabase;

pub use file::FileNoteStore;
pub use supabase::SupabaseNoteStore;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access notes file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Notes file is corrupt: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("{context}: {message}")]
    Remote {
        context: &'static str,
        message: String,
    },
    #[error("{context}: {source}")]
    Transport {
        context: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("Invalid storage configuration: {0}")]
    Configuration(String),
}

pub type StoreResult<T> = Result<T, StorageError>;

#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Short label for logs.
    fn backend_name(&self) -> &'static str;

    /// All notes, most recently updated first.
    async fn list(&self) -> StoreResult<Vec<Note>>;

    /// Persists a new note with a fresh id and both timestamps set to now.
    async fn create(&self, input: NoteInput) -> StoreResult<Note>;

    /// Replaces title and content. `None` when no note has this id.
    async fn update(&self, id: Uuid, input: NoteInput) -> StoreResult<Option<Note>>;

    /// Hard delete. `false` when nothing was removed.
    async fn delete(&self, id: Uuid) -> StoreResult<bool>;
}

pub fn from_config(config: &StorageConfig) -> StoreResult<Arc<dyn NoteStore>> {
    match config {
        StorageConfig::File { path } => Ok(Arc::new(FileNoteStore::new(path.clone()))),
        StorageConfig::Remote { url, api_key } => {
            Ok(Arc::new(SupabaseNoteStore::new(url, api_key)?))
        }
    }
}
