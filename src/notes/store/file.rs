use std::path::PathBuf;

use async_trait::async_trait;
use tokio::{fs, sync::Mutex};
use uuid::Uuid;

use super::{NoteStore, StoreResult};
use crate::notes::model::{Note, NoteInput};

/// Keeps every note in one pretty-printed JSON array.
///
/// Each operation reads the whole file, edits it in memory and writes it back.
/// Operations inside one process are serialised by `lock`; separate processes
/// sharing the file can still overwrite each other.
pub struct FileNoteStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileNoteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    async fn ensure_file(&self) -> StoreResult<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).await?;
        }
        if !fs::try_exists(&self.path).await? {
            fs::write(&self.path, "[]").await?;
        }
        Ok(())
    }

    /// Notes sorted by `updated_at` descending; ties keep file order.
    async fn read_notes(&self) -> StoreResult<Vec<Note>> {
        self.ensure_file().await?;
        let raw = fs::read(&self.path).await?;
        let mut notes: Vec<Note> = serde_json::from_slice(&raw)?;
        notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(notes)
    }

    async fn write_notes(&self, notes: &[Note]) -> StoreResult<()> {
        self.ensure_file().await?;
        let raw = serde_json::to_vec_pretty(notes)?;
        fs::write(&self.path, raw).await?;
        Ok(())
    }
}

#[async_trait]
impl NoteStore for FileNoteStore {
    fn backend_name(&self) -> &'static str {
        "file"
    }

    async fn list(&self) -> StoreResult<Vec<Note>> {
        let _guard = self.lock.lock().await;
        self.read_notes().await
    }

    async fn create(&self, input: NoteInput) -> StoreResult<Note> {
        let _guard = self.lock.lock().await;
        let mut notes = self.read_notes().await?;
        let note = Note::new(input);
        notes.insert(0, note.clone());
        self.write_notes(&notes).await?;
        Ok(note)
    }

    async fn update(&self, id: Uuid, input: NoteInput) -> StoreResult<Option<Note>> {
        let _guard = self.lock.lock().await;
        let mut notes = self.read_notes().await?;
        let Some(note) = notes.iter_mut().find(|n| n.id == id) else {
            return Ok(None);
        };
        note.apply(input);
        let updated = note.clone();
        self.write_notes(&notes).await?;
        tracing::debug!(%id, "note updated");
        Ok(Some(updated))
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        let _guard = self.lock.lock().await;
        let mut notes = self.read_notes().await?;
        let before = notes.len();
        notes.retain(|n| n.id != id);
        let changed = notes.len() != before;
        if changed {
            self.write_notes(&notes).await?;
        }
        Ok(changed)
    }
}
