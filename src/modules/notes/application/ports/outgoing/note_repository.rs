use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::notes::application::domain::entities::{NewNote, Note};

#[derive(Debug, Clone, thiserror::Error)]
pub enum NoteRepositoryError {
    // Covers both "no such note" and "someone else's note"; the store
    // does not distinguish them and neither may callers
    #[error("Note not found")]
    NoteNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Replacement fields for an existing note.
#[derive(Debug, Clone)]
pub struct NoteUpdate {
    pub title: String,
    pub content: String,
}

#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// All notes owned by `owner`, newest first.
    async fn list_by_owner(&self, owner: Uuid) -> Result<Vec<Note>, NoteRepositoryError>;

    async fn insert_note(&self, note: NewNote) -> Result<Note, NoteRepositoryError>;

    /// Updates the note matched by id AND owner, refreshing its
    /// `updated_at`.
    async fn update_note(
        &self,
        id: Uuid,
        owner: Uuid,
        update: NoteUpdate,
    ) -> Result<Note, NoteRepositoryError>;

    /// Deletes the note matched by id AND owner.
    async fn delete_note(&self, id: Uuid, owner: Uuid) -> Result<(), NoteRepositoryError>;
}
