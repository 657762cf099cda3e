use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::notes::application::ports::outgoing::{NoteRepository, NoteRepositoryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteNoteError {
    #[error("Note not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IDeleteNoteUseCase: Send + Sync {
    async fn execute(&self, owner: Uuid, note_id: Uuid) -> Result<(), DeleteNoteError>;
}

pub struct DeleteNoteUseCase<R>
where
    R: NoteRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteNoteUseCase<R>
where
    R: NoteRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IDeleteNoteUseCase for DeleteNoteUseCase<R>
where
    R: NoteRepository + Send + Sync,
{
    async fn execute(&self, owner: Uuid, note_id: Uuid) -> Result<(), DeleteNoteError> {
        self.repository
            .delete_note(note_id, owner)
            .await
            .map_err(|e| match e {
                NoteRepositoryError::NoteNotFound => DeleteNoteError::NotFound,
                NoteRepositoryError::DatabaseError(msg) => DeleteNoteError::RepositoryError(msg),
            })
    }
}
