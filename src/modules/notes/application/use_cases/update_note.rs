use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::notes::application::domain::entities::Note;
use crate::modules::notes::application::ports::outgoing::{
    NoteRepository, NoteRepositoryError, NoteUpdate,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateNoteError {
    #[error("Title is required")]
    MissingTitle,

    #[error("Content is required")]
    MissingContent,

    // Someone else's note reports the same way as a missing one
    #[error("Note not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, Default)]
pub struct UpdateNoteInput {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[async_trait]
pub trait IUpdateNoteUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: Uuid,
        note_id: Uuid,
        input: UpdateNoteInput,
    ) -> Result<Note, UpdateNoteError>;
}

/// Full replacement of a note's title and content, gated on ownership.
pub struct UpdateNoteUseCase<R>
where
    R: NoteRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateNoteUseCase<R>
where
    R: NoteRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IUpdateNoteUseCase for UpdateNoteUseCase<R>
where
    R: NoteRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: Uuid,
        note_id: Uuid,
        input: UpdateNoteInput,
    ) -> Result<Note, UpdateNoteError> {
        let title = input
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(UpdateNoteError::MissingTitle)?
            .to_string();
        let content = input
            .content
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or(UpdateNoteError::MissingContent)?
            .to_string();

        self.repository
            .update_note(note_id, owner, NoteUpdate { title, content })
            .await
            .map_err(|e| match e {
                NoteRepositoryError::NoteNotFound => UpdateNoteError::NotFound,
                NoteRepositoryError::DatabaseError(msg) => UpdateNoteError::RepositoryError(msg),
            })
    }
}
