use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::notes::application::domain::entities::Note;
use crate::modules::notes::application::ports::outgoing::NoteRepository;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListNotesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IListNotesUseCase: Send + Sync {
    async fn execute(&self, owner: Uuid) -> Result<Vec<Note>, ListNotesError>;
}

/// Returns the caller's notes, newest first. An owner with no notes
/// gets an empty list, never an error.
pub struct ListNotesUseCase<R>
where
    R: NoteRepository + Send + Sync,
{
    repository: R,
}

impl<R> ListNotesUseCase<R>
where
    R: NoteRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IListNotesUseCase for ListNotesUseCase<R>
where
    R: NoteRepository + Send + Sync,
{
    async fn execute(&self, owner: Uuid) -> Result<Vec<Note>, ListNotesError> {
        self.repository
            .list_by_owner(owner)
            .await
            .map_err(|e| ListNotesError::RepositoryError(e.to_string()))
    }
}
