use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::notes::application::domain::entities::{NewNote, Note};
use crate::modules::notes::application::ports::outgoing::NoteRepository;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateNoteError {
    #[error("Title is required")]
    MissingTitle,

    #[error("Content is required")]
    MissingContent,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, Default)]
pub struct CreateNoteInput {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[async_trait]
pub trait ICreateNoteUseCase: Send + Sync {
    async fn execute(&self, owner: Uuid, input: CreateNoteInput) -> Result<Note, CreateNoteError>;
}

pub struct CreateNoteUseCase<R>
where
    R: NoteRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateNoteUseCase<R>
where
    R: NoteRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ICreateNoteUseCase for CreateNoteUseCase<R>
where
    R: NoteRepository + Send + Sync,
{
    async fn execute(&self, owner: Uuid, input: CreateNoteInput) -> Result<Note, CreateNoteError> {
        // Whitespace-only fields count as absent
        let title = input
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(CreateNoteError::MissingTitle)?
            .to_string();
        let content = input
            .content
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or(CreateNoteError::MissingContent)?
            .to_string();

        self.repository
            .insert_note(NewNote {
                user_id: owner,
                title,
                content,
            })
            .await
            .map_err(|e| CreateNoteError::RepositoryError(e.to_string()))
    }
}
