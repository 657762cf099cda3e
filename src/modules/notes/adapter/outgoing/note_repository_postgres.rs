use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::notes::application::domain::entities::{NewNote, Note};
use crate::notes::application::ports::outgoing::note_repository::{
    NoteRepository, NoteRepositoryError, NoteUpdate,
};

use super::sea_orm_entity::notes::{
    ActiveModel as NoteActiveModel, Column as NoteColumn, Entity as NoteEntity, Model as NoteModel,
};

#[derive(Clone, Debug)]
pub struct NoteRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl NoteRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_note(model: NoteModel) -> Note {
        Note {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            content: model.content,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

#[async_trait]
impl NoteRepository for NoteRepositoryPostgres {
    async fn list_by_owner(&self, owner: Uuid) -> Result<Vec<Note>, NoteRepositoryError> {
        let rows = NoteEntity::find()
            .filter(NoteColumn::UserId.eq(owner))
            .order_by_desc(NoteColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| NoteRepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Self::map_to_note).collect())
    }

    async fn insert_note(&self, note: NewNote) -> Result<Note, NoteRepositoryError> {
        let active_note = NoteActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(note.user_id),
            title: Set(note.title),
            content: Set(note.content),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_note
            .insert(&*self.db)
            .await
            .map_err(|e| NoteRepositoryError::DatabaseError(e.to_string()))?;

        Ok(Self::map_to_note(inserted))
    }

    async fn update_note(
        &self,
        id: Uuid,
        owner: Uuid,
        update: NoteUpdate,
    ) -> Result<Note, NoteRepositoryError> {
        // Ownership is part of the match; a foreign id fetches nothing
        let existing = NoteEntity::find()
            .filter(NoteColumn::Id.eq(id))
            .filter(NoteColumn::UserId.eq(owner))
            .one(&*self.db)
            .await
            .map_err(|e| NoteRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(NoteRepositoryError::NoteNotFound)?;

        let mut active_note: NoteActiveModel = existing.into();
        active_note.title = Set(update.title);
        active_note.content = Set(update.content);
        active_note.updated_at = Set(Utc::now().into());

        let updated = active_note
            .update(&*self.db)
            .await
            .map_err(|e| NoteRepositoryError::DatabaseError(e.to_string()))?;

        Ok(Self::map_to_note(updated))
    }

    async fn delete_note(&self, id: Uuid, owner: Uuid) -> Result<(), NoteRepositoryError> {
        let outcome = NoteEntity::delete_many()
            .filter(NoteColumn::Id.eq(id))
            .filter(NoteColumn::UserId.eq(owner))
            .exec(&*self.db)
            .await
            .map_err(|e| NoteRepositoryError::DatabaseError(e.to_string()))?;

        if outcome.rows_affected == 0 {
            return Err(NoteRepositoryError::NoteNotFound);
        }
        Ok(())
    }
}
