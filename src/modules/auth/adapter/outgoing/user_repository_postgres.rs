use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{NewUser, User};
use crate::auth::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity, Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_user(model: UserModel) -> User {
        User {
            id: model.id,
            email: model.email,
            name: model.name,
            date_of_birth: model.date_of_birth,
            is_google_user: model.is_google_user,
            is_verified: model.is_verified,
            otp: model.otp,
            otp_expires: model.otp_expires.map(|t| t.with_timezone(&Utc)),
            google_id: model.google_id,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }

    fn map_db_error(e: sea_orm::DbErr) -> UserRepositoryError {
        let err_str = e.to_string().to_lowercase();
        if err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
        {
            return UserRepositoryError::DuplicateEmail;
        }
        UserRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        let found = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(found.map(Self::map_to_user))
    }

    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(user.email),
            name: Set(user.name),
            date_of_birth: Set(user.date_of_birth),
            is_google_user: Set(user.is_google_user),
            is_verified: Set(user.is_verified),
            otp: Set(user.otp),
            otp_expires: Set(user.otp_expires.map(Into::into)),
            google_id: Set(user.google_id),
            created_at: NotSet,
            updated_at: NotSet,
        };

        // A concurrent insert for the same email loses at the unique
        // index, which must surface as DuplicateEmail
        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(Self::map_db_error)?;

        Ok(Self::map_to_user(inserted))
    }

    async fn save_user(&self, user: User) -> Result<User, UserRepositoryError> {
        let existing = UserEntity::find_by_id(user.id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let mut active_user: UserActiveModel = existing.into();
        active_user.email = Set(user.email);
        active_user.name = Set(user.name);
        active_user.date_of_birth = Set(user.date_of_birth);
        active_user.is_verified = Set(user.is_verified);
        active_user.otp = Set(user.otp);
        active_user.otp_expires = Set(user.otp_expires.map(Into::into));
        active_user.google_id = Set(user.google_id);
        active_user.updated_at = Set(Utc::now().into());

        let updated = active_user
            .update(&*self.db)
            .await
            .map_err(Self::map_db_error)?;

        Ok(Self::map_to_user(updated))
    }
}
