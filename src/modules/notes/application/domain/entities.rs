use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A user-owned text note. Visibility and mutation are scoped to the
/// owner; other identities see it as nonexistent.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields a caller controls when a note is first created.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
}
