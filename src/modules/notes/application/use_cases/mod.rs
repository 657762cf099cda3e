pub mod create_note;
pub mod delete_note;
pub mod list_notes;
pub mod update_note;
