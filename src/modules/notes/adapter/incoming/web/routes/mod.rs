mod create_note;
mod delete_note;
mod list_notes;
mod update_note;

pub use create_note::{create_note_handler, CreateNoteRequest, __path_create_note_handler};
pub use delete_note::{delete_note_handler, __path_delete_note_handler};
pub use list_notes::{list_notes_handler, NoteDto, __path_list_notes_handler};
pub use update_note::{update_note_handler, UpdateNoteRequest, __path_update_note_handler};
