pub mod contact_store;
pub mod note_store;

pub use contact_store::{ContactStore, DEFAULT_BIRTHDAY_WINDOW};
pub use note_store::NoteStore;
