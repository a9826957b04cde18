pub mod schema;
pub mod contact_repo;
pub mod note_repo;
pub mod snapshot;
