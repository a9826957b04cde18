pub mod fields;
pub mod record;
pub mod note;

// Re-exports for convenience
pub use fields::{Address, Birthday, Email, Name, Phone};
pub use record::Record;
pub use note::Note;
