use std::path::{Path, PathBuf};

use crate::store::DEFAULT_BIRTHDAY_WINDOW;

pub const CONTACTS_FILE: &str = "contacts";
pub const NOTES_FILE: &str = "notes";

/// Where the snapshots live and how far ahead `birthdays` looks by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub contacts_path: PathBuf,
    pub notes_path: PathBuf,
    pub birthday_window: u32,
}

impl Config {
    /// Default file names inside `data_dir`.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self {
            contacts_path: data_dir.join(CONTACTS_FILE),
            notes_path: data_dir.join(NOTES_FILE),
            birthday_window: DEFAULT_BIRTHDAY_WINDOW,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            contacts_path: PathBuf::from(CONTACTS_FILE),
            notes_path: PathBuf::from(NOTES_FILE),
            birthday_window: DEFAULT_BIRTHDAY_WINDOW,
        }
    }
}
