use std::io::{self, BufRead, Write};

use chrono::Local;
use log::error;

use crate::config::Config;
use crate::error::HolocronError;
use crate::store::{ContactStore, NoteStore};

/// Everything a command handler may touch: both stores, the configuration
/// and the input the session reads from.
pub struct AppContext {
    pub contacts: ContactStore,
    pub notes: NoteStore,
    pub config: Config,
    input: Box<dyn BufRead>,
}

impl AppContext {
    pub fn new(contacts: ContactStore, notes: NoteStore, config: Config) -> Self {
        Self::with_input(contacts, notes, config, Box::new(io::BufReader::new(io::stdin())))
    }

    /// Reads commands and prompt answers from `input` instead of stdin.
    pub fn with_input(
        contacts: ContactStore,
        notes: NoteStore,
        config: Config,
        input: Box<dyn BufRead>,
    ) -> Self {
        Self {
            contacts,
            notes,
            config,
            input,
        }
    }

    /// Prompt and read a line. Returns None on EOF.
    pub fn read_line(&mut self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match self.input.read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(e) => {
                error!("failed to read input: {}", e);
                None
            }
        }
    }

    /// Read a line, trimmed.
    pub fn prompt(&mut self, prompt: &str) -> Option<String> {
        self.read_line(prompt).map(|s| s.trim().to_string())
    }

    pub fn today() -> chrono::NaiveDate {
        Local::now().date_naive()
    }

    /// Print an error.
    pub fn print_error(&self, e: &HolocronError) {
        println!("Error: {}", e);
    }
}
