use std::path::PathBuf;

use clap::Parser;
use log::{error, info};

use holocron::config::{Config, CONTACTS_FILE, NOTES_FILE};
use holocron::queries::birthday_queries::MAX_WINDOW_DAYS;
use holocron::store::DEFAULT_BIRTHDAY_WINDOW;

/// Contact book and notes in your terminal.
#[derive(Parser, Debug)]
#[command(name = "holocron", version, long_about = None)]
struct Args {
    /// Directory holding the contacts and notes files
    #[arg(short = 'd', long, default_value = ".")]
    data_dir: PathBuf,

    /// Contacts snapshot file name, relative to the data directory
    #[arg(long, default_value = CONTACTS_FILE)]
    contacts_file: String,

    /// Notes snapshot file name, relative to the data directory
    #[arg(long, default_value = NOTES_FILE)]
    notes_file: String,

    /// Default number of days `birthdays` looks ahead
    #[arg(
        short = 'b',
        long,
        default_value_t = DEFAULT_BIRTHDAY_WINDOW,
        value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_WINDOW_DAYS))
    )]
    birthday_days: u32,
}

impl Args {
    fn into_config(self) -> Config {
        Config {
            contacts_path: self.data_dir.join(self.contacts_file),
            notes_path: self.data_dir.join(self.notes_file),
            birthday_window: self.birthday_days,
        }
    }
}

fn initialize_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .format_module_path(true)
        .init();

    info!("Logger initialized");
}

fn main() {
    initialize_logger();
    let args = Args::parse();

    if !args.data_dir.exists() {
        if let Err(e) = std::fs::create_dir_all(&args.data_dir) {
            error!("cannot create {}: {}", args.data_dir.display(), e);
            eprintln!("Error: cannot create data directory {}: {}", args.data_dir.display(), e);
            return;
        }
    }

    let config = args.into_config();
    info!(
        "starting with contacts at {} and notes at {}",
        config.contacts_path.display(),
        config.notes_path.display()
    );
    holocron::cli::run(config);
}
