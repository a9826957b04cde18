pub mod context;
pub mod contact_commands;
pub mod note_commands;

use log::{debug, error, info, warn};

use crate::config::Config;
use crate::db::snapshot;
use crate::error::{HolocronError, HolocronResult};
use crate::store::{ContactStore, NoteStore};
use context::AppContext;

/// What the session should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this text (possibly empty) and keep going.
    Reply(String),
    /// Save both stores and stop.
    Exit,
}

/// Load both snapshots and run the interactive session on stdin.
pub fn run(config: Config) {
    let contacts = match snapshot::load_contacts(&config.contacts_path) {
        Ok(Some(store)) => {
            println!("AddressBook data loaded from file.");
            store
        }
        Ok(None) => {
            println!("No data found in AddressBook file. Creating a new one.");
            ContactStore::new()
        }
        Err(e) => {
            error!("failed to load {}: {}", config.contacts_path.display(), e);
            eprintln!("Error loading contacts: {}", e);
            return;
        }
    };

    let notes = match snapshot::load_notes(&config.notes_path) {
        Ok(Some(store)) => {
            println!("NotesBook data loaded from file.");
            store
        }
        Ok(None) => {
            println!("No data found in NotesBook file. Creating a new one.");
            NoteStore::new()
        }
        Err(e) => {
            error!("failed to load {}: {}", config.notes_path.display(), e);
            eprintln!("Error loading notes: {}", e);
            return;
        }
    };

    let mut ctx = AppContext::new(contacts, notes, config);
    run_session(&mut ctx);
}

/// Read-dispatch loop. Ends on a close command or end of input, and saves
/// both stores either way.
pub fn run_session(ctx: &mut AppContext) {
    println!("Type 'help' for commands, 'close' to save and quit.");

    loop {
        let input = match ctx.read_line("Enter a command: ") {
            Some(s) => s,
            None => {
                info!("end of input, closing session");
                break;
            }
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        match execute(ctx, input) {
            Outcome::Reply(text) => {
                if !text.is_empty() {
                    println!("{}", text);
                }
            }
            Outcome::Exit => break,
        }
    }

    match persist(ctx) {
        Ok(()) => println!("Good bye! May the Force be with you!"),
        Err(e) => ctx.print_error(&e),
    }
}

/// Save both stores to their configured files.
///
/// Both saves are always attempted; a failure of one does not skip the other.
pub fn persist(ctx: &AppContext) -> HolocronResult<()> {
    let mut failures = Vec::new();

    if let Err(e) = snapshot::save_contacts(&ctx.config.contacts_path, &ctx.contacts) {
        error!("failed to save contacts to {}: {}", ctx.config.contacts_path.display(), e);
        failures.push(format!("contacts: {}", e));
    }
    if let Err(e) = snapshot::save_notes(&ctx.config.notes_path, &ctx.notes) {
        error!("failed to save notes to {}: {}", ctx.config.notes_path.display(), e);
        failures.push(format!("notes: {}", e));
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(HolocronError::Other(format!("Save failed ({})", failures.join("; "))))
    }
}

/// Run one command line against the context.
pub fn execute(ctx: &mut AppContext, input: &str) -> Outcome {
    let (command, args) = parse_command(input);
    debug!("command {:?} args {:?}", command, args);

    let reply = match command {
        "close" | "exit" | "end" | "bye" => return Outcome::Exit,
        "hello" | "hi" => contact_commands::hello(),
        "help" | "?" | "how" => HELP.trim_start().to_string(),
        "note-help" | "notes-help" | "notehelp" | "noteshelp" => NOTES_HELP.trim_start().to_string(),

        // Contacts
        "add-contact" => report(command, contact_commands::add(ctx)),
        "phone" => report(command, contact_commands::phone(ctx, args)),
        "change-phone" => report(command, contact_commands::change_phone(ctx, args)),
        "add-phone" => report(command, contact_commands::add_phone(ctx, args)),
        "remove-phone" => report(command, contact_commands::remove_phone(ctx, args)),
        "add-address" => report(command, contact_commands::add_address(ctx, args)),
        "add-email" => report(command, contact_commands::add_email(ctx, args)),
        "change-birthday" => report(command, contact_commands::change_birthday(ctx, args)),
        "show-birthday" => report(command, contact_commands::show_birthday(ctx, args)),
        "delete" => report(command, contact_commands::delete(ctx, args)),
        "all" => contact_commands::all(ctx),
        "findall" => report(command, contact_commands::find_all(ctx, args)),
        "birthdays" => report(command, contact_commands::birthdays(ctx, args)),

        // Notes
        "noteadd" => report(command, note_commands::add(ctx, args)),
        "notesall" => note_commands::all(ctx),
        "notesfind" => report(command, note_commands::find(ctx, args)),
        "notesedit" => report(command, note_commands::edit(ctx, args)),
        "notesremove" => report(command, note_commands::remove(ctx, args)),
        "findbytag" => report(command, note_commands::find_by_tag(ctx, args)),
        "addtag" => report(command, note_commands::add_tag(ctx, args)),

        _ => {
            warn!("unknown command {:?}", command);
            format!("Invalid command young Jedi. Try again!\n{}", HELP.trim_start())
        }
    };

    Outcome::Reply(reply)
}

/// Turn a handler result into printable text. Input mistakes become guidance;
/// anything else is logged against the handler and summarized.
pub fn report(handler: &str, result: HolocronResult<String>) -> String {
    match result {
        Ok(text) => text,
        Err(e) if e.is_validation() => format!(
            "{}. Make sure you provide data in the correct format. Enter <?> for the instructions",
            e
        ),
        Err(HolocronError::NotFound { entity_type, id }) if entity_type == "Contact" => format!(
            "There is no such contact young Padawan: {}. <add-contact> first!",
            id
        ),
        Err(e) if e.is_user_error() => e.to_string(),
        Err(e) => {
            error!("unexpected error in {}: {}", handler, e);
            format!("Unexpected exception young Jedi {}: in {}", e, handler)
        }
    }
}

/// Split input into command and args. The command ends at the first
/// whitespace or colon, so both `phone Luke` and `notesfind:Title` work.
pub fn parse_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.find(|c: char| c.is_whitespace() || c == ':') {
        Some(pos) => (&input[..pos], input[pos..].trim()),
        None => (input, ""),
    }
}

const HELP: &str = r#"
COMMANDS:

  Contacts:
    add-contact                           Add a contact (prompts for name, phone, address, birthday, email)
    add-phone <name> <phone>              Add a phone to an existing contact
    remove-phone <name> <phone>           Remove one of a contact's phones
    change-phone <name> <old> <new>       Replace a phone
    add-email <name> <email>              Set a contact's email
    add-address <name> <address>          Set a contact's address (rest of the line)
    change-birthday <name> <DD.MM.YYYY>   Set a contact's birthday
    show-birthday <name>                  Show a contact's birthday
    phone <name>                          Show a contact's phones
    findall <criteria>                    Search contacts (min. 3 symbols)
    birthdays [<days>]                    Upcoming birthdays (default 7 days, at most 366)
    all                                   Show the whole address book
    delete <name>                         Delete a contact

  Other:
    notes-help                            Notes commands
    hello                                 Say hello
    help / ? / how                        Show this help
    close / exit / end / bye              Save and quit"#;

const NOTES_HELP: &str = r#"
NOTES:

    noteadd:<title>:<text>                Add a note (then asks for tags, comma-separated)
    notesall                              Show all notes
    notesfind:<title>                     Find a note by title
    notesedit:<title>:<text>              Replace a note's text
    notesremove:<title>                   Remove a note
    findbytag:<tag>                       Find notes by tag
    addtag:<title>:<tag>                  Add a tag to a note"#;
