use crate::cli::context::AppContext;
use crate::error::{HolocronError, HolocronResult};

/// `noteadd:<title>:<text>`, then asks for comma-separated tags.
pub fn add(ctx: &mut AppContext, args: &str) -> HolocronResult<String> {
    let (title, text) = two_args(args, "noteadd:<title>:<text>")?;
    ctx.notes.add_note(title, text, Vec::new())?;

    let answer = ctx
        .prompt("Note was added.\nDo you want to add tags?\nIf yes, write separate by \",\", if not, put \"n\": ")
        .unwrap_or_default();
    if answer.is_empty() || answer.eq_ignore_ascii_case("n") {
        return Ok(String::new());
    }

    let mut added = 0;
    for tag in answer.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        ctx.notes.add_tag_to(title, tag)?;
        added += 1;
    }
    Ok(format!("Added {} tag(s)", added))
}

pub fn all(ctx: &AppContext) -> String {
    if ctx.notes.is_empty() {
        return "No notes".into();
    }
    ctx.notes
        .notes()
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn find(ctx: &AppContext, args: &str) -> HolocronResult<String> {
    let title = one_arg(args, "notesfind:<title>")?;
    Ok(match ctx.notes.search_by_title(title) {
        Some(note) => note.to_string(),
        None => "No such note".into(),
    })
}

pub fn edit(ctx: &mut AppContext, args: &str) -> HolocronResult<String> {
    let (title, text) = two_args(args, "notesedit:<title>:<text>")?;
    Ok(if ctx.notes.edit_by_title(title, text) {
        "Text was changed".into()
    } else {
        format!("Note with title '{}' was not found", title)
    })
}

pub fn remove(ctx: &mut AppContext, args: &str) -> HolocronResult<String> {
    let title = one_arg(args, "notesremove:<title>")?;
    Ok(match ctx.notes.remove_note(title) {
        Some(_) => "Note deleted".into(),
        None => format!("Note with title '{}' was not found", title),
    })
}

pub fn find_by_tag(ctx: &AppContext, args: &str) -> HolocronResult<String> {
    let tag = one_arg(args, "findbytag:<tag>")?;
    let found = ctx.notes.search_by_tag(tag);
    if found.is_empty() {
        return Ok("No notes with this tag".into());
    }
    Ok(found
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn add_tag(ctx: &mut AppContext, args: &str) -> HolocronResult<String> {
    let (title, tag) = two_args(args, "addtag:<title>:<tag>")?;
    let note = ctx.notes.add_tag_to(title, tag)?;
    Ok(note.to_string())
}

/// Arguments after the command word, split on `:`. Accepts both
/// `cmd:a:b` and `cmd : a : b`.
fn colon_parts(args: &str, max: usize) -> Vec<&str> {
    let args = args.trim();
    let args = args.strip_prefix(':').unwrap_or(args);
    args.splitn(max, ':').map(str::trim).collect()
}

fn one_arg<'a>(args: &'a str, usage: &str) -> HolocronResult<&'a str> {
    match colon_parts(args, 1).as_slice() {
        [arg] if !arg.is_empty() => Ok(*arg),
        _ => Err(HolocronError::wrong_arity(usage)),
    }
}

/// The second argument keeps any further colons.
fn two_args<'a>(args: &'a str, usage: &str) -> HolocronResult<(&'a str, &'a str)> {
    match colon_parts(args, 2).as_slice() {
        [first, second] if !first.is_empty() => Ok((*first, *second)),
        _ => Err(HolocronError::wrong_arity(usage)),
    }
}
