use crate::cli::context::AppContext;
use crate::error::{HolocronError, HolocronResult};
use crate::model::{Name, Phone};
use crate::queries::birthday_queries::{BirthdayBucket, MAX_WINDOW_DAYS};

const BACK_TO_MENU: &str = "Exited to main menu";

pub fn hello() -> String {
    "Greetings! How can I help you young Jedi?".into()
}

/// Interactive add: name and phone are re-prompted until valid, the rest may
/// be left blank. Typing `close` at either required prompt abandons the add.
pub fn add(ctx: &mut AppContext) -> HolocronResult<String> {
    let name = match prompt_until_valid(
        ctx,
        "Enter Name: ",
        Name::is_valid,
        "Please use valid name young Jedi, or type 'close' to exit in main menu",
    ) {
        Some(n) => n,
        None => return Ok(BACK_TO_MENU.into()),
    };

    let phone = match prompt_until_valid(
        ctx,
        "Enter Phone: ",
        Phone::is_valid,
        "Please use valid phone number young Jedi, or 'close' to exit in main menu",
    ) {
        Some(p) => p,
        None => return Ok(BACK_TO_MENU.into()),
    };

    let address = ctx.prompt("Enter Address: ").unwrap_or_default();
    let birthday = ctx
        .prompt("Enter Birthday in DD.MM.YYYY format: ")
        .unwrap_or_default();
    let email = ctx.prompt("Enter Email: ").unwrap_or_default();

    ctx.contacts.add_record(
        &name,
        &phone,
        Some(&address),
        Some(&birthday),
        Some(&email),
    )?;
    Ok("Contact added. May the Force be with you!".into())
}

fn prompt_until_valid(
    ctx: &mut AppContext,
    prompt: &str,
    is_valid: fn(&str) -> bool,
    retry_message: &str,
) -> Option<String> {
    loop {
        let value = ctx.prompt(prompt)?;
        if value == "close" {
            return None;
        }
        if is_valid(&value) {
            return Some(value);
        }
        println!("{}", retry_message);
    }
}

pub fn change_phone(ctx: &mut AppContext, args: &str) -> HolocronResult<String> {
    let [name, old, new] = exact_args::<3>(args, "change-phone <name> <old phone> <new phone>")?;
    ctx.contacts.find_mut(name)?.edit_phone(old, new)?;
    Ok("Contact changed.".into())
}

pub fn phone(ctx: &AppContext, args: &str) -> HolocronResult<String> {
    let name = single_arg(args, "phone <name>")?;
    let record = ctx.contacts.find(name)?;
    let phones: Vec<&str> = record.phones().map(|p| p.value()).collect();
    Ok(format!("Phone numbers for {}: {}", name, phones.join(",")))
}

pub fn add_phone(ctx: &mut AppContext, args: &str) -> HolocronResult<String> {
    let [name, phone] = exact_args::<2>(args, "add-phone <name> <phone>")?;
    ctx.contacts.find_mut(name)?.add_phone(phone)?;
    Ok(format!("Phone added for {}.", name))
}

pub fn remove_phone(ctx: &mut AppContext, args: &str) -> HolocronResult<String> {
    let [name, phone] = exact_args::<2>(args, "remove-phone <name> <phone>")?;
    ctx.contacts.find_mut(name)?.remove_phone(phone)?;
    Ok(format!("Phone removed for {}.", name))
}

/// The address is everything after the name, spaces included.
pub fn add_address(ctx: &mut AppContext, args: &str) -> HolocronResult<String> {
    let usage = "add-address <name> <address>";
    let (name, address) = args
        .trim()
        .split_once(char::is_whitespace)
        .ok_or_else(|| HolocronError::wrong_arity(usage))?;
    ctx.contacts.find_mut(name)?.add_address(address.trim())?;
    Ok(format!("Address added for {}.", name))
}

pub fn add_email(ctx: &mut AppContext, args: &str) -> HolocronResult<String> {
    let [name, email] = exact_args::<2>(args, "add-email <name> <email>")?;
    ctx.contacts.find_mut(name)?.add_email(email)?;
    Ok(format!("Email added for {}.", name))
}

pub fn change_birthday(ctx: &mut AppContext, args: &str) -> HolocronResult<String> {
    let [name, birthday] = exact_args::<2>(args, "change-birthday <name> <DD.MM.YYYY>")?;
    ctx.contacts.find_mut(name)?.add_birthday(birthday)?;
    Ok(format!("Birthday added for {}.", name))
}

pub fn show_birthday(ctx: &AppContext, args: &str) -> HolocronResult<String> {
    let name = single_arg(args, "show-birthday <name>")?;
    Ok(match ctx.contacts.find(name)?.birthday() {
        Some(birthday) => format!("Birthday for {}: {}", name, birthday),
        None => format!("No birthday found for {}.", name),
    })
}

pub fn delete(ctx: &mut AppContext, args: &str) -> HolocronResult<String> {
    let name = single_arg(args, "delete <name>")?;
    ctx.contacts.delete(name)?;
    Ok(format!("Deleted {}", name))
}

pub fn all(ctx: &AppContext) -> String {
    if ctx.contacts.is_empty() {
        return "Data is empty, nothing to show".into();
    }
    let mut out = format!("All records ({}):", ctx.contacts.count_records());
    for record in ctx.contacts.records() {
        out.push('\n');
        out.push_str(&record.to_string());
    }
    out
}

pub fn find_all(ctx: &AppContext, args: &str) -> HolocronResult<String> {
    let criteria = single_arg(args, "findall <criteria>")?;
    if criteria.chars().count() < 3 {
        return Ok("Please enter min. 3 symbols for search criteria".into());
    }
    let found = ctx.contacts.find_by_criteria(criteria);
    let mut out = format!("Found {} record(s) for criteria - {} :", found.len(), criteria);
    for line in found {
        out.push('\n');
        out.push_str(&line);
    }
    Ok(out)
}

pub fn birthdays(ctx: &AppContext, args: &str) -> HolocronResult<String> {
    let args = args.trim();
    let days = if args.is_empty() {
        ctx.config.birthday_window
    } else {
        args.parse::<u32>()
            .ok()
            .filter(|days| *days <= MAX_WINDOW_DAYS)
            .ok_or_else(|| HolocronError::wrong_arity("birthdays [<number of days, up to 366>]"))?
    };

    if ctx.contacts.is_empty() {
        return Ok("No contacts young Jedi. Please add contacts".into());
    }

    let buckets = ctx.contacts.upcoming_birthdays(AppContext::today(), days);
    Ok(format_birthdays(&buckets, days))
}

/// One line per day, e.g. `Friday (24-10): Leia, Luke`.
pub fn format_birthdays(buckets: &[BirthdayBucket], days: u32) -> String {
    if buckets.is_empty() {
        return format!("No birthdays in the next {} days young Jedi.", days);
    }
    buckets
        .iter()
        .map(|b| {
            let names: Vec<String> = b.names.iter().map(|n| capitalize(n)).collect();
            format!(
                "{} ({}): {}",
                b.weekday_label,
                b.date.format("%d-%m"),
                names.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// First letter upper-cased, the rest lower-cased.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn single_arg<'a>(args: &'a str, usage: &str) -> HolocronResult<&'a str> {
    let arg = args.trim();
    if arg.is_empty() {
        Err(HolocronError::wrong_arity(usage))
    } else {
        Ok(arg)
    }
}

fn exact_args<'a, const N: usize>(args: &'a str, usage: &str) -> HolocronResult<[&'a str; N]> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    parts
        .try_into()
        .map_err(|_| HolocronError::wrong_arity(usage))
}
