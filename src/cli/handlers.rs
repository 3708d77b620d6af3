use super::command::{COMMAND_USAGE, Command};
use crate::domain::{ContactStore, NaiveDate, Phone, Record};
use crate::errors::AppError;

pub const GOODBYE: &str = "Goodbye!";

/// What a handler needs besides the book itself.
#[derive(Debug, Clone, Copy)]
pub struct SessionContext {
    pub today: NaiveDate,
    pub window_days: i64,
}

/// Runs one command against the book and returns the reply to show the user.
/// A failing command leaves the book as it was.
pub fn dispatch(
    command: Command,
    book: &mut ContactStore,
    ctx: &SessionContext,
) -> Result<String, AppError> {
    match command {
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add { name, phone } => add_contact(book, &name, phone.as_deref()),
        Command::Change {
            name,
            old_phone,
            new_phone,
        } => change_contact(book, &name, old_phone.as_deref(), &new_phone),
        Command::Phone { name } => show_phone(book, &name),
        Command::RemovePhone { name, phone } => remove_phone(book, &name, &phone),
        Command::Delete { name } => delete_contact(book, &name),
        Command::All => Ok(show_all(book)),
        Command::AddBirthday { name, birthday } => add_birthday(book, &name, &birthday),
        Command::ShowBirthday { name } => show_birthday(book, &name),
        Command::Birthdays { days } => Ok(show_birthdays(
            book,
            days.unwrap_or(ctx.window_days),
            ctx.today,
        )),
        Command::Help => Ok(show_help()),
        // Ends the session; the loop stops after printing this reply
        Command::Exit => Ok(GOODBYE.to_string()),
    }
}

fn contact_not_found(name: &str) -> AppError {
    AppError::NotFound(format!("Contact '{name}'"))
}

fn find_contact<'a>(book: &'a ContactStore, name: &str) -> Result<&'a Record, AppError> {
    book.find(name).ok_or_else(|| contact_not_found(name))
}

fn find_contact_mut<'a>(book: &'a mut ContactStore, name: &str) -> Result<&'a mut Record, AppError> {
    book.find_mut(name).ok_or_else(|| contact_not_found(name))
}

pub fn add_contact(book: &mut ContactStore, name: &str, phone: Option<&str>) -> Result<String, AppError> {
    if let Some(record) = book.find_mut(name) {
        if let Some(phone) = phone {
            record.add_phone(phone)?;
        }
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(name)?;
    if let Some(phone) = phone {
        record.add_phone(phone)?;
    }
    book.add_record(record);
    Ok("Contact added.".to_string())
}

pub fn change_contact(
    book: &mut ContactStore,
    name: &str,
    old_phone: Option<&str>,
    new_phone: &str,
) -> Result<String, AppError> {
    let record = find_contact_mut(book, name)?;

    let old_phone = match old_phone {
        Some(old) => old.to_string(),
        None => record
            .phones()
            .first()
            .map(|p| p.as_str().to_string())
            .ok_or_else(|| AppError::NotFound(format!("Phone for '{name}'")))?,
    };

    if !record.edit_phone(&old_phone, new_phone)? {
        return Err(AppError::NotFound(format!("Phone {old_phone} for '{name}'")));
    }
    Ok("Contact updated.".to_string())
}

pub fn show_phone(book: &ContactStore, name: &str) -> Result<String, AppError> {
    let record = find_contact(book, name)?;

    if record.phones().is_empty() {
        return Ok(format!("{name} has no phones saved."));
    }
    let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
    Ok(format!("{name}'s phones: {}", phones.join("; ")))
}

pub fn remove_phone(book: &mut ContactStore, name: &str, phone: &str) -> Result<String, AppError> {
    let record = find_contact_mut(book, name)?;

    match record.delete_phone(phone) {
        Some(_) => Ok("Phone removed.".to_string()),
        None => Err(AppError::NotFound(format!("Phone {phone} for '{name}'"))),
    }
}

pub fn delete_contact(book: &mut ContactStore, name: &str) -> Result<String, AppError> {
    book.delete(name).ok_or_else(|| contact_not_found(name))?;
    Ok("Contact deleted.".to_string())
}

pub fn show_all(book: &ContactStore) -> String {
    if book.is_empty() {
        return "No contacts saved.".to_string();
    }
    book.iter()
        .map(Record::to_string)
        .collect::<Vec<String>>()
        .join("\n")
}

pub fn add_birthday(book: &mut ContactStore, name: &str, birthday: &str) -> Result<String, AppError> {
    find_contact_mut(book, name)?.set_birthday(birthday)?;
    Ok("Birthday added.".to_string())
}

pub fn show_birthday(book: &ContactStore, name: &str) -> Result<String, AppError> {
    let record = find_contact(book, name)?;

    Ok(match record.birthday() {
        Some(birthday) => format!("{name}'s birthday: {birthday}"),
        None => format!("{name} has no birthday set."),
    })
}

pub fn show_birthdays(book: &ContactStore, window_days: i64, today: NaiveDate) -> String {
    let upcoming = book.upcoming_birthdays(window_days, today);

    if upcoming.is_empty() {
        return "No upcoming birthdays.".to_string();
    }
    upcoming
        .iter()
        .map(|u| u.to_string())
        .collect::<Vec<String>>()
        .join("\n")
}

pub fn show_help() -> String {
    let mut output = String::from("Available commands:");
    for (usage, description) in COMMAND_USAGE {
        output.push_str(&format!("\n  {usage:<34} {description}"));
    }
    output
}
