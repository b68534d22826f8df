use crate::{
    cli::{self, GREETING},
    prelude::{
        AppError, Birthday, BirthdayUpdate, ContactManager,
        command::{Cli, Command, parse_command},
        contact::Contact,
        storage::parse_storage_type,
    },
};
use chrono::NaiveDate;
use clap::Parser;
use dotenv::dotenv;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    let cli = Cli::parse();

    let medium = cli.storage_medium()?;
    let today = cli.reference_date()?;
    let storage = parse_storage_type(medium, &cli.file);

    let mut book = storage.load()?;
    info!(
        medium = storage.get_medium(),
        path = %cli.file.display(),
        contacts = book.len(),
        "contact book loaded"
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_repl(&mut book, today, &mut stdin.lock(), &mut stdout)?;

    storage.save(&book)?;
    info!(contacts = book.len(), "contact book saved");

    writeln!(stdout, "Bye")?;
    Ok(())
}

/// Reads commands until `exit`/`close` or end of input.
///
/// Handler failures are printed as one line and the loop carries on; only
/// I/O errors on `input`/`output` end it early.
pub fn run_repl<R: BufRead, W: Write>(
    book: &mut ContactManager,
    today: NaiveDate,
    input: &mut R,
    output: &mut W,
) -> Result<(), AppError> {
    writeln!(output, "{GREETING}")?;

    loop {
        cli::show_prompt(output)?;

        let Some(line) = cli::get_input(input)? else {
            writeln!(output)?;
            return Ok(());
        };

        let reply = match parse_command(&line) {
            Ok(Some(Command::Exit)) => return Ok(()),
            Ok(Some(command)) => execute(command, book, today),
            Ok(None) => continue,
            Err(e) => Err(e),
        };

        match reply {
            Ok(message) => writeln!(output, "{message}")?,
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                debug!(error = ?e, line = %line, "command failed");
                writeln!(output, "{}", e.user_message())?;
            }
        }
    }
}

pub fn execute(
    command: Command,
    book: &mut ContactManager,
    today: NaiveDate,
) -> Result<String, AppError> {
    match command {
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add { name, phones } => add_record(book, name, &phones),
        Command::Find { name } => find_record(book, &name),
        Command::Delete { name } => delete_record(book, &name),
        Command::All => Ok(show_all_records(book)),
        Command::Edit { name, new_phone } => edit_phone_number(book, &name, &new_phone),
        Command::AddBirthday { name, birthday } => add_birthday(book, &name, &birthday),
        Command::ShowBirthday { name } => show_birthday(book, &name),
        Command::Birthdays => Ok(cli::display_upcoming(&book.upcoming_birthdays(today))),
        Command::AddPhone { name, phone } => add_phone(book, &name, &phone),
        Command::RemovePhone { name, phone } => remove_phone(book, &name, &phone),
        Command::Phone { number } => find_by_phone(book, &number),
        Command::Exit => Ok("Bye".to_string()),
    }
}

fn record_mut<'a>(book: &'a mut ContactManager, name: &str) -> Result<&'a mut Contact, AppError> {
    book.find_mut(name)
        .ok_or_else(|| AppError::NotFound("Record".to_string()))
}

fn add_record(
    book: &mut ContactManager,
    name: String,
    phones: &[String],
) -> Result<String, AppError> {
    let mut contact = Contact::new(name);
    for phone in phones {
        contact.add_phone(phone)?;
    }

    book.add_contact(contact);
    Ok("Record added".to_string())
}

fn find_record(book: &ContactManager, name: &str) -> Result<String, AppError> {
    match book.find(name) {
        Some(contact) => Ok(format!(
            "Record found: {} - {}",
            contact.name(),
            contact.joined_phones()
        )),
        None => Ok("Record not found".to_string()),
    }
}

fn delete_record(book: &mut ContactManager, name: &str) -> Result<String, AppError> {
    match book.delete_contact(name) {
        Ok(_) => Ok("Record deleted".to_string()),
        Err(AppError::NotFound(_)) => Ok("Record not found".to_string()),
        Err(e) => Err(e),
    }
}

fn show_all_records(book: &ContactManager) -> String {
    if book.is_empty() {
        return "No contacts yet".to_string();
    }

    book.contact_list()
        .iter()
        .map(cli::display_contact)
        .collect::<Vec<String>>()
        .join("\n")
}

fn edit_phone_number(
    book: &mut ContactManager,
    name: &str,
    new_phone: &str,
) -> Result<String, AppError> {
    record_mut(book, name)?.edit_phone(new_phone)?;
    Ok("Phone edited successfully".to_string())
}

fn add_birthday(book: &mut ContactManager, name: &str, birthday: &str) -> Result<String, AppError> {
    let contact = record_mut(book, name)?;
    let birthday = Birthday::parse(birthday)?;

    match contact.add_birthday(birthday) {
        BirthdayUpdate::Added => Ok("Birthday added successfully".to_string()),
        BirthdayUpdate::AlreadySet(existing) => {
            Ok(format!("Record already has a birthday: {existing}"))
        }
    }
}

fn show_birthday(book: &ContactManager, name: &str) -> Result<String, AppError> {
    let contact = book
        .find(name)
        .ok_or_else(|| AppError::NotFound("Record".to_string()))?;

    match contact.birthday() {
        Some(birthday) => Ok(format!("{}'s birthday: {birthday}", contact.name())),
        None => Ok(format!("{} doesn't have a birthday", contact.name())),
    }
}

fn add_phone(book: &mut ContactManager, name: &str, phone: &str) -> Result<String, AppError> {
    record_mut(book, name)?.add_phone(phone)?;
    Ok("Phone added successfully".to_string())
}

fn remove_phone(book: &mut ContactManager, name: &str, phone: &str) -> Result<String, AppError> {
    record_mut(book, name)?.remove_phone(phone)?;
    Ok("Phone removed successfully".to_string())
}

fn find_by_phone(book: &ContactManager, number: &str) -> Result<String, AppError> {
    match book.find_phone(number) {
        Some((contact, phone)) => Ok(format!("{phone} belongs to {}", contact.name())),
        None => Err(AppError::NotFound("Phone".to_string())),
    }
}
