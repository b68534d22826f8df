pub mod command;
pub mod run;

use crate::domain::{Contact, UpcomingBirthday};
use crate::errors::AppError;
use std::io::{BufRead, Write};

pub const GREETING: &str = "Hello, it's your personal helper";
pub const PROMPT: &str = "Enter a command: ";

// OUTPUT FUNCTIONS
pub fn show_prompt<W: Write>(output: &mut W) -> Result<(), AppError> {
    write!(output, "{PROMPT}")?;
    output.flush()?;
    Ok(())
}

pub fn display_contact(contact: &Contact) -> String {
    let mut lines = vec![format!("Name: {}", contact.name())];

    for phone in &contact.phones {
        lines.push(format!("Phone: {phone}"));
    }

    if let Some(birthday) = contact.birthday() {
        lines.push(format!("Birthday: {birthday}"));
    }

    lines.push("------".to_string());
    lines.join("\n")
}

pub fn display_upcoming(upcoming: &[UpcomingBirthday]) -> String {
    if upcoming.is_empty() {
        return "No upcoming birthdays".to_string();
    }

    let lines: Vec<String> = upcoming
        .iter()
        .map(|b| format!("{}'s birthday on {}", b.name, b.formatted_date()))
        .collect();

    format!("Upcoming birthdays:\n{}", lines.join("\n"))
}

// INPUT FUNCTIONS
/// Next line from `input` without its line ending, or `None` at end of input.
pub fn get_input<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
