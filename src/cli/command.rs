use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

use crate::domain::contact::BIRTHDAY_INPUT_FORMAT;
use crate::errors::AppError;
use crate::storage::{DEFAULT_SNAPSHOT_PATH, StorageMediums};

#[derive(Parser, Debug)]
#[command(
    name = "birthday-rolodex",
    version,
    about = "Contact book with phones and birthdays"
)]
pub struct Cli {
    /// Snapshot file the contact book is loaded from and saved to
    #[arg(long, env = "ADDRESSBOOK_PATH", default_value = DEFAULT_SNAPSHOT_PATH)]
    pub file: PathBuf,

    /// Snapshot encoding (bin, json)
    #[arg(long, env = "STORAGE_CHOICE", default_value_t = String::from("bin"))]
    pub storage_choice: String,

    /// Reference date for `birthdays` as DD.MM.YYYY (defaults to today)
    #[arg(long, env = "ROLODEX_TODAY", hide = true)]
    pub today: Option<String>,
}

impl Cli {
    pub fn storage_medium(&self) -> Result<StorageMediums, AppError> {
        StorageMediums::from(&self.storage_choice)
    }

    pub fn reference_date(&self) -> Result<NaiveDate, AppError> {
        match &self.today {
            Some(date) => NaiveDate::parse_from_str(date, BIRTHDAY_INPUT_FORMAT).map_err(|_| {
                AppError::Validation(format!("'{date}' is not a DD.MM.YYYY date"))
            }),
            None => Ok(chrono::Local::now().date_naive()),
        }
    }
}

/// One line of REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phones: Vec<String> },
    Find { name: String },
    Delete { name: String },
    All,
    Edit { name: String, new_phone: String },
    AddBirthday { name: String, birthday: String },
    ShowBirthday { name: String },
    Birthdays,
    AddPhone { name: String, phone: String },
    RemovePhone { name: String, phone: String },
    Phone { number: String },
    Exit,
}

/// Parses a REPL line. The command word is case-insensitive, arguments keep their case.
///
/// Blank lines and unknown commands give `Ok(None)`; a known command with the
/// wrong number of arguments gives `AppError::Usage`.
pub fn parse_command(line: &str) -> Result<Option<Command>, AppError> {
    let mut tokens = line.split_whitespace();
    let Some(cmd) = tokens.next() else {
        return Ok(None);
    };
    let args: Vec<String> = tokens.map(str::to_string).collect();

    let command = match cmd.to_lowercase().as_str() {
        "hello" => Command::Hello,
        "add" => {
            let Some((name, phones)) = args.split_first() else {
                return Err(AppError::Usage("add <name> [phones...]".to_string()));
            };
            Command::Add {
                name: name.clone(),
                phones: phones.to_vec(),
            }
        }
        "find" => {
            let [name] = expect_args::<1>(args, "find <name>")?;
            Command::Find { name }
        }
        "delete" => {
            let [name] = expect_args::<1>(args, "delete <name>")?;
            Command::Delete { name }
        }
        "all" => Command::All,
        "edit" => {
            let [name, new_phone] = expect_args::<2>(args, "edit <name> <new phone>")?;
            Command::Edit { name, new_phone }
        }
        "add-birthday" => {
            let [name, birthday] = expect_args::<2>(args, "add-birthday <name> <DD.MM.YYYY>")?;
            Command::AddBirthday { name, birthday }
        }
        "show-birthday" => {
            let [name] = expect_args::<1>(args, "show-birthday <name>")?;
            Command::ShowBirthday { name }
        }
        "birthdays" => Command::Birthdays,
        "add-phone" => {
            let [name, phone] = expect_args::<2>(args, "add-phone <name> <phone>")?;
            Command::AddPhone { name, phone }
        }
        "remove-phone" => {
            let [name, phone] = expect_args::<2>(args, "remove-phone <name> <phone>")?;
            Command::RemovePhone { name, phone }
        }
        "phone" => {
            let [number] = expect_args::<1>(args, "phone <number>")?;
            Command::Phone { number }
        }
        "exit" | "close" => Command::Exit,
        _ => return Ok(None),
    };

    Ok(Some(command))
}

fn expect_args<const N: usize>(args: Vec<String>, usage: &str) -> Result<[String; N], AppError> {
    args.try_into()
        .map_err(|_| AppError::Usage(usage.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_commands() -> Result<(), AppError> {
        assert_eq!(parse_command("hello")?, Some(Command::Hello));
        assert_eq!(
            parse_command("add Ann 1234567890 0987654321")?,
            Some(Command::Add {
                name: "Ann".to_string(),
                phones: vec!["1234567890".to_string(), "0987654321".to_string()],
            })
        );
        assert_eq!(
            parse_command("add Ann")?,
            Some(Command::Add {
                name: "Ann".to_string(),
                phones: vec![],
            })
        );
        assert_eq!(
            parse_command("  edit   Ann 1112223333 ")?,
            Some(Command::Edit {
                name: "Ann".to_string(),
                new_phone: "1112223333".to_string(),
            })
        );
        assert_eq!(parse_command("close")?, Some(Command::Exit));
        assert_eq!(parse_command("exit")?, Some(Command::Exit));
        Ok(())
    }

    #[test]
    fn command_word_is_case_insensitive_but_args_are_not() -> Result<(), AppError> {
        assert_eq!(
            parse_command("FIND Ann")?,
            Some(Command::Find {
                name: "Ann".to_string()
            })
        );
        assert_eq!(parse_command("Birthdays")?, Some(Command::Birthdays));
        Ok(())
    }

    #[test]
    fn unknown_and_blank_lines_are_ignored() -> Result<(), AppError> {
        assert_eq!(parse_command("")?, None);
        assert_eq!(parse_command("   ")?, None);
        assert_eq!(parse_command("dance with Ann")?, None);
        Ok(())
    }

    #[test]
    fn wrong_argument_count_is_usage_error() {
        for line in [
            "add",
            "find",
            "find Ann Bob",
            "delete",
            "edit Ann",
            "edit Ann 1 2",
            "add-birthday Ann",
            "show-birthday",
            "remove-phone Ann",
            "phone",
        ] {
            let err = parse_command(line).unwrap_err();
            assert!(matches!(err, AppError::Usage(_)), "{line}");
        }
    }

    #[test]
    fn reference_date_override() -> Result<(), AppError> {
        let cli = Cli::try_parse_from(["birthday-rolodex", "--today", "10.06.2024"])
            .expect("valid arguments");

        assert_eq!(
            cli.reference_date()?,
            NaiveDate::from_ymd_opt(2024, 6, 10).expect("valid date")
        );

        let cli = Cli::try_parse_from(["birthday-rolodex", "--today", "2024-06-10"])
            .expect("valid arguments");
        assert!(matches!(
            cli.reference_date().unwrap_err(),
            AppError::Validation(_)
        ));
        Ok(())
    }
}
