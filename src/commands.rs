//! Commandes du REPL : une ligne = une commande + arguments positionnels.
//!
//! Chaque handler renvoie `Result<String, CommandError>` ; l'erreur est mise en
//! forme une seule fois (`Error: ...`) par [`execute`]. Les cas « contact
//! introuvable » sont des réponses normales, pas des erreurs.

use crate::book::AddressBook;
use crate::model::{ContactError, PhoneNumber, Record};
use chrono::NaiveDateTime;
use std::str::FromStr;
use thiserror::Error;

pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye!";
pub const INVALID_COMMAND: &str = "Invalid command.";
const CONTACT_NOT_FOUND: &str = "Contact not found.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
    #[error(transparent)]
    Contact(#[from] ContactError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown command: {0}")]
pub struct UnknownCommand(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "hello" => Command::Hello,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "all" => Command::All,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "close" | "exit" => Command::Exit,
            other => return Err(UnknownCommand(other.to_string())),
        })
    }
}

/// Résultat d'une ligne exécutée.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Reply(String),
    Exit(String),
}

/// Découpe une ligne en (commande, arguments). `None` pour une ligne vide.
pub fn parse_input(line: &str) -> Option<(&str, Vec<&str>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?;
    Some((command, parts.collect()))
}

/// Exécute une ligne sur le carnet. `None` si la ligne est vide.
pub fn execute(book: &mut AddressBook, line: &str, now: NaiveDateTime) -> Option<Outcome> {
    let (name, args) = parse_input(line)?;
    let command = match name.parse::<Command>() {
        Ok(command) => command,
        Err(e) => {
            tracing::debug!(error = %e, "rejected input");
            return Some(Outcome::Reply(INVALID_COMMAND.to_string()));
        }
    };
    tracing::debug!(?command, argc = args.len(), "dispatching");
    let result = match command {
        Command::Exit => return Some(Outcome::Exit(FAREWELL.to_string())),
        Command::Hello => Ok(GREETING.to_string()),
        Command::Add => add_contact(&args, book),
        Command::Change => change_phone(&args, book),
        Command::Phone => show_phone(&args, book),
        Command::All => Ok(show_all(book)),
        Command::AddBirthday => add_birthday(&args, book),
        Command::ShowBirthday => show_birthday(&args, book),
        Command::Birthdays => birthdays(book, now),
    };
    Some(Outcome::Reply(render(result)))
}

pub fn render(result: Result<String, CommandError>) -> String {
    match result {
        Ok(msg) => msg,
        Err(e) => format!("Error: {e}"),
    }
}

fn arg<'a>(args: &[&'a str], idx: usize, what: &'static str) -> Result<&'a str, CommandError> {
    args.get(idx).copied().ok_or(CommandError::MissingArgument(what))
}

pub fn add_contact(args: &[&str], book: &mut AddressBook) -> Result<String, CommandError> {
    let name = arg(args, 0, "name")?;
    let phone = arg(args, 1, "phone")?;
    if let Some(record) = book.get_mut(name) {
        record.add_phone(phone)?;
        return Ok(format!("Phone number added to {name}."));
    }
    // la fiche n'est insérée qu'avec un premier numéro valide
    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    book.add(record);
    Ok(format!("Contact {name} added."))
}

pub fn change_phone(args: &[&str], book: &mut AddressBook) -> Result<String, CommandError> {
    let name = arg(args, 0, "name")?;
    let old = arg(args, 1, "old phone")?;
    let new = arg(args, 2, "new phone")?;
    match book.get_mut(name) {
        Some(record) => {
            record.change_phone(old, new)?;
            Ok(format!("Phone number for {name} updated."))
        }
        None => Ok(CONTACT_NOT_FOUND.to_string()),
    }
}

pub fn show_phone(args: &[&str], book: &AddressBook) -> Result<String, CommandError> {
    let name = arg(args, 0, "name")?;
    Ok(match book.get(name) {
        Some(record) => format!("{name}'s phones: {}", join_phones(record.phones())),
        None => CONTACT_NOT_FOUND.to_string(),
    })
}

pub fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts found.".to_string();
    }
    book.all()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> Result<String, CommandError> {
    let name = arg(args, 0, "name")?;
    let birthday = arg(args, 1, "birthday")?;
    match book.get_mut(name) {
        Some(record) => {
            record.add_birthday(birthday)?;
            Ok(format!("Birthday for {name} added."))
        }
        None => Ok(CONTACT_NOT_FOUND.to_string()),
    }
}

pub fn show_birthday(args: &[&str], book: &AddressBook) -> Result<String, CommandError> {
    let name = arg(args, 0, "name")?;
    Ok(match book.get(name).and_then(Record::birthday) {
        Some(birthday) => format!("{name}'s birthday: {birthday}"),
        None => "Birthday not found for this contact.".to_string(),
    })
}

pub fn birthdays(book: &AddressBook, now: NaiveDateTime) -> Result<String, CommandError> {
    let upcoming = book.upcoming_birthdays(now)?;
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays.".to_string());
    }
    Ok(upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

fn join_phones(phones: &[PhoneNumber]) -> String {
    phones
        .iter()
        .map(PhoneNumber::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
