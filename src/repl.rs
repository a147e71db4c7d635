use crate::book::AddressBook;
use crate::commands::{self, Outcome};
use anyhow::Result;
use chrono::NaiveDateTime;
use std::io::{BufRead, Write};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// Boucle lecture/exécution jusqu'à `close`/`exit` ou fin d'entrée.
///
/// `now` est interrogé à chaque commande. La sauvegarde n'est pas faite ici,
/// c'est le rôle de [`crate::session::Session`].
pub fn run<R, W, F>(book: &mut AddressBook, mut input: R, mut output: W, now: F) -> Result<()>
where
    R: BufRead,
    W: Write,
    F: Fn() -> NaiveDateTime,
{
    writeln!(output, "{WELCOME}")?;
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            tracing::debug!("end of input");
            writeln!(output)?;
            return Ok(());
        }
        match commands::execute(book, &line, now()) {
            None => continue,
            Some(Outcome::Reply(msg)) => writeln!(output, "{msg}")?,
            Some(Outcome::Exit(msg)) => {
                writeln!(output, "{msg}")?;
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 10)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn transcript(book: &mut AddressBook, input: &str) -> String {
        let mut out = Vec::new();
        run(book, input.as_bytes(), &mut out, fixed).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn stops_at_exit_and_ignores_the_rest() {
        let mut book = AddressBook::new();
        let out = transcript(&mut book, "hello\nexit\nadd Bob 0123456789\n");
        assert_eq!(
            out,
            "Welcome to the assistant bot!\n\
             Enter a command: How can I help you?\n\
             Enter a command: Good bye!\n"
        );
        assert!(book.is_empty());
    }

    #[test]
    fn blank_lines_reprompt_and_eof_ends() {
        let mut book = AddressBook::new();
        let out = transcript(&mut book, "\n   \nadd Bob 0123456789");
        assert_eq!(
            out,
            "Welcome to the assistant bot!\n\
             Enter a command: Enter a command: Enter a command: Contact Bob added.\n\
             Enter a command: \n"
        );
        assert!(book.contains("Bob"));
    }

    #[test]
    fn errors_do_not_stop_the_loop() {
        let mut book = AddressBook::new();
        let out = transcript(&mut book, "add Bob 12\nfoo\nadd Bob 0123456789\nclose\n");
        assert!(out.contains("Error: Phone number must contain exactly 10 digits."));
        assert!(out.contains("Invalid command."));
        assert!(out.contains("Contact Bob added."));
        assert!(out.ends_with("Good bye!\n"));
    }
}
