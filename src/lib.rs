#![forbid(unsafe_code)]
//! Carnet — bibliothèque de gestion de contacts locale (sans BD).
//!
//! - Fiches validées : numéros à 10 chiffres, anniversaires `DD.MM.YYYY`.
//! - Rappels d'anniversaires sur 7 jours, week-ends reportés au lundi.
//! - Stockage fichier JSON, sauvegarde atomique en fin de session.
//! - REPL texte indépendant du terminal (tout `BufRead`/`Write`).

pub mod book;
pub mod commands;
pub mod model;
pub mod repl;
pub mod session;
pub mod storage;

pub use book::{AddressBook, UpcomingBirthday};
pub use commands::{execute, CommandError, Outcome, UnknownCommand};
pub use model::{Birthday, ContactError, PhoneNumber, Record};
pub use session::Session;
pub use storage::{JsonStorage, Storage, DEFAULT_BOOK_FILE};
