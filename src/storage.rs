use crate::book::AddressBook;
use anyhow::Context;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Nom de fichier par défaut du carnet.
pub const DEFAULT_BOOK_FILE: &str = "addressbook.json";

pub trait Storage {
    /// Charge le carnet ; un support absent donne un carnet vide.
    fn load(&self) -> anyhow::Result<AddressBook>;
    /// Sauvegarde de manière atomique.
    fn save(&self, book: &AddressBook) -> anyhow::Result<()>;
}

#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        // "addressbook.json".parent() == Some("")
        self.path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> anyhow::Result<AddressBook> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no address book yet, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()));
            }
        };
        let book: AddressBook = serde_json::from_slice(&data)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        book.validate()
            .with_context(|| format!("validating {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), records = book.len(), "address book loaded");
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(book)?;
        let mut tmp =
            NamedTempFile::new_in(self.parent_dir()).with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).with_context(|| "atomic rename")?;
        tracing::debug!(path = %self.path.display(), records = book.len(), "address book saved");
        Ok(())
    }
}
