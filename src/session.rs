use crate::book::AddressBook;
use crate::storage::Storage;
use anyhow::Result;

/// Carnet ouvert + son stockage.
///
/// La sauvegarde a lieu une seule fois : via [`Session::close`] sur le chemin
/// normal, sinon au `Drop` (retour d'erreur, panique).
pub struct Session<S: Storage> {
    storage: S,
    book: AddressBook,
    closed: bool,
}

impl<S: Storage> Session<S> {
    pub fn open(storage: S) -> Result<Self> {
        let book = storage.load()?;
        Ok(Self {
            storage,
            book,
            closed: false,
        })
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut AddressBook {
        &mut self.book
    }

    /// Sauvegarde et ferme ; l'erreur de sauvegarde est remontée.
    pub fn close(mut self) -> Result<()> {
        self.closed = true;
        self.storage.save(&self.book)
    }
}

impl<S: Storage> Drop for Session<S> {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        tracing::warn!("session dropped without close, saving address book");
        if let Err(e) = self.storage.save(&self.book) {
            tracing::error!(error = %format!("{e:#}"), "failed to save address book");
        }
    }
}
