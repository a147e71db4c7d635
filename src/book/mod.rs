mod birthdays;
mod types;
mod util;

pub use birthdays::UPCOMING_WINDOW_DAYS;
pub use types::UpcomingBirthday;

use crate::model::{ContactError, Record};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Carnet complet : nom → fiche, dans l'ordre d'insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBook {
    #[serde(default)]
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name() == name)
    }

    /// Fiches dans l'ordre d'insertion.
    pub fn all(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Insère la fiche, ou remplace entièrement celle du même nom (sans fusion).
    /// Une fiche remplacée garde sa place dans l'ordre d'itération.
    pub fn add(&mut self, record: Record) {
        match self.get_mut(record.name()) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    pub fn add_record(&mut self, record: Record) {
        self.add(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Vérifie les invariants d'un carnet désérialisé (noms non vides et uniques).
    pub fn validate(&self) -> Result<(), ContactError> {
        let mut seen = HashSet::new();
        for record in &self.records {
            if record.name().is_empty() {
                return Err(ContactError::EmptyName);
            }
            if !seen.insert(record.name()) {
                return Err(ContactError::DuplicateName(record.name().to_string()));
            }
        }
        Ok(())
    }

    /// Anniversaires dans les 7 prochains jours, week-ends décalés au lundi.
    /// L'ordre suit celui du carnet.
    pub fn upcoming_birthdays(
        &self,
        now: NaiveDateTime,
    ) -> Result<Vec<UpcomingBirthday>, ContactError> {
        birthdays::upcoming_birthdays(self, now)
    }

    pub fn upcoming_birthdays_now(&self) -> Result<Vec<UpcomingBirthday>, ContactError> {
        self.upcoming_birthdays(chrono::Local::now().naive_local())
    }
}
