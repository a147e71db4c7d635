use crate::model::DATE_FORMAT;
use chrono::NaiveDate;
use std::fmt;

/// Entrée de la liste des anniversaires à venir.
///
/// `date` est la date de célébration, déjà décalée au lundi si elle tombe
/// un week-end ; ce n'est pas forcément la date de naissance projetée.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub date: NaiveDate,
}

impl UpcomingBirthday {
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.date.format(DATE_FORMAT))
    }
}

