use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Format d'affichage et de saisie des dates (jour.mois.année).
pub const DATE_FORMAT: &str = "%d.%m.%Y";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Contact name cannot be empty.")]
    EmptyName,
    #[error("Phone number must contain exactly 10 digits.")]
    InvalidPhone,
    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidBirthday,
    #[error("Old phone number not found.")]
    PhoneNotFound,
    #[error("birthday does not exist in year {year}")]
    BirthdayOutOfRange { year: i32 },
    #[error("duplicate contact name: {0}")]
    DuplicateName(String),
}

/// Numéro de téléphone : exactement 10 chiffres ASCII, stocké tel quel.
///
/// Les chiffres Unicode non ASCII (`٣`, `３`…) sont refusés.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new<S: Into<String>>(raw: S) -> Result<Self, ContactError> {
        let raw = raw.into();
        if raw.len() != 10 || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ContactError::InvalidPhone);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

// revalidé au chargement
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

/// Date d'anniversaire, saisie au format strict `DD.MM.YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse `DD.MM.YYYY` (jour et mois sur deux chiffres, année sur quatre).
    pub fn parse(raw: &str) -> Result<Self, ContactError> {
        let bytes = raw.as_bytes();
        let shape_ok = bytes.len() == 10
            && bytes[2] == b'.'
            && bytes[5] == b'.'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());
        if !shape_ok {
            return Err(ContactError::InvalidBirthday);
        }
        let date = NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map_err(|_| ContactError::InvalidBirthday)?;
        // les années commencent à 0001
        if date.year() < 1 {
            return Err(ContactError::InvalidBirthday);
        }
        Ok(Self(date))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Prochaine occurrence (à minuit) à partir de `now`.
    ///
    /// L'anniversaire de l'année courante est retenu tant qu'il n'est pas
    /// strictement antérieur à `now` ; un anniversaire tombant aujourd'hui
    /// est donc déjà passé dès 00:00:01. Un 29 février projeté sur une année
    /// non bissextile échoue avec `BirthdayOutOfRange`.
    pub fn next_occurrence(&self, now: NaiveDateTime) -> Result<NaiveDateTime, ContactError> {
        let this_year = self.midnight_in(now.year())?;
        if this_year < now {
            self.midnight_in(now.year() + 1)
        } else {
            Ok(this_year)
        }
    }

    fn midnight_in(&self, year: i32) -> Result<NaiveDateTime, ContactError> {
        self.0
            .with_year(year)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .ok_or(ContactError::BirthdayOutOfRange { year })
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl Serialize for Birthday {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Fiche contact : nom (clé unique, immuable), téléphones, anniversaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: String,
    #[serde(default)]
    phones: Vec<PhoneNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new<S: Into<String>>(name: S) -> Result<Self, ContactError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ContactError::EmptyName);
        }
        Ok(Self {
            name,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Ajoute un numéro (pas de dédoublonnage).
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ContactError> {
        self.phones.push(PhoneNumber::new(raw)?);
        Ok(())
    }

    /// Retire la première occurrence de `old` et ajoute `new` en fin de liste.
    pub fn change_phone(&mut self, old: &str, new: &str) -> Result<(), ContactError> {
        let new = PhoneNumber::new(new)?;
        let pos = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or(ContactError::PhoneNotFound)?;
        self.phones.remove(pos);
        self.phones.push(new);
        Ok(())
    }

    /// Remplace silencieusement un anniversaire existant.
    pub fn add_birthday(&mut self, raw: &str) -> Result<(), ContactError> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }

    /// Nombre de jours entiers avant le prochain anniversaire.
    ///
    /// Calculé sur la durée exacte `prochain - now` (arrondie vers le bas),
    /// pas sur une différence de dates calendaires : à 09:00 un anniversaire
    /// dans cinq jours calendaires donne 4.
    pub fn days_to_birthday(&self, now: NaiveDateTime) -> Result<Option<i64>, ContactError> {
        let Some(birthday) = &self.birthday else {
            return Ok(None);
        };
        let next = birthday.next_occurrence(now)?;
        Ok(Some((next - now).num_days()))
    }

    pub fn days_to_birthday_now(&self) -> Result<Option<i64>, ContactError> {
        self.days_to_birthday(chrono::Local::now().naive_local())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(phone.as_str())?;
        }
        Ok(())
    }
}
