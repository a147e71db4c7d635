use super::{util, AddressBook, UpcomingBirthday};
use crate::model::ContactError;
use chrono::{Duration, NaiveDateTime};

/// Fenêtre de rappel, bornes incluses (en jours).
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

pub(super) fn upcoming_birthdays(
    book: &AddressBook,
    now: NaiveDateTime,
) -> Result<Vec<UpcomingBirthday>, ContactError> {
    let mut out = Vec::new();
    for record in book.all() {
        let Some(days) = record.days_to_birthday(now)? else {
            continue;
        };
        if !(0..=UPCOMING_WINDOW_DAYS).contains(&days) {
            continue;
        }
        // date effective = now + jours entiers, pas la date projetée elle-même
        let effective = (now + Duration::days(days)).date();
        out.push(UpcomingBirthday {
            name: record.name().to_string(),
            date: util::shift_weekend_to_monday(effective),
        });
    }
    Ok(out)
}
