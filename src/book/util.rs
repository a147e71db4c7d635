use chrono::{Datelike, Duration, NaiveDate};

/// Décale un samedi ou un dimanche au lundi suivant.
pub(super) fn shift_weekend_to_monday(date: NaiveDate) -> NaiveDate {
    let weekday = i64::from(date.weekday().num_days_from_monday());
    if weekday >= 5 {
        date + Duration::days(7 - weekday)
    } else {
        date
    }
}
