#![forbid(unsafe_code)]
use carnet::{AddressBook, Record};
use chrono::{NaiveDate, NaiveDateTime};

fn monday_midnight() -> NaiveDateTime {
    // 10.06.2024 est un lundi
    NaiveDate::from_ymd_opt(2024, 6, 10)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn person(name: &str, phone: &str, birthday: Option<&str>) -> Record {
    let mut r = Record::new(name).unwrap();
    r.add_phone(phone).unwrap();
    if let Some(b) = birthday {
        r.add_birthday(b).unwrap();
    }
    r
}

#[test]
fn saturday_birthday_is_shifted_to_monday() {
    let mut book = AddressBook::new();
    book.add(person("Sat", "1111111111", Some("15.06.1990")));
    book.add(person("Far", "2222222222", Some("19.06.1985")));
    book.add(person("NoDate", "3333333333", None));

    let upcoming = book.upcoming_birthdays(monday_midnight()).unwrap();
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].name, "Sat");
    assert_eq!(upcoming[0].date_string(), "17.06.2024");
}

#[test]
fn window_is_inclusive_and_keeps_book_order() {
    let mut book = AddressBook::new();
    book.add(person("Seven", "1111111111", Some("17.06.2000"))); // lundi, J+7
    book.add(person("Today", "2222222222", Some("10.06.2000"))); // J+0
    book.add(person("Eight", "3333333333", Some("18.06.2000")));

    let upcoming = book.upcoming_birthdays(monday_midnight()).unwrap();
    let names: Vec<_> = upcoming.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, ["Seven", "Today"]);
    assert_eq!(upcoming[0].date_string(), "17.06.2024");
    assert_eq!(upcoming[1].date_string(), "10.06.2024");
}

#[test]
fn effective_date_follows_elapsed_days() {
    // à 09:00 le samedi 15 n'est plus qu'à 4 jours entiers : vendredi 14
    let mut book = AddressBook::new();
    book.add(person("Sat", "1111111111", Some("15.06.1990")));
    let morning = monday_midnight() + chrono::Duration::hours(9);
    let upcoming = book.upcoming_birthdays(morning).unwrap();
    assert_eq!(upcoming[0].date_string(), "14.06.2024");
}

#[test]
fn upcoming_across_year_end() {
    let mut book = AddressBook::new();
    book.add(person("Newyear", "1111111111", Some("01.01.1970")));
    let now = NaiveDate::from_ymd_opt(2022, 12, 28)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let upcoming = book.upcoming_birthdays(now).unwrap();
    // 01.01.2023 est un dimanche
    assert_eq!(upcoming[0].date_string(), "02.01.2023");
}

#[test]
fn add_replaces_existing_record() {
    let mut book = AddressBook::new();
    book.add(person("Alice", "1111111111", Some("01.01.1990")));
    book.add(person("Bob", "2222222222", None));
    book.add(person("Alice", "9999999999", None));

    assert_eq!(book.len(), 2);
    let alice = book.get("Alice").unwrap();
    let phones: Vec<_> = alice.phones().iter().map(|p| p.as_str()).collect();
    assert_eq!(phones, ["9999999999"]);
    assert!(alice.birthday().is_none());
    // la fiche remplacée garde sa place
    let names: Vec<_> = book.all().map(|r| r.name()).collect();
    assert_eq!(names, ["Alice", "Bob"]);
}

#[test]
fn named_lookup_interface() {
    let mut book = AddressBook::new();
    assert!(!book.contains("Alice"));
    book.add_record(person("Alice", "1111111111", None));
    assert!(book.contains("Alice"));
    book.get_mut("Alice").unwrap().add_phone("2222222222").unwrap();
    assert_eq!(book.get("Alice").unwrap().phones().len(), 2);
    assert!(book.get("alice").is_none());
}

#[test]
fn wall_clock_variants() {
    let mut book = AddressBook::new();
    assert!(book.upcoming_birthdays_now().unwrap().is_empty());
    let mut r = person("Clock", "1111111111", None);
    assert_eq!(r.days_to_birthday_now().unwrap(), None);
    r.add_birthday("01.01.2000").unwrap();
    let days = r.days_to_birthday_now().unwrap().unwrap();
    assert!((0..=366).contains(&days));
    book.add(r);
    assert!(book.upcoming_birthdays_now().unwrap().len() <= 1);
}
