use chrono::{NaiveDate, Weekday};
use holocron::queries::*;
use holocron::store::ContactStore;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn store_with(birthdays: &[(&str, &str)]) -> ContactStore {
    let mut store = ContactStore::new();
    for (i, (name, birthday)) in birthdays.iter().enumerate() {
        let phone = format!("{:010}", i);
        store
            .add_record(name, &phone, None, Some(birthday), None)
            .unwrap();
    }
    store
}

// ==========================================================================
// BIRTHDAY QUERIES
// ==========================================================================

#[test]
fn birthday_lands_in_its_own_bucket_regardless_of_year() {
    // 2024-06-13 is a Thursday.
    let today = date(2024, 6, 13);
    let store = store_with(&[("Luke", "15.06.1951")]);

    let buckets = birthday_queries::upcoming_birthdays(&store, today, 7);
    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].date, date(2024, 6, 15));
    assert_eq!(buckets[0].names, vec!["Luke"]);
}

#[test]
fn saturday_is_labelled_monday() {
    let today = date(2024, 6, 13);
    let store = store_with(&[("Luke", "15.06.1951"), ("Leia", "16.06.1951")]);

    let buckets = birthday_queries::upcoming_birthdays(&store, today, 7);
    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].weekday_label, "Monday");
    assert_eq!(buckets[1].date, date(2024, 6, 16));
    assert_eq!(buckets[1].weekday_label, "Sunday");
}

#[test]
fn weekday_labels() {
    assert_eq!(birthday_queries::weekday_label(Weekday::Sat), "Monday");
    assert_eq!(birthday_queries::weekday_label(Weekday::Mon), "Monday");
    assert_eq!(birthday_queries::weekday_label(Weekday::Fri), "Friday");
    assert_eq!(birthday_queries::weekday_label(Weekday::Sun), "Sunday");
}

#[test]
fn same_day_birthdays_share_a_bucket() {
    let today = date(2024, 6, 13);
    let store = store_with(&[("Yoda", "13.06.1100"), ("Han", "13.06.1942")]);

    let buckets = birthday_queries::upcoming_birthdays(&store, today, 7);
    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].date, today);
    assert_eq!(buckets[0].names, vec!["Han", "Yoda"]);
}

#[test]
fn window_excludes_its_end_day() {
    let today = date(2024, 6, 13);
    let store = store_with(&[("Lando", "20.06.1950"), ("Ben", "19.06.1950")]);

    let buckets = birthday_queries::upcoming_birthdays(&store, today, 7);
    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].names, vec!["Ben"]);

    let wider = birthday_queries::upcoming_birthdays(&store, today, 8);
    assert_eq!(wider.len(), 2);
}

#[test]
fn window_wraps_into_next_year() {
    let today = date(2024, 12, 30);
    let store = store_with(&[("Padme", "02.01.1990")]);

    let buckets = birthday_queries::upcoming_birthdays(&store, today, 7);
    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].date, date(2025, 1, 2));
}

#[test]
fn leap_day_birthday_only_matches_leap_years() {
    let store = store_with(&[("Rey", "29.02.2000")]);

    assert!(birthday_queries::upcoming_birthdays(&store, date(2025, 2, 26), 7).is_empty());

    let leap = birthday_queries::upcoming_birthdays(&store, date(2024, 2, 27), 7);
    assert_eq!(leap.len(), 1);
    assert_eq!(leap[0].date, date(2024, 2, 29));
}

#[test]
fn contacts_without_birthdays_are_skipped() {
    let mut store = ContactStore::new();
    store.add_record("R2", "1111111111", None, None, None).unwrap();
    assert!(store.birthdays_per_week(date(2024, 6, 13)).is_empty());
}

#[test]
fn zero_day_window_is_empty() {
    let store = store_with(&[("Luke", "13.06.1951")]);
    assert!(birthday_queries::upcoming_birthdays(&store, date(2024, 6, 13), 0).is_empty());
}

#[test]
fn window_is_capped_at_one_year() {
    let store = store_with(&[("Luke", "13.06.1951")]);
    let buckets = birthday_queries::upcoming_birthdays(&store, date(2024, 6, 13), u32::MAX);

    let dates: Vec<NaiveDate> = buckets.iter().map(|b| b.date).collect();
    assert_eq!(dates, vec![date(2024, 6, 13), date(2025, 6, 13)]);
}

// ==========================================================================
// CONTACT QUERIES
// ==========================================================================

#[test]
fn find_by_criteria_matches_any_field() {
    let mut store = ContactStore::new();
    store
        .add_record("Luke", "1111111111", Some("Tatooine"), None, None)
        .unwrap();
    store
        .add_record("Leia", "2222222222", None, Some("15.06.1951"), Some("leia@alderaan.gov"))
        .unwrap();

    assert_eq!(
        contact_queries::find_by_criteria(&store, "Tato"),
        vec!["Contact name: Luke, phones: 1111111111, address: Tatooine"]
    );
    assert_eq!(contact_queries::find_by_criteria(&store, "alderaan").len(), 1);
    assert_eq!(contact_queries::find_by_criteria(&store, "06.1951").len(), 1);
    assert_eq!(contact_queries::find_by_criteria(&store, "2222").len(), 1);
}

#[test]
fn find_by_criteria_is_case_sensitive() {
    let mut store = ContactStore::new();
    store.add_record("Luke", "1111111111", None, None, None).unwrap();
    assert!(store.find_by_criteria("luke").is_empty());
    assert_eq!(store.find_by_criteria("Luk").len(), 1);
}

#[test]
fn find_by_criteria_handles_records_without_optionals() {
    let mut store = ContactStore::new();
    store.add_record("Chewie", "1111111111", None, None, None).unwrap();
    store.add_record("Han", "2222222222", None, None, None).unwrap();
    assert_eq!(store.find_by_criteria("111").len(), 1);
    assert!(store.find_by_criteria("zzz").is_empty());
}
