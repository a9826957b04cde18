use chrono::NaiveDate;
use holocron::error::HolocronError;
use holocron::model::*;

// ==========================================================================
// FIELD TESTS
// ==========================================================================

#[test]
fn name_is_trimmed_and_must_not_be_blank() {
    assert_eq!(Name::new("  Luke ").unwrap().value(), "Luke");
    assert!(Name::new("   ").is_err());
    assert!(!Name::is_valid(""));
}

#[test]
fn phone_validity() {
    assert!(Phone::is_valid("1234567890"));
    assert!(!Phone::is_valid("12345"));
    assert!(!Phone::is_valid("12345abcde"));
}

#[test]
fn phone_constructor_reports_invalid_value() {
    match Phone::new("12345") {
        Err(HolocronError::InvalidPhone { value }) => assert_eq!(value, "12345"),
        other => panic!("expected InvalidPhone, got {:?}", other),
    }
}

#[test]
fn birthday_validity() {
    assert!(Birthday::is_valid("29.02.2020"));
    assert!(!Birthday::is_valid("31.04.2021"));
    assert!(!Birthday::is_valid("1.1.2020"));
}

#[test]
fn birthday_keeps_raw_text_and_date() {
    let birthday = Birthday::new("25.12.1990").unwrap();
    assert_eq!(birthday.value(), "25.12.1990");
    assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1990, 12, 25).unwrap());
    assert_eq!(birthday.to_string(), "25.12.1990");
}

#[test]
fn email_validity() {
    assert!(Email::is_valid("leia@alderaan.gov"));
    assert!(!Email::is_valid("leia@alderaan"));
    assert!(matches!(
        Email::new("not an email"),
        Err(HolocronError::InvalidEmail { .. })
    ));
}

#[test]
fn address_rejects_only_blank() {
    assert_eq!(Address::new(" Tatooine, Lars farm ").unwrap().value(), "Tatooine, Lars farm");
    assert!(Address::new("").is_err());
}

#[test]
fn fields_validate_when_deserialized() {
    let phone: Phone = serde_json::from_str("\"1234567890\"").unwrap();
    assert_eq!(phone.value(), "1234567890");
    assert!(serde_json::from_str::<Phone>("\"12\"").is_err());
    assert!(serde_json::from_str::<Birthday>("\"31.04.2021\"").is_err());
}

// ==========================================================================
// RECORD TESTS
// ==========================================================================

#[test]
fn record_new_has_one_phone_and_no_optionals() {
    let record = Record::new("Luke", "1234567890").unwrap();
    assert_eq!(record.name(), "Luke");
    assert_eq!(record.phone_count(), 1);
    assert_eq!(record.address(), None);
    assert!(record.birthday().is_none());
    assert_eq!(record.email(), None);
}

#[test]
fn record_new_rejects_bad_phone() {
    assert!(Record::new("Luke", "123").is_err());
}

#[test]
fn adding_same_phone_twice_keeps_one() {
    let mut record = Record::new("Luke", "1234567890").unwrap();
    record.add_phone("1234567890").unwrap();
    assert_eq!(record.phone_count(), 1);
}

#[test]
fn add_phone_rejects_invalid() {
    let mut record = Record::new("Luke", "1234567890").unwrap();
    assert!(record.add_phone("abc").is_err());
    assert_eq!(record.phone_count(), 1);
}

#[test]
fn edit_phone_replaces_number() {
    let mut record = Record::new("Luke", "1111111111").unwrap();
    record.edit_phone("1111111111", "2222222222").unwrap();
    let phones: Vec<&str> = record.phones().map(|p| p.value()).collect();
    assert_eq!(phones, vec!["2222222222"]);
}

#[test]
fn edit_phone_validates_new_before_lookup() {
    let mut record = Record::new("Luke", "1111111111").unwrap();
    // Old number is missing too, but the invalid new number wins.
    assert!(matches!(
        record.edit_phone("9999999999", "bad"),
        Err(HolocronError::InvalidPhone { .. })
    ));
    assert!(matches!(
        record.edit_phone("9999999999", "2222222222"),
        Err(HolocronError::NotFound { .. })
    ));
}

#[test]
fn edit_phone_onto_existing_number_collapses() {
    let mut record = Record::new("Luke", "1111111111").unwrap();
    record.add_phone("2222222222").unwrap();
    record.edit_phone("1111111111", "2222222222").unwrap();
    assert_eq!(record.phone_count(), 1);
}

#[test]
fn find_phone_reports_missing() {
    let record = Record::new("Luke", "1111111111").unwrap();
    assert_eq!(record.find_phone("1111111111").unwrap().value(), "1111111111");
    assert!(matches!(
        record.find_phone("2222222222"),
        Err(HolocronError::NotFound { .. })
    ));
}

#[test]
fn remove_phone_keeps_at_least_one() {
    let mut record = Record::new("Luke", "1111111111").unwrap();
    record.add_phone("2222222222").unwrap();
    record.remove_phone("1111111111").unwrap();
    assert_eq!(record.phone_count(), 1);

    assert!(matches!(
        record.remove_phone("2222222222"),
        Err(HolocronError::CannotRemoveLastPhone { .. })
    ));
    assert!(matches!(
        record.remove_phone("3333333333"),
        Err(HolocronError::NotFound { .. })
    ));
}

#[test]
fn optional_fields_latest_write_wins() {
    let mut record = Record::new("Luke", "1111111111").unwrap();
    record.add_address("Tatooine").unwrap();
    record.add_address("Dagobah").unwrap();
    record.add_email("luke@rebels.org").unwrap();
    record.add_email("skywalker@jedi.org").unwrap();
    assert_eq!(record.address(), Some("Dagobah"));
    assert_eq!(record.email(), Some("skywalker@jedi.org"));
}

#[test]
fn blank_birthday_is_a_no_op() {
    let mut record = Record::new("Luke", "1111111111").unwrap();
    record.add_birthday("25.05.1977").unwrap();
    record.add_birthday("").unwrap();
    assert_eq!(record.birthday().unwrap().value(), "25.05.1977");
}

#[test]
fn invalid_birthday_is_rejected_and_keeps_old_value() {
    let mut record = Record::new("Luke", "1111111111").unwrap();
    record.add_birthday("25.05.1977").unwrap();
    assert!(record.add_birthday("31.04.2021").is_err());
    assert_eq!(record.birthday().unwrap().value(), "25.05.1977");
}

#[test]
fn record_display_includes_present_fields_only() {
    let mut record = Record::new("Luke", "2222222222").unwrap();
    record.add_phone("1111111111").unwrap();
    assert_eq!(
        record.to_string(),
        "Contact name: Luke, phones: 1111111111,2222222222"
    );

    record.add_birthday("25.05.1977").unwrap();
    record.add_address("Tatooine").unwrap();
    record.add_email("luke@rebels.org").unwrap();
    assert_eq!(
        record.to_string(),
        "Contact name: Luke, phones: 1111111111,2222222222, birthday: 25.05.1977, address: Tatooine, email: luke@rebels.org"
    );
}

#[test]
fn search_text_skips_missing_fields() {
    let mut record = Record::new("Luke", "1111111111").unwrap();
    assert_eq!(record.search_text(), "Luke1111111111");
    record.add_email("luke@rebels.org").unwrap();
    assert_eq!(record.search_text(), "Luke1111111111luke@rebels.org");
}

// ==========================================================================
// NOTE TESTS
// ==========================================================================

#[test]
fn note_create_trims_title_and_text() {
    let note = Note::create("  Plans ", " Destroy the Death Star ", vec![]);
    assert_eq!(note.title(), "Plans");
    assert_eq!(note.text(), "Destroy the Death Star");
    assert!(note.tags().is_empty());
}

#[test]
fn note_add_tag_keeps_duplicates_in_order() {
    let mut note = Note::create("Plans", "x", vec![]);
    note.add_tag("rebels");
    note.add_tag("empire");
    note.add_tag("rebels");
    assert_eq!(note.tags(), vec!["rebels", "empire", "rebels"]);
    assert!(note.has_tag("empire"));
    assert!(!note.has_tag("Empire"));
}

#[test]
fn note_display() {
    let note = Note::create("Plans", "Attack", vec!["war".into(), "rebels".into()]);
    assert_eq!(note.to_string(), "title: Plans | Note: Attack | Tags: war, rebels");
}
