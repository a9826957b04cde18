use crate::store::ContactStore;

/// Description lines of every record whose search text contains `criteria`.
/// Matching is case-sensitive; results come back in name order.
pub fn find_by_criteria(store: &ContactStore, criteria: &str) -> Vec<String> {
    store
        .records()
        .filter(|r| r.search_text().contains(criteria))
        .map(|r| r.to_string())
        .collect()
}

/// Records with a birthday set, in name order.
pub fn with_birthday(store: &ContactStore) -> Vec<(&str, chrono::NaiveDate)> {
    store
        .records()
        .filter_map(|r| r.birthday().map(|b| (r.name(), b.date())))
        .collect()
}
