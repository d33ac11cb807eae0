//! MonthKey integration tests

use core_kernel::MonthKey;

#[test]
fn sorting_is_chronological_not_lexical() {
    let mut months: Vec<MonthKey> = ["2025-02", "2024-12", "2025-01", "2024-03"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    months.sort();

    let rendered: Vec<String> = months.iter().map(|m| m.to_string()).collect();
    assert_eq!(rendered, vec!["2024-03", "2024-12", "2025-01", "2025-02"]);
}

#[test]
fn month_keys_are_usable_as_map_keys() {
    use std::collections::BTreeMap;

    let mut bills: BTreeMap<MonthKey, i64> = BTreeMap::new();
    bills.insert("2025-03".parse().unwrap(), 16626);
    bills.insert("2025-04".parse().unwrap(), 17026);

    let first = bills.keys().next().unwrap();
    assert_eq!(first.to_string(), "2025-03");
}
