//! Amount integration tests

use core_kernel::{Amount, AmountError};

#[test]
fn amounts_serialize_as_bare_integers() {
    let amount = Amount::new(15890);
    let json = serde_json::to_string(&amount).unwrap();
    assert_eq!(json, "15890");

    let back: Amount = serde_json::from_str("-11677").unwrap();
    assert_eq!(back, Amount::new(-11677));
}

#[test]
fn amounts_sum_over_iterators() {
    let shares = vec![Amount::new(34), Amount::new(34), Amount::new(34)];
    let total: Amount = shares.into_iter().sum();
    assert_eq!(total, Amount::new(102));
}

#[test]
fn split_of_real_bill_amounts() {
    // 2025-08 Spotify bill split six ways
    let share = Amount::new(15890).split_ceil(6).unwrap();
    assert_eq!(share, Amount::new(2649));

    // a single subscriber pays the whole bill
    let solo = Amount::new(22091).split_ceil(1).unwrap();
    assert_eq!(solo, Amount::new(22091));
}

#[test]
fn split_overflow_is_reported() {
    let result = Amount::new(i64::MAX).split_ceil(2);
    assert_eq!(result, Err(AmountError::Overflow));
}
