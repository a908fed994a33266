use text_common::dedupe::dedupe;

#[test]
fn dedupe_integers_keeps_first_occurrence_order() {
    assert_eq!(dedupe(&[3i64, 1, 3, 2, 1]), vec![3, 1, 2]);
}

#[test]
fn dedupe_strings() {
    let input = vec!["b".to_string(), "a".to_string(), "b".to_string()];
    assert_eq!(dedupe(&input), vec!["b".to_string(), "a".to_string()]);
}

#[test]
fn dedupe_is_case_sensitive() {
    assert_eq!(dedupe(&["A", "a", "A"]), vec!["A", "a"]);
}

#[test]
fn dedupe_empty() {
    let empty: [i64; 0] = [];
    assert!(dedupe(&empty).is_empty());
}

#[test]
fn dedupe_idempotent() {
    let once = dedupe(&[5i64, 5, 4, 5, 3, 4]);
    let twice = dedupe(&once);
    assert_eq!(once, twice);
}
