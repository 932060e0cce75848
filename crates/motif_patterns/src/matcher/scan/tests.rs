use super::*;
use pretty_assertions::assert_eq;

#[test]
fn prefix_and_suffix_checks() {
    assert!(has_prefix("root/a.mp3", "root/"));
    assert!(!has_prefix("roo", "root/"));
    assert!(has_suffix("root/a.mp3", ".mp3"));
    assert!(!has_suffix("root/text.txt", ".mp3"));
    assert!(has_prefix("anything", ""));
}

#[test]
fn occurrences_left_to_right() {
    let text = "root/a/b/c/d-e-f.mp3";
    let found: Vec<_> = occurrences(text, "/", 5, 16).collect();
    assert_eq!(found, vec![6, 8, 10]);
}

#[test]
fn occurrence_at_last_valid_position_is_found() {
    // "-" ends exactly at the window end.
    let found: Vec<_> = occurrences("x-", "-", 0, 2).collect();
    assert_eq!(found, vec![1]);

    let found: Vec<_> = occurrences("abcd", "cd", 0, 4).collect();
    assert_eq!(found, vec![2]);
}

#[test]
fn occurrences_respect_window_end() {
    // The second "-" lies past the window.
    let found: Vec<_> = occurrences("a-b-c", "-", 0, 3).collect();
    assert_eq!(found, vec![1]);

    // A needle straddling the end is not reported.
    let found: Vec<_> = occurrences("a--", "--", 0, 2).collect();
    assert!(found.is_empty());
}

#[test]
fn overlapping_occurrences_are_reported() {
    let found: Vec<_> = occurrences("aaaa", "aa", 0, 4).collect();
    assert_eq!(found, vec![0, 1, 2]);
}

#[test]
fn occurrences_start_at_from() {
    let found: Vec<_> = occurrences("-a-b", "-", 1, 4).collect();
    assert_eq!(found, vec![2]);
}

#[test]
fn empty_needle_yields_nothing() {
    assert_eq!(occurrences("abc", "", 0, 3).count(), 0);
}

#[test]
fn multibyte_occurrences_fall_on_boundaries() {
    let text = "é-ü-";
    let found: Vec<_> = occurrences(text, "-", 0, text.len()).collect();
    assert_eq!(found, vec![2, 5]);
    assert!(found.iter().all(|&at| text.is_char_boundary(at)));
}

#[test]
fn split_points_cover_window_inclusive() {
    let points: Vec<_> = split_points("abc", 1, 3).collect();
    assert_eq!(points, vec![1, 2, 3]);
}

#[test]
fn split_points_skip_inside_chars() {
    // "é" is two bytes.
    let points: Vec<_> = split_points("aéb", 0, 4).collect();
    assert_eq!(points, vec![0, 1, 3, 4]);
}

#[test]
fn split_points_empty_when_from_past_end() {
    assert_eq!(split_points("abc", 3, 2).count(), 0);
}
