use quill_types::Segment;

use crate::markup::{extract_flagged, plain_text, segment};

#[test]
fn extracts_terms_in_order_and_strips_markers() {
    let (display, terms) = extract_flagged("Use **foo** and **bar** please");

    assert_eq!(display, "Use foo and bar please");
    assert_eq!(terms, vec!["foo", "bar"]);
}

#[test]
fn duplicate_terms_keep_one_entry_per_occurrence() {
    let (display, terms) = extract_flagged("**x** then **x** again");

    assert_eq!(display, "x then x again");
    assert_eq!(terms, vec!["x", "x"]);
}

#[test]
fn unmatched_opener_is_left_verbatim() {
    let (display, terms) = extract_flagged("a **b");

    assert_eq!(display, "a **b");
    assert!(terms.is_empty());
}

#[test]
fn no_markers_passes_through() {
    let (display, terms) = extract_flagged("nothing flagged here");

    assert_eq!(display, "nothing flagged here");
    assert!(terms.is_empty());
}

#[test]
fn whole_word_matching_skips_partial_words() {
    let segments = segment("cat category cat", &["cat".to_string()]);

    assert_eq!(
        segments,
        vec![
            Segment::Flagged("cat".to_string()),
            Segment::Plain(" category ".to_string()),
            Segment::Flagged("cat".to_string()),
        ]
    );
}

#[test]
fn every_occurrence_of_every_distinct_term_is_flagged() {
    let terms = vec!["foo".to_string(), "bar".to_string(), "foo".to_string()];
    let segments = segment("foo bar foo", &terms);

    assert_eq!(
        segments,
        vec![
            Segment::Flagged("foo".to_string()),
            Segment::Plain(" ".to_string()),
            Segment::Flagged("bar".to_string()),
            Segment::Plain(" ".to_string()),
            Segment::Flagged("foo".to_string()),
        ]
    );
}

#[test]
fn overlapping_matches_resolve_first_wins() {
    let terms = vec!["foo bar".to_string(), "bar".to_string()];
    let segments = segment("foo bar", &terms);

    assert_eq!(segments, vec![Segment::Flagged("foo bar".to_string())]);
}

#[test]
fn copy_payload_equals_display_text() {
    let (display, terms) = extract_flagged("Use **foo** and **bar** please");
    let segments = segment(&display, &terms);

    assert_eq!(plain_text(&segments), display);
}

#[test]
fn empty_display_yields_no_segments() {
    assert!(segment("", &[]).is_empty());
}
