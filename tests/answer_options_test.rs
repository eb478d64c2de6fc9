use admin_console::authoring::AnswerOptions;
use admin_console::authoring::options::{BASELINE_SLOTS, MIN_SLOTS};

#[test]
fn test_baseline_has_four_empty_slots() {
    let options = AnswerOptions::baseline();
    assert_eq!(options.len(), BASELINE_SLOTS);
    assert!(options.as_slice().iter().all(String::is_empty));
    assert_eq!(options.correct_index(), 0);
}

#[test]
fn test_add_option_has_no_upper_bound() {
    let mut options = AnswerOptions::baseline();
    for _ in 0..20 {
        options.add_option();
    }
    assert_eq!(options.len(), BASELINE_SLOTS + 20);
}

#[test]
fn test_remove_option_never_goes_below_two() {
    let mut options = AnswerOptions::baseline();
    // Try to remove far more slots than exist
    for _ in 0..10 {
        options.remove_option(0);
        assert!(options.len() >= MIN_SLOTS);
    }
    assert_eq!(options.len(), MIN_SLOTS);
}

#[test]
fn test_remove_option_at_floor_is_noop() {
    let mut options = AnswerOptions::from_parts(vec!["Yes".into(), "No".into()], 1);
    let before = options.clone();

    assert!(!options.remove_option(0));
    assert_eq!(options, before);
    assert_eq!(options.as_slice(), ["Yes", "No"]);
}

#[test]
fn test_remove_option_clamps_correct_index() {
    let mut options = AnswerOptions::from_parts(
        vec!["A".into(), "B".into(), "C".into()],
        2,
    );

    assert!(options.remove_option(2));
    assert_eq!(options.as_slice(), ["A", "B"]);
    assert_eq!(options.correct_index(), 1);
}

#[test]
fn test_remove_option_before_correct_keeps_index_when_in_range() {
    let mut options = AnswerOptions::from_parts(
        vec!["A".into(), "B".into(), "C".into(), "D".into()],
        1,
    );

    assert!(options.remove_option(0));
    assert_eq!(options.as_slice(), ["B", "C", "D"]);
    assert_eq!(options.correct_index(), 1);
}

#[test]
fn test_remove_option_out_of_range_is_noop() {
    let mut options = AnswerOptions::baseline();
    assert!(!options.remove_option(9));
    assert_eq!(options.len(), BASELINE_SLOTS);
}

#[test]
fn test_set_correct_index_rejects_out_of_range() {
    let mut options = AnswerOptions::baseline();
    assert!(options.set_correct_index(3));
    assert!(!options.set_correct_index(4));
    assert_eq!(options.correct_index(), 3);
}

#[test]
fn test_replace_all_preserves_order_and_pads_to_floor() {
    let mut options = AnswerOptions::baseline();
    options.replace_all(["z", "y", "x", "w", "v", "u"]);
    assert_eq!(options.as_slice(), ["z", "y", "x", "w", "v", "u"]);

    options.replace_all(["only"]);
    assert_eq!(options.as_slice(), ["only", ""]);
}

#[test]
fn test_from_parts_clamps_stale_index() {
    let options = AnswerOptions::from_parts(vec!["A".into(), "B".into()], 7);
    assert_eq!(options.correct_index(), 1);
}

#[test]
fn test_reset_truncates_and_pads() {
    let mut long = AnswerOptions::from_parts((0..7).map(|i| i.to_string()).collect(), 6);
    long.reset();
    assert_eq!(long, AnswerOptions::baseline());

    let mut short = AnswerOptions::from_parts(vec!["A".into(), "B".into()], 1);
    short.reset();
    assert_eq!(short, AnswerOptions::baseline());
}

#[test]
fn test_filled_drops_blank_and_whitespace_entries() {
    let options = AnswerOptions::from_parts(
        vec!["A".into(), "".into(), "   ".into(), "B".into(), "\t".into()],
        0,
    );
    assert_eq!(options.filled(), vec!["A".to_string(), "B".to_string()]);
}
