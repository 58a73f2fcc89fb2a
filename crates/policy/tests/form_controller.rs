//! End-to-end behaviour of the form controller:
//! - field edits and their silent rejection
//! - submission readiness and the zero-occurrence abort
//! - result log growth and tallies

use policy::{
    EditRejected, FieldErrors, FormController, MAX_COUNT_ERROR, MIN_COUNT_ERROR, RuleDraft,
    SubmitRejected,
};
use pretty_assertions::assert_eq;

fn form_with(ch: &str, min: &str, max: &str, password: &str) -> FormController {
    let mut form = FormController::new();
    form.set_required_char(ch).unwrap();
    form.set_min_count(min).unwrap();
    form.set_max_count(max).unwrap();
    form.set_candidate_text(password);
    form
}

fn assert_pristine(form: &FormController) {
    assert_eq!(form.draft(), &RuleDraft::default());
    assert_eq!(form.errors(), &FieldErrors::default());
    assert_eq!(form.candidate_text(), "");
}

#[test]
fn banana_with_too_many_a_is_recorded_as_not_valid() {
    let mut form = form_with("a", "1", "2", "banana");
    let result = form.submit().unwrap().clone();

    assert_eq!(result.occurrences(), 3);
    assert!(!result.is_valid());
    assert_eq!(result.required_char(), "a");
    assert_eq!(result.min_count(), 1);
    assert_eq!(result.max_count(), 2);
    assert_eq!(result.password(), "banana");
    assert_eq!(form.results().len(), 1);
    assert_eq!(form.invalid_count(), 1);
    assert_pristine(&form);
}

#[test]
fn banana_within_range_is_valid() {
    let mut form = form_with("a", "1", "3", "banana");
    assert!(form.submit().unwrap().is_valid());
    assert_eq!(form.valid_count(), 1);
    assert_eq!(form.invalid_count(), 0);
}

#[test]
fn missing_character_aborts_without_changes() {
    let mut form = form_with("z", "1", "1", "banana");
    let draft_before = form.draft().clone();

    assert_eq!(
        form.submit(),
        Err(SubmitRejected::NoOccurrences("z".to_owned()))
    );
    assert!(form.results().is_empty());
    assert_eq!(form.draft(), &draft_before);
    assert_eq!(form.candidate_text(), "banana");
}

#[test]
fn upper_case_password_letters_count() {
    let mut form = form_with("a", "2", "2", "AbA");
    assert!(form.submit().unwrap().is_valid());
}

#[test]
fn upper_case_required_char_matches_lower_case_letters() {
    let mut form = form_with("A", "3", "3", "banana");
    let result = form.submit().unwrap();
    assert_eq!(result.occurrences(), 3);
    assert!(result.is_valid());
    assert_eq!(result.required_char(), "A");
}

#[test]
fn inverted_range_flags_both_fields_but_still_submits() {
    let mut form = form_with("a", "5", "2", "banana");
    assert_eq!(form.errors().min_count_error(), MIN_COUNT_ERROR);
    assert_eq!(form.errors().max_count_error(), MAX_COUNT_ERROR);
    assert!(form.can_submit());

    let result = form.submit().unwrap();
    assert!(!result.is_valid());
    assert_pristine(&form);
}

#[test]
fn equal_bounds_are_not_an_error() {
    let form = form_with("a", "3", "3", "banana");
    assert!(form.errors().is_empty());
}

#[test]
fn incomplete_form_submit_is_a_no_op() {
    let cases = [
        form_with("", "1", "3", "banana"),
        form_with("a", "0", "3", "banana"),
        form_with("a", "1", "0", "banana"),
        form_with("a", "1", "3", ""),
    ];
    for mut form in cases {
        let draft_before = form.draft().clone();
        let candidate_before = form.candidate_text().to_owned();
        assert!(!form.can_submit());
        assert_eq!(form.submit(), Err(SubmitRejected::NotReady));
        assert!(form.results().is_empty());
        assert_eq!(form.draft(), &draft_before);
        assert_eq!(form.candidate_text(), candidate_before);
    }
}

#[test]
fn over_long_required_char_is_ignored() {
    let mut form = FormController::new();
    form.set_required_char("x").unwrap();
    assert_eq!(
        form.set_required_char("xy"),
        Err(EditRejected::TooLong { len: 2, max: 1 })
    );
    assert_eq!(form.draft().required_char(), "x");

    // Surrounding whitespace does not count toward the limit.
    form.set_required_char("  y  ").unwrap();
    assert_eq!(form.draft().required_char(), "y");

    // Clearing the field is always allowed.
    form.set_required_char("").unwrap();
    assert_eq!(form.draft().required_char(), "");
}

#[test]
fn count_fields_reject_bad_input_and_keep_value() {
    let mut form = FormController::new();
    form.set_min_count("12").unwrap();
    form.set_max_count("7").unwrap();

    for bad in ["1234", "abc", "1x", "-5"] {
        assert!(form.set_min_count(bad).is_err(), "{bad}");
        assert!(form.set_max_count(bad).is_err(), "{bad}");
    }
    assert_eq!(form.draft().min_count(), 12);
    assert_eq!(form.draft().max_count(), 7);

    form.set_min_count(" 3 ").unwrap();
    assert_eq!(form.draft().min_count(), 3);
}

#[test]
fn tallies_always_cover_the_whole_log() {
    let mut form = FormController::new();
    let runs = [
        ("a", "1", "3", "banana"),
        ("a", "1", "2", "banana"),
        ("z", "1", "1", "banana"),
        ("n", "2", "2", "banana"),
        ("", "1", "1", "banana"),
        ("b", "1", "1", "bob"),
    ];
    for (ch, min, max, pw) in runs {
        form.set_required_char(ch).unwrap();
        form.set_min_count(min).unwrap();
        form.set_max_count(max).unwrap();
        form.set_candidate_text(pw);
        let before = form.results().len();
        match form.submit() {
            Ok(_) => assert_eq!(form.results().len(), before + 1),
            Err(_) => assert_eq!(form.results().len(), before),
        }
        assert_eq!(
            form.valid_count() + form.invalid_count(),
            form.results().len()
        );
    }

    let verdicts: Vec<_> = form.results().iter().map(|r| r.verdict()).collect();
    assert_eq!(verdicts, vec!["Valid", "Not Valid", "Valid", "Not Valid"]);
}

#[test]
fn results_serialize_as_a_plain_array() {
    let mut form = form_with("a", "1", "3", "banana");
    form.submit().unwrap();

    let json = serde_json::to_value(form.results()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "required_char": "a",
            "min_count": 1,
            "max_count": 3,
            "password": "banana",
            "occurrences": 3,
            "is_valid": true
        }])
    );
}
