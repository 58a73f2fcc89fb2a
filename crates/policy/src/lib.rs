//! Domain core of the rule checker.
//!
//! A rule names one required character and an inclusive occurrence range for
//! it. The [`FormController`] owns the rule being drafted, the candidate
//! password and the append-only list of [`CheckResult`]s. Every mutation goes
//! through the controller, which re-derives [`FieldErrors`] afterwards.
//!
//! ```
//! use policy::FormController;
//!
//! let mut form = FormController::new();
//! form.set_required_char("a").unwrap();
//! form.set_min_count("1").unwrap();
//! form.set_max_count("3").unwrap();
//! form.set_candidate_text("banana");
//! let result = form.submit().unwrap();
//! assert!(result.is_valid());
//! assert_eq!(form.valid_count(), 1);
//! ```

mod check;
mod controller;
mod draft;
mod errors;
mod results;

pub use check::{CheckResult, OccurrenceMatcher};
pub use controller::FormController;
pub use draft::{
    FieldErrors, MAX_COUNT_ERROR, MAX_COUNT_INPUT_LEN, MIN_COUNT_ERROR,
    REQUIRED_CHAR_INPUT_LEN, RuleDraft,
};
pub use errors::{EditRejected, SubmitRejected};
pub use results::ResultList;
