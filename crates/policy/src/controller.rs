use tracing::{debug, info};

use crate::{
    check::{CheckResult, OccurrenceMatcher},
    draft::{FieldErrors, RuleDraft},
    errors::{EditRejected, SubmitRejected},
    results::ResultList,
};

/// Owns the form: the rule draft, the candidate password, the derived field
/// errors and the result log.
///
/// Rejected edits and submissions return an error and leave every field as it
/// was. Callers that mirror a text widget should re-read the stored values
/// after each call.
#[derive(Debug, Default)]
pub struct FormController {
    draft: RuleDraft,
    errors: FieldErrors,
    candidate: String,
    results: ResultList,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &RuleDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn candidate_text(&self) -> &str {
        &self.candidate
    }

    pub fn results(&self) -> &ResultList {
        &self.results
    }

    pub fn set_required_char(&mut self, input: &str) -> Result<(), EditRejected> {
        self.edit_draft("required_char", |d| d.set_required_char(input))
    }

    pub fn set_min_count(&mut self, input: &str) -> Result<(), EditRejected> {
        self.edit_draft("min_count", |d| d.set_min_count(input))
    }

    pub fn set_max_count(&mut self, input: &str) -> Result<(), EditRejected> {
        self.edit_draft("max_count", |d| d.set_max_count(input))
    }

    /// Stores the trimmed password. Never rejected.
    pub fn set_candidate_text(&mut self, input: &str) {
        self.candidate = input.trim().to_owned();
    }

    fn edit_draft(
        &mut self,
        field: &'static str,
        edit: impl FnOnce(&mut RuleDraft) -> Result<(), EditRejected>,
    ) -> Result<(), EditRejected> {
        if let Err(err) = edit(&mut self.draft) {
            debug!(field, %err, "edit ignored");
            return Err(err);
        }
        self.errors = FieldErrors::derive(&self.draft);
        Ok(())
    }

    /// Whether the "Check" action is enabled.
    ///
    /// Counts of 0 count as unset. Field errors are not consulted, so an
    /// inconsistent range can still be submitted.
    pub fn can_submit(&self) -> bool {
        !self.draft.required_char().is_empty()
            && self.draft.min_count() != 0
            && self.draft.max_count() != 0
            && !self.candidate.is_empty()
    }

    /// Check the candidate against the draft and record the outcome.
    ///
    /// On success the draft, the errors and the candidate are reset and the
    /// new entry is returned. A password without a single occurrence of the
    /// required character is not recorded.
    pub fn submit(&mut self) -> Result<&CheckResult, SubmitRejected> {
        if !self.can_submit() {
            debug!("submit ignored: form incomplete");
            return Err(SubmitRejected::NotReady);
        }

        let required = self.draft.required_char();
        let matcher = OccurrenceMatcher::new(required)
            .map_err(|err| SubmitRejected::Pattern(err.to_string()))?;
        let occurrences = matcher.count(&self.candidate);
        if occurrences == 0 {
            debug!(required, "submit ignored: no occurrences");
            return Err(SubmitRejected::NoOccurrences(required.to_owned()));
        }

        let result = CheckResult::evaluate(&self.draft, &self.candidate, occurrences);
        info!(
            required = result.required_char(),
            min = result.min_count(),
            max = result.max_count(),
            occurrences,
            valid = result.is_valid(),
            "password checked"
        );
        self.reset_form();
        Ok(self.results.push(result))
    }

    fn reset_form(&mut self) {
        self.draft = RuleDraft::default();
        self.errors = FieldErrors::default();
        self.candidate.clear();
    }

    pub fn valid_count(&self) -> usize {
        self.results.valid_count()
    }

    pub fn invalid_count(&self) -> usize {
        self.results.invalid_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{MAX_COUNT_ERROR, MIN_COUNT_ERROR};

    fn filled(ch: &str, min: &str, max: &str, password: &str) -> FormController {
        let mut form = FormController::new();
        form.set_required_char(ch).unwrap();
        form.set_min_count(min).unwrap();
        form.set_max_count(max).unwrap();
        form.set_candidate_text(password);
        form
    }

    #[test]
    fn errors_follow_every_draft_edit() {
        let mut form = FormController::new();
        form.set_min_count("5").unwrap();
        assert_eq!(form.errors().min_count_error(), MIN_COUNT_ERROR);
        assert_eq!(form.errors().max_count_error(), MAX_COUNT_ERROR);

        form.set_max_count("5").unwrap();
        assert!(form.errors().is_empty());
    }

    #[test]
    fn rejected_edit_keeps_errors() {
        let mut form = FormController::new();
        form.set_min_count("5").unwrap();
        form.set_max_count("2").unwrap();
        assert!(form.set_max_count("abc").is_err());
        assert_eq!(form.draft().max_count(), 2);
        assert!(!form.errors().is_empty());
    }

    #[test]
    fn zero_counts_block_submission() {
        let form = filled("a", "0", "3", "banana");
        assert!(!form.can_submit());
        let form = filled("a", "1", "0", "banana");
        assert!(!form.can_submit());
    }

    #[test]
    fn candidate_is_trimmed() {
        let mut form = FormController::new();
        form.set_candidate_text("  hunter2 \t");
        assert_eq!(form.candidate_text(), "hunter2");
    }

    #[test]
    fn submit_returns_new_entry() {
        let mut form = filled("a", "1", "3", "banana");
        let result = form.submit().unwrap();
        assert_eq!(result.occurrences(), 3);
        assert!(result.is_valid());
    }

    #[test]
    fn whitespace_only_candidate_is_not_ready() {
        let mut form = filled("a", "1", "3", "   ");
        assert_eq!(form.submit(), Err(SubmitRejected::NotReady));
    }
}
