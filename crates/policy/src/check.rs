use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::draft::RuleDraft;

/// Case-insensitive matcher for one literal required character.
///
/// The character is escaped, so `.` or `*` match themselves.
#[derive(Debug, Clone)]
pub struct OccurrenceMatcher {
    pattern: Regex,
}

impl OccurrenceMatcher {
    pub fn new(required_char: &str) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(&regex::escape(required_char))
            .case_insensitive(true)
            .build()?;
        Ok(Self { pattern })
    }

    /// Number of non-overlapping matches in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.pattern.find_iter(text).count()
    }
}

/// One checked password together with the rule it was checked against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    required_char: String,
    min_count: u16,
    max_count: u16,
    password: String,
    occurrences: usize,
    is_valid: bool,
}

impl CheckResult {
    pub(crate) fn evaluate(draft: &RuleDraft, password: &str, occurrences: usize) -> Self {
        let min = usize::from(draft.min_count());
        let max = usize::from(draft.max_count());
        Self {
            required_char: draft.required_char().to_owned(),
            min_count: draft.min_count(),
            max_count: draft.max_count(),
            password: password.to_owned(),
            occurrences,
            is_valid: occurrences >= min && occurrences <= max,
        }
    }

    pub fn required_char(&self) -> &str {
        &self.required_char
    }

    pub fn min_count(&self) -> u16 {
        self.min_count
    }

    pub fn max_count(&self) -> u16 {
        self.max_count
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn occurrences(&self) -> usize {
        self.occurrences
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Label shown in the results table.
    pub fn verdict(&self) -> &'static str {
        if self.is_valid { "Valid" } else { "Not Valid" }
    }
}
