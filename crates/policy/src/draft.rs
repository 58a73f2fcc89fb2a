use serde::Serialize;

use crate::errors::EditRejected;

/// Longest accepted required-character input, in characters.
pub const REQUIRED_CHAR_INPUT_LEN: usize = 1;
/// Longest accepted count input, in characters. Bounds counts to 999.
pub const MAX_COUNT_INPUT_LEN: usize = 3;

pub const MAX_COUNT_ERROR: &str = "This value must be bigger than Min Count";
pub const MIN_COUNT_ERROR: &str = "This value must be smaller than Max Count";

/// The rule currently being edited.
///
/// A count of 0 means "not set yet" for submission purposes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RuleDraft {
    required_char: String,
    min_count: u16,
    max_count: u16,
}

impl RuleDraft {
    pub fn required_char(&self) -> &str {
        &self.required_char
    }

    pub fn min_count(&self) -> u16 {
        self.min_count
    }

    pub fn max_count(&self) -> u16 {
        self.max_count
    }

    pub(crate) fn set_required_char(&mut self, input: &str) -> Result<(), EditRejected> {
        let trimmed = input.trim();
        let len = trimmed.chars().count();
        if len > REQUIRED_CHAR_INPUT_LEN {
            return Err(EditRejected::TooLong {
                len,
                max: REQUIRED_CHAR_INPUT_LEN,
            });
        }
        self.required_char = trimmed.to_owned();
        Ok(())
    }

    pub(crate) fn set_min_count(&mut self, input: &str) -> Result<(), EditRejected> {
        self.min_count = parse_count(input)?;
        Ok(())
    }

    pub(crate) fn set_max_count(&mut self, input: &str) -> Result<(), EditRejected> {
        self.max_count = parse_count(input)?;
        Ok(())
    }

    /// True when the configured minimum exceeds the maximum.
    pub fn is_range_inconsistent(&self) -> bool {
        // Both directions are checked; they are the same condition.
        self.min_count > self.max_count || self.max_count < self.min_count
    }
}

/// Parse a count field. Blank input reads as 0, like clearing the field.
fn parse_count(input: &str) -> Result<u16, EditRejected> {
    let trimmed = input.trim();
    let len = trimmed.chars().count();
    if len > MAX_COUNT_INPUT_LEN {
        return Err(EditRejected::TooLong {
            len,
            max: MAX_COUNT_INPUT_LEN,
        });
    }
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<u16>()
        .map_err(|_| EditRejected::NotANumber(trimmed.to_owned()))
}

/// Inline error captions for the two count fields.
///
/// Always derived from a [`RuleDraft`], never edited directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    min_count_error: String,
    max_count_error: String,
}

impl FieldErrors {
    pub fn derive(draft: &RuleDraft) -> Self {
        if draft.is_range_inconsistent() {
            Self {
                min_count_error: MIN_COUNT_ERROR.to_owned(),
                max_count_error: MAX_COUNT_ERROR.to_owned(),
            }
        } else {
            Self::default()
        }
    }

    pub fn min_count_error(&self) -> &str {
        &self.min_count_error
    }

    pub fn max_count_error(&self) -> &str {
        &self.max_count_error
    }

    pub fn is_empty(&self) -> bool {
        self.min_count_error.is_empty() && self.max_count_error.is_empty()
    }
}
