use policy::{EditRejected, FormController};
use serde::{Deserialize, Serialize};

/// The four editable fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldId {
    RequiredChar,
    MaxCount,
    MinCount,
    Password,
}

impl FieldId {
    pub const ALL: [FieldId; 4] = [
        FieldId::RequiredChar,
        FieldId::MaxCount,
        FieldId::MinCount,
        FieldId::Password,
    ];

    pub fn title(self) -> &'static str {
        match self {
            FieldId::RequiredChar => "Parameter (max length: 1)",
            FieldId::MaxCount => "Max Count",
            FieldId::MinCount => "Min Count",
            FieldId::Password => "Enter Password",
        }
    }

    /// Text the field shows for the current form. Counts render as numbers, so
    /// an unset count reads "0".
    pub fn value(self, form: &FormController) -> String {
        match self {
            FieldId::RequiredChar => form.draft().required_char().to_owned(),
            FieldId::MaxCount => form.draft().max_count().to_string(),
            FieldId::MinCount => form.draft().min_count().to_string(),
            FieldId::Password => form.candidate_text().to_owned(),
        }
    }

    pub fn error(self, form: &FormController) -> &str {
        match self {
            FieldId::MaxCount => form.errors().max_count_error(),
            FieldId::MinCount => form.errors().min_count_error(),
            FieldId::RequiredChar | FieldId::Password => "",
        }
    }

    pub fn apply(self, form: &mut FormController, input: &str) -> Result<(), EditRejected> {
        match self {
            FieldId::RequiredChar => form.set_required_char(input),
            FieldId::MaxCount => form.set_max_count(input),
            FieldId::MinCount => form.set_min_count(input),
            FieldId::Password => {
                form.set_candidate_text(input);
                Ok(())
            }
        }
    }
}

/// Which control receives key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    RequiredChar,
    MaxCount,
    MinCount,
    Password,
    Check,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::RequiredChar,
        Focus::MaxCount,
        Focus::MinCount,
        Focus::Password,
        Focus::Check,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    pub fn field(self) -> Option<FieldId> {
        match self {
            Focus::RequiredChar => Some(FieldId::RequiredChar),
            Focus::MaxCount => Some(FieldId::MaxCount),
            Focus::MinCount => Some(FieldId::MinCount),
            Focus::Password => Some(FieldId::Password),
            Focus::Check => None,
        }
    }
}

/// Everything the UI renders from. Mutated only by the reducer.
#[derive(Debug, Default)]
pub struct State {
    pub form: FormController,
    pub focus: Focus,
    pub quit_requested: bool,
    pub suspend_requested: bool,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }
}
