use serde::{Deserialize, Serialize};
use strum::Display;

use crate::state::FieldId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    Error(String),
    FocusNext,
    FocusPrev,
    /// Proposed new text for a field; the form may ignore it.
    Edit { field: FieldId, value: String },
    /// Run the check for the current rule and password.
    Submit,
}
