//! Reducer: applies one action to the state.
//!
//! Policy:
//!   - Side-effect free apart from logging.
//!   - Unhandled actions are ignored.
//!   - Form edits and submissions that the form rejects change nothing; the
//!     rejection is not surfaced to the user.

use tracing::debug;

use crate::action::Action;
use crate::state::{Focus, State};

pub fn reduce(state: &mut State, action: &Action) {
    match action {
        Action::Quit => state.quit_requested = true,
        Action::Suspend => state.suspend_requested = true,
        Action::Resume => state.suspend_requested = false,
        Action::FocusNext => state.focus = state.focus.next(),
        Action::FocusPrev => state.focus = state.focus.prev(),
        Action::Edit { field, value } => {
            // Rejections are logged by the form itself.
            let _ = field.apply(&mut state.form, value);
        }
        Action::Submit => match state.form.submit() {
            Ok(result) => {
                debug!(valid = result.is_valid(), "result recorded");
                state.focus = Focus::default();
            }
            Err(reason) => debug!(%reason, "submit ignored"),
        },
        _ => {}
    }
}
