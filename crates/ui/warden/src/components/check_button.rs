use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Paragraph},
};

use crate::{
    action::Action,
    components::Component,
    state::{Focus, State},
    tui::{EventResponse, Frame},
};

/// The "Check" action control. Greyed out while the form cannot be submitted.
#[derive(Default)]
pub struct CheckButton;

impl CheckButton {
    pub const WIDTH: u16 = 13;
    pub const HEIGHT: u16 = 3;

    pub fn new() -> Self {
        Self
    }
}

impl Component for CheckButton {
    fn handle_key_events(
        &mut self,
        key: KeyEvent,
        _state: &State,
    ) -> Result<Option<EventResponse<Action>>> {
        let r = match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(EventResponse::Stop(Action::Submit)),
            _ => None,
        };
        Ok(r)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, state: &State) -> Result<()> {
        let enabled = state.form.can_submit();
        let focused = state.focus == Focus::Check;

        let mut style = if enabled {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        if focused {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let button = Paragraph::new("Check")
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::bordered().border_style(style));
        f.render_widget(button, area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::render;
    use ratatui::layout::Position;

    fn label_style(state: &State) -> Style {
        let buffer = render(&mut CheckButton::new(), state, CheckButton::WIDTH, CheckButton::HEIGHT);
        // "Check" is centred on the middle row.
        buffer[Position::new(CheckButton::WIDTH / 2, 1)].style()
    }

    #[test]
    fn disabled_until_form_is_complete() {
        let mut state = State::new();
        assert_eq!(label_style(&state).fg, Some(Color::DarkGray));

        state.form.set_required_char("a").unwrap();
        state.form.set_min_count("1").unwrap();
        state.form.set_max_count("3").unwrap();
        state.form.set_candidate_text("banana");
        assert_eq!(label_style(&state).fg, Some(Color::Green));
    }

    #[test]
    fn space_and_enter_submit() {
        let state = State::new();
        let mut button = CheckButton::new();
        for code in [KeyCode::Enter, KeyCode::Char(' ')] {
            let key = KeyEvent::from(code);
            assert_eq!(
                button.handle_key_events(key, &state).unwrap(),
                Some(EventResponse::Stop(Action::Submit))
            );
        }
    }
}
