use color_eyre::Result;
use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Paragraph, Wrap},
};
use tui_input::{Input, InputRequest, StateChanged, backend::crossterm::EventHandler};

use crate::{
    action::Action,
    components::Component,
    config::Config,
    state::{FieldId, State},
    tui::{EventResponse, Frame},
};

/// A title, a single-line text box and an error caption underneath.
///
/// The box only proposes edits. The form decides what is stored, and the
/// buffer is re-synchronised from the form after every action, so an ignored
/// edit snaps back to the stored value.
pub struct LabeledField {
    id: FieldId,
    input: Input,
    error_color: Color,
}

impl LabeledField {
    pub const HEIGHT: u16 = 6;

    pub fn new(id: FieldId) -> Self {
        Self {
            id,
            input: Input::default(),
            error_color: Color::LightRed,
        }
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    fn sync(&mut self, state: &State) {
        let stored = self.id.value(&state.form);
        if self.input.value() != stored {
            self.input = Input::new(stored);
        }
    }

    fn propose(
        &mut self,
        proposed: Input,
        changed: Option<StateChanged>,
    ) -> Option<EventResponse<Action>> {
        match changed {
            Some(StateChanged { value: true, .. }) => {
                let value = proposed.value().to_owned();
                self.input = proposed;
                Some(EventResponse::Stop(Action::Edit {
                    field: self.id,
                    value,
                }))
            }
            Some(_) => {
                self.input = proposed;
                Some(EventResponse::Stop(Action::Render))
            }
            None => None,
        }
    }
}

impl Component for LabeledField {
    fn register_config_handler(&mut self, config: &Config) -> Result<()> {
        self.error_color = config.error_color();
        Ok(())
    }

    fn init(&mut self, state: &State) -> Result<()> {
        self.sync(state);
        Ok(())
    }

    fn handle_key_events(
        &mut self,
        key: KeyEvent,
        _state: &State,
    ) -> Result<Option<EventResponse<Action>>> {
        if key.code == KeyCode::Enter {
            return Ok(Some(EventResponse::Stop(Action::Submit)));
        }
        let mut proposed = self.input.clone();
        let changed = proposed.handle_event(&CrosstermEvent::Key(key));
        Ok(self.propose(proposed, changed))
    }

    fn handle_paste_event(
        &mut self,
        text: &str,
        _state: &State,
    ) -> Result<Option<EventResponse<Action>>> {
        let mut proposed = self.input.clone();
        let mut changed = None;
        for c in text.chars().filter(|c| !c.is_control()) {
            changed = proposed.handle(InputRequest::InsertChar(c)).or(changed);
        }
        Ok(self.propose(proposed, changed))
    }

    fn update(&mut self, _action: &Action, state: &State) -> Result<Option<Action>> {
        self.sync(state);
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, state: &State) -> Result<()> {
        let focused = state.focus.field() == Some(self.id);
        let [title_area, input_area, error_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(2),
        ])
        .areas(area);

        f.render_widget(Paragraph::new(self.id.title()), title_area);

        let border = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let width = input_area.width.saturating_sub(2) as usize;
        let scroll = self.input.visual_scroll(width);
        let value = Paragraph::new(self.input.value())
            .scroll((0, scroll as u16))
            .block(Block::bordered().border_style(border));
        f.render_widget(value, input_area);

        if focused && width > 0 {
            let column = self.input.visual_cursor().saturating_sub(scroll) as u16;
            f.set_cursor_position((input_area.x + 1 + column, input_area.y + 1));
        }

        let error = self.id.error(&state.form);
        f.render_widget(
            Paragraph::new(Span::styled(error, Style::default().fg(self.error_color)))
                .wrap(Wrap { trim: true }),
            error_area,
        );
        Ok(())
    }
}
