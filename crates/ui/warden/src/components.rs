use color_eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::layout::Rect;

use crate::{
    action::Action,
    config::Config,
    state::State,
    tui::{Event, EventResponse, Frame},
};

pub mod check_button;
pub mod footer;
pub mod labeled_field;
pub mod results_table;

pub use check_button::CheckButton;
pub use footer::Footer;
pub use labeled_field::LabeledField;
pub use results_table::ResultsTable;

/// `Component` is a trait that represents a visual and interactive element of the user interface.
///
/// Components read the shared [`State`] but never mutate it; they turn input
/// into [`Action`]s and the reducer applies those.
pub trait Component {
    fn register_config_handler(&mut self, _config: &Config) -> Result<()> {
        Ok(())
    }

    fn init(&mut self, _state: &State) -> Result<()> {
        Ok(())
    }

    fn handle_events(
        &mut self,
        event: &Event,
        state: &State,
    ) -> Result<Option<EventResponse<Action>>> {
        let r = match event {
            Event::Key(key_event) => self.handle_key_events(*key_event, state)?,
            Event::Paste(text) => self.handle_paste_event(text, state)?,
            _ => None,
        };
        Ok(r)
    }

    fn handle_key_events(
        &mut self,
        _key: KeyEvent,
        _state: &State,
    ) -> Result<Option<EventResponse<Action>>> {
        Ok(None)
    }

    fn handle_paste_event(
        &mut self,
        _text: &str,
        _state: &State,
    ) -> Result<Option<EventResponse<Action>>> {
        Ok(None)
    }

    /// Called after the reducer has applied `action` to `state`.
    fn update(&mut self, _action: &Action, _state: &State) -> Result<Option<Action>> {
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, state: &State) -> Result<()>;
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    use super::Component;
    use crate::state::State;

    /// Render one component into an off-screen buffer.
    pub fn render(component: &mut dyn Component, state: &State, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| component.draw(f, f.area(), state).unwrap())
            .unwrap();
        terminal.backend().buffer().clone()
    }

    /// All cell symbols, one line per buffer row.
    pub fn text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
