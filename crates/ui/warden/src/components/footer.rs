use color_eyre::Result;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{components::Component, state::State, tui::Frame};

/// Key hints along the bottom edge.
#[derive(Default)]
pub struct Footer;

impl Footer {
    pub fn new() -> Self {
        Self
    }
}

impl Component for Footer {
    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, _state: &State) -> Result<()> {
        let key = Style::default().fg(Color::White);
        let hints = Line::from(vec![
            Span::styled("Tab/↑↓", key),
            Span::raw(": Move   "),
            Span::styled("Enter", key),
            Span::raw(": Check   "),
            Span::styled("Esc", key),
            Span::raw(": Quit"),
        ])
        .style(Style::default().fg(Color::DarkGray));
        f.render_widget(Paragraph::new(hints), area);
        Ok(())
    }
}
