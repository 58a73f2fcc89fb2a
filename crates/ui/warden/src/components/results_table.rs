use color_eyre::Result;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Cell, Paragraph, Row, Table},
};

use crate::{components::Component, state::State, tui::Frame};

const HEADER: [&str; 5] = ["Req Param", "Min Count", "Max Count", "Password", "Is Valid"];

/// Tallies and the table of checked passwords. Draws nothing until the
/// first result exists.
#[derive(Default)]
pub struct ResultsTable;

impl ResultsTable {
    pub fn new() -> Self {
        Self
    }
}

impl Component for ResultsTable {
    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, state: &State) -> Result<()> {
        let results = state.form.results();
        if results.is_empty() {
            return Ok(());
        }

        let [totals_area, table_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).areas(area);

        let totals = Paragraph::new(vec![
            Line::from(format!("Valid: {}", state.form.valid_count())),
            Line::from(format!("Not Valid: {}", state.form.invalid_count())),
        ]);
        f.render_widget(totals, totals_area);

        let header = Row::new(HEADER).style(Style::default().add_modifier(Modifier::BOLD));
        let rows = results.iter().map(|r| {
            let verdict_style = if r.is_valid() {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Red)
            };
            Row::new(vec![
                Cell::from(r.required_char().to_owned()),
                Cell::from(r.min_count().to_string()),
                Cell::from(r.max_count().to_string()),
                Cell::from(r.password().to_owned()),
                Cell::from(r.verdict()).style(verdict_style),
            ])
        });
        let widths = [
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Fill(1),
            Constraint::Length(10),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::bordered().title("Results"));
        f.render_widget(table, table_area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::{render, text};

    fn check(state: &mut State, ch: &str, min: &str, max: &str, password: &str) {
        state.form.set_required_char(ch).unwrap();
        state.form.set_min_count(min).unwrap();
        state.form.set_max_count(max).unwrap();
        state.form.set_candidate_text(password);
        state.form.submit().unwrap();
    }

    #[test]
    fn hidden_while_empty() {
        let state = State::new();
        let screen = text(&render(&mut ResultsTable::new(), &state, 70, 10));
        assert!(screen.trim().is_empty());
    }

    #[test]
    fn lists_results_in_order_with_totals() {
        let mut state = State::new();
        check(&mut state, "a", "1", "3", "banana");
        check(&mut state, "a", "1", "2", "papaya");

        let screen = text(&render(&mut ResultsTable::new(), &state, 70, 10));
        let lines: Vec<&str> = screen.lines().collect();

        assert!(lines[0].starts_with("Valid: 1"));
        assert!(lines[1].starts_with("Not Valid: 1"));
        assert!(screen.contains("Req Param"));
        assert!(screen.contains("Is Valid"));

        let banana = lines.iter().position(|l| l.contains("banana")).unwrap();
        let papaya = lines.iter().position(|l| l.contains("papaya")).unwrap();
        assert!(banana < papaya);
        assert!(lines[banana].contains("Valid"));
        assert!(lines[papaya].contains("Not Valid"));
    }
}
