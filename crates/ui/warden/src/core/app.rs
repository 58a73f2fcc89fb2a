use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
};
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::{debug, error, info};

use crate::{
    action::Action,
    components::{CheckButton, Component, Footer, LabeledField, ResultsTable},
    config::Config,
    core::reducer::reduce,
    state::{FieldId, State},
    tui::{Event, EventResponse, Frame, Tui},
};

pub struct App {
    pub config: Config,
    pub state: State,
    pub fields: Vec<LabeledField>,
    pub check: CheckButton,
    pub results: ResultsTable,
    pub footer: Footer,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let mut app = Self {
            config,
            state: State::new(),
            fields: FieldId::ALL.into_iter().map(LabeledField::new).collect(),
            check: CheckButton::new(),
            results: ResultsTable::new(),
            footer: Footer::new(),
        };
        let config = app.config.clone();
        let state = &app.state;
        for component in Self::components(
            &mut app.fields,
            &mut app.check,
            &mut app.results,
            &mut app.footer,
        ) {
            component.register_config_handler(&config)?;
            component.init(state)?;
        }
        Ok(app)
    }

    fn components<'a>(
        fields: &'a mut [LabeledField],
        check: &'a mut CheckButton,
        results: &'a mut ResultsTable,
        footer: &'a mut Footer,
    ) -> impl Iterator<Item = &'a mut dyn Component> {
        fields
            .iter_mut()
            .map(|f| f as &mut dyn Component)
            .chain([
                check as &mut dyn Component,
                results as &mut dyn Component,
                footer as &mut dyn Component,
            ])
    }

    pub async fn run(&mut self) -> Result<()> {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

        let mut tui = self.new_tui()?;
        tui.enter()?;
        info!("terminal UI started");

        loop {
            if let Some(event) = tui.next_event().await {
                self.handle_event(event, &action_tx)?;
            }

            while let Ok(action) = action_rx.try_recv() {
                if action != Action::Tick && action != Action::Render {
                    debug!("{action:?}");
                }
                match &action {
                    Action::Resize(w, h) => {
                        tui.resize(Rect::new(0, 0, *w, *h))?;
                        self.draw(&mut tui)?;
                    }
                    Action::Render => self.draw(&mut tui)?,
                    Action::Error(msg) => error!("{msg}"),
                    _ => {}
                }

                reduce(&mut self.state, &action);
                for follow_up in self.update_components(&action)? {
                    action_tx.send(follow_up)?;
                }
            }

            if self.state.suspend_requested {
                tui.suspend()?;
                action_tx.send(Action::Resume)?;
                tui = self.new_tui()?;
                tui.enter()?;
            } else if self.state.quit_requested {
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        info!(
            checked = self.state.form.results().len(),
            "terminal UI stopped"
        );
        Ok(())
    }

    fn new_tui(&self) -> Result<Tui> {
        Ok(Tui::new()?
            .tick_rate(self.config.tick_rate)
            .frame_rate(self.config.frame_rate)
            .paste(true))
    }

    /// Offer the event to the focused component first; whatever it leaves
    /// unhandled goes through the global key map.
    fn handle_event(&mut self, event: Event, action_tx: &UnboundedSender<Action>) -> Result<()> {
        let focused: &mut dyn Component = match self.state.focus.field() {
            Some(id) => &mut self.fields[field_index(id)],
            None => &mut self.check,
        };
        let stop_event_propagation = match focused.handle_events(&event, &self.state)? {
            Some(EventResponse::Stop(action)) => {
                action_tx.send(action)?;
                true
            }
            Some(EventResponse::Continue(action)) => {
                action_tx.send(action)?;
                false
            }
            None => false,
        };
        if stop_event_propagation {
            return Ok(());
        }

        match event {
            Event::Tick => action_tx.send(Action::Tick)?,
            Event::Render => action_tx.send(Action::Render)?,
            Event::Resize(x, y) => action_tx.send(Action::Resize(x, y))?,
            Event::Error => action_tx.send(Action::Error("terminal input error".into()))?,
            Event::Key(key) => {
                if let Some(action) = global_key_action(key) {
                    action_tx.send(action)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn update_components(&mut self, action: &Action) -> Result<Vec<Action>> {
        let state = &self.state;
        let mut follow_ups = Vec::new();
        for component in Self::components(
            &mut self.fields,
            &mut self.check,
            &mut self.results,
            &mut self.footer,
        ) {
            if let Some(next) = component.update(action, state)? {
                follow_ups.push(next);
            }
        }
        Ok(follow_ups)
    }

    fn draw(&mut self, tui: &mut Tui) -> Result<()> {
        let mut outcome = Ok(());
        tui.draw(|f| outcome = self.render(f))?;
        outcome
    }

    pub fn render(&mut self, frame: &mut Frame<'_>) -> Result<()> {
        let [title_area, fields_area, button_area, results_area, footer_area] =
            Layout::vertical([
                Constraint::Length(2),
                Constraint::Length(LabeledField::HEIGHT),
                Constraint::Length(CheckButton::HEIGHT),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .spacing(1)
            .areas(frame.area());

        let title = Paragraph::new("Password Rule Check")
            .style(Style::default().add_modifier(Modifier::BOLD))
            .centered();
        frame.render_widget(title, title_area);

        let columns = Layout::horizontal(vec![Constraint::Fill(1); self.fields.len()])
            .spacing(2)
            .split(fields_area);
        for (field, area) in self.fields.iter_mut().zip(columns.iter()) {
            field.draw(frame, *area, &self.state)?;
        }

        let [button_area] = Layout::horizontal([Constraint::Length(CheckButton::WIDTH)])
            .flex(Flex::Center)
            .areas(button_area);
        self.check.draw(frame, button_area, &self.state)?;

        self.results.draw(frame, results_area, &self.state)?;
        self.footer.draw(frame, footer_area, &self.state)?;
        Ok(())
    }
}

fn field_index(id: FieldId) -> usize {
    FieldId::ALL
        .iter()
        .position(|f| *f == id)
        .unwrap_or_default()
}

/// Keys that work regardless of which control has focus.
fn global_key_action(key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Char('z') if ctrl => Some(Action::Suspend),
        KeyCode::Tab | KeyCode::Down => Some(Action::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(Action::FocusPrev),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::text;
    use crate::state::Focus;
    use ratatui::{Terminal, backend::TestBackend};

    fn press(app: &mut App, code: KeyCode) -> Vec<Action> {
        let (tx, mut rx) = mpsc::unbounded_channel();
        app.handle_event(Event::Key(KeyEvent::from(code)), &tx).unwrap();
        let mut sent = Vec::new();
        while let Ok(action) = rx.try_recv() {
            reduce(&mut app.state, &action);
            app.update_components(&action).unwrap();
            sent.push(action);
        }
        sent
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(200, 30)).unwrap();
        terminal.draw(|f| app.render(f).unwrap()).unwrap();
        text(terminal.backend().buffer())
    }

    #[test]
    fn keyboard_walkthrough_records_a_result() {
        let mut app = App::new(Config::default()).unwrap();

        type_text(&mut app, "a");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Backspace);
        type_text(&mut app, "3");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Backspace);
        type_text(&mut app, "1");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "banana");

        assert!(app.state.form.can_submit());
        let sent = press(&mut app, KeyCode::Enter);
        assert_eq!(sent, vec![Action::Submit]);
        assert_eq!(app.state.form.results().len(), 1);
        assert_eq!(app.state.form.valid_count(), 1);

        // Fields show the reset draft again.
        let values: Vec<&str> = app.fields.iter().map(|f| f.value()).collect();
        assert_eq!(values, vec!["", "0", "0", ""]);
    }

    #[test]
    fn global_keys_apply_when_field_ignores_them() {
        let mut app = App::new(Config::default()).unwrap();
        assert_eq!(press(&mut app, KeyCode::Down), vec![Action::FocusNext]);
        assert_eq!(app.state.focus, Focus::MaxCount);
        press(&mut app, KeyCode::Esc);
        assert!(app.state.quit_requested);
    }

    #[test]
    fn results_appear_after_first_check() {
        let mut app = App::new(Config::default()).unwrap();
        assert!(!screen(&mut app).contains("Not Valid:"));

        let form = &mut app.state.form;
        form.set_required_char("a").unwrap();
        form.set_min_count("1").unwrap();
        form.set_max_count("2").unwrap();
        form.set_candidate_text("banana");
        form.submit().unwrap();

        let rendered = screen(&mut app);
        assert!(rendered.contains("Valid: 0"));
        assert!(rendered.contains("Not Valid: 1"));
        assert!(rendered.contains("banana"));
    }

    #[test]
    fn range_error_is_rendered_next_to_both_counts() {
        let mut app = App::new(Config::default()).unwrap();
        app.state.form.set_min_count("5").unwrap();
        app.state.form.set_max_count("2").unwrap();

        let rendered = screen(&mut app);
        assert!(rendered.contains("bigger than Min"));
        assert!(rendered.contains("smaller than Max"));
    }
}
