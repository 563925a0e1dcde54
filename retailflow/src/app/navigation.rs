//! Key handling and cursor movement for the builder and saved views

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use retailflow_sdk::{catalog, Step};

use super::*;

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Blocking alert swallows everything until dismissed
        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.alert = None;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit(),
            KeyCode::Char('1') => self.switch_view(View::Builder),
            KeyCode::Char('2') => self.switch_view(View::Saved),
            code => match self.current_view {
                View::Builder => self.handle_builder_key(code),
                View::Saved => self.handle_saved_key(code),
            },
        }
    }

    /// Leaving the builder abandons any save still in flight
    pub fn switch_view(&mut self, view: View) {
        if self.current_view == view {
            return;
        }
        if self.current_view == View::Builder {
            self.cancel_pending_save();
        }
        self.current_view = view;
        if view == View::Saved {
            self.saved_selected = self.saved_selected.min(self.saved.len().saturating_sub(1));
        }
    }

    fn handle_builder_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('t') | KeyCode::Char('T') => self.set_builder_step(Step::Trigger),
            KeyCode::Char('a') | KeyCode::Char('A') => self.set_builder_step(Step::Action),
            KeyCode::Char('c') | KeyCode::Char('C') => self.continue_to_actions(),
            KeyCode::Char('s') | KeyCode::Char('S') => self.start_save(),
            KeyCode::Left | KeyCode::Char('h') => self.builder_pane = BuilderPane::Apps,
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
                if !self.pane_options().is_empty() {
                    self.builder_pane = BuilderPane::Options;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => self.next(),
            KeyCode::Up | KeyCode::Char('k') => self.previous(),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            _ => {}
        }
    }

    fn handle_saved_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Down | KeyCode::Char('j') => self.next(),
            KeyCode::Up | KeyCode::Char('k') => self.previous(),
            KeyCode::Char('x') | KeyCode::Char('X') => {
                if !self.saved.is_empty() {
                    self.clear_saved_workflows();
                }
            }
            _ => {}
        }
    }

    /// Apps listed in the left builder column for the current step
    pub fn pane_apps(&self) -> Vec<&'static str> {
        match self.builder.step() {
            Step::Trigger => catalog::trigger_apps().collect(),
            Step::Action => catalog::action_apps().collect(),
        }
    }

    /// Events or actions listed in the right builder column
    pub fn pane_options(&self) -> &'static [&'static str] {
        let options = match self.builder.step() {
            Step::Trigger => self.builder.trigger().app().and_then(catalog::trigger_events),
            Step::Action => self.builder.action_app().and_then(catalog::app_actions),
        };
        options.unwrap_or(&[])
    }

    pub fn next(&mut self) {
        match self.current_view {
            View::Builder => match self.builder_pane {
                BuilderPane::Apps => {
                    if self.app_cursor < self.pane_apps().len().saturating_sub(1) {
                        self.app_cursor += 1;
                    }
                }
                BuilderPane::Options => {
                    if self.option_cursor < self.pane_options().len().saturating_sub(1) {
                        self.option_cursor += 1;
                    }
                }
            },
            View::Saved => {
                if self.saved_selected < self.saved.len().saturating_sub(1) {
                    self.saved_selected += 1;
                }
            }
        }
    }

    pub fn previous(&mut self) {
        match self.current_view {
            View::Builder => match self.builder_pane {
                BuilderPane::Apps => self.app_cursor = self.app_cursor.saturating_sub(1),
                BuilderPane::Options => self.option_cursor = self.option_cursor.saturating_sub(1),
            },
            View::Saved => self.saved_selected = self.saved_selected.saturating_sub(1),
        }
    }

    /// Choose whatever is under the cursor in the focused column
    pub fn activate(&mut self) {
        match self.builder_pane {
            BuilderPane::Apps => {
                let Some(app) = self.pane_apps().get(self.app_cursor).copied() else {
                    return;
                };
                match self.builder.step() {
                    Step::Trigger => self.builder.select_trigger_app(app),
                    Step::Action => self.builder.select_action_app(app),
                }
                self.option_cursor = 0;
                self.builder_pane = BuilderPane::Options;
            }
            BuilderPane::Options => {
                let Some(option) = self.pane_options().get(self.option_cursor).copied() else {
                    return;
                };
                let result = match self.builder.step() {
                    Step::Trigger => self.builder.select_trigger_event(option),
                    Step::Action => self.builder.toggle_action(option).map(|_| ()),
                };
                if let Err(e) = result {
                    self.notifications.warning("Selection Ignored", e.to_string());
                }
            }
        }
    }

    /// Manual step toggle; the cursor lands on the app already chosen for
    /// that step, if any
    pub fn set_builder_step(&mut self, step: Step) {
        self.builder.set_step(step);

        let chosen = match step {
            Step::Trigger => self.builder.trigger().app(),
            Step::Action => self.builder.action_app(),
        };
        self.app_cursor = chosen
            .and_then(|app| self.pane_apps().iter().position(|a| *a == app))
            .unwrap_or(0);
        self.option_cursor = 0;
        self.builder_pane = BuilderPane::Apps;
    }

    /// "Continue to Action Setup", offered once a trigger event is chosen
    pub fn continue_to_actions(&mut self) {
        if self.builder.step() == Step::Trigger && self.builder.trigger().event().is_some() {
            self.set_builder_step(Step::Action);
        }
    }

    /// Move the cursor onto a named entry of the focused column
    pub fn focus_entry(&mut self, pane: BuilderPane, name: &str) -> bool {
        let position = match pane {
            BuilderPane::Apps => self.pane_apps().iter().position(|a| *a == name),
            BuilderPane::Options => self.pane_options().iter().position(|o| *o == name),
        };
        match position {
            Some(idx) => {
                self.builder_pane = pane;
                match pane {
                    BuilderPane::Apps => self.app_cursor = idx,
                    BuilderPane::Options => self.option_cursor = idx,
                }
                true
            }
            None => false,
        }
    }
}
