// app/mod.rs

//! Controller handling user input for the demo.

pub mod actions;
pub mod state;

use self::state::AppState;
use crate::app::actions::Action;
use crate::inputs::key::Key;

use crossterm::event::KeyEvent;
use log::*;

/// Return status indicating whether the app should exit or not.
#[derive(Debug, PartialEq, Eq)]
pub enum AppReturn {
    Exit,
    Continue,
}

/// `App` contains the state of the demo.
pub struct App {
    pub state: AppState,
}

impl App {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Process a key event
    pub fn process_key_event(&mut self, key_event: KeyEvent) -> AppReturn {
        trace!("Keyevent: {:?}", key_event);
        self.do_action(Key::from(key_event))
    }

    /// Handle a user action
    pub fn do_action(&mut self, key: Key) -> AppReturn {
        let Some(action) = self.state.actions.find(key) else {
            debug!("No action associated with {}", key);
            return AppReturn::Continue;
        };
        debug!("Run action [{:?}]", action);
        match action {
            Action::NextStep => {
                self.state.stepper.increment_step();
                self.log_step();
            }
            Action::PreviousStep => {
                self.state.stepper.decrement_step();
                self.log_step();
            }
            Action::GoToStep => {
                // keys are 1-based, step indices 0-based
                if let Some(digit) = key.digit().filter(|d| *d > 0) {
                    self.state.stepper.go_to_step(digit as usize - 1);
                    self.log_step();
                }
            }
            Action::ToggleDark => {
                self.state.dark = !self.state.dark;
                info!("Dark variant: {}", self.state.dark);
            }
            Action::ToggleVertical => {
                self.state.vertical = !self.state.vertical;
            }
            Action::ToggleNumbered => {
                self.state.numbered = !self.state.numbered;
            }
            Action::ToggleHelp => {
                self.state.show_help = !self.state.show_help;
            }
            Action::ToggleLogs => {
                self.state.show_logs = !self.state.show_logs;
            }
            Action::Quit => return AppReturn::Exit,
        }
        AppReturn::Continue
    }

    fn log_step(&self) {
        info!(
            "Step {} of {}",
            self.state.stepper.step(),
            self.state.number_of_steps()
        );
    }
}
