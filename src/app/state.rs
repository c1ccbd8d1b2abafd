// app/state.rs

use log::*;
use ratatui::layout::Rect;
use tui_logger::TuiWidgetState;

use super::actions::Actions;
use crate::config::DemoConfig;
use crate::stepper::{Step, Stepper, StepperState};
use crate::theme::ThemePatch;

pub struct AppState {
    // App
    pub actions: Actions,

    // Stepper
    pub stepper: StepperState,
    steps: Vec<Step>,
    pub theme: ThemePatch,
    pub theme_name: Option<String>,
    pub dark: bool,
    pub vertical: bool,
    pub numbered: bool,

    // UI
    pub show_logs: bool,
    pub show_help: bool,
    pub log_state: TuiWidgetState,
    last_size: Option<Rect>,
}

impl AppState {
    pub fn new(config: &DemoConfig, theme_name: Option<String>, theme: ThemePatch) -> Self {
        let steps = config.build_steps();
        Self {
            actions: Actions::all(),
            stepper: StepperState::new(Some(config.start_step), steps.len()),
            steps,
            theme,
            theme_name,
            dark: config.dark,
            vertical: config.vertical,
            numbered: config.numbered,
            show_logs: false,
            show_help: true,
            log_state: TuiWidgetState::new(),
            last_size: None,
        }
    }

    /// The stepper widget for the current state.
    pub fn stepper_widget(&self) -> Stepper {
        Stepper::new(self.steps.clone())
            .step(self.stepper.step())
            .vertical(self.vertical)
            .dark(self.dark)
            .numbered(self.numbered)
            .theme(self.theme.clone())
    }

    pub fn number_of_steps(&self) -> usize {
        self.steps.len()
    }

    /// Record the terminal size, returning true if it changed.
    pub fn update_size(&mut self, size: Rect) -> bool {
        if self.last_size == Some(size) {
            return false;
        }
        trace!("Terminal size {}x{}", size.width, size.height);
        self.last_size = Some(size);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_from_config() {
        let config = DemoConfig {
            start_step: 2,
            dark: true,
            ..DemoConfig::default()
        };
        let state = AppState::new(&config, None, ThemePatch::default());
        assert_eq!(state.stepper.step(), 2);
        assert_eq!(state.stepper.number_of_steps(), 4);
        assert_eq!(state.number_of_steps(), 4);

        let widget = state.stepper_widget();
        assert_eq!(widget.len(), 4);
        assert!(widget.contexts()[2].is_step_in_progress);
        assert_eq!(widget.resolved_theme(), crate::theme::FullTheme::default().dark);
    }

    #[test]
    fn size_changes_are_detected_once() {
        let mut state = AppState::new(&DemoConfig::default(), None, ThemePatch::default());
        let size = Rect::new(0, 0, 80, 24);
        assert!(state.update_size(size));
        assert!(!state.update_size(size));
        assert!(state.update_size(Rect::new(0, 0, 100, 24)));
    }
}
