//! Current-step counter for code that drives a [`Stepper`](super::Stepper).

use log::*;

/// Current step of a stepper with `number_of_steps` steps.
///
/// The step ranges over `0..=number_of_steps`; `number_of_steps` itself means
/// every step is completed. Operations that would leave that range are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepperState {
    step: usize,
    number_of_steps: usize,
}

impl StepperState {
    /// New counter starting at `default_value`, or 0.
    pub fn new(default_value: Option<usize>, number_of_steps: usize) -> Self {
        Self {
            step: default_value.unwrap_or(0),
            number_of_steps,
        }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn number_of_steps(&self) -> usize {
        self.number_of_steps
    }

    /// Jump to `step_number`.
    ///
    /// Only allowed while the current step is neither the first one nor past
    /// the last one. The target itself is not checked.
    pub fn go_to_step(&mut self, step_number: usize) {
        if self.step != 0 && self.step < self.number_of_steps {
            self.step = step_number;
        } else {
            debug!(
                "Ignoring go to step {} from step {} of {}",
                step_number, self.step, self.number_of_steps
            );
        }
    }

    /// Move forward, saturating at `number_of_steps`.
    pub fn increment_step(&mut self) {
        if self.step < self.number_of_steps {
            self.step += 1;
        } else {
            debug!("Already past the last step ({})", self.number_of_steps);
        }
    }

    /// Move backward, saturating at 0.
    pub fn decrement_step(&mut self) {
        if self.step != 0 {
            self.step -= 1;
        } else {
            debug!("Already at the first step");
        }
    }
}

impl Default for StepperState {
    fn default() -> Self {
        Self::new(None, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_default_value() {
        assert_eq!(StepperState::new(None, 3).step(), 0);
        assert_eq!(StepperState::new(Some(2), 3).step(), 2);
        assert_eq!(StepperState::new(Some(2), 3).number_of_steps(), 3);
    }

    #[test]
    fn increment_saturates_at_number_of_steps() {
        let mut state = StepperState::new(Some(0), 3);
        state.increment_step();
        assert_eq!(state.step(), 1);
        state.increment_step();
        state.increment_step();
        assert_eq!(state.step(), 3);
        state.increment_step();
        assert_eq!(state.step(), 3);
    }

    #[test]
    fn decrement_saturates_at_zero() {
        let mut state = StepperState::new(Some(3), 3);
        for _ in 0..3 {
            state.decrement_step();
        }
        assert_eq!(state.step(), 0);
        state.decrement_step();
        assert_eq!(state.step(), 0);
    }

    // The guard looks at the current step, not the target: jumping is
    // impossible from the first step and from past the last one.
    #[test]
    fn go_to_step_is_disabled_on_first_step() {
        let mut state = StepperState::new(None, 3);
        state.go_to_step(2);
        assert_eq!(state.step(), 0);
        state.increment_step();
        state.go_to_step(2);
        assert_eq!(state.step(), 2);
    }

    #[test]
    fn go_to_step_is_disabled_past_last_step() {
        let mut state = StepperState::new(Some(3), 3);
        state.go_to_step(1);
        assert_eq!(state.step(), 3);
    }

    #[test]
    fn go_to_step_does_not_clamp_target() {
        let mut state = StepperState::new(Some(1), 3);
        state.go_to_step(10);
        assert_eq!(state.step(), 10);
        // now past the end, so increments and jumps are ignored
        state.increment_step();
        state.go_to_step(1);
        assert_eq!(state.step(), 10);
        state.decrement_step();
        assert_eq!(state.step(), 9);
    }

    #[test]
    fn instances_are_independent() {
        let mut a = StepperState::new(None, 2);
        let b = a.clone();
        a.increment_step();
        assert_eq!(a.step(), 1);
        assert_eq!(b.step(), 0);
    }
}
