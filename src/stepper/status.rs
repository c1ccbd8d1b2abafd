//! Per-step status and position flags.

use crate::theme::Status;

impl Status {
    /// Status of the step at `index` when the stepper is at `current`.
    pub fn derive(index: usize, current: usize) -> Status {
        if current > index {
            Status::Completed
        } else if current == index {
            Status::Progress
        } else {
            Status::Pending
        }
    }
}

/// Everything a step needs to know about itself to render.
///
/// Exactly one of the three status flags is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepContext {
    /// 1-based position of the step
    pub current_step: usize,
    pub is_first_step: bool,
    pub is_last_step: bool,
    pub is_step_in_progress: bool,
    pub is_step_completed: bool,
    pub is_step_pending: bool,
    pub vertical: bool,
    pub numbered: bool,
}

impl StepContext {
    pub fn status(&self) -> Status {
        if self.is_step_in_progress {
            Status::Progress
        } else if self.is_step_completed {
            Status::Completed
        } else {
            Status::Pending
        }
    }

    /// The part of the context handed to content elements.
    pub fn content_context(&self) -> ContentContext {
        ContentContext {
            current_step: self.current_step,
            is_step_in_progress: self.is_step_in_progress,
            is_step_completed: self.is_step_completed,
            is_step_pending: self.is_step_pending,
        }
    }
}

/// Context received by the content elements of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentContext {
    pub current_step: usize,
    pub is_step_in_progress: bool,
    pub is_step_completed: bool,
    pub is_step_pending: bool,
}

/// Contexts for `number_of_steps` steps with the stepper at `current`.
pub fn derive_steps(
    number_of_steps: usize,
    current: usize,
    vertical: bool,
    numbered: bool,
) -> Vec<StepContext> {
    (0..number_of_steps)
        .map(|i| {
            let is_step_completed = current > i;
            let is_step_in_progress = current == i;
            StepContext {
                current_step: i + 1,
                is_first_step: i == 0,
                is_last_step: i + 1 == number_of_steps,
                is_step_in_progress,
                is_step_completed,
                is_step_pending: !is_step_completed && !is_step_in_progress,
                vertical,
                numbered,
            }
        })
        .collect()
}
